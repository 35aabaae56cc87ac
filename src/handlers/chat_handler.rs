use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::ChatRequest, response::ChatResponse},
};

#[post("/chat")]
pub async fn chat(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let message = state
        .chat_service
        .answer(&request.message, request.pdf_context.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(ChatResponse { message }))
}
