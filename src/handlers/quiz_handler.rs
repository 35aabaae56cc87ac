use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::{
        domain::QuizBlueprint,
        dto::{request::GenerateQuizRequest, response::GenerateQuizResponse},
    },
};

#[post("/generate-quiz")]
pub async fn generate_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let blueprint = QuizBlueprint::try_from(request.into_inner())?;
    let request_id = get_request_id(&req).unwrap_or_default();

    let quiz = state
        .quiz_service
        .generate_quiz(&blueprint)
        .await
        .map_err(|e| {
            log::error!("[{}] quiz generation failed: {}", request_id, e);
            e
        })?;

    log::info!("[{}] generated {} questions", request_id, quiz.len());
    Ok(HttpResponse::Ok().json(GenerateQuizResponse { quiz }))
}
