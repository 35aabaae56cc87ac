use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{request::VideoRecommendationsRequest, response::VideoRecommendationsResponse},
};

#[post("/video-recommendations")]
pub async fn video_recommendations(
    state: web::Data<AppState>,
    request: web::Json<VideoRecommendationsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let videos = state.video_service.recommend(&request.pdf_text).await?;
    Ok(HttpResponse::Ok().json(VideoRecommendationsResponse { videos }))
}
