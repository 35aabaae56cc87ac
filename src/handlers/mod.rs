pub mod chat_handler;
pub mod health_handler;
pub mod quiz_handler;
pub mod video_handler;

use actix_web::web;

use crate::{app_state::AppState, errors::AppError};

pub use chat_handler::chat;
pub use health_handler::health_check;
pub use quiz_handler::generate_quiz;
pub use video_handler::video_recommendations;

/// Malformed or oversized JSON bodies become `400 { error }` like any other
/// validation failure.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// Registers shared state, the JSON body policy and every route.
pub fn configure(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let limit = state.config.max_request_bytes;
        cfg.app_data(web::Data::new(state))
            .app_data(json_config(limit))
            .service(health_check)
            .service(generate_quiz)
            .service(chat)
            .service(video_recommendations);
    }
}
