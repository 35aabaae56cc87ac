pub mod chat_service;
pub mod json_extractor;
pub mod model_service;
pub mod pdf_extractor;
pub mod prompt_builder;
pub mod quiz_attempt_service;
pub mod quiz_service;
pub mod quiz_session;
pub mod video_service;
pub mod youtube_client;
