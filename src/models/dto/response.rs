use serde::{Deserialize, Serialize};

use crate::models::domain::{Question, Video};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateQuizResponse {
    pub quiz: Vec<Question>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecommendationsResponse {
    pub videos: Vec<Video>,
}
