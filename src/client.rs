//! Typed HTTP client for the backend endpoints, used by the terminal client.

use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    errors::{AppError, AppResult, ErrorResponse},
    models::{
        domain::{Question, Video},
        dto::{
            request::{ChatRequest, GenerateQuizRequest, VideoRecommendationsRequest},
            response::{ChatResponse, GenerateQuizResponse, VideoRecommendationsResponse},
        },
    },
};

pub struct StudyApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl StudyApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.http.post(self.endpoint(path)).json(body).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => format!("request failed with status {}", status),
        };
        Err(error_for_status(status, message))
    }

    pub async fn generate_quiz(&self, request: &GenerateQuizRequest) -> AppResult<Vec<Question>> {
        let response: GenerateQuizResponse = self.post("/generate-quiz", request).await?;
        Ok(response.quiz)
    }

    pub async fn chat(&self, message: &str, pdf_context: Option<String>) -> AppResult<String> {
        let request = ChatRequest {
            message: message.to_string(),
            pdf_context,
        };
        let response: ChatResponse = self.post("/chat", &request).await?;
        Ok(response.message)
    }

    pub async fn video_recommendations(&self, pdf_text: &str) -> AppResult<Vec<Video>> {
        let request = VideoRecommendationsRequest {
            pdf_text: pdf_text.to_string(),
        };
        let response: VideoRecommendationsResponse =
            self.post("/video-recommendations", &request).await?;
        Ok(response.videos)
    }
}

/// Maps a backend error status back onto the error taxonomy.
pub fn error_for_status(status: StatusCode, message: String) -> AppError {
    if status.is_client_error() {
        AppError::ValidationError(message)
    } else {
        AppError::UpstreamError(message)
    }
}
