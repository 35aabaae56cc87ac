use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::{json, Value};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Sends one prompt to the hosted model and returns its raw text reply.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}

/// Chat-completions client for any OpenAI-compatible endpoint. By default it
/// targets Gemini's compatibility layer.
pub struct OpenAiCompatibleClient {
    client: Client<OpenAIConfig>,
    model: String,
    timeout: Duration,
}

impl OpenAiCompatibleClient {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(config.model_api_base.clone())
            .with_api_key(config.model_api_key.expose_secret().to_string());

        Self {
            client: Client::with_config(openai_config),
            model: config.model_name.clone(),
            timeout: Duration::from_secs(config.generation_timeout_secs),
        }
    }
}

/// Pulls `choices[0].message.content` out of a chat-completions response.
pub fn completion_text(response: &Value) -> AppResult<String> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::GenerationFailed("model returned no content".to_string()))
}

#[async_trait]
impl GenerationClient for OpenAiCompatibleClient {
    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let request = json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": prompt }
            ]
        });

        log::debug!(
            "Sending {} character prompt to model {}",
            prompt.chars().count(),
            self.model
        );

        let response: Value =
            tokio::time::timeout(self.timeout, self.client.chat().create_byot(request))
                .await
                .map_err(|_| {
                    log::error!("Model call timed out after {}s", self.timeout.as_secs());
                    AppError::GenerationFailed(format!(
                        "model did not respond within {} seconds",
                        self.timeout.as_secs()
                    ))
                })?
                .map_err(|e| {
                    log::error!("Model call failed: {}", e);
                    AppError::GenerationFailed(e.to_string())
                })?;

        completion_text(&response)
    }
}
