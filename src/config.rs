use secrecy::{ExposeSecret, SecretString};
use std::env;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_MODEL_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_MODEL_NAME: &str = "gemini-2.0-flash";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub model_api_key: SecretString,
    pub model_name: String,
    pub model_api_base: String,
    pub generation_timeout_secs: u64,
    pub youtube_api_key: Option<SecretString>,
    pub cors_allowed_origin: String,
    pub max_request_bytes: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            model_api_key: SecretString::from(
                env::var("GEMINI_API_KEY")
                    .or_else(|_| env::var("GOOGLE_GEMINI_API_KEY"))
                    .unwrap_or_default(),
            ),
            model_name: env::var("MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL_NAME.to_string()),
            model_api_base: env::var("MODEL_API_BASE")
                .unwrap_or_else(|_| DEFAULT_MODEL_API_BASE.to_string()),
            generation_timeout_secs: env::var("GENERATION_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            youtube_api_key: env::var("YOUTUBE_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            max_request_bytes: env::var("MAX_REQUEST_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2 * 1024 * 1024),
        }
    }

    /// Rejects settings the server cannot run with. Called once before binding.
    pub fn validate(&self) -> AppResult<()> {
        if self.model_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::ConfigError(
                "GEMINI_API_KEY is not set. Set GEMINI_API_KEY (or GOOGLE_GEMINI_API_KEY) to a valid API key."
                    .to_string(),
            ));
        }

        if self.generation_timeout_secs == 0 {
            return Err(AppError::ConfigError(
                "GENERATION_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        if self.web_server_port == 0 {
            return Err(AppError::ConfigError(
                "WEB_SERVER_PORT must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            model_api_key: SecretString::from("test_model_api_key".to_string()),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            model_api_base: "http://localhost:9999/v1".to_string(),
            generation_timeout_secs: 5,
            youtube_api_key: None,
            cors_allowed_origin: "*".to_string(),
            max_request_bytes: 2 * 1024 * 1024,
        }
    }
}
