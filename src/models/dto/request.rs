use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppError;
use crate::models::domain::quiz::DEFAULT_QUESTIONS;
use crate::models::domain::{QuizBlueprint, QuizType};

fn default_question_count() -> u8 {
    DEFAULT_QUESTIONS
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "pdfText is required"))]
    pub pdf_text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_type: Option<QuizType>,

    #[serde(default = "default_question_count")]
    #[validate(range(min = 3, max = 10, message = "numberOfQuestions must be between 3 and 10"))]
    pub number_of_questions: u8,
}

impl GenerateQuizRequest {
    pub fn new(pdf_text: impl Into<String>, quiz_type: QuizType, number_of_questions: u8) -> Self {
        GenerateQuizRequest {
            pdf_text: pdf_text.into(),
            quiz_type: Some(quiz_type),
            number_of_questions,
        }
    }
}

impl TryFrom<GenerateQuizRequest> for QuizBlueprint {
    type Error = AppError;

    fn try_from(dto: GenerateQuizRequest) -> Result<Self, Self::Error> {
        dto.validate()?;
        let quiz_type = dto
            .quiz_type
            .ok_or_else(|| AppError::ValidationError("quizType is required".to_string()))?;

        Ok(QuizBlueprint::new(
            dto.pdf_text,
            quiz_type,
            dto.number_of_questions,
        ))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_context: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecommendationsRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "PDF text is required"))]
    pub pdf_text: String,
}
