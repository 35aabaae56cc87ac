use crate::models::domain::quiz_question::QuizType;

pub const MIN_QUESTIONS: u8 = 3;
pub const MAX_QUESTIONS: u8 = 10;
pub const DEFAULT_QUESTIONS: u8 = 5;

/// Everything needed to ask the model for one quiz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizBlueprint {
    pub source_text: String,
    pub quiz_type: QuizType,
    pub question_count: u8,
}

impl QuizBlueprint {
    pub fn new(source_text: impl Into<String>, quiz_type: QuizType, question_count: u8) -> Self {
        QuizBlueprint {
            source_text: source_text.into(),
            quiz_type,
            question_count,
        }
    }
}
