use serde::{de, Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::AppError;

/// A single generated question. `options` is only present for multiple choice.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
}

/// Serialized as `MCQ`/`SAQ`/`LAQ`; accepted in any letter case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuizType {
    Mcq, // Multiple choice, auto-scored
    Saq, // Short answer
    Laq, // Long answer
}

impl QuizType {
    pub const ALL: [QuizType; 3] = [QuizType::Mcq, QuizType::Saq, QuizType::Laq];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuizType::Mcq => "MCQ",
            QuizType::Saq => "SAQ",
            QuizType::Laq => "LAQ",
        }
    }

    pub fn is_auto_scored(&self) -> bool {
        matches!(self, QuizType::Mcq)
    }
}

impl fmt::Display for QuizType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuizType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MCQ" => Ok(QuizType::Mcq),
            "SAQ" => Ok(QuizType::Saq),
            "LAQ" => Ok(QuizType::Laq),
            other => Err(AppError::ValidationError(format!(
                "Unknown quiz type '{}', expected one of MCQ, SAQ, LAQ",
                other
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for QuizType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(de::Error::custom)
    }
}
