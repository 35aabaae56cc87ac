use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::QuizType;

/// A completed quiz as persisted in the attempt store. Never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub id: String,
    pub pdf_name: String,
    pub quiz_type: QuizType,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub score: u32,
    pub timestamp: i64, // epoch milliseconds
}

/// An attempt before the store assigns `id` and `timestamp`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuizAttempt {
    pub pdf_name: String,
    pub quiz_type: QuizType,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub score: u32,
}

impl NewQuizAttempt {
    pub fn into_attempt(self, id: String, timestamp: i64) -> QuizAttempt {
        QuizAttempt {
            id,
            pdf_name: self.pdf_name,
            quiz_type: self.quiz_type,
            total_questions: self.total_questions,
            correct_answers: self.correct_answers,
            score: self.score,
            timestamp,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TypeCounts {
    #[serde(rename = "MCQ")]
    pub mcq: u32,
    #[serde(rename = "SAQ")]
    pub saq: u32,
    #[serde(rename = "LAQ")]
    pub laq: u32,
}

impl TypeCounts {
    pub fn increment(&mut self, quiz_type: QuizType) {
        match quiz_type {
            QuizType::Mcq => self.mcq += 1,
            QuizType::Saq => self.saq += 1,
            QuizType::Laq => self.laq += 1,
        }
    }

    pub fn get(&self, quiz_type: QuizType) -> u32 {
        match quiz_type {
            QuizType::Mcq => self.mcq,
            QuizType::Saq => self.saq,
            QuizType::Laq => self.laq,
        }
    }
}

/// Dashboard aggregate, derived on demand from the full attempt list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_attempts: u32,
    pub average_score: u32,
    pub total_correct: u32,
    pub total_questions: u32,
    pub by_type: TypeCounts,
}
