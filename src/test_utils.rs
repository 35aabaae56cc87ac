#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{Question, QuizAttempt, QuizType};

    fn mcq(question: &str, options: [&str; 4], correct: usize, explanation: &str) -> Question {
        Question {
            question: question.to_string(),
            options: Some(options.iter().map(|o| o.to_string()).collect()),
            correct_answer: options[correct].to_string(),
            explanation: explanation.to_string(),
        }
    }

    /// Three geography MCQs; the first answer is "B) Paris".
    pub fn mcq_questions() -> Vec<Question> {
        vec![
            mcq(
                "What is the capital of France?",
                ["A) Rome", "B) Paris", "C) Madrid", "D) Berlin"],
                1,
                "Paris has been the capital of France since 987.",
            ),
            mcq(
                "Which river flows through Cairo?",
                ["A) Nile", "B) Amazon", "C) Danube", "D) Ganges"],
                0,
                "Cairo sits on the banks of the Nile.",
            ),
            mcq(
                "Which is the largest ocean?",
                ["A) Atlantic", "B) Indian", "C) Pacific", "D) Arctic"],
                2,
                "The Pacific covers about a third of the planet's surface.",
            ),
        ]
    }

    pub fn saq_questions() -> Vec<Question> {
        vec![
            Question {
                question: "What does photosynthesis produce?".to_string(),
                options: None,
                correct_answer: "Glucose and oxygen".to_string(),
                explanation: "Light energy converts carbon dioxide and water into glucose, releasing oxygen."
                    .to_string(),
            },
            Question {
                question: "Where in the cell does photosynthesis occur?".to_string(),
                options: None,
                correct_answer: "In the chloroplasts".to_string(),
                explanation: "Chloroplasts contain chlorophyll, which absorbs light.".to_string(),
            },
        ]
    }

    pub fn attempt_with_score(quiz_type: QuizType, score: u32, correct: u32, total: u32) -> QuizAttempt {
        QuizAttempt {
            id: format!("attempt-{}-{}", quiz_type.as_str().to_lowercase(), score),
            pdf_name: "notes.pdf".to_string(),
            quiz_type,
            total_questions: total,
            correct_answers: correct,
            score,
            timestamp: 1_700_000_000_000,
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::path::PathBuf;

    use actix_web::http::StatusCode;

    /// Fresh, not-yet-created directory under the system temp dir.
    pub fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("study-companion-{}-{}", name, uuid::Uuid::new_v4()))
    }

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::{fixtures::*, test_helpers::*};
    use actix_web::http::StatusCode;

    #[test]
    fn test_mcq_fixtures_have_answer_among_options() {
        for question in mcq_questions() {
            let options = question.options.unwrap();
            assert_eq!(options.len(), 4);
            assert!(options.contains(&question.correct_answer));
        }
    }

    #[test]
    fn test_saq_fixtures_have_no_options() {
        assert!(saq_questions().iter().all(|q| q.options.is_none()));
    }

    #[test]
    fn test_temp_dirs_are_unique() {
        assert_ne!(temp_dir("a"), temp_dir("a"));
    }

    #[test]
    fn test_helpers_assert_error_status() {
        assert_error_status(StatusCode::BAD_REQUEST);
        assert_error_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_helpers_assert_success_status() {
        assert_success_status(StatusCode::OK);
    }
}
