//! In-memory state for one pass through a generated quiz.
//!
//! ```text
//! Answering(i) --submit--> Submitted(i)
//! Submitted(i) --next--> Answering(i + 1)      (i < last)
//! Submitted(last) --next--> Completed          (scores once, saves attempt)
//! any --restart--> Answering(0)
//! ```

use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Question, QuizAttempt, QuizType},
    repositories::QuizAttemptRepository,
    services::quiz_attempt_service::QuizAttemptService,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Answering(usize),
    Submitted(usize),
    Completed,
}

/// Revealed after a question is submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: Option<bool>,
    pub correct_answer: String,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResult {
    pub correct_answers: u32,
    pub total_questions: u32,
    pub score: u32,
    pub per_question: Vec<Option<bool>>,
    pub saved_attempt: Option<QuizAttempt>,
}

pub struct QuizSession {
    pdf_name: String,
    quiz_type: QuizType,
    questions: Vec<Question>,
    answers: Vec<String>,
    submitted: Vec<bool>,
    phase: SessionPhase,
    scored: bool,
    result: Option<QuizResult>,
    repository: Arc<dyn QuizAttemptRepository>,
}

impl QuizSession {
    pub fn new(
        pdf_name: impl Into<String>,
        quiz_type: QuizType,
        questions: Vec<Question>,
        repository: Arc<dyn QuizAttemptRepository>,
    ) -> AppResult<Self> {
        if questions.is_empty() {
            return Err(AppError::ValidationError(
                "A quiz needs at least one question".to_string(),
            ));
        }

        let count = questions.len();
        Ok(Self {
            pdf_name: pdf_name.into(),
            quiz_type,
            questions,
            answers: vec![String::new(); count],
            submitted: vec![false; count],
            phase: SessionPhase::Answering(0),
            scored: false,
            result: None,
            repository,
        })
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn quiz_type(&self) -> QuizType {
        self.quiz_type
    }

    pub fn pdf_name(&self) -> &str {
        &self.pdf_name
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn is_submitted(&self, index: usize) -> bool {
        self.submitted.get(index).copied().unwrap_or(false)
    }

    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            SessionPhase::Answering(i) | SessionPhase::Submitted(i) => Some(i),
            SessionPhase::Completed => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index() == Some(self.questions.len() - 1)
    }

    pub fn answer(&mut self, answer: impl Into<String>) -> AppResult<()> {
        match self.phase {
            SessionPhase::Answering(i) => {
                self.answers[i] = answer.into();
                Ok(())
            }
            other => Err(invalid_transition("answer", other)),
        }
    }

    pub fn submit(&mut self) -> AppResult<AnswerFeedback> {
        let SessionPhase::Answering(i) = self.phase else {
            return Err(invalid_transition("submit", self.phase));
        };

        self.submitted[i] = true;
        self.phase = SessionPhase::Submitted(i);

        let question = &self.questions[i];
        Ok(AnswerFeedback {
            correct: QuizAttemptService::grade_question(self.quiz_type, question, &self.answers[i]),
            correct_answer: question.correct_answer.clone(),
            explanation: question.explanation.clone(),
        })
    }

    pub fn next(&mut self) -> AppResult<SessionPhase> {
        match self.phase {
            SessionPhase::Submitted(i) if i + 1 < self.questions.len() => {
                self.phase = SessionPhase::Answering(i + 1);
            }
            SessionPhase::Submitted(_) => {
                self.phase = SessionPhase::Completed;
                self.complete();
            }
            SessionPhase::Completed => {}
            other => return Err(invalid_transition("next", other)),
        }
        Ok(self.phase)
    }

    pub fn restart(&mut self) {
        let count = self.questions.len();
        self.answers = vec![String::new(); count];
        self.submitted = vec![false; count];
        self.phase = SessionPhase::Answering(0);
        self.scored = false;
        self.result = None;
    }

    fn complete(&mut self) {
        if self.scored {
            return;
        }
        self.scored = true;

        let per_question = self
            .questions
            .iter()
            .zip(&self.answers)
            .map(|(question, answer)| {
                QuizAttemptService::grade_question(self.quiz_type, question, answer)
            })
            .collect();
        let attempt = QuizAttemptService::create_attempt(
            &self.pdf_name,
            self.quiz_type,
            &self.questions,
            &self.answers,
        );

        self.result = Some(QuizResult {
            correct_answers: attempt.correct_answers,
            total_questions: attempt.total_questions,
            score: attempt.score,
            per_question,
            saved_attempt: self.repository.save(attempt),
        });
    }
}

fn invalid_transition(action: &str, phase: SessionPhase) -> AppError {
    AppError::InvalidState(format!("cannot {} while {:?}", action, phase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        repositories::{LocalQuizAttemptRepository, MemoryKeyValueStore},
        test_utils::fixtures::{mcq_questions, saq_questions},
    };

    fn memory_repository() -> Arc<dyn QuizAttemptRepository> {
        Arc::new(LocalQuizAttemptRepository::new(MemoryKeyValueStore::new()))
    }

    #[test]
    fn empty_quiz_is_rejected() {
        let result = QuizSession::new("x.pdf", QuizType::Mcq, vec![], memory_repository());

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn submit_reveals_feedback_and_locks_answer() {
        let mut session =
            QuizSession::new("geo.pdf", QuizType::Mcq, mcq_questions(), memory_repository()).unwrap();

        session.answer(" b) paris ").unwrap();
        let feedback = session.submit().unwrap();

        assert_eq!(feedback.correct, Some(true));
        assert_eq!(feedback.correct_answer, "B) Paris");
        assert_eq!(session.phase(), SessionPhase::Submitted(0));
        assert!(session.is_submitted(0));
        assert!(matches!(session.answer("A) Rome"), Err(AppError::InvalidState(_))));
        assert!(session.submit().is_err());
        assert_eq!(session.answers()[0], " b) paris ");
    }

    #[test]
    fn next_requires_submission() {
        let mut session =
            QuizSession::new("geo.pdf", QuizType::Mcq, mcq_questions(), memory_repository()).unwrap();

        assert!(matches!(session.next(), Err(AppError::InvalidState(_))));
        assert_eq!(session.phase(), SessionPhase::Answering(0));
    }

    #[test]
    fn free_text_feedback_has_no_correctness() {
        let mut session =
            QuizSession::new("bio.pdf", QuizType::Saq, saq_questions(), memory_repository()).unwrap();

        session.answer("Plants make sugar from light.").unwrap();
        let feedback = session.submit().unwrap();

        assert_eq!(feedback.correct, None);
        assert!(!feedback.explanation.is_empty());
    }

    #[test]
    fn completion_scores_once_and_restart_resets_state() {
        let repository = memory_repository();
        let questions = mcq_questions();
        let mut session =
            QuizSession::new("geo.pdf", QuizType::Mcq, questions.clone(), repository.clone()).unwrap();

        for question in &questions {
            session.answer(question.correct_answer.clone()).unwrap();
            session.submit().unwrap();
            session.next().unwrap();
        }

        assert_eq!(session.phase(), SessionPhase::Completed);
        assert_eq!(session.result().map(|r| r.score), Some(100));
        assert_eq!(
            session
                .result()
                .and_then(|r| r.saved_attempt.as_ref())
                .map(|a| a.pdf_name.as_str()),
            Some(session.pdf_name())
        );
        assert!(session.current_question().is_none());
        assert_eq!(session.next().unwrap(), SessionPhase::Completed);
        assert_eq!(repository.list_all().len(), 1);

        session.restart();

        assert_eq!(session.phase(), SessionPhase::Answering(0));
        assert!(session.result().is_none());
        assert!(session.answers().iter().all(String::is_empty));
        assert!(!session.is_submitted(0));
    }
}
