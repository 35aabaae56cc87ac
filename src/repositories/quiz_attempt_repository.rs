use chrono::Utc;
use uuid::Uuid;

use crate::{
    errors::AppResult,
    models::domain::{NewQuizAttempt, QuizAttempt},
    repositories::key_value_store::KeyValueStore,
};

pub const ATTEMPTS_STORAGE_KEY: &str = "quiz_attempts";

/// Where completed quizzes go. Storage is a convenience: implementations
/// swallow their own failures instead of returning errors.
pub trait QuizAttemptRepository: Send + Sync {
    /// Assigns id and timestamp, then appends. `None` if nothing was stored.
    fn save(&self, attempt: NewQuizAttempt) -> Option<QuizAttempt>;
    fn list_all(&self) -> Vec<QuizAttempt>;
    fn clear_all(&self);

    fn list_by_pdf(&self, pdf_name: &str) -> Vec<QuizAttempt> {
        self.list_all()
            .into_iter()
            .filter(|attempt| attempt.pdf_name == pdf_name)
            .collect()
    }
}

/// Keeps every attempt as one JSON array under [`ATTEMPTS_STORAGE_KEY`].
pub struct LocalQuizAttemptRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> LocalQuizAttemptRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn read_attempts(&self) -> AppResult<Vec<QuizAttempt>> {
        match self.store.get_item(ATTEMPTS_STORAGE_KEY)? {
            Some(data) => Ok(serde_json::from_str(&data)?),
            None => Ok(Vec::new()),
        }
    }

    fn append(&self, attempt: &QuizAttempt) -> AppResult<()> {
        let mut attempts = self.read_attempts()?;
        attempts.push(attempt.clone());
        let data = serde_json::to_string(&attempts)?;
        self.store.set_item(ATTEMPTS_STORAGE_KEY, &data)
    }
}

impl<S: KeyValueStore> QuizAttemptRepository for LocalQuizAttemptRepository<S> {
    fn save(&self, attempt: NewQuizAttempt) -> Option<QuizAttempt> {
        let attempt =
            attempt.into_attempt(Uuid::new_v4().to_string(), Utc::now().timestamp_millis());

        match self.append(&attempt) {
            Ok(()) => {
                log::info!(
                    "Saved {} attempt {} for '{}' ({}%)",
                    attempt.quiz_type,
                    attempt.id,
                    attempt.pdf_name,
                    attempt.score
                );
                Some(attempt)
            }
            Err(e) => {
                log::warn!("Could not save quiz attempt, continuing without it: {}", e);
                None
            }
        }
    }

    fn list_all(&self) -> Vec<QuizAttempt> {
        self.read_attempts().unwrap_or_else(|e| {
            log::warn!("Could not read quiz attempts, treating history as empty: {}", e);
            Vec::new()
        })
    }

    fn clear_all(&self) {
        if let Err(e) = self.store.remove_item(ATTEMPTS_STORAGE_KEY) {
            log::warn!("Could not clear quiz attempts: {}", e);
        }
    }
}
