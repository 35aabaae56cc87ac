pub mod key_value_store;
pub mod quiz_attempt_repository;

pub use key_value_store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use quiz_attempt_repository::{
    LocalQuizAttemptRepository, QuizAttemptRepository, ATTEMPTS_STORAGE_KEY,
};
