pub mod quiz;
pub mod quiz_attempt;
pub mod quiz_question;
pub mod video;
pub use quiz::QuizBlueprint;
pub use quiz_attempt::{NewQuizAttempt, QuizAttempt, Stats};
pub use quiz_question::{Question, QuizType};
pub use video::{Video, VideoRecommendation};
