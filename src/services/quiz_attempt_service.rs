use crate::models::domain::quiz_attempt::TypeCounts;
use crate::models::domain::{NewQuizAttempt, Question, QuizAttempt, QuizType, Stats};

pub struct QuizAttemptService;

impl QuizAttemptService {
    /// Multiple-choice comparison: trimmed, case-insensitive, otherwise exact.
    pub fn answers_match(user_answer: &str, correct_answer: &str) -> bool {
        user_answer.trim().to_lowercase() == correct_answer.trim().to_lowercase()
    }

    /// `None` when the quiz type is not auto-scored.
    pub fn grade_question(quiz_type: QuizType, question: &Question, answer: &str) -> Option<bool> {
        match quiz_type {
            QuizType::Mcq => Some(Self::answers_match(answer, &question.correct_answer)),
            // Free-text answers are never marked correct.
            QuizType::Saq | QuizType::Laq => None,
        }
    }

    pub fn count_correct(quiz_type: QuizType, questions: &[Question], answers: &[String]) -> u32 {
        questions
            .iter()
            .zip(answers)
            .filter(|(question, answer)| {
                Self::grade_question(quiz_type, question, answer).unwrap_or(false)
            })
            .count() as u32
    }

    /// Rounded percentage, half-up.
    pub fn score_percentage(correct: u32, total: u32) -> u32 {
        if total == 0 {
            return 0;
        }
        (100.0 * correct as f64 / total as f64).round() as u32
    }

    pub fn create_attempt(
        pdf_name: &str,
        quiz_type: QuizType,
        questions: &[Question],
        answers: &[String],
    ) -> NewQuizAttempt {
        let total_questions = questions.len() as u32;
        let correct_answers = Self::count_correct(quiz_type, questions, answers);

        NewQuizAttempt {
            pdf_name: pdf_name.to_string(),
            quiz_type,
            total_questions,
            correct_answers,
            score: Self::score_percentage(correct_answers, total_questions),
        }
    }

    pub fn compute_stats(attempts: &[QuizAttempt]) -> Stats {
        if attempts.is_empty() {
            return Stats::default();
        }

        // Counts come from a user-editable file, so totals saturate instead of overflowing.
        let total_correct = saturating_total(attempts.iter().map(|a| a.correct_answers));
        let total_questions = saturating_total(attempts.iter().map(|a| a.total_questions));
        let score_sum = attempts
            .iter()
            .fold(0u64, |sum, a| sum.saturating_add(u64::from(a.score)));
        let average_score = (score_sum as f64 / attempts.len() as f64).round() as u32;

        let by_type = attempts.iter().fold(TypeCounts::default(), |mut acc, attempt| {
            acc.increment(attempt.quiz_type);
            acc
        });

        Stats {
            total_attempts: attempts.len() as u32,
            average_score,
            total_correct,
            total_questions,
            by_type,
        }
    }
}

fn saturating_total(values: impl Iterator<Item = u32>) -> u32 {
    let total = values.fold(0u64, |sum, value| sum.saturating_add(u64::from(value)));
    u32::try_from(total).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{attempt_with_score, mcq_questions, saq_questions};

    #[test]
    fn mcq_answers_match_ignoring_case_and_surrounding_whitespace() {
        assert!(QuizAttemptService::answers_match(" b) paris ", "B) Paris"));
        assert!(!QuizAttemptService::answers_match("B) Pari", "B) Paris"));
        assert!(!QuizAttemptService::answers_match("B)  Paris", "B) Paris"));
    }

    #[test]
    fn free_text_questions_are_never_scored() {
        let questions = saq_questions();
        let answers: Vec<String> = questions.iter().map(|q| q.correct_answer.clone()).collect();

        assert_eq!(
            QuizAttemptService::grade_question(QuizType::Saq, &questions[0], &answers[0]),
            None
        );
        assert_eq!(
            QuizAttemptService::count_correct(QuizType::Saq, &questions, &answers),
            0
        );
    }

    #[test]
    fn create_attempt_rounds_score() {
        let questions = mcq_questions();
        let answers = vec![
            questions[0].correct_answer.clone(),
            questions[1].correct_answer.to_uppercase(),
            "D) wrong".to_string(),
        ];

        let attempt =
            QuizAttemptService::create_attempt("notes.pdf", QuizType::Mcq, &questions, &answers);

        assert_eq!(attempt.total_questions, 3);
        assert_eq!(attempt.correct_answers, 2);
        assert_eq!(attempt.score, 67);
    }

    #[test]
    fn score_percentage_handles_bounds() {
        assert_eq!(QuizAttemptService::score_percentage(0, 4), 0);
        assert_eq!(QuizAttemptService::score_percentage(4, 4), 100);
        assert_eq!(QuizAttemptService::score_percentage(1, 8), 13);
        assert_eq!(QuizAttemptService::score_percentage(0, 0), 0);
    }

    #[test]
    fn compute_stats_on_empty_list_is_all_zero() {
        let stats = QuizAttemptService::compute_stats(&[]);

        assert_eq!(stats, Stats::default());
        assert_eq!(stats.total_attempts, 0);
        assert_eq!(stats.average_score, 0);
        assert_eq!(stats.by_type.mcq + stats.by_type.saq + stats.by_type.laq, 0);
    }

    #[test]
    fn compute_stats_averages_scores_and_counts_types() {
        let attempts = vec![
            attempt_with_score(QuizType::Mcq, 80, 4, 5),
            attempt_with_score(QuizType::Saq, 60, 0, 5),
        ];

        let stats = QuizAttemptService::compute_stats(&attempts);

        assert_eq!(stats.total_attempts, 2);
        assert_eq!(stats.average_score, 70);
        assert_eq!(stats.total_correct, 4);
        assert_eq!(stats.total_questions, 10);
        assert_eq!(stats.by_type.mcq, 1);
        assert_eq!(stats.by_type.saq, 1);
        assert_eq!(stats.by_type.laq, 0);
    }

    #[test]
    fn compute_stats_saturates_oversized_counts() {
        let attempts = vec![
            attempt_with_score(QuizType::Mcq, 100, u32::MAX, u32::MAX),
            attempt_with_score(QuizType::Mcq, 100, u32::MAX, u32::MAX),
            attempt_with_score(QuizType::Saq, u32::MAX, 0, 5),
        ];

        let stats = QuizAttemptService::compute_stats(&attempts);

        assert_eq!(stats.total_attempts, 3);
        assert_eq!(stats.total_correct, u32::MAX);
        assert_eq!(stats.total_questions, u32::MAX);
        assert!(stats.average_score > 100);
    }

    #[test]
    fn compute_stats_rounds_average_half_up() {
        let attempts = vec![
            attempt_with_score(QuizType::Mcq, 67, 2, 3),
            attempt_with_score(QuizType::Mcq, 100, 3, 3),
        ];

        assert_eq!(QuizAttemptService::compute_stats(&attempts).average_score, 84);
    }
}
