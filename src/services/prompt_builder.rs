//! Prompt construction for quiz generation, chat and video recommendations.
//!
//! All builders are pure string functions. Source text is truncated by
//! character count, never by byte offset.

use crate::constants::prompts::{
    CHAT_WITHOUT_CONTEXT_INSTRUCTIONS, CHAT_WITH_CONTEXT_INSTRUCTIONS, STUDY_ASSISTANT_PREAMBLE,
    VIDEO_FIELD_INSTRUCTIONS, VIDEO_JSON_ONLY_DIRECTIVE, VIDEO_RECOMMENDATION_COUNT, VIDEO_SCHEMA,
};
use crate::constants::quiz_prompt::{
    JSON_ONLY_DIRECTIVE, LAQ_INSTRUCTIONS, MCQ_INSTRUCTIONS, QUIZ_PREAMBLE, SAQ_INSTRUCTIONS,
    SCHEMA_INTRO, SCHEMA_OPTIONS_LINE,
};
use crate::models::domain::{QuizBlueprint, QuizType};

/// Source text budget for quiz prompts.
pub const MAX_QUIZ_SOURCE_CHARS: usize = 8000;
/// Context budget for chat and video prompts.
pub const MAX_CONTEXT_CHARS: usize = 5000;

/// Returns at most `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

pub fn type_instructions(quiz_type: QuizType) -> &'static str {
    match quiz_type {
        QuizType::Mcq => MCQ_INSTRUCTIONS,
        QuizType::Saq => SAQ_INSTRUCTIONS,
        QuizType::Laq => LAQ_INSTRUCTIONS,
    }
}

fn question_schema(quiz_type: QuizType) -> String {
    let mut schema = String::from("[\n  {\n    \"question\": \"question text\",\n");
    if quiz_type == QuizType::Mcq {
        schema.push_str("    ");
        schema.push_str(SCHEMA_OPTIONS_LINE);
        schema.push('\n');
    }
    schema.push_str("    \"correctAnswer\": \"correct answer or option\",\n");
    schema.push_str("    \"explanation\": \"explanation of the answer\"\n  }\n]");
    schema
}

pub fn build_quiz_prompt(blueprint: &QuizBlueprint) -> String {
    let content = truncate_chars(&blueprint.source_text, MAX_QUIZ_SOURCE_CHARS);

    format!(
        "{preamble}\n\n\
         Based on the following text, generate {count} {quiz_type} questions.\n\n\
         {instructions}\n\n\
         {schema_intro}\n{schema}\n\n\
         Content:\n{content}\n\n\
         {directive}",
        preamble = QUIZ_PREAMBLE,
        count = blueprint.question_count,
        quiz_type = blueprint.quiz_type,
        instructions = type_instructions(blueprint.quiz_type),
        schema_intro = SCHEMA_INTRO,
        schema = question_schema(blueprint.quiz_type),
        content = content,
        directive = JSON_ONLY_DIRECTIVE,
    )
}

pub fn build_chat_prompt(message: &str, pdf_context: Option<&str>) -> String {
    match pdf_context.filter(|context| !context.trim().is_empty()) {
        Some(context) => format!(
            "{} The student is studying from this PDF content:\n\n{}\n\nStudent question: {}\n\n{}",
            STUDY_ASSISTANT_PREAMBLE,
            truncate_chars(context, MAX_CONTEXT_CHARS),
            message,
            CHAT_WITH_CONTEXT_INSTRUCTIONS
        ),
        None => format!(
            "{} {}\n\n{}",
            STUDY_ASSISTANT_PREAMBLE, CHAT_WITHOUT_CONTEXT_INSTRUCTIONS, message
        ),
    }
}

pub fn build_video_prompt(pdf_text: &str) -> String {
    format!(
        "Analyze the following educational content and recommend {} educational YouTube videos that would help someone learn these topics better.\n\n\
         Content:\n{}\n\n{}\n\n{}\n\n{}",
        VIDEO_RECOMMENDATION_COUNT,
        truncate_chars(pdf_text, MAX_CONTEXT_CHARS),
        VIDEO_FIELD_INSTRUCTIONS,
        VIDEO_SCHEMA,
        VIDEO_JSON_ONLY_DIRECTIVE
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::quiz::{MAX_QUESTIONS, MIN_QUESTIONS};

    #[test]
    fn quiz_prompt_contains_only_its_own_type_block() {
        for quiz_type in QuizType::ALL {
            for count in MIN_QUESTIONS..=MAX_QUESTIONS {
                let prompt = build_quiz_prompt(&QuizBlueprint::new("Mitochondria", quiz_type, count));

                for other in QuizType::ALL {
                    let block = type_instructions(other);
                    if other == quiz_type {
                        assert_eq!(prompt.matches(block).count(), 1, "{} block missing", other);
                    } else {
                        assert!(!prompt.contains(block), "{} prompt leaked {} block", quiz_type, other);
                    }
                }
                assert!(prompt.contains(&format!("generate {} {} questions", count, quiz_type)));
            }
        }
    }

    #[test]
    fn quiz_prompt_includes_schema_content_and_directive_in_order() {
        let prompt = build_quiz_prompt(&QuizBlueprint::new("Photosynthesis text", QuizType::Saq, 4));

        let preamble = prompt.find(QUIZ_PREAMBLE).unwrap();
        let schema = prompt.find("\"correctAnswer\"").unwrap();
        let content = prompt.find("Photosynthesis text").unwrap();
        let directive = prompt.find(JSON_ONLY_DIRECTIVE).unwrap();

        assert!(preamble < schema && schema < content && content < directive);
        assert!(prompt.ends_with(JSON_ONLY_DIRECTIVE));
    }

    #[test]
    fn only_mcq_schema_asks_for_options() {
        let mcq = build_quiz_prompt(&QuizBlueprint::new("text", QuizType::Mcq, 5));
        let laq = build_quiz_prompt(&QuizBlueprint::new("text", QuizType::Laq, 5));

        assert!(mcq.contains(SCHEMA_OPTIONS_LINE));
        assert!(!laq.contains(SCHEMA_OPTIONS_LINE));
    }

    #[test]
    fn quiz_prompt_truncates_source_text() {
        let long_text = format!("{}{}", "a".repeat(MAX_QUIZ_SOURCE_CHARS), "TAIL_MARKER");
        let prompt = build_quiz_prompt(&QuizBlueprint::new(long_text, QuizType::Mcq, 5));

        assert!(!prompt.contains("TAIL_MARKER"));
        assert!(prompt.contains(&"a".repeat(MAX_QUIZ_SOURCE_CHARS)));
    }

    #[test]
    fn truncate_chars_respects_multibyte_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("日本語", 5), "日本語");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn chat_prompt_includes_context_when_present() {
        let prompt = build_chat_prompt("What is ATP?", Some("ATP stores energy"));

        assert!(prompt.contains("ATP stores energy"));
        assert!(prompt.contains("Student question: What is ATP?"));
        assert!(prompt.contains(CHAT_WITH_CONTEXT_INSTRUCTIONS));
    }

    #[test]
    fn chat_prompt_treats_blank_context_as_missing() {
        let prompt = build_chat_prompt("What is ATP?", Some("   "));

        assert!(prompt.contains(CHAT_WITHOUT_CONTEXT_INSTRUCTIONS));
        assert!(!prompt.contains("Student question"));
        assert!(prompt.ends_with("What is ATP?"));
    }

    #[test]
    fn video_prompt_truncates_to_context_budget() {
        let text = format!("{}{}", "b".repeat(MAX_CONTEXT_CHARS), "OVERFLOW");
        let prompt = build_video_prompt(&text);

        assert!(!prompt.contains("OVERFLOW"));
        assert!(prompt.contains("recommend 6 educational YouTube videos"));
        assert!(prompt.contains("\"searchQuery\""));
    }
}
