//! Best-effort recovery of a JSON array from free-form model output.
//!
//! Models are told to return only a JSON array but regularly wrap it in prose
//! or code fences, or leave trailing commas behind. Recovery runs in a fixed
//! order so the same input always yields the same result:
//!
//! 1. strip code-fence markers (optionally tagged `json`)
//! 2. greedy match for an array of objects
//! 3. otherwise slice from the first `[` to the last `]`
//! 4. drop commas that directly precede `}` or `]`
//! 5. parse, and require a non-empty array
//!
//! Step 3 is not a balanced-bracket parse. Stray brackets in the surrounding
//! prose can make it mis-slice, in which case parsing fails.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{AppError, AppResult};

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json)?\s*").expect("CODE_FENCE is a valid regex pattern"));

static OBJECT_ARRAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\s*\{[\s\S]*\}\s*\]").expect("OBJECT_ARRAY is a valid regex pattern")
});

static TRAILING_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*([}\]])").expect("TRAILING_COMMA is a valid regex pattern"));

pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").into_owned()
}

/// Finds the slice most likely to hold the array: regex first, then brackets.
pub fn locate_array(text: &str) -> Option<&str> {
    if let Some(found) = OBJECT_ARRAY.find(text) {
        return Some(found.as_str());
    }

    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end > start {
        Some(&text[start..=end])
    } else {
        None
    }
}

pub fn remove_trailing_commas(json: &str) -> String {
    TRAILING_COMMA.replace_all(json, "$1").into_owned()
}

/// Recovers a non-empty JSON array from `text`.
pub fn extract_json_array(text: &str) -> AppResult<Vec<Value>> {
    let cleaned = strip_code_fences(text.trim());

    let candidate = locate_array(&cleaned)
        .ok_or_else(|| AppError::ParseError("no JSON array found in model output".to_string()))?;

    let repaired = remove_trailing_commas(candidate);

    let parsed: Value = serde_json::from_str(&repaired)
        .map_err(|e| AppError::ParseError(format!("invalid JSON in model output: {}", e)))?;

    match parsed {
        Value::Array(items) if !items.is_empty() => Ok(items),
        Value::Array(_) => Err(AppError::ParseError(
            "model output contained an empty array".to_string(),
        )),
        _ => Err(AppError::ParseError(
            "model output was not a JSON array".to_string(),
        )),
    }
}

/// Recovers the array and deserializes every element as `T`.
pub fn extract_items<T: DeserializeOwned>(text: &str) -> AppResult<Vec<T>> {
    extract_json_array(text)?
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| {
                AppError::ParseError(format!("item {} has an unexpected shape: {}", index, e))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Question;

    #[test]
    fn recovers_fenced_array_with_trailing_comma() {
        let text = "Here you go:\n```json\n[{\"question\":\"Q\",\"correctAnswer\":\"A\",\"explanation\":\"E\",}]\n```";

        let questions: Vec<Question> = extract_items(text).unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "Q");
        assert_eq!(questions[0].correct_answer, "A");
        assert_eq!(questions[0].explanation, "E");
        assert!(questions[0].options.is_none());
    }

    #[test]
    fn text_without_brackets_is_a_parse_error() {
        let err = extract_json_array("I'm sorry, I cannot help with that.").unwrap_err();

        assert!(matches!(err, AppError::ParseError(_)));
    }

    #[test]
    fn falls_back_to_bracket_slicing_for_non_object_arrays() {
        let items = extract_json_array("Answers: [\"a\", \"b\",] done").unwrap();

        assert_eq!(items, vec![Value::from("a"), Value::from("b")]);
    }

    #[test]
    fn prefers_object_array_match_over_leading_brackets() {
        let text = "See [1].\n[{\"question\":\"Q\",\"correctAnswer\":\"A\"}]";

        let items = extract_json_array(text).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["question"], "Q");
    }

    #[test]
    fn stray_brackets_in_prose_cause_a_mis_slice() {
        // First '[' and last ']' enclose prose, not JSON.
        let err = extract_json_array("Note [draft] and then ] the end").unwrap_err();

        assert!(matches!(err, AppError::ParseError(_)));
    }

    #[test]
    fn reversed_brackets_are_not_an_array() {
        assert!(extract_json_array("] nothing here [").is_err());
    }

    #[test]
    fn empty_array_is_rejected() {
        let err = extract_json_array("```json\n[]\n```").unwrap_err();

        assert!(err.to_string().contains("empty array"));
    }

    #[test]
    fn removes_trailing_commas_before_any_closing_bracket() {
        assert_eq!(remove_trailing_commas("[{\"a\":1,},]"), "[{\"a\":1}]");
        assert_eq!(remove_trailing_commas("{\"a\":[1,2,\n  ]}"), "{\"a\":[1,2]}");
    }

    #[test]
    fn strips_plain_and_tagged_fences() {
        assert_eq!(strip_code_fences("```json\n[1]\n```"), "[1]\n");
        assert_eq!(strip_code_fences("```\n[1]```"), "[1]");
    }

    #[test]
    fn wrong_element_shape_is_a_parse_error() {
        let err = extract_items::<Question>("[{\"title\":\"not a question\"}]").unwrap_err();

        assert!(matches!(err, AppError::ParseError(_)));
        assert!(err.to_string().contains("item 0"));
    }
}
