//! Answer formatting for the command-line front end.
//!
//! Pure functions: answers in, strings out. Printing happens in `main`.

use bigdecimal::BigDecimal;
use serde::Serialize;

/// How an answer is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text, one value per line.
    #[default]
    Human,
    /// `{"answer": ...}`.
    Json,
}

/// The value a finished prompt produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Text(String),
    Many(Vec<String>),
    Flag(bool),
    /// Serialized as a string so no digits are lost.
    Number(#[serde(serialize_with = "as_decimal_string")] BigDecimal),
}

fn as_decimal_string<S: serde::Serializer>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

#[derive(Serialize)]
struct Document<'a> {
    answer: &'a Answer,
}

/// Format an answer for output.
pub fn format_answer(answer: &Answer, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(answer),
        OutputFormat::Json => format_json(answer),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(answer: &Answer) -> String {
    match answer {
        Answer::Text(text) => text.clone(),
        Answer::Many(items) => items.join("\n"),
        Answer::Flag(true) => "yes".to_string(),
        Answer::Flag(false) => "no".to_string(),
        Answer::Number(n) => n.to_string(),
    }
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(answer: &Answer) -> String {
    serde_json::to_string_pretty(&Document { answer }).unwrap_or_else(|e| {
        // Strings, bools and lists cannot fail to serialize
        panic!("Failed to serialize answer to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn json(answer: Answer) -> serde_json::Value {
        let output = format_answer(&answer, OutputFormat::Json);
        serde_json::from_str(&output).expect("Invalid JSON")
    }

    #[test]
    fn human_text_is_verbatim() {
        let answer = Answer::Text("hello world".into());
        assert_eq!(format_answer(&answer, OutputFormat::Human), "hello world");
    }

    #[test]
    fn human_lists_one_per_line() {
        let answer = Answer::Many(vec!["a".into(), "b".into()]);
        assert_eq!(format_answer(&answer, OutputFormat::Human), "a\nb");
    }

    #[test]
    fn human_flags_read_as_words() {
        assert_eq!(format_answer(&Answer::Flag(true), OutputFormat::Human), "yes");
        assert_eq!(format_answer(&Answer::Flag(false), OutputFormat::Human), "no");
    }

    #[test]
    fn json_wraps_answer() {
        assert_eq!(json(Answer::Text("x".into()))["answer"], "x");
        assert_eq!(json(Answer::Flag(true))["answer"], true);
        assert_eq!(
            json(Answer::Many(vec!["a".into(), "b".into()]))["answer"],
            serde_json::json!(["a", "b"])
        );
    }

    #[test]
    fn json_numbers_keep_every_digit() {
        let text = "3.14159265358979323846264338327950288";
        let answer = Answer::Number(BigDecimal::from_str(text).unwrap());
        assert_eq!(json(answer)["answer"], text);
    }

    #[test]
    fn empty_selection_is_empty_array() {
        assert_eq!(json(Answer::Many(vec![]))["answer"], serde_json::json!([]));
        assert_eq!(format_answer(&Answer::Many(vec![]), OutputFormat::Human), "");
    }
}
