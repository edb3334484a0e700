//! Grammar of the project `name` field.

use std::fmt;

use serde_json::Value;

use super::FieldRule;
use crate::keys;

/// Maximum length of a project name, in characters.
pub const MAX_NAME_LEN: usize = 100;

/// First rule a project name breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameProblem {
    /// The value read from a document is not a JSON string.
    NotAString,
    Empty,
    TooLong,
    /// `position` is 1-based.
    BadCharacter { character: char, position: usize },
    FirstNotLetter,
    LastNotLetter,
}

impl fmt::Display for NameProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameProblem::NotAString => f.write_str("name is not a string"),
            NameProblem::Empty => f.write_str("name is empty string"),
            NameProblem::TooLong => {
                write!(f, "length of name is greater than {}", MAX_NAME_LEN)
            }
            NameProblem::BadCharacter {
                character,
                position,
            } => write!(
                f,
                "name have bad character '{}' (code {}) at position {}",
                character, *character as u32, position
            ),
            NameProblem::FirstNotLetter => f.write_str("first character is not a latin letter"),
            NameProblem::LastNotLetter => f.write_str("last character is not a latin letter"),
        }
    }
}

fn is_name_letter(c: char) -> bool {
    c.is_ascii_lowercase()
}

fn is_name_char(c: char) -> bool {
    is_name_letter(c) || c == '-' || c == '_'
}

/// Check a project name and return the first problem found, if any.
///
/// Checks run in a fixed order: emptiness, length, alphabet, first
/// character, last character.
pub fn name_problem(name: &str) -> Option<NameProblem> {
    if name.is_empty() {
        return Some(NameProblem::Empty);
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Some(NameProblem::TooLong);
    }

    if let Some((index, character)) = name.chars().enumerate().find(|(_, c)| !is_name_char(*c)) {
        return Some(NameProblem::BadCharacter {
            character,
            position: index + 1,
        });
    }

    // Non-empty and all ASCII past this point
    let bytes = name.as_bytes();
    if !is_name_letter(bytes[0] as char) {
        return Some(NameProblem::FirstNotLetter);
    }
    if !is_name_letter(bytes[bytes.len() - 1] as char) {
        return Some(NameProblem::LastNotLetter);
    }

    None
}

/// Like [`name_problem`], for a value taken from an untyped document.
pub fn value_name_problem(value: &Value) -> Option<NameProblem> {
    match value.as_str() {
        Some(name) => name_problem(name),
        None => Some(NameProblem::NotAString),
    }
}

/// Check whether a project name is valid.
pub fn is_valid_name(name: &str) -> bool {
    name_problem(name).is_none()
}

/// Field rule enforcing the project name grammar.
pub struct NameRule;

impl FieldRule for NameRule {
    fn field(&self) -> &'static str {
        keys::NAME
    }

    fn check(&self, value: &Value) -> Option<String> {
        value_name_problem(value).map(|problem| problem.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn problem_text(name: &str) -> String {
        name_problem(name).map(|p| p.to_string()).unwrap_or_default()
    }

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("a"));
        assert!(is_valid_name("foo"));
        assert!(is_valid_name("my-project"));
        assert!(is_valid_name("my_project"));
        assert!(is_valid_name("a-_-b"));
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(name_problem(""), Some(NameProblem::Empty));
        assert_eq!(problem_text(""), "name is empty string");
    }

    #[test]
    fn test_length_boundary() {
        let max = format!("a{}a", "-".repeat(MAX_NAME_LEN - 2));
        assert_eq!(max.len(), MAX_NAME_LEN);
        assert!(is_valid_name(&max));

        let over = "a".repeat(MAX_NAME_LEN + 1);
        assert_eq!(problem_text(&over), "length of name is greater than 100");
    }

    #[test]
    fn test_length_checked_before_characters() {
        let name = "A".repeat(MAX_NAME_LEN + 1);
        assert_eq!(name_problem(&name), Some(NameProblem::TooLong));
    }

    #[test]
    fn test_bad_character() {
        assert_eq!(
            problem_text("foo!"),
            "name have bad character '!' (code 33) at position 4"
        );
        assert_eq!(
            problem_text("Foo!"),
            "name have bad character 'F' (code 70) at position 1"
        );
        assert_eq!(
            problem_text("ab cd"),
            "name have bad character ' ' (code 32) at position 3"
        );
        assert_eq!(problem_text("a1"), "name have bad character '1' (code 49) at position 2");
    }

    #[test]
    fn test_bad_character_position_counts_chars() {
        assert_eq!(
            problem_text("abé"),
            "name have bad character 'é' (code 233) at position 3"
        );
    }

    #[test]
    fn test_characters_checked_before_edges() {
        assert_eq!(
            name_problem("-A"),
            Some(NameProblem::BadCharacter {
                character: 'A',
                position: 2
            })
        );
    }

    #[test]
    fn test_first_character() {
        assert_eq!(problem_text("-a"), "first character is not a latin letter");
        assert_eq!(problem_text("_a"), "first character is not a latin letter");
        assert_eq!(problem_text("-"), "first character is not a latin letter");
    }

    #[test]
    fn test_last_character() {
        assert_eq!(problem_text("a-"), "last character is not a latin letter");
        assert_eq!(problem_text("a_"), "last character is not a latin letter");
    }

    #[test]
    fn test_value_not_a_string() {
        assert_eq!(value_name_problem(&json!(42)), Some(NameProblem::NotAString));
        assert_eq!(value_name_problem(&json!(null)), Some(NameProblem::NotAString));
        assert_eq!(
            value_name_problem(&json!(["foo"])).unwrap().to_string(),
            "name is not a string"
        );
        assert_eq!(value_name_problem(&json!("foo")), None);
    }

    #[test]
    fn test_predicate_agrees_with_diagnostic() {
        let mut samples: Vec<String> = ["", "a", "A", "-", "a-", "-a", "ab", "a_b", "a b", "über"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        samples.push("x".repeat(101));
        for sample in &samples {
            assert_eq!(is_valid_name(sample), name_problem(sample).is_none(), "{sample}");
        }
    }

    #[test]
    fn test_name_rule() {
        assert_eq!(NameRule.field(), "name");
        assert_eq!(NameRule.check(&json!("foo")), None);
        assert_eq!(
            NameRule.check(&json!("")),
            Some("name is empty string".to_string())
        );
    }
}
