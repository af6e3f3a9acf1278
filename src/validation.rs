//! Name Validation
//!
//! Cleaning and rule checks applied to a draft name before it is sent.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use crate::models::Item;

pub const DEFAULT_MAX_LEN: usize = 100;
pub const DEFAULT_FORBIDDEN: &[&str] = &["spam", "badword"];

static TAG_RE: OnceLock<Regex> = OnceLock::new();
static CONTROL_RE: OnceLock<Regex> = OnceLock::new();
static SPACE_RE: OnceLock<Regex> = OnceLock::new();

fn tag_re() -> &'static Regex {
    TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern"))
}

fn control_re() -> &'static Regex {
    // Tab, LF and CR are left for the whitespace pass
    CONTROL_RE.get_or_init(|| Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F]").expect("control pattern"))
}

fn space_re() -> &'static Regex {
    SPACE_RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern"))
}

/// Why a name was rejected. `Display` is the message shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be at most {max} characters")]
    TooLong { max: usize },
    #[error("Name contains forbidden content")]
    Forbidden,
    #[error("An item with that name already exists")]
    Duplicate,
}

/// Limits a name must satisfy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRules {
    pub max_len: usize,
    /// Matched as case-insensitive substrings
    pub forbidden: Vec<String>,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            forbidden: DEFAULT_FORBIDDEN.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// Strip tag-like markup and control characters, collapse whitespace, trim
pub fn sanitize(raw: &str) -> String {
    let no_tags = tag_re().replace_all(raw, "");
    let no_ctl = control_re().replace_all(&no_tags, "");
    space_re().replace_all(&no_ctl, " ").trim().to_string()
}

/// Check an already sanitized name against the rules and the current items.
///
/// Checks run in order: empty, length, forbidden words, duplicates.
pub fn validate(cleaned: &str, existing: &[Item], rules: &NameRules) -> Result<String, ValidationError> {
    if cleaned.is_empty() {
        return Err(ValidationError::Empty);
    }
    if cleaned.chars().count() > rules.max_len {
        return Err(ValidationError::TooLong { max: rules.max_len });
    }

    let lowered = cleaned.to_lowercase();
    let forbidden = rules
        .forbidden
        .iter()
        .filter(|w| !w.is_empty())
        .any(|w| lowered.contains(&w.to_lowercase()));
    if forbidden {
        return Err(ValidationError::Forbidden);
    }

    if existing.iter().any(|item| item.name.to_lowercase() == lowered) {
        return Err(ValidationError::Duplicate);
    }

    Ok(cleaned.to_string())
}

/// `sanitize` then `validate`
pub fn clean_and_validate(raw: &str, existing: &[Item], rules: &NameRules) -> Result<String, ValidationError> {
    validate(&sanitize(raw), existing, rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(id: i64, name: &str) -> Item {
        Item { id, name: name.to_string() }
    }

    #[test]
    fn test_sanitize_strips_tags() {
        assert_eq!(sanitize("<b>Bold</b> name"), "Bold name");
        assert_eq!(sanitize("<script>alert(1)</script>x"), "alert(1)x");
        assert_eq!(sanitize("a < b"), "a < b");
    }

    #[test]
    fn test_sanitize_strips_control_chars() {
        assert_eq!(sanitize("ab\u{0}c\u{7f}d\u{1b}"), "abcd");
    }

    #[test]
    fn test_sanitize_collapses_whitespace() {
        assert_eq!(sanitize("  Gadget  "), "Gadget");
        assert_eq!(sanitize("one\t\ttwo\n\r\nthree"), "one two three");
        assert_eq!(sanitize("a \u{1} b"), "a b");
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(sanitize(" \t\n "), "");
        assert_eq!(clean_and_validate(" \t\n ", &[], &NameRules::default()), Err(ValidationError::Empty));
    }

    #[test]
    fn test_markup_only_is_empty() {
        assert_eq!(clean_and_validate("<br/><hr>", &[], &NameRules::default()), Err(ValidationError::Empty));
    }

    #[test]
    fn test_too_long() {
        let rules = NameRules::default();
        let name = "x".repeat(101);
        assert_eq!(validate(&name, &[], &rules), Err(ValidationError::TooLong { max: 100 }));

        let exact = "x".repeat(100);
        assert_eq!(validate(&exact, &[], &rules), Ok(exact.clone()));
    }

    #[test]
    fn test_length_counts_characters() {
        let rules = NameRules { max_len: 3, ..NameRules::default() };
        assert!(validate("äöü", &[], &rules).is_ok());
        assert!(validate("äöüß", &[], &rules).is_err());
    }

    #[test]
    fn test_forbidden_is_case_insensitive_substring() {
        let rules = NameRules::default();
        assert_eq!(validate("spam product", &[], &rules), Err(ValidationError::Forbidden));
        assert_eq!(validate("SPAM product", &[], &rules), Err(ValidationError::Forbidden));
        // Substring match, not whole-word
        assert_eq!(validate("Antispamware", &[], &rules), Err(ValidationError::Forbidden));
        assert_eq!(validate("my BadWord list", &[], &rules), Err(ValidationError::Forbidden));
    }

    #[test]
    fn test_forbidden_words_are_lowercased() {
        let rules = NameRules { max_len: 100, forbidden: vec!["Evil".to_string(), String::new()] };
        assert_eq!(validate("so evil", &[], &rules), Err(ValidationError::Forbidden));
        assert!(validate("kind", &[], &rules).is_ok());
    }

    #[test]
    fn test_duplicate() {
        let existing = vec![item(1, "Widget")];
        let rules = NameRules::default();
        assert_eq!(validate("widget", &existing, &rules), Err(ValidationError::Duplicate));
        assert_eq!(validate("WIDGET", &existing, &rules), Err(ValidationError::Duplicate));
        assert_eq!(validate("Widgets", &existing, &rules), Ok("Widgets".to_string()));
    }

    #[test]
    fn test_rule_order() {
        // Forbidden wins over duplicate, length wins over forbidden
        let existing = vec![item(1, "spam")];
        let rules = NameRules::default();
        assert_eq!(validate("spam", &existing, &rules), Err(ValidationError::Forbidden));
        let long_spam = format!("spam{}", "x".repeat(100));
        assert_eq!(validate(&long_spam, &[], &rules), Err(ValidationError::TooLong { max: 100 }));
    }

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::Empty.to_string(), "Name must not be empty");
        assert_eq!(ValidationError::TooLong { max: 100 }.to_string(), "Name must be at most 100 characters");
        assert_eq!(ValidationError::Forbidden.to_string(), "Name contains forbidden content");
        assert_eq!(ValidationError::Duplicate.to_string(), "An item with that name already exists");
    }

    proptest! {
        #[test]
        fn prop_sanitize_is_idempotent(s in any::<String>()) {
            let once = sanitize(&s);
            prop_assert_eq!(sanitize(&once), once);
        }

        #[test]
        fn prop_sanitize_removes_markup(
            before in "[a-z ]{0,10}",
            tag in "[a-z/ =\"]{0,12}",
            after in "[a-z ]{0,10}",
        ) {
            let cleaned = sanitize(&format!("{}<{}>{}", before, tag, after));
            prop_assert!(!tag_re().is_match(&cleaned));
        }

        #[test]
        fn prop_sanitize_output_has_no_controls(s in any::<String>()) {
            let cleaned = sanitize(&s);
            prop_assert!(!control_re().is_match(&cleaned));
            prop_assert_eq!(cleaned.trim(), cleaned.as_str());
        }

        #[test]
        fn prop_long_names_rejected(extra in 1usize..50) {
            let name = "a".repeat(DEFAULT_MAX_LEN + extra);
            prop_assert_eq!(
                validate(&name, &[], &NameRules::default()),
                Err(ValidationError::TooLong { max: DEFAULT_MAX_LEN })
            );
        }
    }
}
