//! Character-class validators backed by regular expressions
//!
//! None of these skip empty values: an empty or missing value is matched as
//! `""`, which fails every built-in class. Pair them with `required` only
//! when the field is mandatory anyway.

use crate::error::{RuleError, RuleResult};
use crate::traits::{FieldContext, ValidationRule};
use once_cell::sync::Lazy;
use regex::Regex;

// A word character followed by one or more non-digits. A leading digit is
// accepted and single-character values are rejected.
static ALPHA_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_][^0-9]+$").unwrap());
static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9 ]*[0-9][0-9 ]*$").unwrap());
static ALPHA_NUMERIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9 _]*[A-Za-z0-9][A-Za-z0-9 _]*$").unwrap());

/// Built-in character classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    /// Letters, no digits
    Alpha,
    /// Digits and spaces, at least one digit
    Numeric,
    /// Letters, digits, spaces and underscores, at least one letter or digit
    AlphaNumeric,
}

impl CharacterClass {
    fn regex(self) -> &'static Regex {
        match self {
            CharacterClass::Alpha => &ALPHA_REGEX,
            CharacterClass::Numeric => &NUMERIC_REGEX,
            CharacterClass::AlphaNumeric => &ALPHA_NUMERIC_REGEX,
        }
    }
}

/// Value must belong entirely to a [`CharacterClass`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternValidator {
    pub class: CharacterClass,
}

impl PatternValidator {
    pub fn new(class: CharacterClass) -> Self {
        Self { class }
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.class.regex().is_match(value)
    }
}

impl ValidationRule for PatternValidator {
    fn check(&self, ctx: &FieldContext<'_>) -> Option<String> {
        if self.is_match(ctx.text()) {
            return None;
        }
        let message = match self.class {
            CharacterClass::Alpha => format!("The field {} can only be letters.", ctx.field),
            CharacterClass::Numeric => format!("The field {} can only be numbers.", ctx.field),
            CharacterClass::AlphaNumeric => {
                format!("The field {} can be numbers and letters.", ctx.field)
            }
        };
        Some(message)
    }

    fn rule_name(&self) -> &'static str {
        match self.class {
            CharacterClass::Alpha => "alpha",
            CharacterClass::Numeric => "numeric",
            CharacterClass::AlphaNumeric => "alphaNumeric",
        }
    }
}

/// Value must not contain any character of a set
///
/// The set uses character-class syntax, so `0-9` is a range and `@#$` is
/// three characters. An empty set forbids nothing.
#[derive(Debug, Clone)]
pub struct ExcludedCharsValidator {
    set: String,
    pattern: Option<Regex>,
}

impl ExcludedCharsValidator {
    /// Build the validator, rejecting sets that do not form a valid class
    pub fn new(field: &str, set: impl Into<String>) -> RuleResult<Self> {
        let set = set.into();
        if set.is_empty() {
            return Ok(Self { set, pattern: None });
        }

        let pattern = Regex::new(&format!("^[^{}]*$", class_body(&set))).map_err(|e| {
            RuleError::MalformedParameter {
                field: field.to_string(),
                constraint: "alphaWithout".to_string(),
                parameter: set.clone(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            set,
            pattern: Some(pattern),
        })
    }

    /// The forbidden set as written in the rule
    pub fn set(&self) -> &str {
        &self.set
    }

    pub fn is_allowed(&self, value: &str) -> bool {
        self.pattern
            .as_ref()
            .map_or(true, |pattern| pattern.is_match(value))
    }
}

/// Escape the class operators `regex` has beyond plain ranges
///
/// `[`, `&&`, `~~` and `--` are nested classes or set operations in `regex`
/// but literal characters in a simple class. `a-z` ranges and backslash
/// escapes are kept as written.
fn class_body(set: &str) -> String {
    let mut body = String::with_capacity(set.len() * 2);
    let mut chars = set.chars();
    let mut previous = None;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                body.push(c);
                if let Some(escaped) = chars.next() {
                    body.push(escaped);
                }
                previous = None;
                continue;
            }
            '[' | '&' | '~' => body.push('\\'),
            '-' if previous == Some('-') => body.push('\\'),
            _ => {}
        }
        body.push(c);
        previous = Some(c);
    }

    body
}

impl ValidationRule for ExcludedCharsValidator {
    fn check(&self, ctx: &FieldContext<'_>) -> Option<String> {
        (!self.is_allowed(ctx.text()))
            .then(|| format!("Format {} is not allowed in {}.", self.set, ctx.field))
    }

    fn rule_name(&self) -> &'static str {
        "alphaWithout"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::ValueSet;

    fn alpha() -> PatternValidator {
        PatternValidator::new(CharacterClass::Alpha)
    }

    fn numeric() -> PatternValidator {
        PatternValidator::new(CharacterClass::Numeric)
    }

    fn alpha_numeric() -> PatternValidator {
        PatternValidator::new(CharacterClass::AlphaNumeric)
    }

    #[test]
    fn test_alpha() {
        assert!(alpha().is_match("Al"));
        assert!(alpha().is_match("John Smith"));
        assert!(!alpha().is_match("abc123"));
        assert!(!alpha().is_match("A"));
        assert!(!alpha().is_match(""));
    }

    #[test]
    fn test_numeric() {
        assert!(numeric().is_match("42"));
        assert!(numeric().is_match("0721 555 123"));
        assert!(!numeric().is_match("   "));
        assert!(!numeric().is_match("12a"));
        assert!(!numeric().is_match("-1"));
        assert!(!numeric().is_match(""));
    }

    #[test]
    fn test_alpha_numeric() {
        assert!(alpha_numeric().is_match("user_42"));
        assert!(alpha_numeric().is_match("Room 101"));
        assert!(!alpha_numeric().is_match("___"));
        assert!(!alpha_numeric().is_match("hi!"));
        assert!(!alpha_numeric().is_match(""));
    }

    #[test]
    fn test_pattern_messages_on_empty_value() {
        let values = ValueSet::new().set("code", "");
        let ctx = FieldContext::new("code", &values);

        assert_eq!(
            alpha().check(&ctx),
            Some("The field code can only be letters.".to_string())
        );
        assert_eq!(
            numeric().check(&ctx),
            Some("The field code can only be numbers.".to_string())
        );
        assert_eq!(
            alpha_numeric().check(&ctx),
            Some("The field code can be numbers and letters.".to_string())
        );
    }

    #[test]
    fn test_excluded_digits() {
        let validator = ExcludedCharsValidator::new("name", "0-9").unwrap();
        assert!(!validator.is_allowed("abc123"));
        assert!(validator.is_allowed("abc"));
        assert!(validator.is_allowed(""));

        let values = ValueSet::new().set("name", "abc123");
        assert_eq!(
            validator.check(&FieldContext::new("name", &values)),
            Some("Format 0-9 is not allowed in name.".to_string())
        );
    }

    #[test]
    fn test_excluded_symbols() {
        let validator = ExcludedCharsValidator::new("handle", "@#$").unwrap();
        assert!(!validator.is_allowed("me@home"));
        assert!(validator.is_allowed("me_home"));
    }

    #[test]
    fn test_set_operator_characters_are_literal() {
        let validator = ExcludedCharsValidator::new("note", "a&&b").unwrap();
        assert!(!validator.is_allowed("xx&yy"));
        assert!(!validator.is_allowed("a"));
        assert!(!validator.is_allowed("b"));
        assert!(validator.is_allowed("xyz"));

        let validator = ExcludedCharsValidator::new("note", "~~").unwrap();
        assert!(!validator.is_allowed("x~y"));

        // `!--` is the range `!` to `-`, not a set difference
        let validator = ExcludedCharsValidator::new("note", "!--").unwrap();
        assert!(!validator.is_allowed("-"));
        assert!(!validator.is_allowed("a+b"));
        assert!(validator.is_allowed("b"));
    }

    #[test]
    fn test_open_bracket_is_literal() {
        let validator = ExcludedCharsValidator::new("note", "<>[").unwrap();
        assert!(!validator.is_allowed("a[b"));
        assert!(!validator.is_allowed("<tag>"));
        assert!(validator.is_allowed("plain"));

        let values = ValueSet::new().set("note", "a[b");
        assert_eq!(
            validator.check(&FieldContext::new("note", &values)),
            Some("Format <>[ is not allowed in note.".to_string())
        );
    }

    #[test]
    fn test_ranges_and_escapes_survive() {
        let validator = ExcludedCharsValidator::new("code", r"a-c\d").unwrap();
        assert!(!validator.is_allowed("b"));
        assert!(!validator.is_allowed("7"));
        assert!(validator.is_allowed("xyz"));
        assert_eq!(class_body(r"a-z\-&"), r"a-z\-\&");
    }

    #[test]
    fn test_empty_set_allows_everything() {
        let validator = ExcludedCharsValidator::new("name", "").unwrap();
        assert!(validator.is_allowed("anything 123 !@#"));
    }

    #[test]
    fn test_invalid_set_is_rejected() {
        let err = ExcludedCharsValidator::new("name", "z-a").unwrap_err();
        assert!(matches!(
            err,
            RuleError::MalformedParameter { ref constraint, .. } if constraint == "alphaWithout"
        ));
    }
}
