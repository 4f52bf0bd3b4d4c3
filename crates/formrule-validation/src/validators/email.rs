//! Email format validator
//!
//! This is a shape check, not RFC 5322: local part without spaces or `@`,
//! an alphabetic domain label and a two or three letter suffix. Addresses
//! such as `a@mail.example.com` are rejected; callers that need real
//! deliverability checks must do them downstream.

use crate::traits::{FieldContext, ValidationRule};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[a-zA-Z]+\.[a-zA-Z]{2,3}$").unwrap());

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailValidator;

impl EmailValidator {
    pub fn is_valid_format(value: &str) -> bool {
        EMAIL_REGEX.is_match(value)
    }
}

impl ValidationRule for EmailValidator {
    fn check(&self, ctx: &FieldContext<'_>) -> Option<String> {
        (!Self::is_valid_format(ctx.text()))
            .then(|| format!("The {} is not valid format!", ctx.field))
    }

    fn rule_name(&self) -> &'static str {
        "email"
    }

    fn skips_empty(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::ValueSet;

    #[test]
    fn test_valid_emails() {
        for email in ["user@example.com", "first.last+tag@mail.io", "x@ab.org"] {
            assert!(EmailValidator::is_valid_format(email), "{email}");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "bad-email",
            "user@",
            "@example.com",
            "us er@example.com",
            "user@example.info",
            "user@mail.example.com",
            "user@exa1mple.com",
        ] {
            assert!(!EmailValidator::is_valid_format(email), "{email}");
        }
    }

    #[test]
    fn test_email_message() {
        let values = ValueSet::new().set("email", "bad-email");
        assert_eq!(
            EmailValidator.check(&FieldContext::new("email", &values)),
            Some("The email is not valid format!".to_string())
        );
        assert!(EmailValidator.skips_empty());
    }
}
