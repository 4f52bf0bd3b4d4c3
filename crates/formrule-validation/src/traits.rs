//! Core checker trait

use crate::values::ValueSet;

/// What a checker sees when evaluating one field
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    /// Name of the field under validation
    pub field: &'a str,
    /// Its submitted value, `None` when absent or null
    pub value: Option<&'a str>,
    /// All submitted values, for cross-field checks
    pub values: &'a ValueSet,
}

impl<'a> FieldContext<'a> {
    pub fn new(field: &'a str, values: &'a ValueSet) -> Self {
        Self {
            field,
            value: values.get(field),
            values,
        }
    }

    /// Value as text, absent and null reading as `""`
    pub fn text(&self) -> &'a str {
        self.value.unwrap_or("")
    }
}

/// A single constraint checker
///
/// Checkers are pure: they read the context and return the violation
/// message, if any. They never see each other's results.
pub trait ValidationRule: Send + Sync {
    /// Check the field, returning the message when the constraint is violated
    fn check(&self, ctx: &FieldContext<'_>) -> Option<String>;

    /// Constraint name as written in rule strings
    fn rule_name(&self) -> &'static str;

    /// Whether an empty value (absent, null or `""`) is exempt from this check
    fn skips_empty(&self) -> bool {
        false
    }
}
