//! Required field validator

use crate::traits::{FieldContext, ValidationRule};
use crate::values::is_empty_value;

/// Fails when the value is absent, null or `""`
///
/// Whitespace-only values are present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequiredValidator;

impl ValidationRule for RequiredValidator {
    fn check(&self, ctx: &FieldContext<'_>) -> Option<String> {
        is_empty_value(ctx.value).then(|| format!("The field {} is required!", ctx.field))
    }

    fn rule_name(&self) -> &'static str {
        "required"
    }
}
