//! Confirmation field validator

use crate::traits::{FieldContext, ValidationRule};

/// Suffix of the companion field a confirmed field is compared against
pub const CONFIRMATION_SUFFIX: &str = "_confirmation";

/// Requires a `{field}_confirmation` value equal to the field's own value
///
/// The companion counts as present as soon as its key was submitted, even
/// with a null value; a null companion then simply does not match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfirmedValidator;

impl ConfirmedValidator {
    pub fn confirmation_field(field: &str) -> String {
        format!("{}{}", field, CONFIRMATION_SUFFIX)
    }
}

impl ValidationRule for ConfirmedValidator {
    fn check(&self, ctx: &FieldContext<'_>) -> Option<String> {
        let confirmation = Self::confirmation_field(ctx.field);

        if !ctx.values.contains_field(&confirmation) {
            return Some(format!(
                "The field {} needs a {} to match!",
                ctx.field, confirmation
            ));
        }

        (ctx.values.get(&confirmation) != ctx.value)
            .then(|| format!("The {}s don't match!", ctx.field))
    }

    fn rule_name(&self) -> &'static str {
        "confirmed"
    }

    fn skips_empty(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::ValueSet;

    fn check(values: &ValueSet) -> Option<String> {
        ConfirmedValidator.check(&FieldContext::new("password", values))
    }

    #[test]
    fn test_matching_confirmation() {
        let values = ValueSet::new()
            .set("password", "s3cret")
            .set("password_confirmation", "s3cret");
        assert_eq!(check(&values), None);
    }

    #[test]
    fn test_mismatched_confirmation() {
        let values = ValueSet::new()
            .set("password", "s3cret")
            .set("password_confirmation", "secret");
        assert_eq!(check(&values), Some("The passwords don't match!".to_string()));
    }

    #[test]
    fn test_missing_confirmation() {
        let values = ValueSet::new().set("password", "s3cret");
        assert_eq!(
            check(&values),
            Some("The field password needs a password_confirmation to match!".to_string())
        );
    }

    #[test]
    fn test_null_confirmation_does_not_match() {
        let values = ValueSet::new()
            .set("password", "s3cret")
            .set_null("password_confirmation");
        assert_eq!(check(&values), Some("The passwords don't match!".to_string()));
    }
}
