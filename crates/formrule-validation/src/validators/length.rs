//! Minimum and maximum length validators

use crate::traits::{FieldContext, ValidationRule};

/// Which side of the length range is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthBound {
    Min,
    Max,
}

/// Character-count limit on a string value
///
/// Length is counted in Unicode scalar values. Empty values are skipped so
/// an optional field left blank only answers to `required`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthValidator {
    pub bound: LengthBound,
    pub limit: usize,
}

impl LengthValidator {
    /// Value must have at least `limit` characters
    pub fn min(limit: usize) -> Self {
        Self {
            bound: LengthBound::Min,
            limit,
        }
    }

    /// Value must have at most `limit` characters
    pub fn max(limit: usize) -> Self {
        Self {
            bound: LengthBound::Max,
            limit,
        }
    }
}

impl ValidationRule for LengthValidator {
    fn check(&self, ctx: &FieldContext<'_>) -> Option<String> {
        let length = ctx.text().chars().count();
        match self.bound {
            LengthBound::Min if length < self.limit => Some(format!(
                "The field {} can be minimum {} characters.",
                ctx.field, self.limit
            )),
            LengthBound::Max if length > self.limit => Some(format!(
                "The field {} can be maximum {} characters.",
                ctx.field, self.limit
            )),
            _ => None,
        }
    }

    fn rule_name(&self) -> &'static str {
        match self.bound {
            LengthBound::Min => "min",
            LengthBound::Max => "max",
        }
    }

    fn skips_empty(&self) -> bool {
        true
    }
}
