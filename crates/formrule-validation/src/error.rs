//! Configuration errors raised while resolving rule strings
//!
//! A field failing one of its constraints is not an error in this sense: those
//! end up in the [`ErrorReport`](crate::report::ErrorReport). The variants
//! here mean the rule set itself is wrong and the caller has to fix it.

use thiserror::Error;

pub type RuleResult<T> = Result<T, RuleError>;

/// A rule set that cannot be evaluated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The token names no known constraint
    #[error("unknown constraint `{constraint}` on field `{field}`")]
    UnknownConstraint { field: String, constraint: String },

    /// A parameterized constraint was written without its `:` argument
    #[error("constraint `{constraint}` on field `{field}` requires a parameter")]
    MissingParameter { field: String, constraint: String },

    /// The parameter could not be interpreted for this constraint
    #[error("invalid parameter `{parameter}` for `{constraint}` on field `{field}`: {reason}")]
    MalformedParameter {
        field: String,
        constraint: String,
        parameter: String,
        reason: String,
    },
}

impl RuleError {
    /// Field whose rule string caused the error
    pub fn field(&self) -> &str {
        match self {
            RuleError::UnknownConstraint { field, .. }
            | RuleError::MissingParameter { field, .. }
            | RuleError::MalformedParameter { field, .. } => field,
        }
    }

    /// Attach the field whose rule string produced the error
    pub fn on_field(self, field: impl Into<String>) -> Self {
        let field = field.into();
        match self {
            RuleError::UnknownConstraint { constraint, .. } => {
                RuleError::UnknownConstraint { field, constraint }
            }
            RuleError::MissingParameter { constraint, .. } => {
                RuleError::MissingParameter { field, constraint }
            }
            RuleError::MalformedParameter {
                constraint,
                parameter,
                reason,
                ..
            } => RuleError::MalformedParameter {
                field,
                constraint,
                parameter,
                reason,
            },
        }
    }

    /// Constraint token (or name) that could not be resolved
    pub fn constraint(&self) -> &str {
        match self {
            RuleError::UnknownConstraint { constraint, .. }
            | RuleError::MissingParameter { constraint, .. }
            | RuleError::MalformedParameter { constraint, .. } => constraint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_constraint_display() {
        let error = RuleError::UnknownConstraint {
            field: "name".to_string(),
            constraint: "lettersOnly".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "unknown constraint `lettersOnly` on field `name`"
        );
        assert_eq!(error.field(), "name");
        assert_eq!(error.constraint(), "lettersOnly");
    }

    #[test]
    fn test_malformed_parameter_display() {
        let error = RuleError::MalformedParameter {
            field: "age".to_string(),
            constraint: "min".to_string(),
            parameter: "ten".to_string(),
            reason: "expected a non-negative integer".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "invalid parameter `ten` for `min` on field `age`: expected a non-negative integer"
        );
    }

    #[test]
    fn test_on_field_replaces_field() {
        let error = RuleError::UnknownConstraint {
            field: String::new(),
            constraint: "slug".to_string(),
        }
        .on_field("nick");
        assert_eq!(error.field(), "nick");
        assert_eq!(error.constraint(), "slug");
    }
}
