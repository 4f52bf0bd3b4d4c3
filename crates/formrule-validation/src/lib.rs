//! # formrule-validation
//!
//! Declarative field validation driven by pipe-delimited rule strings such as
//! `"required|min:2|max:250|alpha"`. A [`RuleSet`] maps field names to rule
//! strings, a [`ValueSet`] holds the submitted values, and a [`Validator`]
//! evaluates one against the other and reports violations grouped by field.
//!
//! Available constraints: `required`, `min:N`, `max:N`, `alpha`, `numeric`,
//! `alphaNumeric`, `alphaWithout:SET`, `confirmed` and `email`. `min`, `max`,
//! `confirmed` and `email` ignore empty values so they compose with
//! `required` on optional fields.

pub mod constraint;
pub mod error;
pub mod report;
pub mod rules;
pub mod traits;
pub mod validator;
pub mod validators;
pub mod values;

// Re-exports for easy access
pub use constraint::{Constraint, ConstraintKind};
pub use error::{RuleError, RuleResult};
pub use report::{ErrorReport, Outcome, Violation, ViolationLog};
pub use rules::{parse_rule, ParsedConstraint, RuleSet};
pub use traits::{FieldContext, ValidationRule};
pub use validator::{validate, Validator};
pub use values::ValueSet;
