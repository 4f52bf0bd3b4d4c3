//! The validation engine

use crate::constraint::Constraint;
use crate::error::RuleResult;
use crate::report::{Outcome, Violation, ViolationLog};
use crate::rules::{parse_rule, RuleSet};
use crate::traits::{FieldContext, ValidationRule};
use crate::values::{is_empty_value, ValueSet};

/// One validation run over a rule set and a value set
///
/// Evaluation happens in [`Validator::new`]; the violations found are kept
/// in a log owned by this instance and grouped by [`Validator::check`].
///
/// ```
/// use formrule_validation::{RuleSet, Validator, ValueSet};
///
/// let rules = RuleSet::new().field("name", "required|min:2");
/// let values = ValueSet::new().set("name", "A");
///
/// let outcome = Validator::new(&rules, &values)?.check();
/// let report = outcome.report().unwrap();
/// assert_eq!(
///     report.get_field_errors("name").unwrap(),
///     &["The field name can be minimum 2 characters.".to_string()]
/// );
/// # Ok::<(), formrule_validation::RuleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    log: ViolationLog,
}

impl Validator {
    /// Evaluate every field of `rules` against `values`
    ///
    /// Fields only present in `values` are ignored. A rule string that
    /// cannot be resolved aborts the run with the first [`RuleError`].
    ///
    /// [`RuleError`]: crate::error::RuleError
    pub fn new(rules: &RuleSet, values: &ValueSet) -> RuleResult<Self> {
        let mut log = ViolationLog::new();
        for (field, rule) in rules.iter() {
            evaluate_field(field, rule, values, &mut log)?;
        }
        Ok(Self { log })
    }

    /// Group the recorded violations by field
    pub fn check(&self) -> Outcome {
        self.log.finalize()
    }

    /// Every violation in evaluation order
    pub fn violations(&self) -> &[Violation] {
        self.log.entries()
    }

    pub fn is_valid(&self) -> bool {
        self.log.is_empty()
    }
}

/// Run a complete validation and return its outcome
pub fn validate(rules: &RuleSet, values: &ValueSet) -> RuleResult<Outcome> {
    Ok(Validator::new(rules, values)?.check())
}

fn evaluate_field(
    field: &str,
    rule: &str,
    values: &ValueSet,
    log: &mut ViolationLog,
) -> RuleResult<()> {
    let parsed = parse_rule(rule);
    let ctx = FieldContext::new(field, values);
    tracing::debug!(field, constraints = parsed.len(), "evaluating field");

    for token in &parsed {
        let constraint = Constraint::resolve(field, token)?;
        if constraint.skips_empty() && is_empty_value(ctx.value) {
            continue;
        }
        if let Some(message) = constraint.check(&ctx) {
            tracing::trace!(field, constraint = constraint.rule_name(), %message, "constraint violated");
            log.record(field, constraint.rule_name(), message);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuleError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_constraints_run_without_short_circuit() {
        let rules = RuleSet::new().field("code", "alpha|numeric|alphaNumeric");
        let values = ValueSet::new().set("code", "!!");

        let validator = Validator::new(&rules, &values).unwrap();
        let codes: Vec<_> = validator.violations().iter().map(|v| v.code.as_str()).collect();
        assert_eq!(codes, vec!["alpha", "numeric", "alphaNumeric"]);
    }

    #[test]
    fn test_required_alone_fires_on_empty_value() {
        let rules = RuleSet::new().field("email", "required|min:5|max:40|email|confirmed");
        let values = ValueSet::new().set("email", "");

        let report = Validator::new(&rules, &values).unwrap().check().into_result().unwrap_err();
        assert_eq!(
            report.get_field_errors("email").unwrap(),
            &["The field email is required!".to_string()]
        );
    }

    #[test]
    fn test_fields_missing_from_rules_are_ignored() {
        let rules = RuleSet::new().field("name", "required");
        let values = ValueSet::new().set("name", "Ann").set("extra", "");

        assert!(Validator::new(&rules, &values).unwrap().is_valid());
    }

    #[test]
    fn test_unknown_constraint_aborts_run() {
        let rules = RuleSet::new()
            .field("name", "required")
            .field("nick", "required|slug");
        let values = ValueSet::new();

        let err = Validator::new(&rules, &values).unwrap_err();
        assert_eq!(
            err,
            RuleError::UnknownConstraint {
                field: "nick".to_string(),
                constraint: "slug".to_string(),
            }
        );
    }

    #[test]
    fn test_check_is_repeatable() {
        let rules = RuleSet::new().field("name", "required");
        let values = ValueSet::new().set("name", "");

        let validator = Validator::new(&rules, &values).unwrap();
        assert_eq!(validator.check(), validator.check());
    }

    #[test]
    fn test_validate_shortcut() {
        let rules = RuleSet::new().field("age", "numeric");
        assert!(validate(&rules, &ValueSet::new().set("age", "42")).unwrap().is_valid());
        assert!(!validate(&rules, &ValueSet::new().set("age", "x")).unwrap().is_valid());
    }
}
