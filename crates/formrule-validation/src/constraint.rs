//! Resolution of parsed tokens into concrete checkers

use crate::error::{RuleError, RuleResult};
use crate::rules::ParsedConstraint;
use crate::traits::{FieldContext, ValidationRule};
use crate::validators::{
    CharacterClass, ConfirmedValidator, EmailValidator, ExcludedCharsValidator, LengthValidator,
    PatternValidator, RequiredValidator,
};
use std::fmt;
use std::str::FromStr;

/// Every constraint name a rule string may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    Required,
    Min,
    Max,
    Alpha,
    Numeric,
    AlphaNumeric,
    AlphaWithout,
    Confirmed,
    Email,
}

impl ConstraintKind {
    pub const ALL: [ConstraintKind; 9] = [
        ConstraintKind::Required,
        ConstraintKind::Min,
        ConstraintKind::Max,
        ConstraintKind::Alpha,
        ConstraintKind::Numeric,
        ConstraintKind::AlphaNumeric,
        ConstraintKind::AlphaWithout,
        ConstraintKind::Confirmed,
        ConstraintKind::Email,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ConstraintKind::Required => "required",
            ConstraintKind::Min => "min",
            ConstraintKind::Max => "max",
            ConstraintKind::Alpha => "alpha",
            ConstraintKind::Numeric => "numeric",
            ConstraintKind::AlphaNumeric => "alphaNumeric",
            ConstraintKind::AlphaWithout => "alphaWithout",
            ConstraintKind::Confirmed => "confirmed",
            ConstraintKind::Email => "email",
        }
    }

    /// Whether the constraint needs a `:parameter`
    pub fn takes_parameter(self) -> bool {
        matches!(
            self,
            ConstraintKind::Min | ConstraintKind::Max | ConstraintKind::AlphaWithout
        )
    }
}

impl FromStr for ConstraintKind {
    type Err = RuleError;

    /// Look a name up; the error carries no field until [`RuleError::on_field`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConstraintKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| RuleError::UnknownConstraint {
                field: String::new(),
                constraint: s.to_string(),
            })
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A constraint ready to run, with its parameter already interpreted
#[derive(Debug, Clone)]
pub enum Constraint {
    Required(RequiredValidator),
    Length(LengthValidator),
    Pattern(PatternValidator),
    ExcludedChars(ExcludedCharsValidator),
    Confirmed(ConfirmedValidator),
    Email(EmailValidator),
}

impl Constraint {
    /// Resolve one parsed token of `field`'s rule string
    ///
    /// Fails on unknown names, on a missing parameter and on parameters that
    /// cannot be interpreted. Parameters given to constraints that take none
    /// never reach here: the compiler only splits `min`, `max` and
    /// `alphaWithout`.
    pub fn resolve(field: &str, parsed: &ParsedConstraint) -> RuleResult<Self> {
        // only `min`, `max` and `alphaWithout` are ever split, so an unknown
        // name is always the whole token
        let kind = parsed
            .name
            .parse::<ConstraintKind>()
            .map_err(|e| e.on_field(field))?;

        let parameter = match (&parsed.parameter, kind.takes_parameter()) {
            (Some(parameter), true) => Some(parameter.as_str()),
            (None, true) => {
                return Err(RuleError::MissingParameter {
                    field: field.to_string(),
                    constraint: kind.name().to_string(),
                })
            }
            (_, false) => None,
        };

        let constraint = match kind {
            ConstraintKind::Required => Constraint::Required(RequiredValidator),
            ConstraintKind::Min => {
                Constraint::Length(LengthValidator::min(parse_limit(field, kind, parameter)?))
            }
            ConstraintKind::Max => {
                Constraint::Length(LengthValidator::max(parse_limit(field, kind, parameter)?))
            }
            ConstraintKind::Alpha => {
                Constraint::Pattern(PatternValidator::new(CharacterClass::Alpha))
            }
            ConstraintKind::Numeric => {
                Constraint::Pattern(PatternValidator::new(CharacterClass::Numeric))
            }
            ConstraintKind::AlphaNumeric => {
                Constraint::Pattern(PatternValidator::new(CharacterClass::AlphaNumeric))
            }
            ConstraintKind::AlphaWithout => Constraint::ExcludedChars(
                ExcludedCharsValidator::new(field, parameter.unwrap_or_default())?,
            ),
            ConstraintKind::Confirmed => Constraint::Confirmed(ConfirmedValidator),
            ConstraintKind::Email => Constraint::Email(EmailValidator),
        };

        Ok(constraint)
    }

    fn rule(&self) -> &dyn ValidationRule {
        match self {
            Constraint::Required(rule) => rule,
            Constraint::Length(rule) => rule,
            Constraint::Pattern(rule) => rule,
            Constraint::ExcludedChars(rule) => rule,
            Constraint::Confirmed(rule) => rule,
            Constraint::Email(rule) => rule,
        }
    }
}

impl ValidationRule for Constraint {
    fn check(&self, ctx: &FieldContext<'_>) -> Option<String> {
        self.rule().check(ctx)
    }

    fn rule_name(&self) -> &'static str {
        self.rule().rule_name()
    }

    fn skips_empty(&self) -> bool {
        self.rule().skips_empty()
    }
}

/// Read a `min`/`max` limit, tolerating surrounding whitespace
fn parse_limit(field: &str, kind: ConstraintKind, parameter: Option<&str>) -> RuleResult<usize> {
    let raw = parameter.unwrap_or_default();
    raw.trim()
        .parse::<usize>()
        .map_err(|_| RuleError::MalformedParameter {
            field: field.to_string(),
            constraint: kind.name().to_string(),
            parameter: raw.to_string(),
            reason: "expected a non-negative integer".to_string(),
        })
}
