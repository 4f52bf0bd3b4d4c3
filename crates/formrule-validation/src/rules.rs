//! Rule sets and the rule-string compiler
//!
//! A rule string looks like `"required|min:2|max:250|alpha"`. Compiling it
//! only splits and trims; constraint names are checked when the rule is
//! evaluated.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Constraints whose token carries a `name:parameter` argument
pub const PARAMETERIZED_CONSTRAINTS: [&str; 3] = ["min", "max", "alphaWithout"];

/// One token of a rule string after splitting
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedConstraint {
    /// Constraint name as written (`required`, `min`, ...)
    pub name: String,
    /// Raw argument after the first `:` for parameterized constraints
    pub parameter: Option<String>,
}

impl ParsedConstraint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameter: None,
        }
    }

    pub fn with_parameter(name: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameter: Some(parameter.into()),
        }
    }

    /// Parse a single trimmed, non-empty token
    ///
    /// Only the names in [`PARAMETERIZED_CONSTRAINTS`] followed directly by
    /// `:` are split. Anything else is kept whole as the name, so `minimum`
    /// or `alpha:x` stay distinct from `min` and `alpha`.
    pub fn from_token(token: &str) -> Self {
        for name in PARAMETERIZED_CONSTRAINTS {
            if let Some(parameter) = token
                .strip_prefix(name)
                .and_then(|rest| rest.strip_prefix(':'))
            {
                return Self::with_parameter(name, parameter);
            }
        }
        Self::new(token)
    }
}

impl fmt::Display for ParsedConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parameter {
            Some(parameter) => write!(f, "{}:{}", self.name, parameter),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Split a rule string into its constraints, in declaration order
///
/// Stray separators and whitespace are tolerated: `" required || min:2 "`
/// yields `required` and `min:2`.
pub fn parse_rule(rule: &str) -> Vec<ParsedConstraint> {
    rule.split('|')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ParsedConstraint::from_token)
        .collect()
}

/// Field name to rule string, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: IndexMap<String, String>,
}

impl RuleSet {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the rule string for a field
    pub fn field(mut self, field: impl Into<String>, rule: impl Into<String>) -> Self {
        self.insert(field, rule);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, rule: impl Into<String>) {
        self.rules.insert(field.into(), rule.into());
    }

    /// Raw rule string for a field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.rules.get(field).map(String::as_str)
    }

    /// Compiled constraints for a field
    pub fn constraints(&self, field: &str) -> Option<Vec<ParsedConstraint>> {
        self.get(field).map(parse_rule)
    }

    /// Fields with rules, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RuleSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            rules: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
