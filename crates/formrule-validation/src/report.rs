//! Violation log, grouped error report and validation outcome

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One failed constraint on one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The field that failed validation
    pub field: String,
    /// Name of the constraint that fired
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl Violation {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Flat, ordered record of every violation found in one run
///
/// Grouping by field happens only in [`ViolationLog::finalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViolationLog {
    entries: Vec<Violation>,
}

impl ViolationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a violation
    pub fn record(
        &mut self,
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.entries.push(Violation::new(field, code, message));
    }

    pub fn entries(&self) -> &[Violation] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Group the log by field and resolve the outcome
    ///
    /// Does not consume the log; calling it again yields the same outcome.
    pub fn finalize(&self) -> Outcome {
        if self.entries.is_empty() {
            tracing::debug!("validation passed");
            return Outcome::Valid;
        }

        let mut report = ErrorReport::new();
        for violation in &self.entries {
            report.add_error(violation.field.as_str(), violation.message.as_str());
        }

        tracing::debug!(
            fields = report.len(),
            violations = report.total_errors(),
            "validation failed"
        );
        Outcome::Invalid(report)
    }
}

/// Violation messages grouped by field
///
/// Only fields with at least one message are present. Fields keep the order
/// in which their first violation was recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorReport {
    errors: IndexMap<String, Vec<String>>,
}

impl ErrorReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to a field
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of fields with errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Get total number of messages across all fields
    pub fn total_errors(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Get messages for a specific field
    pub fn get_field_errors(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// Check if a specific field has errors
    pub fn has_field_errors(&self, field: &str) -> bool {
        self.errors.get(field).is_some_and(|messages| !messages.is_empty())
    }

    /// Fields with errors, in report order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// JSON body for callers rendering the report
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": false,
            "errors": self.errors,
        })
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "No validation errors")
        } else {
            write!(f, "Validation failed for {} field(s):", self.errors.len())?;
            for (field, messages) in &self.errors {
                for message in messages {
                    write!(f, "\n  {}: {}", field, message)?;
                }
            }
            Ok(())
        }
    }
}

impl std::error::Error for ErrorReport {}

/// Result of one validation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No field violated any constraint
    Valid,
    /// At least one violation, grouped by field
    Invalid(ErrorReport),
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }

    /// The report, if validation failed
    pub fn report(&self) -> Option<&ErrorReport> {
        match self {
            Outcome::Valid => None,
            Outcome::Invalid(report) => Some(report),
        }
    }

    pub fn into_result(self) -> Result<(), ErrorReport> {
        match self {
            Outcome::Valid => Ok(()),
            Outcome::Invalid(report) => Err(report),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Outcome::Valid => serde_json::json!({ "valid": true }),
            Outcome::Invalid(report) => report.to_json(),
        }
    }
}

impl From<ErrorReport> for Outcome {
    fn from(report: ErrorReport) -> Self {
        if report.is_empty() {
            Outcome::Valid
        } else {
            Outcome::Invalid(report)
        }
    }
}
