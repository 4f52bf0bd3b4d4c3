//! Command implementations

use crate::config::Format;
use anyhow::Context;
use formrule_validation::{
    parse_rule, validate, ErrorReport, Outcome, ParsedConstraint, RuleSet, ValueSet,
};
use std::fs;
use std::path::Path;

/// Exit status when every field passed
pub const EXIT_VALID: u8 = 0;
/// Exit status when at least one field failed
pub const EXIT_INVALID: u8 = 1;

/// Load a JSON object of field names from disk
fn load_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} file {}", what, path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} file {}", what, path.display()))
}

pub fn load_rules(path: &Path) -> anyhow::Result<RuleSet> {
    load_json(path, "rules")
}

pub fn load_values(path: &Path) -> anyhow::Result<ValueSet> {
    load_json(path, "values")
}

/// Validate the values file against the rules file and print the outcome
pub fn check(rules_path: &Path, values_path: &Path, format: Format) -> anyhow::Result<u8> {
    let rules = load_rules(rules_path)?;
    let values = load_values(values_path)?;
    tracing::info!(fields = rules.len(), submitted = values.len(), "checking submission");

    let outcome = validate(&rules, &values)
        .with_context(|| format!("Invalid rules in {}", rules_path.display()))?;

    println!("{}", render_outcome(&outcome, format)?);
    Ok(if outcome.is_valid() { EXIT_VALID } else { EXIT_INVALID })
}

/// Print how a rule string is split into constraints
pub fn parse(rule: &str, format: Format) -> anyhow::Result<u8> {
    println!("{}", render_parsed(&parse_rule(rule), format)?);
    Ok(EXIT_VALID)
}

/// One constraint per line (`name` or `name: parameter`), or a JSON array
pub fn render_parsed(parsed: &[ParsedConstraint], format: Format) -> anyhow::Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(parsed)?),
        Format::Text => Ok(parsed
            .iter()
            .map(|constraint| match &constraint.parameter {
                Some(parameter) => format!("{}: {}", constraint.name, parameter),
                None => constraint.name.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn render_outcome(outcome: &Outcome, format: Format) -> anyhow::Result<String> {
    match (outcome, format) {
        (_, Format::Json) => Ok(serde_json::to_string_pretty(&outcome.to_json())?),
        (Outcome::Valid, Format::Text) => Ok("Validation passed.".to_string()),
        (Outcome::Invalid(report), Format::Text) => Ok(render_report(report)),
    }
}

fn render_report(report: &ErrorReport) -> String {
    let mut lines = vec![format!(
        "Validation failed: {} error(s) in {} field(s)",
        report.total_errors(),
        report.len()
    )];
    for (field, messages) in report.iter() {
        lines.push(format!("{}:", field));
        lines.extend(messages.iter().map(|message| format!("  - {}", message)));
    }
    lines.join("\n")
}
