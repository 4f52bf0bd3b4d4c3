//! Environment configuration for the command line

use clap::ValueEnum;
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const LOG_FILTER_VAR: &str = "FORMRULE_LOG";
pub const LOG_FORMAT_VAR: &str = "FORMRULE_LOG_FORMAT";
pub const OUTPUT_VAR: &str = "FORMRULE_OUTPUT";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {field}: '{value}', expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },
}

/// Text or JSON rendering, used for both the report and the log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl ConfigError {
    /// Report the error against a specific setting
    pub fn for_field(self, field: impl Into<String>) -> Self {
        match self {
            ConfigError::InvalidValue {
                value, expected, ..
            } => ConfigError::InvalidValue {
                field: field.into(),
                value,
                expected,
            },
        }
    }
}

impl FromStr for Format {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            _ => Err(ConfigError::InvalidValue {
                field: "format".to_string(),
                value: s.to_string(),
                expected: "text or json".to_string(),
            }),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Text => write!(f, "text"),
            Format::Json => write!(f, "json"),
        }
    }
}

/// Settings read from `FORMRULE_*` variables; flags override them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// `EnvFilter` directives, e.g. `warn` or `formrule_validation=debug`
    pub log_filter: String,
    pub log_format: Format,
    pub output: Format,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            log_format: Format::Text,
            output: Format::Text,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(filter) = lookup(LOG_FILTER_VAR).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }
        if let Some(format) = lookup(LOG_FORMAT_VAR) {
            config.log_format = format
                .parse()
                .map_err(|e: ConfigError| e.for_field("log format"))?;
        }
        if let Some(output) = lookup(OUTPUT_VAR) {
            config.output = output
                .parse()
                .map_err(|e: ConfigError| e.for_field("output"))?;
        }

        Ok(config)
    }
}
