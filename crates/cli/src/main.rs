mod commands;
mod config;
mod logging;

use clap::{Parser, Subcommand};
use config::{CliConfig, Format};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status for unreadable input or unusable rules
const EXIT_ERROR: u8 = 2;

#[derive(Parser)]
#[command(name = "formrule")]
#[command(about = "Validate form submissions against pipe-delimited field rules")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a values file against a rules file
    Check {
        /// JSON object mapping field names to rule strings
        #[arg(long)]
        rules: PathBuf,

        /// JSON object mapping field names to submitted values
        #[arg(long)]
        values: PathBuf,

        /// Report format (defaults to FORMRULE_OUTPUT, then text)
        #[arg(long, value_enum)]
        format: Option<Format>,
    },

    /// Show how a rule string is split into constraints
    Parse {
        /// Rule string, e.g. "required|min:2|alpha"
        rule: String,

        #[arg(long, value_enum)]
        format: Option<Format>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run() -> anyhow::Result<u8> {
    let cli = Cli::parse();
    let config = CliConfig::from_env()?;
    logging::init_logging(&config)?;

    match cli.command {
        Commands::Check {
            rules,
            values,
            format,
        } => commands::check(&rules, &values, format.unwrap_or(config.output)),
        Commands::Parse { rule, format } => {
            commands::parse(&rule, format.unwrap_or(config.output))
        }
    }
}
