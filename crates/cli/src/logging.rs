//! Log subscriber setup
//!
//! Logs go to stderr so stdout only ever carries the report.

use crate::config::{CliConfig, Format};
use std::io;
use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over the configured filter when set.
pub fn init_logging(config: &CliConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;

    match config.log_format {
        Format::Json => tracing_subscriber::registry()
            .with(filter)
            .with(Layer::new().with_writer(io::stderr).json())
            .try_init()?,
        Format::Text => tracing_subscriber::registry()
            .with(filter)
            .with(Layer::new().with_writer(io::stderr).without_time())
            .try_init()?,
    }

    tracing::debug!(
        filter = %config.log_filter,
        format = %config.log_format,
        "logging initialized"
    );
    Ok(())
}
