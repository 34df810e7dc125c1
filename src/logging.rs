use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::error::{ExtractError, Result};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global tracing subscriber. Diagnostics go to stderr so that
/// stdout carries nothing but rows.
pub fn init() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .map_err(|error| ExtractError::Logging(error.to_string()))
}
