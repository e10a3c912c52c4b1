//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

use crate::error::{EngineError, EngineResult};

/// Builds the log filter: `RUST_LOG` when set, otherwise `log_level`.
pub fn env_filter(log_level: &str) -> EngineResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(log_level).map_err(|source| EngineError::Telemetry {
            message: format!("invalid log level/filter '{log_level}': {source}"),
        }),
    }
}

/// Installs a compact fmt subscriber as the global default.
///
/// Events are written to stderr so that stdout carries only command output.
///
/// # Errors
///
/// Returns [`EngineError::Telemetry`] if the filter does not parse or a
/// global subscriber is already installed.
pub fn init(log_level: &str) -> EngineResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level)?)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| EngineError::Telemetry {
            message: err.to_string(),
        })
}
