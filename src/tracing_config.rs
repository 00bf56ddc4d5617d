use std::io;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::LogFormat,
    core::{AppError, Result},
};

/// Initialize tracing for command-line use
///
/// Standard output carries the command result line, so every log record is
/// written to stderr. Uses the RUST_LOG environment variable if set, otherwise
/// only warnings and errors are shown. The record layout follows
/// SPOTIFYCLI_LOG_FORMAT (compact, pretty or json).
///
/// # Errors
/// Returns error if the log format is unknown or a global subscriber is
/// already installed
pub fn init_cli_mode() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let format = LogFormat::from_env()?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(io::stderr),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(io::stderr),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(io::stderr),
            )
            .try_init(),
    };

    installed.map_err(|e| AppError::Logging(e.to_string()))
}
