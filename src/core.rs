use thiserror::Error;

use crate::{cli::CliError, config::ConfigError};

/// Errors that end the program with a failure status.
#[derive(Error, Debug)]
pub enum AppError {
    /// A command, query or shell operation failed.
    #[error(transparent)]
    Cli(#[from] CliError),

    /// Invalid runtime configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The logging subscriber could not be installed.
    #[error("Failed to initialise logging: {0}")]
    Logging(String),

    /// Standard I/O failure, including async runtime construction.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for process-level operations.
pub type Result<T> = std::result::Result<T, AppError>;
