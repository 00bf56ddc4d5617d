use std::{env, fmt, str::FromStr};

use thiserror::Error;

/// Player name prefix used when `--client` is not given.
pub const DEFAULT_CLIENT: &str = "spotify";

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "SPOTIFYCLI_LOG_FORMAT";

/// Errors raised while building the runtime configuration.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// The client name prefix was empty.
    #[error("client name must not be empty")]
    EmptyClient,

    /// The client name prefix looked like an option.
    #[error("client name '{0}' must not start with '-'")]
    DashedClient(String),

    /// The log format variable held an unknown value.
    #[error("unknown log format '{0}', expected one of: compact, pretty, json")]
    UnknownLogFormat(String),
}

/// Name prefix selecting which MPRIS player to talk to.
///
/// A player registered as `org.mpris.MediaPlayer2.spotify` is matched by the
/// identity `spotify`. The identity is fixed for the lifetime of the process
/// and handed to every component that needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity(String);

impl ClientIdentity {
    /// Create a client identity from a player name prefix.
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyClient` if `name` is empty and
    /// `ConfigError::DashedClient` if it starts with `-`, since a child
    /// process would read such a name as an option.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigError::EmptyClient);
        }
        if name.starts_with('-') {
            return Err(ConfigError::DashedClient(name));
        }

        Ok(Self(name))
    }

    /// The raw name prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ClientIdentity {
    fn default() -> Self {
        Self(DEFAULT_CLIENT.to_string())
    }
}

impl fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Runtime configuration for one invocation.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Player the invocation is addressed to.
    pub client: ClientIdentity,
}

impl Config {
    /// Configuration bound to the given client.
    pub fn new(client: ClientIdentity) -> Self {
        Self { client }
    }
}

/// Output format of the diagnostic log stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Single-line human readable records.
    #[default]
    Compact,

    /// Multi-line human readable records.
    Pretty,

    /// Newline-delimited JSON records.
    Json,
}

impl LogFormat {
    /// Read the format from `SPOTIFYCLI_LOG_FORMAT`, defaulting to compact.
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownLogFormat` if the variable is set to an
    /// unrecognised value.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(value) => value.parse(),
            Err(_) => Ok(Self::default()),
        }
    }
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::UnknownLogFormat(other.to_string())),
        }
    }
}
