use thiserror::Error;

use crate::{
    config::ClientIdentity,
    services::mpris::{MediaError, PlayerCommand},
};

/// Errors that can occur during CLI command execution.
///
/// Bus failures arrive here as precise [`MediaError`] values and are folded
/// into the few messages a user needs to see.
#[derive(Error, Debug)]
pub enum CliError {
    /// No bus name matched the configured client.
    #[error("No mpris clients found for client {client}")]
    NoPlayer {
        /// Client name prefix that was searched for
        client: String,
    },

    /// The player was found (or the bus reached) but could not be queried.
    #[error("{client} is off")]
    PlayerUnavailable {
        /// Client name prefix of the player
        client: String,
        /// What actually failed
        #[source]
        source: MediaError,
    },

    /// The player reported a playback status outside the MPRIS contract.
    #[error("{client} reported an unknown playback status '{status}'")]
    ProtocolViolation {
        /// Client name prefix of the player
        client: String,
        /// Status string that was received
        status: String,
    },

    /// A shell command process could not be started.
    #[error("failed to start command process: {0}")]
    Spawn(#[source] std::io::Error),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CliError {
    /// Fold a bus failure into the user-facing error for `client`.
    pub fn from_media(client: &ClientIdentity, error: MediaError) -> Self {
        let client = client.to_string();

        match error {
            MediaError::NoMatchingPlayer { .. } => CliError::NoPlayer { client },
            MediaError::ProtocolViolation(status) => CliError::ProtocolViolation { client, status },
            source => CliError::PlayerUnavailable { client, source },
        }
    }
}

/// Type alias for command execution results.
///
/// Query commands produce their output line; the router joins them.
pub type CommandResult = Result<String, CliError>;

/// Read-only views a query flag can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Program version.
    Version,
    /// `artist - title`.
    Status,
    /// `artist - title (pos/len)`.
    StatusPosition,
    /// Status with truncated artist and title.
    StatusShort,
    /// Track title.
    Song,
    /// Truncated track title.
    SongShort,
    /// Track artist.
    Artist,
    /// Truncated track artist.
    ArtistShort,
    /// Album name.
    Album,
    /// `(pos/len)`.
    Position,
    /// Album artwork URL.
    ArtUrl,
    /// Playback state glyph.
    PlaybackStatus,
    /// Song lyrics.
    Lyrics,
}

/// What running a flag does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Produce a line of output.
    Query(Query),
    /// Send a playback command; produces no output.
    Action(PlayerCommand),
}

/// Static description of one command-line flag.
///
/// The command table is the single source of truth for routing, argument
/// parsing and help text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Flag name without the leading `--`.
    pub flag: &'static str,

    /// Help text shown by `--help`.
    pub help: &'static str,

    /// Behaviour bound to the flag.
    pub handler: Handler,
}
