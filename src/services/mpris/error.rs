use super::{PlayerAddress, PlayerCommand, PlayerProperty};

/// Errors that can occur while talking to an MPRIS player
///
/// Each variant names the stage that failed so callers and tests can tell
/// them apart; the CLI folds them into a single "player unavailable" message.
#[derive(thiserror::Error, Debug)]
pub enum MediaError {
    /// The session bus could not be reached or the name listing failed
    #[error("D-Bus session bus unreachable: {0}")]
    BusUnreachable(#[source] zbus::Error),

    /// No registered bus name starts with the MPRIS prefix plus the client name
    #[error("no MPRIS player registered for '{prefix}'")]
    NoMatchingPlayer {
        /// Client name prefix that was searched for
        prefix: String,
    },

    /// The player did not answer a property read
    #[error("failed to read {property} from {player}: {source}")]
    PropertyUnavailable {
        /// Player the read was addressed to
        player: PlayerAddress,
        /// Property that was requested
        property: PlayerProperty,
        /// Underlying D-Bus failure
        #[source]
        source: zbus::Error,
    },

    /// A property arrived with an unexpected D-Bus type
    #[error("{property} has an unexpected type: {reason}")]
    InvalidProperty {
        /// Property that failed to decode
        property: PlayerProperty,
        /// Decoding failure details
        reason: String,
    },

    /// The player reported a playback status outside Playing/Paused/Stopped
    #[error("unknown playback status '{0}'")]
    ProtocolViolation(String),

    /// A playback command could not be sent
    #[error("failed to send {command} to {player}: {source}")]
    ControlFailed {
        /// Player the command was addressed to
        player: PlayerAddress,
        /// Command that was sent
        command: PlayerCommand,
        /// Underlying D-Bus failure
        #[source]
        source: zbus::Error,
    },
}
