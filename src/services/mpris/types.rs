use std::fmt;

use super::MediaError;

/// Well-known bus name prefix shared by every MPRIS player
pub const MPRIS_PREFIX: &str = "org.mpris.MediaPlayer2.";

/// Object path every MPRIS player exports its interfaces on
pub const MPRIS_PATH: &str = "/org/mpris/MediaPlayer2";

/// Interface carrying playback properties and control methods
pub const MPRIS_PLAYER_INTERFACE: &str = "org.mpris.MediaPlayer2.Player";

/// Concrete bus name of a resolved media player
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerAddress(String);

impl PlayerAddress {
    /// Create a PlayerAddress from a D-Bus bus name
    pub fn from_bus_name(bus_name: &str) -> Self {
        Self(bus_name.to_string())
    }

    /// Get the D-Bus bus name
    pub fn bus_name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player properties read through `org.freedesktop.DBus.Properties.Get`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerProperty {
    /// Track metadata dictionary
    Metadata,

    /// Playback position in microseconds
    Position,

    /// Playing, Paused or Stopped
    PlaybackStatus,
}

impl PlayerProperty {
    /// Property name as exported on the bus
    pub fn name(self) -> &'static str {
        match self {
            Self::Metadata => "Metadata",
            Self::Position => "Position",
            Self::PlaybackStatus => "PlaybackStatus",
        }
    }
}

impl fmt::Display for PlayerProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Playback commands understood by the MPRIS player interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Start playback
    Play,

    /// Pause playback
    Pause,

    /// Toggle play/pause state
    PlayPause,

    /// Skip to next track
    Next,

    /// Skip to previous track
    Previous,
}

impl PlayerCommand {
    /// Method name on `org.mpris.MediaPlayer2.Player`
    pub fn method_name(self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Pause => "Pause",
            Self::PlayPause => "PlayPause",
            Self::Next => "Next",
            Self::Previous => "Previous",
        }
    }
}

impl fmt::Display for PlayerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}

/// Current playback state of a media player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Player is currently playing
    Playing,

    /// Player is paused
    Paused,

    /// Player is stopped
    Stopped,
}

impl TryFrom<&str> for PlaybackState {
    type Error = MediaError;

    fn try_from(status: &str) -> Result<Self, Self::Error> {
        match status {
            "Playing" => Ok(Self::Playing),
            "Paused" => Ok(Self::Paused),
            "Stopped" => Ok(Self::Stopped),
            other => Err(MediaError::ProtocolViolation(other.to_string())),
        }
    }
}
