use std::collections::HashMap;

use zbus::zvariant::{OwnedValue, Value};

use super::{MediaError, PlayerProperty};

/// Metadata information for the track a player currently holds
///
/// Missing or oddly typed fields decode to empty strings and a zero length
/// rather than failing the whole read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaMetadata {
    /// Primary artist (first entry of `xesam:artist`)
    pub artist: String,

    /// Track title
    pub title: String,

    /// Album name
    pub album: String,

    /// URL to album artwork image
    pub art_url: String,

    /// Track duration in microseconds
    pub length_micros: u64,
}

impl From<&HashMap<String, OwnedValue>> for MediaMetadata {
    fn from(metadata: &HashMap<String, OwnedValue>) -> Self {
        let text = |key: &str| {
            metadata
                .get(key)
                .and_then(|value| as_string(value))
                .unwrap_or_default()
        };

        Self {
            artist: metadata
                .get("xesam:artist")
                .and_then(|value| first_string(value))
                .unwrap_or_default(),
            title: text("xesam:title"),
            album: text("xesam:album"),
            art_url: text("mpris:artUrl"),
            length_micros: metadata
                .get("mpris:length")
                .and_then(|value| as_micros(value))
                .unwrap_or_default(),
        }
    }
}

impl TryFrom<OwnedValue> for MediaMetadata {
    type Error = MediaError;

    fn try_from(value: OwnedValue) -> Result<Self, Self::Error> {
        let map = HashMap::<String, OwnedValue>::try_from(value).map_err(|e| {
            MediaError::InvalidProperty {
                property: PlayerProperty::Metadata,
                reason: e.to_string(),
            }
        })?;

        Ok(Self::from(&map))
    }
}

fn as_string(value: &Value<'_>) -> Option<String> {
    match value {
        Value::Str(s) => Some(s.as_str().to_string()),
        Value::ObjectPath(path) => Some(path.as_str().to_string()),
        Value::Value(inner) => as_string(inner),
        _ => None,
    }
}

// Players disagree on whether xesam:artist is a list or a bare string.
fn first_string(value: &Value<'_>) -> Option<String> {
    match value {
        Value::Array(array) => array.iter().find_map(as_string),
        Value::Value(inner) => first_string(inner),
        other => as_string(other),
    }
}

fn as_micros(value: &Value<'_>) -> Option<u64> {
    match value {
        Value::I64(v) => Some((*v).max(0) as u64),
        Value::U64(v) => Some(*v),
        Value::I32(v) => Some((*v).max(0) as u64),
        Value::U32(v) => Some(u64::from(*v)),
        Value::Value(inner) => as_micros(inner),
        _ => None,
    }
}
