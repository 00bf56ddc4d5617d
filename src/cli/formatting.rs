//! Formatting utilities for CLI output.
//!
//! Turns already fetched player values into the textual views the flags
//! print, and styles error messages for the terminal. Everything here is
//! pure; no function touches the bus.

use crate::services::mpris::{MediaMetadata, PlaybackState};

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
}

/// Marker appended to truncated text
pub const ELLIPSIS: char = '…';

/// Separator placed between artist and title
pub const STATUS_SEPARATOR: &str = " - ";

const STATUS_ARTIST_LIMIT: usize = 16;
const STATUS_TITLE_LIMIT: usize = 12;
const SONG_LIMIT: usize = 12;
const ARTIST_LIMIT: usize = 15;

const MICROS_PER_SECOND: u64 = 1_000_000;

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Shortens `text` to `limit` characters, marking the cut with an ellipsis.
///
/// Text that already fits is returned unchanged. Length is counted in
/// Unicode scalar values, never bytes.
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => {
            let mut short = text[..cut].to_string();
            short.push(ELLIPSIS);
            short
        }
        None => text.to_string(),
    }
}

/// Splits a microsecond duration into zero-padded hours, minutes and seconds.
///
/// Whole days fold into the hour field and the sub-second remainder is
/// dropped, never rounded up.
pub fn convert_duration(micros: u64) -> (String, String, String) {
    let total_seconds = micros / MICROS_PER_SECOND;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    (
        format!("{hours:02}"),
        format!("{minutes:02}"),
        format!("{seconds:02}"),
    )
}

/// `(pos/len)` with `MM:SS` on both sides, or `HH:MM:SS` on both sides when
/// the track is at least an hour long.
///
/// Only the length decides whether hours are shown. A negative position
/// counts as zero.
pub fn format_position(position_micros: i64, length_micros: u64) -> String {
    let position = u64::try_from(position_micros).unwrap_or(0);
    let (p_hours, p_minutes, p_seconds) = convert_duration(position);
    let (l_hours, l_minutes, l_seconds) = convert_duration(length_micros);

    if l_hours != "00" {
        format!("({p_hours}:{p_minutes}:{p_seconds}/{l_hours}:{l_minutes}:{l_seconds})")
    } else {
        format!("({p_minutes}:{p_seconds}/{l_minutes}:{l_seconds})")
    }
}

/// `artist - title`
pub fn format_status(metadata: &MediaMetadata) -> String {
    format!("{}{STATUS_SEPARATOR}{}", metadata.artist, metadata.title)
}

/// `artist - title` with the artist cut at 16 and the title at 12 characters
pub fn format_status_short(metadata: &MediaMetadata) -> String {
    format!(
        "{}{STATUS_SEPARATOR}{}",
        truncate(&metadata.artist, STATUS_ARTIST_LIMIT),
        truncate(&metadata.title, STATUS_TITLE_LIMIT)
    )
}

/// `artist - title (pos/len)`
pub fn format_status_position(metadata: &MediaMetadata, position_micros: i64) -> String {
    format!(
        "{} {}",
        format_status(metadata),
        format_position(position_micros, metadata.length_micros)
    )
}

/// Track title
pub fn format_song(metadata: &MediaMetadata) -> String {
    metadata.title.clone()
}

/// Track title cut at 12 characters
pub fn format_song_short(metadata: &MediaMetadata) -> String {
    truncate(&metadata.title, SONG_LIMIT)
}

/// Track artist
pub fn format_artist(metadata: &MediaMetadata) -> String {
    metadata.artist.clone()
}

/// Track artist cut at 15 characters
pub fn format_artist_short(metadata: &MediaMetadata) -> String {
    truncate(&metadata.artist, ARTIST_LIMIT)
}

/// Album name
pub fn format_album(metadata: &MediaMetadata) -> String {
    metadata.album.clone()
}

/// Album artwork URL
pub fn format_art_url(metadata: &MediaMetadata) -> String {
    metadata.art_url.clone()
}

/// Nerd Font media glyph for the playback state
pub fn format_playback_status(state: PlaybackState) -> String {
    let glyph = match state {
        PlaybackState::Playing => '\u{f040a}',
        PlaybackState::Paused => '\u{f03e4}',
        PlaybackState::Stopped => '\u{f04db}',
    };

    glyph.to_string()
}
