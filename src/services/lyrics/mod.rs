//! Song lyrics lookup.
//!
//! Lyrics come from a remote text database and are strictly best effort:
//! the CLI replaces every [`LyricsError`] with a fixed fallback line.

mod error;
mod lrclib;

pub use error::LyricsError;
pub use lrclib::LrclibProvider;

use async_trait::async_trait;

/// Source of plain-text song lyrics
#[async_trait]
pub trait LyricsProvider: Send + Sync {
    /// Look up the lyrics of `title` by `artist`
    ///
    /// # Errors
    /// Returns `LyricsError` if the lookup fails or no lyrics are known
    async fn lookup(&self, artist: &str, title: &str) -> Result<String, LyricsError>;
}
