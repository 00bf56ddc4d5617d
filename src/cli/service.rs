use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::services::{
    lyrics::{LrclibProvider, LyricsProvider},
    mpris::{MediaError, MediaMetadata, MediaService},
};

use super::{
    CliError, CommandResult,
    formatting::{self, STATUS_SEPARATOR},
    types::{CommandSpec, Handler, Query},
};

/// Line printed by `--lyrics` whenever the lookup fails for any reason
pub const LYRICS_FALLBACK: &str = "lyrics not found";

/// Routes command-line flags to the player and joins their output.
///
/// Each query flag performs its own fresh reads; nothing is shared between
/// flags of the same invocation.
pub struct CliService {
    media: MediaService,
    lyrics: Arc<dyn LyricsProvider>,
}

impl CliService {
    /// Creates a CLI service on top of a media service and a lyrics source.
    pub fn new(media: MediaService, lyrics: Arc<dyn LyricsProvider>) -> Self {
        Self { media, lyrics }
    }

    /// Creates a CLI service using the public lyrics database.
    pub fn with_default_lyrics(media: MediaService) -> Self {
        Self::new(media, Arc::new(LrclibProvider::new()))
    }

    /// Runs every flag in order and joins the query output with `" - "`.
    ///
    /// Actions produce no text and empty query results are dropped, so an
    /// invocation without any output yields the empty string. Repeated
    /// flags run once per occurrence.
    ///
    /// # Errors
    ///
    /// Stops at the first failing query and returns its error; actions
    /// that already ran are not undone.
    #[instrument(skip_all, fields(client = %self.media.client(), flags = flags.len()))]
    pub async fn execute(&self, flags: &[&CommandSpec]) -> CommandResult {
        let mut output = Vec::new();

        for spec in flags {
            debug!(flag = spec.flag, "Running command");

            match spec.handler {
                Handler::Query(query) => {
                    let text = self.query(query).await?;
                    if !text.is_empty() {
                        output.push(text);
                    }
                }
                Handler::Action(command) => self.media.dispatch(command).await,
            }
        }

        Ok(output.join(STATUS_SEPARATOR))
    }

    /// Produces the text of a single query.
    ///
    /// # Errors
    ///
    /// Returns `CliError` if the player cannot be read.
    pub async fn query(&self, query: Query) -> CommandResult {
        let text = match query {
            Query::Version => env!("CARGO_PKG_VERSION").to_string(),
            Query::Status => formatting::format_status(&self.metadata().await?),
            Query::StatusShort => formatting::format_status_short(&self.metadata().await?),
            Query::StatusPosition => {
                let metadata = self.metadata().await?;
                let position = self.position().await?;
                formatting::format_status_position(&metadata, position)
            }
            Query::Song => formatting::format_song(&self.metadata().await?),
            Query::SongShort => formatting::format_song_short(&self.metadata().await?),
            Query::Artist => formatting::format_artist(&self.metadata().await?),
            Query::ArtistShort => formatting::format_artist_short(&self.metadata().await?),
            Query::Album => formatting::format_album(&self.metadata().await?),
            Query::ArtUrl => formatting::format_art_url(&self.metadata().await?),
            Query::Position => {
                let metadata = self.metadata().await?;
                let position = self.position().await?;
                formatting::format_position(position, metadata.length_micros)
            }
            Query::PlaybackStatus => {
                let state = self
                    .media
                    .playback_state()
                    .await
                    .map_err(|e| self.collapse(e))?;
                formatting::format_playback_status(state)
            }
            Query::Lyrics => self.lyrics().await,
        };

        Ok(text)
    }

    async fn lyrics(&self) -> String {
        let metadata = match self.media.metadata().await {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("Cannot look up lyrics without track metadata: {e}");
                return LYRICS_FALLBACK.to_string();
            }
        };

        match self.lyrics.lookup(&metadata.artist, &metadata.title).await {
            Ok(lyrics) => lyrics,
            Err(e) => {
                warn!("Lyrics lookup failed: {e}");
                LYRICS_FALLBACK.to_string()
            }
        }
    }

    async fn metadata(&self) -> Result<MediaMetadata, CliError> {
        self.media.metadata().await.map_err(|e| self.collapse(e))
    }

    async fn position(&self) -> Result<i64, CliError> {
        self.media.position().await.map_err(|e| self.collapse(e))
    }

    fn collapse(&self, error: MediaError) -> CliError {
        debug!("Player read failed: {error}");
        CliError::from_media(self.media.client(), error)
    }
}
