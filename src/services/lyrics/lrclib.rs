use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::{LyricsError, LyricsProvider};

const LRCLIB_ENDPOINT: &str = "https://lrclib.net/api/get";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LrclibTrack {
    #[serde(default)]
    plain_lyrics: Option<String>,
}

/// [`LyricsProvider`] backed by the public LRCLIB database
pub struct LrclibProvider {
    agent: ureq::Agent,
    endpoint: String,
}

impl LrclibProvider {
    /// Provider querying the public LRCLIB endpoint
    pub fn new() -> Self {
        Self::with_endpoint(LRCLIB_ENDPOINT)
    }

    /// Provider querying a different LRCLIB-compatible endpoint
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("spotifycli/", env!("CARGO_PKG_VERSION")))
            .build();

        Self {
            agent,
            endpoint: endpoint.into(),
        }
    }

    fn fetch(
        agent: &ureq::Agent,
        endpoint: &str,
        artist: &str,
        title: &str,
    ) -> Result<String, LyricsError> {
        let response = agent
            .get(endpoint)
            .query("artist_name", artist)
            .query("track_name", title)
            .call()
            .map_err(Box::new)?;

        let track: LrclibTrack = serde_json::from_reader(response.into_reader())?;

        track
            .plain_lyrics
            .filter(|lyrics| !lyrics.trim().is_empty())
            .ok_or_else(|| LyricsError::NotFound {
                artist: artist.to_string(),
                title: title.to_string(),
            })
    }
}

impl Default for LrclibProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LyricsProvider for LrclibProvider {
    #[instrument(skip(self))]
    async fn lookup(&self, artist: &str, title: &str) -> Result<String, LyricsError> {
        let agent = self.agent.clone();
        let endpoint = self.endpoint.clone();
        let artist = artist.to_string();
        let title = title.to_string();

        // ureq blocks, keep it off the runtime thread
        let lyrics = tokio::task::spawn_blocking(move || {
            Self::fetch(&agent, &endpoint, &artist, &title)
        })
        .await??;

        debug!(bytes = lyrics.len(), "Fetched lyrics");
        Ok(lyrics)
    }
}
