/// Errors that can occur during a lyrics lookup
#[derive(thiserror::Error, Debug)]
pub enum LyricsError {
    /// The HTTP request failed or returned an error status
    #[error("lyrics request failed: {0}")]
    Request(#[from] Box<ureq::Error>),

    /// The response body could not be decoded
    #[error("invalid lyrics response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The database has no plain-text lyrics for the track
    #[error("no lyrics for '{artist} - {title}'")]
    NotFound {
        /// Artist that was searched for
        artist: String,
        /// Title that was searched for
        title: String,
    },

    /// The blocking lookup task was cancelled or panicked
    #[error("lyrics task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
