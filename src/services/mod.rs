/// Song lyrics lookup
pub mod lyrics;
/// MPRIS media player control service
pub mod mpris;

pub use lyrics::{LrclibProvider, LyricsError, LyricsProvider};
pub use mpris::{MediaService, PlayerBus};
