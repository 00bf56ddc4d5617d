//! spotifycli - command line control for MPRIS media players.
//!
//! Queries the player selected by a bus name prefix (Spotify by default)
//! over the D-Bus session bus and prints the requested views on one line,
//! or sends playback commands. The main features include:
//!
//! - Status, song, artist, album, artwork, position and playback state views
//! - Play, pause, toggle, next and previous commands
//! - Lyrics lookup with a fixed fallback line
//! - An interactive shell running each command in its own process
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use spotifycli::{cli::{self, CliService}, services::MediaService};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let invocation = cli::parse(["spotifycli", "--status", "--playbackstatus"])?;
//! let media = MediaService::session(invocation.config.client.clone());
//! let service = CliService::with_default_lyrics(media);
//!
//! println!("{}", service.execute(&invocation.flags).await?);
//! # Ok(())
//! # }
//! ```

/// Runtime configuration.
pub mod config;

/// Process-level error types and result aliases.
pub mod core;

/// Command-line parsing, routing, formatting and the interactive shell.
pub mod cli;

/// Player and lyrics services.
pub mod services;

/// Diagnostic logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{AppError, Result};
