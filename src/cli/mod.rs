//! Command-line interface for MPRIS player control.
//!
//! Flags are described once in a static command table, parsed with clap,
//! routed to player queries or playback actions, and their output joined
//! into a single line. Without flags an interactive shell runs each entered
//! command in its own process.

pub mod args;
pub mod formatting;
mod registry;
mod service;
pub mod shell;
mod types;

pub use args::{Invocation, parse};
pub use registry::CommandRegistry;
pub use service::{CliService, LYRICS_FALLBACK};
pub use shell::{CommandSpawner, FAREWELL, ProcessSpawner, Shell};
pub use types::{CliError, CommandResult, CommandSpec, Handler, Query};

#[cfg(test)]
mod tests;
