/// Playback command dispatch
pub mod control;
/// Player resolution by bus name prefix
pub mod discovery;
/// Media player error types
pub mod error;
/// Track metadata decoding
pub mod metadata;
/// D-Bus proxy construction
pub mod proxy;
/// Bus transport and property access
pub mod service;
/// Player addresses, properties, commands and states
pub mod types;

pub use discovery::{resolve, select_player};
pub use error::*;
pub use metadata::*;
pub use service::*;
pub use types::*;
