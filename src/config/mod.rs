//! Configuration file handling.
//!
//! The file is optional; every field has a default so a missing file or a
//! partial one both produce a usable [`Config`].

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LoggingConfig, SessionConfig, UiConfig};
