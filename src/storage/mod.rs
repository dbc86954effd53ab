//! Configuration storage.
//!
//! Persists settings to a JSON file in %APPDATA%/LangIndicator/config.json

mod config;

pub use config::*;
