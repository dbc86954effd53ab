//! Crate-wide error type.

use std::io;

/// Errors surfaced by the indicator.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    /// The IME window did not answer the conversion-mode query in time.
    #[error("IME conversion mode query failed")]
    ImeQueryFailed,

    #[error("startup registration failed: {0}")]
    Startup(#[source] io::Error),

    #[cfg(target_os = "windows")]
    #[error("Win32 error: {0}")]
    Win32(#[from] windows::core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
