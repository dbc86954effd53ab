//! Input method state indicator.
//!
//! Pure helpers and the polling/display core used by the app. Keep this
//! crate root free of Win32 FFI so tests run as normal integration tests
//! on any platform; OS access lives in `platform::windows`.

pub mod error;
pub mod events;
pub mod indicator;
pub mod logging;
pub mod memory;
pub mod model;
pub mod platform;
pub mod storage;

use std::path::Path;

pub use error::{Error, Result};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use indicator::{DesktopProbe, DisplayUpdate, IndicatorController};
pub use model::{ImeStatus, IndicatorContent, PlacementMode, Settings};

use model::constants::FALLBACK_VERSION;

/// Clamp a value to [lo, hi]. `lo` wins when the range is empty.
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v > hi {
        hi.max(lo)
    } else if v < lo {
        lo
    } else {
        v
    }
}

/// Shorten a version string to `major.minor.patch`.
///
/// Missing components read as 0; a version that does not start with a
/// number falls back to `0.0.1`.
pub fn format_version(version: &str) -> String {
    let mut parts = version.trim().split('.').map(|p| p.parse::<u32>());
    let major = match parts.next() {
        Some(Ok(n)) => n,
        _ => return FALLBACK_VERSION.to_string(),
    };
    let mut next = || parts.next().and_then(|p| p.ok()).unwrap_or(0);
    let minor = next();
    let patch = next();
    format!("{}.{}.{}", major, minor, patch)
}

/// Command line stored in the login startup entry.
pub fn startup_command(exe: &Path) -> String {
    format!("\"{}\"", exe.display())
}
