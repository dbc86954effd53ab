//! Seam between the indicator core and the operating system.

use super::placement::{Point, Rect, Screen};
use crate::error::Result;
use crate::model::ConversionMode;

/// Read-only access to the desktop state the indicator depends on.
///
/// Implemented with Win32 calls in `platform::windows::probe`; tests use
/// a scripted fake.
pub trait DesktopProbe {
    /// Conversion mode of the IME attached to the foreground window.
    ///
    /// Returns the empty mode when there is no foreground window or IME.
    fn conversion_mode(&mut self) -> Result<ConversionMode>;

    /// Whether caps lock is toggled on.
    fn caps_lock(&mut self) -> bool;

    /// Caret rectangle of the foreground thread in screen pixels.
    fn caret_rect(&mut self) -> Option<Rect>;

    /// Mouse cursor position in screen pixels.
    fn cursor_position(&mut self) -> Option<Point>;

    /// Connected monitors.
    fn screens(&mut self) -> Vec<Screen>;
}
