//! Polling and display-triggering core.
//!
//! Everything here is pure Rust driven through the [`DesktopProbe`] seam,
//! so the sequencing can be tested without a desktop:
//!
//! ```text
//!  REFRESH timer ──► IndicatorController::refresh(probe)
//!                      │  StatusPoller::observe      (changed?)
//!                      │  IndicatorContent            (what)
//!                      │  placement::place            (where)
//!                      ▼
//!                  DisplayUpdate ──► renderer, FRAME + HIDE timers
//! ```

pub mod animation;
pub mod controller;
pub mod placement;
pub mod poller;
pub mod probe;

pub use animation::{circle_ease_in_out, Frame, ShowAnimation};
pub use controller::{DisplayUpdate, IndicatorController};
pub use placement::{place, select_screen, Anchors, Placement, Point, Rect, Screen, Size};
pub use poller::StatusPoller;
pub use probe::DesktopProbe;
