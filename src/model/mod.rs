//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies)
//! including input method status, indicator content, user settings
//! and configuration constants.
//!
//! Persistence is in `storage`, OS access in `platform::windows`.

pub mod constants;
pub mod ime;
pub mod indicator;
pub mod settings;
pub mod window_style;

pub use constants::*;
pub use ime::{ConversionMode, ImeStatus};
pub use indicator::{content_size, IndicatorContent};
pub use settings::{preset_index, PlacementMode, Settings};
