//! Application events for inter-module communication.
//!
//! These events represent user actions from the tray menu that are
//! published by the window procedure and handled by the dispatcher.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

use crate::model::PlacementMode;

/// Application-level events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Flip launch-at-login registration.
    ToggleStartup,

    /// Flip the full/half shape marker.
    ToggleShowShape,

    /// Flip the symbol conversion marker.
    ToggleShowSymbol,

    /// Select a hide delay by index into `HIDE_DELAY_PRESETS`.
    SetHideDelay(usize),

    /// Select where the indicator is shown.
    SetPlacement(PlacementMode),

    /// Show the current status right away.
    ShowNow,

    /// Show About dialog
    ShowAbout,

    /// Quit the application.
    Quit,
}

impl AppEvent {
    /// Returns true if handling this event changes persisted settings.
    pub fn changes_settings(&self) -> bool {
        matches!(
            self,
            AppEvent::ToggleStartup
                | AppEvent::ToggleShowShape
                | AppEvent::ToggleShowSymbol
                | AppEvent::SetHideDelay(_)
                | AppEvent::SetPlacement(_)
        )
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::ToggleStartup => "Toggle launch at startup",
            AppEvent::ToggleShowShape => "Toggle shape marker",
            AppEvent::ToggleShowSymbol => "Toggle symbol marker",
            AppEvent::SetHideDelay(_) => "Set hide delay",
            AppEvent::SetPlacement(_) => "Set indicator position",
            AppEvent::ShowNow => "Show indicator now",
            AppEvent::ShowAbout => "Show about dialog",
            AppEvent::Quit => "Quit application",
        }
    }
}
