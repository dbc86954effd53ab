//! User settings (pure Rust, no FFI).
//!
//! This module defines the settings structure that is serialized
//! to/from the JSON config file.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::constants::*;

/// Where the indicator is anchored on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementMode {
    /// Below the text caret of the focused window, falling back to the cursor.
    Caret,
    /// Next to the mouse cursor.
    #[default]
    Cursor,
    /// Bottom-right corner of the work area.
    Corner,
}

impl PlacementMode {
    pub const ALL: [PlacementMode; 3] = [
        PlacementMode::Caret,
        PlacementMode::Cursor,
        PlacementMode::Corner,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlacementMode::Caret => "Text caret",
            PlacementMode::Cursor => "Mouse cursor",
            PlacementMode::Corner => "Screen corner",
        }
    }
}

/// Complete user settings, serializable to/from the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Register the app to launch at login.
    pub launch_at_startup: bool,
    /// Append the full/half shape marker.
    pub show_shape: bool,
    /// Append the symbol conversion marker.
    pub show_symbol: bool,
    /// Multiplier applied to [`HIDDEN_DELAY`].
    pub hide_delay_multiplier: f64,
    /// Where the indicator is shown.
    pub placement: PlacementMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            launch_at_startup: false,
            show_shape: false,
            show_symbol: false,
            hide_delay_multiplier: DEFAULT_HIDE_DELAY_MULTIPLIER,
            placement: PlacementMode::default(),
        }
    }
}

impl Settings {
    /// Replaces values that cannot be used with their defaults.
    pub fn validate(&mut self) {
        if !usable_multiplier(self.hide_delay_multiplier) {
            self.hide_delay_multiplier = DEFAULT_HIDE_DELAY_MULTIPLIER;
        }
    }

    /// How long the indicator stays up after a change.
    ///
    /// An unvalidated multiplier outside the accepted range gives the
    /// base delay.
    pub fn hide_delay(&self) -> Duration {
        if usable_multiplier(self.hide_delay_multiplier) {
            HIDDEN_DELAY.mul_f64(self.hide_delay_multiplier)
        } else {
            HIDDEN_DELAY
        }
    }

    /// Index into [`HIDE_DELAY_PRESETS`] of the checked tray menu item.
    pub fn hide_delay_preset(&self) -> usize {
        preset_index(self.hide_delay_multiplier)
    }
}

/// Index of the preset equal to `value`, or of the default multiplier.
pub fn preset_index(value: f64) -> usize {
    let find = |v: f64| {
        HIDE_DELAY_PRESETS
            .iter()
            .position(|p| (p - v).abs() < 1e-9)
    };
    find(value)
        .or_else(|| find(DEFAULT_HIDE_DELAY_MULTIPLIER))
        .unwrap_or(0)
}

fn usable_multiplier(multiplier: f64) -> bool {
    multiplier.is_finite() && multiplier > 0.0 && multiplier <= MAX_HIDE_DELAY_MULTIPLIER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_serializes_lowercase() {
        let json = serde_json::to_string(&PlacementMode::Caret).unwrap();
        assert_eq!(json, "\"caret\"");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"show_symbol": true}"#).unwrap();
        assert!(settings.show_symbol);
        assert!(!settings.show_shape);
        assert_eq!(settings.placement, PlacementMode::Cursor);
        assert!((settings.hide_delay_multiplier - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn huge_multiplier_falls_back_to_default() {
        let mut settings: Settings =
            serde_json::from_str(r#"{"hide_delay_multiplier": 1e300}"#).unwrap();
        assert_eq!(settings.hide_delay(), HIDDEN_DELAY);
        settings.validate();
        assert_eq!(settings.hide_delay_multiplier, DEFAULT_HIDE_DELAY_MULTIPLIER);
    }

    #[test]
    fn multiplier_cap_is_inclusive() {
        let mut settings = Settings {
            hide_delay_multiplier: MAX_HIDE_DELAY_MULTIPLIER,
            ..Settings::default()
        };
        settings.validate();
        assert_eq!(settings.hide_delay_multiplier, MAX_HIDE_DELAY_MULTIPLIER);
        assert_eq!(settings.hide_delay(), Duration::from_secs(60));
    }
}
