//! Tests for the model layer (status, indicator content, settings).
//!
//! Note: We intentionally use `Default::default()` then field reassignment
//! to test individual field validation. This is clearer than struct update syntax.
#![allow(clippy::field_reassign_with_default)]

use std::time::Duration;

use lang_indicator::model::constants::*;
use lang_indicator::model::{
    content_size, preset_index, ConversionMode, ImeStatus, IndicatorContent, PlacementMode,
    Settings,
};

fn status(bits: u32, caps_lock: bool) -> ImeStatus {
    ImeStatus::new(ConversionMode::from_bits(bits), caps_lock)
}

fn text(bits: u32, caps_lock: bool, show_shape: bool, show_symbol: bool) -> String {
    IndicatorContent::from_status(&status(bits, caps_lock), show_shape, show_symbol).text
}

// === Indicator Content Tests ===

#[test]
fn alphanumeric_mode_shows_english() {
    let content = IndicatorContent::from_status(&status(IME_CMODE_ALPHANUMERIC, false), false, false);
    assert_eq!(content.text, ENGLISH_GLYPH);
    assert_eq!(content.color, ENGLISH_COLOR);
}

#[test]
fn native_mode_shows_chinese() {
    let content = IndicatorContent::from_status(&status(IME_CMODE_NATIVE, false), false, false);
    assert_eq!(content.text, CHINESE_GLYPH);
    assert_eq!(content.color, CHINESE_COLOR);
}

#[test]
fn caps_lock_overrides_language() {
    let content = IndicatorContent::from_status(&status(IME_CMODE_NATIVE, true), false, false);
    assert_eq!(content.text, UPPER_CASE_GLYPH);
    assert_eq!(content.color, UPPER_CASE_COLOR);
}

#[test]
fn shape_marker_follows_full_shape_bit() {
    assert_eq!(text(IME_CMODE_NATIVE, false, true, false), "中 /半");
    assert_eq!(
        text(IME_CMODE_NATIVE | IME_CMODE_FULLSHAPE, false, true, false),
        "中 /全"
    );
}

#[test]
fn shape_marker_is_shown_with_caps_lock() {
    assert_eq!(text(IME_CMODE_FULLSHAPE, true, true, false), "A /全");
}

#[test]
fn symbol_marker_needs_setting_and_bit() {
    let bits = IME_CMODE_NATIVE | IME_CMODE_SYMBOL;
    assert_eq!(text(bits, false, false, true), "中/，");
    assert_eq!(text(bits, false, false, false), "中");
    assert_eq!(text(IME_CMODE_NATIVE, false, false, true), "中");
}

#[test]
fn caps_lock_suppresses_symbol_marker() {
    let bits = IME_CMODE_NATIVE | IME_CMODE_SYMBOL;
    assert_eq!(text(bits, true, false, true), "A");
}

#[test]
fn all_markers_combine_in_order() {
    let bits = IME_CMODE_NATIVE | IME_CMODE_FULLSHAPE | IME_CMODE_SYMBOL;
    assert_eq!(text(bits, false, true, true), "中 /全/，");
}

#[test]
fn unrelated_bits_do_not_change_text() {
    let bits = IME_CMODE_ROMAN | IME_CMODE_SOFTKBD | IME_CMODE_FIXED;
    assert_eq!(text(bits, false, true, true), "英 /半");
}

#[test]
fn longer_text_gets_wider_window() {
    let (short, h1) = content_size(CHINESE_GLYPH);
    let (long, h2) = content_size("中 /全/，");
    assert!(long > short);
    assert_eq!(h1, INDICATOR_HEIGHT);
    assert_eq!(h2, INDICATOR_HEIGHT);
}

// === Settings Tests ===

#[test]
fn settings_defaults() {
    let settings = Settings::default();
    assert!(!settings.launch_at_startup);
    assert!(!settings.show_shape);
    assert!(!settings.show_symbol);
    assert_eq!(settings.hide_delay_multiplier, DEFAULT_HIDE_DELAY_MULTIPLIER);
    assert_eq!(settings.placement, PlacementMode::Cursor);
    assert_eq!(settings.hide_delay(), HIDDEN_DELAY);
}

#[test]
fn settings_missing_fields_use_defaults() {
    let settings: Settings = serde_json::from_str(r#"{ "show_shape": true }"#).unwrap();
    assert!(settings.show_shape);
    assert!(!settings.show_symbol);
    assert_eq!(settings.placement, PlacementMode::Cursor);
}

#[test]
fn settings_read_placement_by_name() {
    let settings: Settings = serde_json::from_str(r#"{ "placement": "corner" }"#).unwrap();
    assert_eq!(settings.placement, PlacementMode::Corner);
}

#[test]
fn settings_reject_unknown_placement() {
    assert!(serde_json::from_str::<Settings>(r#"{ "placement": "top" }"#).is_err());
}

#[test]
fn validate_resets_bad_multiplier() {
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let mut settings = Settings::default();
        settings.hide_delay_multiplier = bad;
        settings.validate();
        assert_eq!(settings.hide_delay_multiplier, DEFAULT_HIDE_DELAY_MULTIPLIER);
    }
}

#[test]
fn validate_keeps_custom_multiplier() {
    let mut settings = Settings::default();
    settings.hide_delay_multiplier = 2.5;
    settings.validate();
    assert_eq!(settings.hide_delay_multiplier, 2.5);
    assert_eq!(settings.hide_delay(), Duration::from_millis(2500));
}

#[test]
fn hide_delay_scales_base_delay() {
    let mut settings = Settings::default();
    settings.hide_delay_multiplier = 0.6;
    assert_eq!(settings.hide_delay(), Duration::from_millis(600));
}

// === Hide Delay Preset Tests ===

#[test]
fn preset_index_finds_each_preset() {
    for (i, preset) in HIDE_DELAY_PRESETS.iter().enumerate() {
        assert_eq!(preset_index(*preset), i);
    }
}

#[test]
fn preset_index_falls_back_to_default() {
    let default_index = preset_index(DEFAULT_HIDE_DELAY_MULTIPLIER);
    assert_eq!(HIDE_DELAY_PRESETS[default_index], 1.0);
    assert_eq!(preset_index(1.1), default_index);
    assert_eq!(preset_index(10.0), default_index);
}

#[test]
fn settings_report_checked_preset() {
    let mut settings = Settings::default();
    settings.hide_delay_multiplier = 3.0;
    assert_eq!(settings.hide_delay_preset(), HIDE_DELAY_PRESETS.len() - 1);
}
