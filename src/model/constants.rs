//! Configuration constants and default values.
//!
//! This module contains all application constants including timing,
//! IME conversion-mode bits, indicator glyphs/colours and layout metrics.

use std::time::Duration;

// === Timing ===

/// Base delay before the indicator hides again (scaled by the multiplier).
pub const HIDDEN_DELAY: Duration = Duration::from_millis(1000);

/// Interval between IME / caps-lock polls.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(100);

/// Duration of the fade-in / slide-in animation.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(200);

/// Interval between animation frames (~60 FPS).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Interval between working-set trims.
pub const TRIM_INTERVAL: Duration = Duration::from_secs(30);

/// Timeout for the IME conversion-mode query against a foreign window.
pub const IME_QUERY_TIMEOUT: Duration = Duration::from_millis(200);

// === Layout (device independent pixels) ===

/// Distance the indicator slides in from, and inset from the screen corner.
pub const WINDOW_OFFSET: f64 = 10.0;

/// Gap between the mouse cursor hotspot and the indicator.
pub const CURSOR_GAP: f64 = 16.0;

/// Gap between the bottom of the text caret and the indicator.
pub const CARET_GAP: f64 = 4.0;

/// Indicator height.
pub const INDICATOR_HEIGHT: f64 = 32.0;

/// Horizontal padding on each side of the text.
pub const INDICATOR_PADDING: f64 = 10.0;

/// Corner radius of the indicator background.
pub const INDICATOR_CORNER_RADIUS: f64 = 6.0;

/// Font size of the indicator text.
pub const INDICATOR_FONT_SIZE: f64 = 18.0;

/// Font family used to draw the glyphs.
pub const INDICATOR_FONT_FAMILY: &str = "Microsoft YaHei UI";

/// Background colour of the indicator (R, G, B, A).
pub const BACKGROUND_COLOR: (f64, f64, f64, f64) = (0.12, 0.12, 0.12, 0.85);

// === Glyphs ===

/// Shown when the IME is in native (Chinese) mode.
pub const CHINESE_GLYPH: &str = "中";

/// Shown when the IME is in alphanumeric (English) mode.
pub const ENGLISH_GLYPH: &str = "英";

/// Shown when caps lock is on; overrides the language glyph.
pub const UPPER_CASE_GLYPH: &str = "A";

/// Full-width character shape.
pub const FULL_SHAPE_GLYPH: &str = "全";

/// Half-width character shape.
pub const HALF_SHAPE_GLYPH: &str = "半";

/// Chinese punctuation (symbol conversion) is active.
pub const SYMBOL_GLYPH: &str = "，";

// === Text colours (R, G, B) ===

/// Caps lock text colour (light salmon).
pub const UPPER_CASE_COLOR: (u8, u8, u8) = (255, 160, 122);

/// Chinese mode text colour (light green).
pub const CHINESE_COLOR: (u8, u8, u8) = (144, 238, 144);

/// English mode text colour (white).
pub const ENGLISH_COLOR: (u8, u8, u8) = (255, 255, 255);

// === IME conversion mode bits (IME_CMODE_*) ===

pub const IME_CMODE_ALPHANUMERIC: u32 = 0x0000;
/// Native mode; `IME_CMODE_CHINESE` shares this bit.
pub const IME_CMODE_NATIVE: u32 = 0x0001;
pub const IME_CMODE_KATAKANA: u32 = 0x0002;
pub const IME_CMODE_FULLSHAPE: u32 = 0x0008;
pub const IME_CMODE_ROMAN: u32 = 0x0010;
pub const IME_CMODE_CHARCODE: u32 = 0x0020;
pub const IME_CMODE_HANJACONVERT: u32 = 0x0040;
pub const IME_CMODE_SOFTKBD: u32 = 0x0080;
pub const IME_CMODE_NOCONVERSION: u32 = 0x0100;
pub const IME_CMODE_EUDC: u32 = 0x0200;
pub const IME_CMODE_SYMBOL: u32 = 0x0400;
pub const IME_CMODE_FIXED: u32 = 0x0800;

// === Extended window style bits ===

pub const WS_EX_TOOLWINDOW: u32 = 0x0000_0080;
pub const WS_EX_APPWINDOW: u32 = 0x0004_0000;

// === Settings ===

/// Selectable hide-delay multipliers, in tray menu order.
pub const HIDE_DELAY_PRESETS: [f64; 8] = [0.6, 0.8, 1.0, 1.2, 1.4, 1.6, 2.0, 3.0];

/// Default hide-delay multiplier.
pub const DEFAULT_HIDE_DELAY_MULTIPLIER: f64 = 1.0;

/// Largest multiplier accepted from the config file (one minute).
pub const MAX_HIDE_DELAY_MULTIPLIER: f64 = 60.0;

/// Application name used for the config directory and the startup entry.
pub const APP_NAME: &str = "LangIndicator";

/// Config file name inside the app directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Log file name inside the app directory.
pub const LOG_FILE_NAME: &str = "lang-indicator.log";

/// Fallback when the package version cannot be parsed.
pub const FALLBACK_VERSION: &str = "0.0.1";
