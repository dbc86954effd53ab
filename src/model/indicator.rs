//! What the indicator shows for a given input method status.

use super::constants::*;
use super::ime::ImeStatus;

/// Text and colour of the indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorContent {
    pub text: String,
    /// Text colour (R, G, B).
    pub color: (u8, u8, u8),
}

impl IndicatorContent {
    /// Build the indicator text.
    ///
    /// Caps lock overrides the language glyph and suppresses the symbol
    /// marker; the shape marker is shown whenever `show_shape` is set.
    pub fn from_status(status: &ImeStatus, show_shape: bool, show_symbol: bool) -> Self {
        let mode = status.conversion_mode;
        let is_native = mode.is_native();

        let mut text = String::from(if status.caps_lock {
            UPPER_CASE_GLYPH
        } else if is_native {
            CHINESE_GLYPH
        } else {
            ENGLISH_GLYPH
        });

        if show_shape {
            text.push_str(" /");
            text.push_str(if mode.is_full_shape() {
                FULL_SHAPE_GLYPH
            } else {
                HALF_SHAPE_GLYPH
            });
        }

        if !status.caps_lock && show_symbol && mode.is_symbol() {
            text.push('/');
            text.push_str(SYMBOL_GLYPH);
        }

        let color = if status.caps_lock {
            UPPER_CASE_COLOR
        } else if is_native {
            CHINESE_COLOR
        } else {
            ENGLISH_COLOR
        };

        Self { text, color }
    }

    /// Estimated indicator size in DIPs, see [`content_size`].
    pub fn size(&self) -> (f64, f64) {
        content_size(&self.text)
    }
}

/// Advance of one character relative to the font size.
///
/// CJK glyphs and full-width punctuation are square; Latin letters and
/// ASCII punctuation are roughly half as wide.
fn char_advance(c: char) -> f64 {
    match c {
        ' ' => 0.3,
        c if c.is_ascii() => 0.6,
        _ => 1.0,
    }
}

/// Estimate the width and height (DIPs) needed to draw `text`.
pub fn content_size(text: &str) -> (f64, f64) {
    let advance: f64 = text.chars().map(char_advance).sum();
    let width = (advance * INDICATOR_FONT_SIZE + 2.0 * INDICATOR_PADDING).ceil();
    (width.max(INDICATOR_HEIGHT), INDICATOR_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ime::ConversionMode;

    #[test]
    fn single_cjk_glyph_is_at_least_square() {
        let (w, h) = content_size(CHINESE_GLYPH);
        assert_eq!(h, INDICATOR_HEIGHT);
        assert!(w >= INDICATOR_HEIGHT);
    }

    #[test]
    fn longer_text_is_wider() {
        let (short, _) = content_size("中");
        let (long, _) = content_size("中 /全/，");
        assert!(long > short);
    }

    #[test]
    fn ascii_is_narrower_than_cjk() {
        let (ascii, _) = content_size("AAAA");
        let (cjk, _) = content_size("中中中中");
        assert!(ascii < cjk);
    }

    #[test]
    fn caps_lock_with_symbol_mode_has_no_symbol_marker() {
        let status = ImeStatus::new(
            ConversionMode::from_bits(IME_CMODE_NATIVE | IME_CMODE_SYMBOL),
            true,
        );
        let content = IndicatorContent::from_status(&status, false, true);
        assert_eq!(content.text, UPPER_CASE_GLYPH);
    }
}
