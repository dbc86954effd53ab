//! Input method status as sampled from the OS.

use super::constants::*;

/// Raw IME conversion-mode bits (`IME_CMODE_*`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ConversionMode(pub u32);

impl ConversionMode {
    pub fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// Native (Chinese) input.
    pub fn is_native(self) -> bool {
        self.0 & IME_CMODE_NATIVE != 0
    }

    /// Full-width character shape.
    pub fn is_full_shape(self) -> bool {
        self.0 & IME_CMODE_FULLSHAPE != 0
    }

    /// Symbol (punctuation) conversion.
    pub fn is_symbol(self) -> bool {
        self.0 & IME_CMODE_SYMBOL != 0
    }
}

/// One sample of the state the indicator reflects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImeStatus {
    pub conversion_mode: ConversionMode,
    pub caps_lock: bool,
}

impl ImeStatus {
    pub fn new(conversion_mode: ConversionMode, caps_lock: bool) -> Self {
        Self {
            conversion_mode,
            caps_lock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_mode_is_english_half_width() {
        let mode = ConversionMode::default();
        assert!(!mode.is_native());
        assert!(!mode.is_full_shape());
        assert!(!mode.is_symbol());
    }

    #[test]
    fn typical_pinyin_mode_bits() {
        // Microsoft Pinyin in Chinese mode with Chinese punctuation
        let mode = ConversionMode::from_bits(IME_CMODE_NATIVE | IME_CMODE_SYMBOL);
        assert!(mode.is_native());
        assert!(mode.is_symbol());
        assert!(!mode.is_full_shape());
    }

    #[test]
    fn unrelated_bits_are_ignored() {
        let mode = ConversionMode::from_bits(IME_CMODE_ROMAN | IME_CMODE_SOFTKBD);
        assert!(!mode.is_native());
        assert!(!mode.is_full_shape());
        assert!(!mode.is_symbol());
    }
}
