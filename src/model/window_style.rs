//! Extended window style bits that control Alt+Tab visibility.

use super::constants::{WS_EX_APPWINDOW, WS_EX_TOOLWINDOW};

/// Style that keeps a window out of the Alt+Tab list.
pub fn hidden_from_alt_tab(ex_style: u32) -> u32 {
    (ex_style | WS_EX_TOOLWINDOW) & !WS_EX_APPWINDOW
}

/// Style that puts a window back into the Alt+Tab list.
pub fn shown_in_alt_tab(ex_style: u32) -> u32 {
    (ex_style & !WS_EX_TOOLWINDOW) | WS_EX_APPWINDOW
}

#[cfg(test)]
mod tests {
    use super::*;

    const WS_EX_TOPMOST: u32 = 0x0000_0008;
    const WS_EX_LAYERED: u32 = 0x0008_0000;

    #[test]
    fn hide_sets_tool_window_and_clears_app_window() {
        let style = hidden_from_alt_tab(WS_EX_APPWINDOW | WS_EX_TOPMOST);
        assert_eq!(style, WS_EX_TOOLWINDOW | WS_EX_TOPMOST);
    }

    #[test]
    fn show_reverses_hide() {
        let original = WS_EX_APPWINDOW | WS_EX_LAYERED;
        assert_eq!(shown_in_alt_tab(hidden_from_alt_tab(original)), original);
    }

    #[test]
    fn hide_is_idempotent() {
        let once = hidden_from_alt_tab(WS_EX_LAYERED);
        assert_eq!(hidden_from_alt_tab(once), once);
    }
}
