//! About dialog for Windows.
//!
//! Shows application name, version, and description.

use windows::core::PCWSTR;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONINFORMATION, MB_OK};

use crate::format_version;
use crate::model::constants::APP_NAME;

/// Application version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Body text of the About dialog.
pub fn about_message() -> String {
    format!(
        "{} v{}\n\n\
        Shows the input method state near where you type:\n\
        \u{2022} Chinese / English conversion mode\n\
        \u{2022} Caps Lock\n\
        \u{2022} Full / half shape and symbol mode\n\n\
        Right-click the tray icon for options.",
        APP_NAME,
        format_version(VERSION)
    )
}

/// Show the About dialog.
pub fn show_about_dialog(hwnd: HWND) {
    let title = format!("About {}", APP_NAME);
    let message = about_message();

    let title_wide: Vec<u16> = title.encode_utf16().chain(std::iter::once(0)).collect();
    let message_wide: Vec<u16> = message.encode_utf16().chain(std::iter::once(0)).collect();

    unsafe {
        MessageBoxW(
            Some(hwnd),
            PCWSTR(message_wide.as_ptr()),
            PCWSTR(title_wide.as_ptr()),
            MB_OK | MB_ICONINFORMATION,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_message_starts_with_name_and_version() {
        assert!(about_message().starts_with("LangIndicator v1.0.0\n"));
    }
}
