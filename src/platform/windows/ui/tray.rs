//! System tray (notification area) icon for Windows.
//!
//! Provides a tray icon with a context menu for the indicator settings.
//! The menu is rebuilt on every right-click so its check marks always
//! reflect the current settings.

use std::cell::RefCell;

use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{HWND, POINT};
use windows::Win32::UI::Shell::{
    Shell_NotifyIconW, NIF_ICON, NIF_MESSAGE, NIF_TIP, NIM_ADD, NIM_DELETE, NOTIFYICONDATAW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    AppendMenuW, CreatePopupMenu, DestroyMenu, GetCursorPos, LoadIconW, SetForegroundWindow,
    TrackPopupMenu, HMENU, IDI_APPLICATION, MENU_ITEM_FLAGS, MF_CHECKED, MF_POPUP, MF_SEPARATOR,
    MF_STRING, TPM_BOTTOMALIGN, TPM_LEFTALIGN, TPM_RIGHTBUTTON, WM_USER,
};

use crate::events::menu::*;
use crate::format_version;
use crate::model::constants::{APP_NAME, HIDE_DELAY_PRESETS};
use crate::model::{PlacementMode, Settings};

// Custom message for tray icon events
pub const WM_TRAYICON: u32 = WM_USER + 1;

// Tray icon ID
const TRAY_ICON_ID: u32 = 1;

thread_local! {
    static TRAY_HWND: RefCell<Option<HWND>> = const { RefCell::new(None) };
}

/// Tooltip text, e.g. "LangIndicator v1.0.0".
pub fn tray_tooltip() -> String {
    format!(
        "{} v{}",
        APP_NAME,
        format_version(env!("CARGO_PKG_VERSION"))
    )
}

/// Install the system tray icon.
pub fn install_tray_icon(hwnd: HWND) {
    unsafe {
        TRAY_HWND.with(|h| *h.borrow_mut() = Some(hwnd));

        let hicon = LoadIconW(None, IDI_APPLICATION).unwrap_or_default();

        let mut nid = NOTIFYICONDATAW {
            cbSize: std::mem::size_of::<NOTIFYICONDATAW>() as u32,
            hWnd: hwnd,
            uID: TRAY_ICON_ID,
            uFlags: NIF_ICON | NIF_MESSAGE | NIF_TIP,
            uCallbackMessage: WM_TRAYICON,
            hIcon: hicon,
            ..Default::default()
        };

        // Set tooltip
        let tip_wide: Vec<u16> = tray_tooltip().encode_utf16().collect();
        for (i, &c) in tip_wide.iter().enumerate().take(nid.szTip.len() - 1) {
            nid.szTip[i] = c;
        }

        let _ = Shell_NotifyIconW(NIM_ADD, &nid);
    }
}

/// Remove the tray icon.
pub fn remove_tray_icon() {
    TRAY_HWND.with(|h| {
        if let Some(hwnd) = h.borrow_mut().take() {
            unsafe {
                let nid = NOTIFYICONDATAW {
                    cbSize: std::mem::size_of::<NOTIFYICONDATAW>() as u32,
                    hWnd: hwnd,
                    uID: TRAY_ICON_ID,
                    ..Default::default()
                };
                let _ = Shell_NotifyIconW(NIM_DELETE, &nid);
            }
        }
    });
}

/// Show the context menu at the cursor position.
///
/// Blocks in a modal loop until the menu closes; the chosen item arrives
/// as `WM_COMMAND` afterwards.
pub fn show_tray_menu(hwnd: HWND, settings: &Settings, startup_registered: bool) {
    unsafe {
        let Ok(menu) = build_menu(settings, startup_registered) else {
            return;
        };

        let mut pt = POINT::default();
        let _ = GetCursorPos(&mut pt);

        // Required for menu to close when clicking outside
        let _ = SetForegroundWindow(hwnd);

        let _ = TrackPopupMenu(
            menu,
            TPM_BOTTOMALIGN | TPM_LEFTALIGN | TPM_RIGHTBUTTON,
            pt.x,
            pt.y,
            None, // nReserved - must be None/0
            hwnd,
            None,
        );

        // Submenus attached with MF_POPUP are destroyed with their parent
        let _ = DestroyMenu(menu);
    }
}

unsafe fn build_menu(settings: &Settings, startup_registered: bool) -> windows::core::Result<HMENU> {
    let menu = CreatePopupMenu()?;

    append(menu, checked(startup_registered), MENU_STARTUP, "Launch at startup");
    append(menu, checked(settings.show_shape), MENU_SHOW_SHAPE, "Show full/half shape");
    append(menu, checked(settings.show_symbol), MENU_SHOW_SYMBOL, "Show symbol mode");
    let _ = AppendMenuW(menu, MF_SEPARATOR, 0, PCWSTR::null());

    let delays = CreatePopupMenu()?;
    let current = settings.hide_delay_preset();
    for (index, multiplier) in HIDE_DELAY_PRESETS.iter().enumerate() {
        append(
            delays,
            checked(index == current),
            hide_delay_menu_id(index),
            &format!("{:.1}\u{00d7}", multiplier),
        );
    }
    let _ = AppendMenuW(menu, MF_STRING | MF_POPUP, delays.0 as usize, w!("Hide delay"));

    let positions = CreatePopupMenu()?;
    for mode in PlacementMode::ALL {
        append(
            positions,
            checked(mode == settings.placement),
            placement_menu_id(mode),
            mode.label(),
        );
    }
    let _ = AppendMenuW(menu, MF_STRING | MF_POPUP, positions.0 as usize, w!("Position"));

    let _ = AppendMenuW(menu, MF_SEPARATOR, 0, PCWSTR::null());
    let _ = AppendMenuW(menu, MF_STRING, MENU_SHOW_NOW as usize, w!("Show now"));
    let _ = AppendMenuW(menu, MF_STRING, MENU_ABOUT as usize, w!("About..."));
    let _ = AppendMenuW(menu, MF_STRING, MENU_EXIT as usize, w!("Exit"));

    Ok(menu)
}

fn checked(on: bool) -> MENU_ITEM_FLAGS {
    if on {
        MF_STRING | MF_CHECKED
    } else {
        MF_STRING
    }
}

unsafe fn append(menu: HMENU, flags: MENU_ITEM_FLAGS, id: u32, label: &str) {
    let wide: Vec<u16> = label.encode_utf16().chain(std::iter::once(0)).collect();
    let _ = AppendMenuW(menu, flags, id as usize, PCWSTR(wide.as_ptr()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_shows_short_version() {
        assert_eq!(tray_tooltip(), "LangIndicator v1.0.0");
    }

    #[test]
    fn tooltip_fits_notify_icon_buffer() {
        let nid = NOTIFYICONDATAW::default();
        assert!(tray_tooltip().encode_utf16().count() < nid.szTip.len());
    }
}
