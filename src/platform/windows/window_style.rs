//! Win32 side of the Alt+Tab visibility helpers.

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{GetWindowLongPtrW, SetWindowLongPtrW, GWL_EXSTYLE};

use crate::model::window_style::hidden_from_alt_tab;

/// Current extended style of `hwnd`.
pub fn current_ex_style(hwnd: HWND) -> u32 {
    unsafe { GetWindowLongPtrW(hwnd, GWL_EXSTYLE) as u32 }
}

/// Keep `hwnd` out of the Alt+Tab window list.
pub fn hide_from_alt_tab(hwnd: HWND) {
    let style = hidden_from_alt_tab(current_ex_style(hwnd));
    unsafe {
        let _ = SetWindowLongPtrW(hwnd, GWL_EXSTYLE, style as isize);
    }
}
