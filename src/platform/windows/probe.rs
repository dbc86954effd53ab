//! Win32 implementation of [`DesktopProbe`].

use windows::core::BOOL;
use windows::Win32::Foundation::{LPARAM, POINT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    ClientToScreen, EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO,
};
use windows::Win32::UI::HiDpi::{GetDpiForMonitor, MDT_EFFECTIVE_DPI};
use windows::Win32::UI::Input::Ime::ImmGetDefaultIMEWnd;
use windows::Win32::UI::Input::KeyboardAndMouse::{GetKeyState, VK_CAPITAL};
use windows::Win32::UI::WindowsAndMessaging::{
    GetCursorPos, GetForegroundWindow, GetGUIThreadInfo, GetWindowThreadProcessId,
    SendMessageTimeoutW, GUITHREADINFO, SMTO_ABORTIFHUNG,
};

use crate::error::{Error, Result};
use crate::indicator::{DesktopProbe, Point, Rect, Screen};
use crate::model::constants::IME_QUERY_TIMEOUT;
use crate::model::ConversionMode;

/// Sent to the default IME window to control the input context.
const WM_IME_CONTROL: u32 = 0x0283;

/// `WM_IME_CONTROL` command returning the conversion mode.
const IMC_GETCONVERSIONMODE: usize = 0x0001;

const MONITORINFOF_PRIMARY: u32 = 0x0000_0001;

const BASE_DPI: f64 = 96.0;

/// Reads IME, keyboard, caret and monitor state through Win32.
#[derive(Debug, Default)]
pub struct Win32Probe;

impl Win32Probe {
    pub fn new() -> Self {
        Self
    }
}

impl DesktopProbe for Win32Probe {
    fn conversion_mode(&mut self) -> Result<ConversionMode> {
        unsafe {
            let foreground = GetForegroundWindow();
            if foreground.is_invalid() {
                return Ok(ConversionMode::default());
            }

            let ime_window = ImmGetDefaultIMEWnd(foreground);
            if ime_window.is_invalid() {
                return Ok(ConversionMode::default());
            }

            let mut result: usize = 0;
            let sent = SendMessageTimeoutW(
                ime_window,
                WM_IME_CONTROL,
                WPARAM(IMC_GETCONVERSIONMODE),
                LPARAM(0),
                SMTO_ABORTIFHUNG,
                IME_QUERY_TIMEOUT.as_millis() as u32,
                Some(&mut result as *mut usize),
            );
            if sent.0 == 0 {
                return Err(Error::ImeQueryFailed);
            }

            Ok(ConversionMode::from_bits(result as u32))
        }
    }

    fn caps_lock(&mut self) -> bool {
        unsafe { (GetKeyState(i32::from(VK_CAPITAL.0)) & 0x0001) != 0 }
    }

    fn caret_rect(&mut self) -> Option<Rect> {
        unsafe {
            let foreground = GetForegroundWindow();
            if foreground.is_invalid() {
                return None;
            }

            let thread_id = GetWindowThreadProcessId(foreground, None);
            let mut info = GUITHREADINFO {
                cbSize: std::mem::size_of::<GUITHREADINFO>() as u32,
                ..Default::default()
            };
            GetGUIThreadInfo(thread_id, &mut info).ok()?;
            if info.hwndCaret.is_invalid() {
                return None;
            }

            let caret = info.rcCaret;
            let mut top_left = POINT {
                x: caret.left,
                y: caret.top,
            };
            let mut bottom_right = POINT {
                x: caret.right,
                y: caret.bottom,
            };
            if !ClientToScreen(info.hwndCaret, &mut top_left).as_bool()
                || !ClientToScreen(info.hwndCaret, &mut bottom_right).as_bool()
            {
                return None;
            }

            Some(Rect::new(
                top_left.x,
                top_left.y,
                bottom_right.x,
                bottom_right.y,
            ))
        }
    }

    fn cursor_position(&mut self) -> Option<Point> {
        let mut pt = POINT::default();
        unsafe { GetCursorPos(&mut pt).ok()? };
        Some(Point::new(pt.x, pt.y))
    }

    fn screens(&mut self) -> Vec<Screen> {
        let mut screens: Vec<Screen> = Vec::new();
        unsafe {
            let _ = EnumDisplayMonitors(
                None,
                None,
                Some(collect_monitor),
                LPARAM(&mut screens as *mut Vec<Screen> as isize),
            );
        }
        screens
    }
}

fn to_rect(r: RECT) -> Rect {
    Rect::new(r.left, r.top, r.right, r.bottom)
}

unsafe extern "system" fn collect_monitor(
    monitor: HMONITOR,
    _hdc: HDC,
    _clip: *mut RECT,
    data: LPARAM,
) -> BOOL {
    let screens = &mut *(data.0 as *mut Vec<Screen>);

    let mut info = MONITORINFO {
        cbSize: std::mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };
    if GetMonitorInfoW(monitor, &mut info).as_bool() {
        let (mut dpi_x, mut dpi_y) = (BASE_DPI as u32, BASE_DPI as u32);
        let _ = GetDpiForMonitor(monitor, MDT_EFFECTIVE_DPI, &mut dpi_x, &mut dpi_y);
        screens.push(Screen {
            bounds: to_rect(info.rcMonitor),
            work_area: to_rect(info.rcWork),
            scale: f64::from(dpi_x) / BASE_DPI,
            primary: info.dwFlags & MONITORINFOF_PRIMARY != 0,
        });
    }

    // Keep enumerating
    BOOL(1)
}
