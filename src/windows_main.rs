//! Windows-specific entry point and application logic.
//!
//! One layered, topmost, no-activate popup serves as the indicator and
//! as the target for tray and timer messages.

use tracing::{info, warn};
use windows::core::w;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT_APARTMENTTHREADED};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::HiDpi::{
    SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DispatchMessageW, GetMessageW, LoadCursorW,
    PostQuitMessage, RegisterClassW, TranslateMessage, HTCAPTION, IDC_ARROW, MSG,
    WM_COMMAND, WM_CREATE, WM_DESTROY, WM_LBUTTONDBLCLK, WM_NCHITTEST, WM_RBUTTONUP, WM_TIMER,
    WNDCLASSW, WS_EX_LAYERED, WS_EX_NOACTIVATE, WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_POPUP,
};

use lang_indicator::events::menu::event_for_menu_id;
use lang_indicator::events::{AppEvent, EventBus};
use lang_indicator::indicator::IndicatorController;
use lang_indicator::memory::start_periodic_trim;
use lang_indicator::model::constants::TRIM_INTERVAL;
use lang_indicator::platform::windows::app::state::{self, with_state, WindowsRuntimeState};
use lang_indicator::platform::windows::app::timers;
use lang_indicator::platform::windows::handlers::publish_and_dispatch;
use lang_indicator::platform::windows::memory::trim_working_set;
use lang_indicator::platform::windows::probe::Win32Probe;
use lang_indicator::platform::windows::startup;
use lang_indicator::platform::windows::ui::tray::{self, WM_TRAYICON};
use lang_indicator::platform::windows::ui::OverlayRenderer;
use lang_indicator::platform::windows::window_style::hide_from_alt_tab;
use lang_indicator::storage::{app_dir, ConfigStore};

/// Main entry point for Windows.
pub fn run() {
    lang_indicator::logging::init(Some(app_dir().as_path()));
    info!(version = env!("CARGO_PKG_VERSION"), "LangIndicator starting");

    if let Err(e) = run_app() {
        tracing::error!("LangIndicator error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> lang_indicator::Result<()> {
    unsafe {
        // The manifest asks for this too; the call covers unmanifested builds
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);

        CoInitializeEx(None, COINIT_APARTMENTTHREADED).ok()?;

        let mut store = ConfigStore::open(ConfigStore::default_path());
        info!(config = %store.path().display(), "settings loaded");
        sync_startup(&mut store);

        let renderer = OverlayRenderer::new()?;

        let instance = GetModuleHandleW(None)?;
        let class_name = w!("LangIndicatorOverlay");

        let wc = WNDCLASSW {
            lpfnWndProc: Some(wndproc),
            hInstance: instance.into(),
            hCursor: LoadCursorW(None, IDC_ARROW)?,
            lpszClassName: class_name,
            ..Default::default()
        };
        RegisterClassW(&wc);

        // Sized and positioned by the first UpdateLayeredWindow
        let hwnd = CreateWindowExW(
            WS_EX_LAYERED | WS_EX_TOPMOST | WS_EX_NOACTIVATE | WS_EX_TOOLWINDOW,
            class_name,
            w!("LangIndicator"),
            WS_POPUP,
            0,
            0,
            1,
            1,
            None,
            None,
            Some(instance.into()),
            None,
        )?;
        hide_from_alt_tab(hwnd);

        state::install(WindowsRuntimeState {
            hwnd,
            store,
            controller: IndicatorController::new(),
            probe: Win32Probe::new(),
            renderer,
            events: EventBus::new(),
        });

        tray::install_tray_icon(hwnd);
        timers::start_refresh(hwnd);
        let trimmer = start_periodic_trim(TRIM_INTERVAL, trim_working_set)?;

        // Message loop
        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        // Cleanup
        trimmer.stop();
        tray::remove_tray_icon();
        if let Some(mut state) = state::take() {
            if let Err(e) = state.store.flush() {
                warn!("Failed to save config: {}", e);
            }
        }

        CoUninitialize();
        info!("LangIndicator stopped");

        Ok(())
    }
}

/// Restore a startup entry the user enabled but that has since gone missing.
fn sync_startup(store: &mut ConfigStore) {
    if store.settings().launch_at_startup && !startup::is_registered() {
        if let Err(e) = startup::register_current() {
            warn!("Failed to register launch at startup: {}", e);
        }
    }
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_CREATE => LRESULT(0),

            WM_TIMER => {
                timers::on_timer(hwnd, wparam.0);
                LRESULT(0)
            }

            // Drag the indicator by its body
            WM_NCHITTEST => LRESULT(HTCAPTION as isize),

            WM_DESTROY => {
                PostQuitMessage(0);
                LRESULT(0)
            }

            // System tray icon messages
            msg if msg == WM_TRAYICON => {
                match (lparam.0 as u32) & 0xFFFF {
                    WM_RBUTTONUP => {
                        // Copy out first; the menu runs a modal loop
                        if let Some(settings) = with_state(|s| s.store.settings().clone()) {
                            tray::show_tray_menu(hwnd, &settings, startup::is_registered());
                        }
                    }
                    WM_LBUTTONDBLCLK => publish_and_dispatch(hwnd, AppEvent::ShowNow),
                    _ => {}
                }
                LRESULT(0)
            }

            // Context menu commands
            WM_COMMAND => {
                let cmd = (wparam.0 & 0xFFFF) as u32;
                if let Some(event) = event_for_menu_id(cmd) {
                    publish_and_dispatch(hwnd, event);
                }
                LRESULT(0)
            }

            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}
