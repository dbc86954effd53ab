//! Event dispatcher for Windows.
//!
//! Tray commands arrive as [`AppEvent`]s on the bus and are applied here
//! on the UI thread.

use tracing::{debug, info, warn};
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::DestroyWindow;

use crate::events::AppEvent;
use crate::model::constants::HIDE_DELAY_PRESETS;
use crate::model::Settings;
use crate::platform::windows::app::state::with_state;
use crate::platform::windows::app::timers;
use crate::platform::windows::startup;
use crate::platform::windows::ui::show_about_dialog;

/// Queue an event and apply everything pending.
pub fn publish_and_dispatch(hwnd: HWND, event: AppEvent) {
    with_state(|s| s.events.publisher().publish(event));
    dispatch_events(hwnd);
}

/// Dispatch pending events from the event bus.
///
/// Must be called from the UI thread.
pub fn dispatch_events(hwnd: HWND) {
    let events = with_state(|s| s.events.drain()).unwrap_or_default();
    for event in events {
        debug!(event = event.description(), "dispatch");
        let persist = event.changes_settings();
        handle(hwnd, event);
        if persist {
            save_settings();
        }
    }
}

fn handle(hwnd: HWND, event: AppEvent) {
    match event {
        AppEvent::ToggleStartup => toggle_startup(),
        AppEvent::ToggleShowShape => update_settings(|s| s.show_shape = !s.show_shape),
        AppEvent::ToggleShowSymbol => update_settings(|s| s.show_symbol = !s.show_symbol),
        AppEvent::SetHideDelay(index) => match HIDE_DELAY_PRESETS.get(index) {
            Some(&multiplier) => update_settings(|s| s.hide_delay_multiplier = multiplier),
            None => warn!(index, "unknown hide delay preset"),
        },
        AppEvent::SetPlacement(mode) => update_settings(|s| s.placement = mode),
        AppEvent::ShowNow => {
            with_state(|s| s.controller.force_next());
            timers::on_refresh(hwnd);
        }
        // Modal; runs without holding the state
        AppEvent::ShowAbout => show_about_dialog(hwnd),
        AppEvent::Quit => {
            info!("Quit requested");
            unsafe {
                let _ = DestroyWindow(hwnd);
            }
        }
    }
}

fn update_settings(f: impl FnOnce(&mut Settings)) {
    with_state(|s| s.store.update(f));
}

/// Write pending settings to disk.
fn save_settings() {
    with_state(|s| {
        if let Err(e) = s.store.flush() {
            warn!("Failed to save config: {}", e);
        }
    });
}

/// Flip the Run key registration and record the result.
fn toggle_startup() {
    let result = if startup::is_registered() {
        startup::unregister()
    } else {
        startup::register_current()
    };
    if let Err(e) = result {
        warn!("Failed to change startup registration: {}", e);
    }

    let registered = startup::is_registered();
    update_settings(|s| s.launch_at_startup = registered);
}
