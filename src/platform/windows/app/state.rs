//! Windows runtime state management.
//!
//! Contains the application state struct and thread-local storage.
//! Everything runs on the UI thread; the state is only borrowed for
//! short, non-reentrant sections.

use std::cell::RefCell;

use windows::Win32::Foundation::HWND;

use crate::events::EventBus;
use crate::indicator::IndicatorController;
use crate::platform::windows::probe::Win32Probe;
use crate::platform::windows::ui::OverlayRenderer;
use crate::storage::ConfigStore;

/// Windows-specific runtime state.
pub struct WindowsRuntimeState {
    /// The layered overlay window; also receives tray and timer messages.
    pub hwnd: HWND,
    pub store: ConfigStore,
    pub controller: IndicatorController,
    pub probe: Win32Probe,
    pub renderer: OverlayRenderer,
    pub events: EventBus,
}

thread_local! {
    static STATE: RefCell<Option<WindowsRuntimeState>> = const { RefCell::new(None) };
}

pub fn install(state: WindowsRuntimeState) {
    STATE.with(|s| *s.borrow_mut() = Some(state));
}

/// Remove the state, typically after the message loop ended.
pub fn take() -> Option<WindowsRuntimeState> {
    STATE.with(|s| s.try_borrow_mut().ok().and_then(|mut s| s.take()))
}

/// Run `f` with the state.
///
/// Returns `None` if the state is not installed or is already borrowed
/// further up the stack (a message pumped from inside a modal loop).
pub fn with_state<R>(f: impl FnOnce(&mut WindowsRuntimeState) -> R) -> Option<R> {
    STATE.with(|s| {
        let mut guard = s.try_borrow_mut().ok()?;
        guard.as_mut().map(f)
    })
}
