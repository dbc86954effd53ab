//! Timer-driven indicator updates.
//!
//! - REFRESH polls the IME status
//! - FRAME steps the show animation
//! - HIDE takes the indicator down after its delay

use std::time::{Duration, Instant};

use tracing::warn;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{KillTimer, SetTimer};

use super::state::with_state;
use crate::model::constants::{FRAME_INTERVAL, REFRESH_INTERVAL};

pub const TIMER_REFRESH: usize = 1;
pub const TIMER_FRAME: usize = 2;
pub const TIMER_HIDE: usize = 3;

pub fn start(hwnd: HWND, id: usize, after: Duration) {
    let ms = after.as_millis().clamp(1, u128::from(u32::MAX)) as u32;
    unsafe {
        SetTimer(Some(hwnd), id, ms, None);
    }
}

pub fn stop(hwnd: HWND, id: usize) {
    unsafe {
        let _ = KillTimer(Some(hwnd), id);
    }
}

/// Begin polling.
pub fn start_refresh(hwnd: HWND) {
    start(hwnd, TIMER_REFRESH, REFRESH_INTERVAL);
}

pub fn on_timer(hwnd: HWND, id: usize) {
    match id {
        TIMER_REFRESH => on_refresh(hwnd),
        TIMER_FRAME => on_frame(hwnd),
        TIMER_HIDE => on_hide(hwnd),
        _ => {}
    }
}

/// Poll once and show the indicator if the status changed.
pub fn on_refresh(hwnd: HWND) {
    let now = Instant::now();
    with_state(|s| {
        let Some(update) = s.controller.refresh(&mut s.probe, s.store.settings(), now) else {
            return;
        };

        // First animation frame: transparent and offset below the target
        let (origin, opacity) = s
            .controller
            .frame(now)
            .map_or((update.placement.origin, 1.0), |f| (f.origin, f.opacity));

        if let Err(e) = s.renderer.paint(
            hwnd,
            &update.content,
            update.placement.size,
            update.placement.scale,
            origin,
            opacity,
        ) {
            warn!("Failed to draw indicator: {}", e);
            s.controller.hide();
            return;
        }
        s.renderer.show(hwnd);

        start(hwnd, TIMER_FRAME, FRAME_INTERVAL);
        start(hwnd, TIMER_HIDE, update.hide_after);
    });
}

fn on_frame(hwnd: HWND) {
    let now = Instant::now();
    let running = with_state(|s| match s.controller.frame(now) {
        Some(frame) => {
            let _ = s.renderer.move_and_fade(hwnd, frame.origin, frame.opacity);
            !frame.finished
        }
        None => false,
    });

    // Leave the timer alone when the state was busy; the next tick retries
    if running == Some(false) {
        stop(hwnd, TIMER_FRAME);
    }
}

fn on_hide(hwnd: HWND) {
    stop(hwnd, TIMER_HIDE);
    let now = Instant::now();
    let remaining = with_state(|s| match s.controller.time_until_hide(now) {
        Some(left) if left.is_zero() => {
            s.controller.hide();
            s.renderer.hide(hwnd);
            None
        }
        other => other,
    });

    match remaining {
        // Not due yet, or a modal loop held the state
        Some(Some(left)) => start(hwnd, TIMER_HIDE, left),
        None => start(hwnd, TIMER_HIDE, FRAME_INTERVAL),
        Some(None) => stop(hwnd, TIMER_FRAME),
    }
}
