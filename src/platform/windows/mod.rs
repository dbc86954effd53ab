//! Windows-specific implementation using Win32 API and Direct2D.
//!
//! This module contains all Windows-specific code:
//! - Runtime state, timers and event dispatch
//! - The IME / caret / monitor probe
//! - UI components (layered overlay, tray icon, about dialog)
//! - Launch-at-startup registration and working-set trimming

pub mod app;
pub mod handlers;
pub mod memory;
pub mod probe;
pub mod startup;
pub mod ui;
pub mod window_style;
