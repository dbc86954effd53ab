//! Platform-specific implementations.
//!
//! Only Windows exposes the IME conversion mode this app reads; the rest
//! of the crate is portable and tested on every platform.

#[cfg(target_os = "windows")]
pub mod windows;
