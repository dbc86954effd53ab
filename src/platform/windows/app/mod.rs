//! Windows application runtime.

pub mod state;
pub mod timers;
