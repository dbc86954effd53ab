//! Dialog windows for Windows.

mod about_dialog;

pub use about_dialog::*;
