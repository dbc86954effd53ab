//! UI components for Windows.

pub mod dialogs;
pub mod overlay;
pub mod tray;

pub use dialogs::*;
pub use overlay::*;
pub use tray::*;
