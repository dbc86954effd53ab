//! Event system for decoupled tray → app communication.
//!
//! The window procedure translates tray menu commands into [`AppEvent`]s
//! and publishes them on the [`EventBus`]; the dispatcher drains the bus
//! and applies them to the runtime state.
//!
//! ```text
//! ┌─────────────┐   event_for_menu_id()   ┌─────────────┐
//! │  Tray menu  │ ──────────────────────► │  EventBus   │
//! │ (WM_COMMAND)│        publish()        │   (mpsc)    │
//! └─────────────┘                         └──────┬──────┘
//!                                                │ drain()
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │ Dispatcher  │
//!                                         └─────────────┘
//! ```
//!
//! # Module Structure
//!
//! - [`types`]: Event definitions (`AppEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types
//! - [`menu`]: Tray menu command IDs

pub mod bus;
pub mod menu;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use menu::event_for_menu_id;
pub use types::AppEvent;
