//! Message handlers for Windows.

pub mod dispatcher;

pub use dispatcher::*;
