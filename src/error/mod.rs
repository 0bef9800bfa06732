//! Error handling
//!
//! Defines error types and status mapping for the media store.

pub mod handlers;
pub mod types;

pub use handlers::{handle_error, status_code};
pub use types::*;
