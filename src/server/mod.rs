//! Server core functionality
//!
//! This module contains the listener loop and the shared request context.

pub mod context;
pub mod listener;

pub use context::ServerContext;
pub use listener::Server;
