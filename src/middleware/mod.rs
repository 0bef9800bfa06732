//! Server middleware
//!
//! Provides logging setup and per-connection request logging.

pub mod logging;
