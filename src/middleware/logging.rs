//! Logging middleware
//!
//! Provides logging setup and request logging functionality.

use log::{info, warn};
use std::net::SocketAddr;

/// Setup logging for the server, defaulting to `info` when `RUST_LOG` is unset
pub fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Log a client connection
pub fn log_connection(client_addr: &SocketAddr) {
    info!("Client connected: {}", client_addr);
}

/// Log a client disconnect
pub fn log_disconnect(client_addr: &SocketAddr) {
    info!("Client {} disconnected", client_addr);
}

/// Log a handled request with its outcome
pub fn log_request(client_addr: &SocketAddr, op: &str, status: u16) {
    if status < 400 {
        info!("Client {} {} -> {}", client_addr, op, status);
    } else {
        warn!("Client {} {} -> {}", client_addr, op, status);
    }
}
