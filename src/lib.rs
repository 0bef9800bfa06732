//! Media store server
//!
//! A sandboxed media tree served over a line-delimited JSON protocol:
//! browse with pagination and search, plus folder create/delete/move and
//! file move, all behind a static access key.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod middleware;
pub mod navigate;
pub mod protocol;
pub mod server;
pub mod storage;

pub use config::ServerConfig;
pub use server::{Server, ServerContext};
