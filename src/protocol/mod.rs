//! Request protocol
//!
//! Line-delimited JSON: one request object per line in, one response object
//! per line out.

pub mod commands;
pub mod handlers;
pub mod parser;
pub mod responses;

pub use commands::{Command, Request};
pub use handlers::{HandledRequest, handle_line};
pub use responses::Response;
