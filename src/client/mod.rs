//! Client connection handling
//!
//! One task per connection; the connection carries no state between requests.

pub mod handler;

pub use handler::{handle_client, reject_busy};
