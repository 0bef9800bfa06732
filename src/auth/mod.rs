//! Authentication gate
//!
//! Validates the static access key supplied with each request.

pub mod validator;

pub use validator::authorize;
