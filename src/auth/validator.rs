//! Access key validator
//!
//! Every request carries the shared secret; there is no session, so the key
//! is checked again for each operation.

use crate::config::AuthConfig;
use crate::error::AuthError;

const MAX_KEY_LENGTH: usize = 512;

/// Performs basic input sanitation to reject malformed keys before comparing.
fn is_valid_input(input: &str, max_length: usize) -> bool {
    !input.trim().is_empty() && input.len() <= max_length && !input.contains(['\r', '\n', '\0'])
}

/// Compares two byte strings without stopping at the first mismatch.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Validates the provided access key against the configured secret.
pub fn authorize(provided: Option<&str>, config: &AuthConfig) -> Result<(), AuthError> {
    let key = provided.ok_or(AuthError::MissingKey)?;

    if key.is_empty() {
        return Err(AuthError::MissingKey);
    }

    if !is_valid_input(key, MAX_KEY_LENGTH) {
        return Err(AuthError::MalformedInput("invalid key format".into()));
    }

    if constant_time_eq(key.as_bytes(), config.api_key.as_bytes()) {
        Ok(())
    } else {
        Err(AuthError::InvalidKey)
    }
}
