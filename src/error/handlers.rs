//! Error handlers
//!
//! Maps errors to response status codes and logs them at a fitting level.

use crate::error::types::{MediaStoreError, ProtocolError, StorageError};
use log::{error, warn};

/// Log a media store error
pub fn handle_error(err: &MediaStoreError) {
    match status_code(err) {
        500.. => error!("Media store error: {}", err),
        _ => warn!("Request rejected: {}", err),
    }
}

/// Convert error to response status code
pub fn status_code(err: &MediaStoreError) -> u16 {
    match err {
        MediaStoreError::Auth(_) => 401,
        MediaStoreError::Storage(StorageError::InvalidPath(_)) => 400,
        MediaStoreError::Storage(StorageError::Validation(_)) => 400,
        MediaStoreError::Storage(StorageError::NotFound(_)) => 404,
        MediaStoreError::Storage(StorageError::IoError(_)) => 500,
        MediaStoreError::Protocol(ProtocolError::RequestTooLarge(_)) => 413,
        MediaStoreError::Protocol(_) => 400,
        MediaStoreError::ServiceUnavailable(_) => 503,
        MediaStoreError::Internal(_) => 500,
    }
}
