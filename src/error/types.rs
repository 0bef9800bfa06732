//! Error types
//!
//! Defines domain-specific error types for each module of the media store.

use std::fmt;
use std::io;

/// Authentication module errors
#[derive(Debug)]
pub enum AuthError {
    MissingKey,
    InvalidKey,
    MalformedInput(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingKey => write!(f, "Unauthorized: missing access key"),
            AuthError::InvalidKey => write!(f, "Unauthorized: invalid access key"),
            AuthError::MalformedInput(s) => write!(f, "Unauthorized: malformed key ({})", s),
        }
    }
}

impl std::error::Error for AuthError {}

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    /// Path rejected by the sandbox guard
    InvalidPath(String),
    /// Required field absent or request semantically invalid
    Validation(String),
    /// Source of a move does not exist
    NotFound(String),
    IoError(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::InvalidPath(p) => write!(f, "Invalid path: {}", p),
            StorageError::Validation(msg) => write!(f, "{}", msg),
            StorageError::NotFound(p) => write!(f, "Not found: {}", p),
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

/// Request framing and decoding errors
#[derive(Debug)]
pub enum ProtocolError {
    MalformedRequest(String),
    UnknownOperation(String),
    MissingOperation,
    RequestTooLarge(usize),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::MalformedRequest(msg) => write!(f, "Malformed request: {}", msg),
            ProtocolError::UnknownOperation(op) => write!(f, "Unknown operation: {}", op),
            ProtocolError::MissingOperation => write!(f, "Missing operation"),
            ProtocolError::RequestTooLarge(limit) => {
                write!(f, "Request exceeds {} bytes", limit)
            }
        }
    }
}

impl std::error::Error for ProtocolError {}

/// General media store error that encompasses all error types
#[derive(Debug)]
pub enum MediaStoreError {
    Auth(AuthError),
    Storage(StorageError),
    Protocol(ProtocolError),
    ServiceUnavailable(String),
    Internal(String),
}

impl fmt::Display for MediaStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaStoreError::Auth(e) => write!(f, "{}", e),
            MediaStoreError::Storage(e) => write!(f, "{}", e),
            MediaStoreError::Protocol(e) => write!(f, "{}", e),
            MediaStoreError::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
            MediaStoreError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for MediaStoreError {}

impl From<AuthError> for MediaStoreError {
    fn from(error: AuthError) -> Self {
        MediaStoreError::Auth(error)
    }
}

impl From<StorageError> for MediaStoreError {
    fn from(error: StorageError) -> Self {
        MediaStoreError::Storage(error)
    }
}

impl From<ProtocolError> for MediaStoreError {
    fn from(error: ProtocolError) -> Self {
        MediaStoreError::Protocol(error)
    }
}

impl From<io::Error> for MediaStoreError {
    fn from(error: io::Error) -> Self {
        MediaStoreError::Storage(StorageError::IoError(error))
    }
}
