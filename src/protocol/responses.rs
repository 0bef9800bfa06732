//! Response formatting
//!
//! Every response line is `{"status": <code>, "body": {...}}`.

use log::error;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MediaStoreError, status_code};
use crate::storage::results::{CreatedFolder, DeleteOutcome, MovedFile, MovedFolder};

pub const OK: u16 = 200;
pub const INTERNAL_ERROR: u16 = 500;

/// A status code plus a JSON body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    success: bool,
    error: &'a str,
}

#[derive(Debug, Serialize)]
pub struct FolderCreated {
    pub success: bool,
    pub folder: CreatedFolder,
}

#[derive(Debug, Serialize)]
pub struct FolderDeleted {
    pub success: bool,
    pub message: &'static str,
}

impl From<DeleteOutcome> for FolderDeleted {
    fn from(outcome: DeleteOutcome) -> Self {
        Self {
            success: true,
            message: outcome.message(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FolderMoved {
    pub success: bool,
    pub folder: MovedFolder,
}

#[derive(Debug, Serialize)]
pub struct FileMoved {
    pub success: bool,
    pub file: MovedFile,
}

#[derive(Debug, Serialize)]
pub struct Pong {
    pub success: bool,
    pub name: &'static str,
    pub version: &'static str,
}

impl Response {
    /// 200 with the serialized body
    pub fn ok<T: Serialize>(body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self { status: OK, body },
            Err(e) => {
                error!("Failed to serialize response body: {}", e);
                Self::error(INTERNAL_ERROR, "Failed to serialize response")
            }
        }
    }

    /// Error response with the status mapped from the error
    pub fn from_error(err: &MediaStoreError) -> Self {
        Self::error(status_code(err), &err.to_string())
    }

    fn error(status: u16, message: &str) -> Self {
        let body = ErrorBody {
            success: false,
            error: message,
        };
        Self {
            status,
            body: serde_json::to_value(&body).unwrap_or(Value::Null),
        }
    }

    /// Serializes the response as one newline-terminated line
    pub fn to_line(&self) -> String {
        let mut line = serde_json::to_string(self).unwrap_or_else(|e| {
            error!("Failed to serialize response: {}", e);
            format!(
                r#"{{"status":{},"body":{{"success":false,"error":"serialization failed"}}}}"#,
                INTERNAL_ERROR
            )
        });
        line.push('\n');
        line
    }
}
