//! Request and command types
//!
//! A [`Request`] is the loosely-typed wire form; [`Command`] is what the
//! handlers execute once required fields have been checked.

use serde::Deserialize;

use crate::error::{MediaStoreError, ProtocolError, StorageError};

/// Decoded request line. Every field is optional so that a missing field
/// surfaces as a validation error rather than a parse failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub op: Option<String>,
    pub key: Option<String>,
    pub path: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub search: Option<String>,
    pub name: Option<String>,
    pub parent_path: Option<String>,
    pub source_path: Option<String>,
    pub dest_path: Option<String>,
}

/// A validated media store operation.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Browse {
        path: String,
        page: Option<usize>,
        limit: Option<usize>,
        search: Option<String>,
    },
    CreateFolder {
        name: String,
        parent_path: String,
    },
    DeleteFolder {
        path: String,
    },
    MoveFolder {
        source_path: String,
        dest_path: String,
    },
    MoveFile {
        source_path: String,
        dest_path: String,
    },
    Ping,
}

fn required(value: Option<String>, message: &str) -> Result<String, MediaStoreError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(StorageError::Validation(message.to_string()).into()),
    }
}

impl Command {
    /// Short operation name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Browse { .. } => "browse",
            Command::CreateFolder { .. } => "createFolder",
            Command::DeleteFolder { .. } => "deleteFolder",
            Command::MoveFolder { .. } => "moveFolder",
            Command::MoveFile { .. } => "moveFile",
            Command::Ping => "ping",
        }
    }

    /// Builds a command from a request, checking required fields.
    pub fn from_request(request: Request) -> Result<Command, MediaStoreError> {
        let op = request.op.ok_or(ProtocolError::MissingOperation)?;

        match op.as_str() {
            "browse" => Ok(Command::Browse {
                path: request.path.unwrap_or_default(),
                page: request.page,
                limit: request.limit,
                search: request.search,
            }),
            "createFolder" => Ok(Command::CreateFolder {
                name: required(request.name, "Folder name is required")?,
                parent_path: request.parent_path.unwrap_or_default(),
            }),
            "deleteFolder" => Ok(Command::DeleteFolder {
                path: required(request.path, "Folder path is required")?,
            }),
            "moveFolder" | "moveFile" => {
                let message = "Source and destination paths are required";
                let source_path = required(request.source_path, message)?;
                let dest_path = required(request.dest_path, message)?;
                if op == "moveFolder" {
                    Ok(Command::MoveFolder {
                        source_path,
                        dest_path,
                    })
                } else {
                    Ok(Command::MoveFile {
                        source_path,
                        dest_path,
                    })
                }
            }
            "ping" => Ok(Command::Ping),
            _ => Err(ProtocolError::UnknownOperation(op).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(op: &str) -> Request {
        Request {
            op: Some(op.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_browse_defaults_to_root() {
        assert_eq!(
            Command::from_request(request("browse")).unwrap(),
            Command::Browse {
                path: String::new(),
                page: None,
                limit: None,
                search: None
            }
        );
    }

    #[test]
    fn test_create_folder_requires_name() {
        let err = Command::from_request(request("createFolder")).unwrap_err();
        assert!(matches!(
            err,
            MediaStoreError::Storage(StorageError::Validation(_))
        ));

        let mut with_name = request("createFolder");
        with_name.name = Some("logo".into());
        with_name.parent_path = Some("brand".into());
        assert_eq!(
            Command::from_request(with_name).unwrap(),
            Command::CreateFolder {
                name: "logo".into(),
                parent_path: "brand".into()
            }
        );
    }

    #[test]
    fn test_delete_requires_non_empty_path() {
        let mut req = request("deleteFolder");
        req.path = Some(String::new());
        assert!(matches!(
            Command::from_request(req),
            Err(MediaStoreError::Storage(StorageError::Validation(_)))
        ));
    }

    #[test]
    fn test_moves_require_both_paths() {
        for op in ["moveFolder", "moveFile"] {
            let mut req = request(op);
            req.source_path = Some("a".into());
            assert!(matches!(
                Command::from_request(req),
                Err(MediaStoreError::Storage(StorageError::Validation(_)))
            ));
        }

        let mut req = request("moveFile");
        req.source_path = Some("a.png".into());
        req.dest_path = Some("b/a.png".into());
        assert_eq!(
            Command::from_request(req).unwrap().name(),
            "moveFile"
        );
    }

    #[test]
    fn test_unknown_and_missing_op() {
        assert!(matches!(
            Command::from_request(request("format")),
            Err(MediaStoreError::Protocol(ProtocolError::UnknownOperation(_)))
        ));
        assert!(matches!(
            Command::from_request(Request::default()),
            Err(MediaStoreError::Protocol(ProtocolError::MissingOperation))
        ));
    }
}
