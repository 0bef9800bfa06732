//! Request handlers
//!
//! Turns one request line into one response: auth gate first, then command
//! validation, then the storage or navigate operation.

use crate::auth::authorize;
use crate::error::{MediaStoreError, handle_error};
use crate::navigate::{PageRequest, browse};
use crate::protocol::commands::Command;
use crate::protocol::parser::{decode_request, extract_key, extract_op, parse_line};
use crate::protocol::responses::{FileMoved, FolderCreated, FolderDeleted, FolderMoved, Pong, Response};
use crate::server::ServerContext;
use crate::storage::{create_folder, delete_folder, move_file, move_folder};

/// A response together with the operation name it answered, for logging.
#[derive(Debug)]
pub struct HandledRequest {
    pub op: String,
    pub response: Response,
}

impl HandledRequest {
    fn rejected(op: Option<&str>, err: MediaStoreError) -> Self {
        handle_error(&err);
        Self {
            op: op.unwrap_or("-").to_string(),
            response: Response::from_error(&err),
        }
    }
}

/// Handles one raw request line.
pub fn handle_line(context: &ServerContext, line: &str) -> HandledRequest {
    let value = match parse_line(line) {
        Ok(value) => value,
        Err(e) => return HandledRequest::rejected(None, e.into()),
    };

    let op = extract_op(&value).map(str::to_string);

    if let Err(e) = authorize(extract_key(&value), &context.auth) {
        return HandledRequest::rejected(op.as_deref(), e.into());
    }

    let command = match decode_request(value)
        .map_err(MediaStoreError::from)
        .and_then(Command::from_request)
    {
        Ok(command) => command,
        Err(e) => return HandledRequest::rejected(op.as_deref(), e),
    };

    let name = command.name();
    match execute(context, command) {
        Ok(response) => HandledRequest {
            op: name.to_string(),
            response,
        },
        Err(e) => HandledRequest::rejected(Some(name), e),
    }
}

/// Executes an authorized, validated command.
pub fn execute(context: &ServerContext, command: Command) -> Result<Response, MediaStoreError> {
    let sandbox = &context.sandbox;
    let media_base_url = context.storage.media_base_url.as_str();

    let response = match command {
        Command::Browse {
            path,
            page,
            limit,
            search,
        } => {
            let request =
                PageRequest::new(search, page, limit, context.storage.default_page_limit);
            let result = browse(
                sandbox,
                context.stats.as_ref(),
                media_base_url,
                &path,
                &request,
            )?;
            Response::ok(&result)
        }
        Command::CreateFolder { name, parent_path } => Response::ok(&FolderCreated {
            success: true,
            folder: create_folder(sandbox, &name, &parent_path)?,
        }),
        Command::DeleteFolder { path } => {
            Response::ok(&FolderDeleted::from(delete_folder(sandbox, &path)?))
        }
        Command::MoveFolder {
            source_path,
            dest_path,
        } => Response::ok(&FolderMoved {
            success: true,
            folder: move_folder(sandbox, &source_path, &dest_path)?,
        }),
        Command::MoveFile {
            source_path,
            dest_path,
        } => Response::ok(&FileMoved {
            success: true,
            file: move_file(sandbox, media_base_url, &source_path, &dest_path)?,
        }),
        Command::Ping => Response::ok(&Pong {
            success: true,
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }),
    };

    Ok(response)
}
