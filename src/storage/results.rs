//! Storage result types
//!
//! Entries produced by the directory lister and the payloads returned by
//! folder and file mutations.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::storage::content_type::MediaCategory;

/// Kind-specific data of a listed entry.
#[derive(Debug, Clone, PartialEq)]
pub enum DirEntryKind {
    Folder {
        item_count: usize,
    },
    File {
        size: u64,
        content_type: &'static str,
        category: MediaCategory,
        modified_at: DateTime<Utc>,
    },
}

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq)]
pub struct DirEntry {
    pub name: String,
    pub kind: DirEntryKind,
}

/// A file as shown to clients.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub name: String,
    pub path: String,
    pub url: String,
    pub size: u64,
    pub content_type: &'static str,
    pub category: MediaCategory,
    pub modified_at: DateTime<Utc>,
}

/// A folder as shown to clients.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FolderEntry {
    pub name: String,
    pub path: String,
    pub item_count: usize,
}

/// Result of a folder creation
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreatedFolder {
    pub name: String,
    pub path: String,
}

/// Result of a folder deletion. `existed` only changes the message; a
/// missing folder still counts as deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    pub path: String,
    pub existed: bool,
}

impl DeleteOutcome {
    pub fn message(&self) -> &'static str {
        if self.existed {
            "Folder deleted successfully"
        } else {
            "Folder does not exist (nothing to delete)"
        }
    }
}

/// Result of a folder move
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MovedFolder {
    pub path: String,
}

/// Result of a file move
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MovedFile {
    pub path: String,
    pub url: String,
}

/// Builds the public URL of a stored file: the media base joined to the
/// relative path with exactly one `/`.
pub fn public_url(media_base_url: &str, relative_path: &str) -> String {
    let relative = relative_path.trim_start_matches('/');
    if media_base_url.is_empty() {
        return format!("/{}", relative);
    }
    if media_base_url.ends_with('/') {
        format!("{}{}", media_base_url, relative)
    } else {
        format!("{}/{}", media_base_url, relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_url() {
        assert_eq!(public_url("/media/", "brand/logo.png"), "/media/brand/logo.png");
        assert_eq!(public_url("/media", "brand/logo.png"), "/media/brand/logo.png");
        assert_eq!(public_url("/media/", "/logo.png"), "/media/logo.png");
        assert_eq!(
            public_url("https://cdn.example.com/m/", "a.png"),
            "https://cdn.example.com/m/a.png"
        );
        assert_eq!(public_url("", "a.png"), "/a.png");
    }

    #[test]
    fn test_delete_messages_differ() {
        let deleted = DeleteOutcome {
            path: "brand".into(),
            existed: true,
        };
        let missing = DeleteOutcome {
            path: "brand".into(),
            existed: false,
        };
        assert_ne!(deleted.message(), missing.message());
    }

    #[test]
    fn test_file_entry_wire_names() {
        let entry = FileEntry {
            name: "logo.png".into(),
            path: "brand/logo.png".into(),
            url: "/media/brand/logo.png".into(),
            size: 42,
            content_type: "image/png",
            category: MediaCategory::Image,
            modified_at: DateTime::<Utc>::default(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["contentType"], "image/png");
        assert_eq!(json["category"], "image");
        assert_eq!(json["size"], 42);
        assert_eq!(json["modifiedAt"], "1970-01-01T00:00:00Z");
    }
}
