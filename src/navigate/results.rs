//! Result types for navigate operations

use serde::Serialize;

use crate::storage::results::{FileEntry, FolderEntry};

/// One step of the ancestor chain from the root to the current folder
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Breadcrumb {
    pub name: String,
    pub path: String,
}

/// Result of a browse operation
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub files: Vec<FileEntry>,
    pub folders: Vec<FolderEntry>,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub current_path: String,
    pub total_files: usize,
    pub total_pages: usize,
    pub current_page: usize,
}
