//! Browse operation implementation

use log::info;

use crate::error::StorageError;
use crate::navigate::breadcrumbs::build_breadcrumbs;
use crate::navigate::pagination::{self, PageRequest};
use crate::navigate::results::PageResult;
use crate::storage::results::{DirEntryKind, FileEntry, FolderEntry, public_url};
use crate::storage::validation::{join_relative, normalize_relative};
use crate::storage::{DirectoryStats, Sandbox, list_directory};

/// Lists one folder of the media tree: its subfolders in full plus one page
/// of its files, optionally narrowed by a search term.
///
/// Browsing a folder that does not exist yet returns an empty page.
pub fn browse(
    sandbox: &Sandbox,
    stats: &dyn DirectoryStats,
    media_base_url: &str,
    path: &str,
    request: &PageRequest,
) -> Result<PageResult, StorageError> {
    let real_path = sandbox.resolve(path)?;
    let current_path = normalize_relative(path);

    let mut files = Vec::new();
    let mut folders = Vec::new();

    for entry in list_directory(&real_path, sandbox.root(), stats)? {
        let relative = join_relative(&current_path, &entry.name);
        match entry.kind {
            DirEntryKind::Folder { item_count } => folders.push(FolderEntry {
                name: entry.name,
                path: relative,
                item_count,
            }),
            DirEntryKind::File {
                size,
                content_type,
                category,
                modified_at,
            } => files.push(FileEntry {
                url: public_url(media_base_url, &relative),
                name: entry.name,
                path: relative,
                size,
                content_type,
                category,
                modified_at,
            }),
        }
    }

    let (page, folders) = pagination::apply(files, folders, request);

    info!(
        "Browsed /{} - {} folders, {} of {} files (page {}/{})",
        current_path,
        folders.len(),
        page.items.len(),
        page.total,
        page.page,
        page.total_pages
    );

    Ok(PageResult {
        files: page.items,
        folders,
        breadcrumbs: build_breadcrumbs(&current_path),
        current_path,
        total_files: page.total,
        total_pages: page.total_pages,
        current_page: page.page,
    })
}
