//! Directory listing
//!
//! Enumerates the immediate children of a resolved directory and classifies
//! each into a folder or a file with its metadata.

use chrono::{DateTime, Utc};
use log::{debug, error};
use std::fs;
use std::io;
use std::path::Path;

use crate::error::StorageError;
use crate::storage::content_type::{category_for, content_type_for};
use crate::storage::results::{DirEntry, DirEntryKind};
use crate::storage::stats::DirectoryStats;

/// Dotfiles are never listed or counted.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Lists the non-hidden immediate children of `dir`, unsorted.
///
/// A directory that does not exist yields an empty listing. Symlinks whose
/// target lies outside the canonical `root` are left out.
pub fn list_directory(
    dir: &Path,
    root: &Path,
    stats: &dyn DirectoryStats,
) -> Result<Vec<DirEntry>, StorageError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("Listing missing directory {} as empty", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => {
            error!("Failed to list directory {}: {}", dir.display(), e);
            return Err(StorageError::from(e));
        }
    };

    let mut listed = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().to_string();
        if is_hidden(&name) {
            continue;
        }

        let path = entry.path();
        if entry.file_type().is_ok_and(|t| t.is_symlink()) && !target_within(&path, root) {
            debug!("Skipping {}: link target outside media root", path.display());
            continue;
        }

        // Follows symlinks, like a plain stat.
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                debug!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let kind = if metadata.is_dir() {
            DirEntryKind::Folder {
                item_count: stats.item_count(&path),
            }
        } else {
            DirEntryKind::File {
                size: metadata.len(),
                content_type: content_type_for(&name),
                category: category_for(&name),
                modified_at: metadata
                    .modified()
                    .map(DateTime::<Utc>::from)
                    .unwrap_or_default(),
            }
        };

        listed.push(DirEntry { name, kind });
    }

    debug!("Listed {} entries in {}", listed.len(), dir.display());
    Ok(listed)
}

fn target_within(link: &Path, root: &Path) -> bool {
    link.canonicalize()
        .is_ok_and(|target| target.starts_with(root))
}
