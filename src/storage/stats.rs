//! Directory statistics
//!
//! Folder item counts are served through [`DirectoryStats`] so a cached or
//! indexed source can replace the live scan without touching browse.

use std::fs;
use std::path::Path;

use crate::storage::listing::is_hidden;

pub trait DirectoryStats: Send + Sync {
    /// Number of non-hidden immediate children of `dir`. Never fails:
    /// unreadable directories count as empty.
    fn item_count(&self, dir: &Path) -> usize;
}

/// Counts children with a fresh `read_dir` on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct LiveDirectoryStats;

impl DirectoryStats for LiveDirectoryStats {
    fn item_count(&self, dir: &Path) -> usize {
        match fs::read_dir(dir) {
            Ok(entries) => entries
                .flatten()
                .filter(|entry| !is_hidden(&entry.file_name().to_string_lossy()))
                .count(),
            Err(_) => 0,
        }
    }
}
