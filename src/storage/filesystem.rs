//! File system operations
//!
//! Thin wrappers over `std::fs` with the semantics the mutators rely on.

use std::fs;
use std::io::{ErrorKind, Result};
use std::path::Path;

/// Create a directory and any missing ancestors; existing directories are fine
pub fn create_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
}

/// Check if anything (file, folder or symlink) exists at `path`
pub fn entry_exists(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

/// Create the parent directory chain of `path`
pub fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) => fs::create_dir_all(parent),
        None => Ok(()),
    }
}

/// Remove a directory tree. Returns `false` if nothing was there.
///
/// A failure partway through may leave the tree partially removed.
pub fn remove_tree(path: &Path) -> Result<bool> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Single rename; atomic only when both paths are on the same volume
pub fn rename_entry(source: &Path, destination: &Path) -> Result<()> {
    fs::rename(source, destination)
}
