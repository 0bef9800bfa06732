//! Path validation
//!
//! Maps client-supplied relative paths onto the media root and rejects any
//! path that could escape it, whether lexically (`..`) or through a symlink.

use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::StorageError;

/// Returns true when the raw client path contains a `..` sequence anywhere.
///
/// This is a substring test: `a..b` is rejected too.
pub fn has_traversal(path: &str) -> bool {
    path.contains("..")
}

/// Strips leading, trailing and duplicate separators as well as `.` segments.
pub fn normalize_relative(path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Joins a parent relative path and a child name with a single separator.
pub fn join_relative(parent: &str, name: &str) -> String {
    let parent = normalize_relative(parent);
    if parent.is_empty() {
        normalize_relative(name)
    } else {
        format!("{}/{}", parent, normalize_relative(name))
    }
}

/// The sandbox root every resolved path must stay inside.
#[derive(Debug, Clone)]
pub struct Sandbox {
    root: PathBuf,
}

impl Sandbox {
    /// Creates a sandbox over an existing directory. The root is canonicalized
    /// once so later containment checks compare like with like.
    pub fn new(root: &Path) -> io::Result<Self> {
        let root = root.canonicalize()?;
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("media root is not a directory: {}", root.display()),
            ));
        }
        Ok(Self { root })
    }

    /// Canonical absolute path of the media root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a relative path to an absolute path inside the root.
    ///
    /// An empty path resolves to the root itself.
    pub fn resolve(&self, relative: &str) -> Result<PathBuf, StorageError> {
        if relative.contains('\0') || has_traversal(relative) {
            return Err(StorageError::InvalidPath(relative.to_string()));
        }

        let normalized = normalize_relative(relative);
        if normalized.is_empty() {
            return Ok(self.root.clone());
        }

        let only_normal = Path::new(&normalized)
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if !only_normal {
            return Err(StorageError::InvalidPath(relative.to_string()));
        }

        let target = self.root.join(&normalized);
        self.ensure_contained(&target, relative)?;
        Ok(target)
    }

    /// Like [`Sandbox::resolve`], but refuses to hand out the root itself.
    pub fn resolve_for_mutation(&self, relative: &str) -> Result<PathBuf, StorageError> {
        let target = self.resolve(relative)?;
        if target == self.root {
            return Err(StorageError::InvalidPath(format!(
                "{} (the media root cannot be modified)",
                relative
            )));
        }
        Ok(target)
    }

    /// Canonicalizes the deepest existing ancestor of `target` and checks it
    /// is still below the root, which catches symlinks pointing outside.
    fn ensure_contained(&self, target: &Path, relative: &str) -> Result<(), StorageError> {
        for ancestor in target.ancestors() {
            if !ancestor.starts_with(&self.root) {
                break;
            }
            if ancestor.symlink_metadata().is_err() {
                continue;
            }
            match ancestor.canonicalize() {
                Ok(canonical) if canonical.starts_with(&self.root) => return Ok(()),
                Ok(_) => return Err(StorageError::InvalidPath(relative.to_string())),
                // Dangling symlink: check the directory that holds it instead.
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(StorageError::IoError(e)),
            }
        }
        Ok(())
    }
}
