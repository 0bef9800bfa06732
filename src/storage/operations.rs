//! Storage operations
//!
//! Folder create/delete/move and file move. Each call is a single-shot
//! change against the filesystem with no coordination between requests.

use log::{error, info};
use std::path::Path;

use crate::error::StorageError;
use crate::storage::filesystem::{
    create_directory, ensure_parent, entry_exists, remove_tree, rename_entry,
};
use crate::storage::results::{CreatedFolder, DeleteOutcome, MovedFile, MovedFolder, public_url};
use crate::storage::validation::{Sandbox, has_traversal, join_relative, normalize_relative};

fn require<'a>(value: &'a str, message: &str) -> Result<&'a str, StorageError> {
    if value.trim().is_empty() {
        Err(StorageError::Validation(message.to_string()))
    } else {
        Ok(value)
    }
}

/// Creates `name` under `parent_path`, including missing ancestors.
///
/// Creating a folder that already exists succeeds.
pub fn create_folder(
    sandbox: &Sandbox,
    name: &str,
    parent_path: &str,
) -> Result<CreatedFolder, StorageError> {
    let name = require(name, "Folder name is required")?;
    if normalize_relative(name).is_empty() {
        return Err(StorageError::Validation("Folder name is required".into()));
    }

    let folder_path = join_relative(parent_path, name);
    let real_path = sandbox.resolve_for_mutation(&folder_path)?;

    create_directory(&real_path).map_err(|e| {
        error!("Failed to create folder {}: {}", folder_path, e);
        StorageError::from(e)
    })?;

    info!("Created folder {} (real: {})", folder_path, real_path.display());

    Ok(CreatedFolder {
        name: name.to_string(),
        path: folder_path,
    })
}

/// Recursively deletes a folder. Deleting a missing folder succeeds.
pub fn delete_folder(sandbox: &Sandbox, path: &str) -> Result<DeleteOutcome, StorageError> {
    let path = require(path, "Folder path is required")?;
    let real_path = sandbox.resolve_for_mutation(path)?;

    let existed = remove_tree(&real_path).map_err(|e| {
        error!("Failed to delete folder {}: {}", path, e);
        StorageError::from(e)
    })?;

    if existed {
        info!("Deleted folder {} (real: {})", path, real_path.display());
    } else {
        info!("Delete of missing folder {} treated as success", path);
    }

    Ok(DeleteOutcome {
        path: normalize_relative(path),
        existed,
    })
}

/// Moves a folder with a single rename.
///
/// The destination may not be the source or lie below it. Self/descendant
/// detection compares path strings, not inodes.
pub fn move_folder(
    sandbox: &Sandbox,
    source_path: &str,
    dest_path: &str,
) -> Result<MovedFolder, StorageError> {
    let source_path = require(source_path, "Source and destination paths are required")?;
    let dest_path = require(dest_path, "Source and destination paths are required")?;

    if has_traversal(source_path) || has_traversal(dest_path) {
        return Err(StorageError::InvalidPath(format!(
            "{} -> {}",
            source_path, dest_path
        )));
    }

    let source = normalize_relative(source_path);
    let dest = normalize_relative(dest_path);
    if dest == source || dest.starts_with(&format!("{}/", source)) {
        return Err(StorageError::Validation(
            "Cannot move a folder into itself or one of its subfolders".into(),
        ));
    }

    let real_source = sandbox.resolve_for_mutation(&source)?;
    let real_dest = sandbox.resolve_for_mutation(&dest)?;

    if !entry_exists(&real_source) {
        return Err(StorageError::NotFound(source));
    }

    relocate(&real_source, &real_dest, &source, &dest)?;
    info!("Moved folder {} -> {}", source, dest);

    Ok(MovedFolder { path: dest })
}

/// Moves a single file with a single rename and reports its new public URL.
pub fn move_file(
    sandbox: &Sandbox,
    media_base_url: &str,
    source_path: &str,
    dest_path: &str,
) -> Result<MovedFile, StorageError> {
    let source_path = require(source_path, "Source and destination paths are required")?;
    let dest_path = require(dest_path, "Source and destination paths are required")?;

    let real_source = sandbox.resolve_for_mutation(source_path)?;
    let real_dest = sandbox.resolve_for_mutation(dest_path)?;

    let source = normalize_relative(source_path);
    let dest = normalize_relative(dest_path);

    if !entry_exists(&real_source) {
        return Err(StorageError::NotFound(source));
    }

    relocate(&real_source, &real_dest, &source, &dest)?;
    info!("Moved file {} -> {}", source, dest);

    Ok(MovedFile {
        url: public_url(media_base_url, &dest),
        path: dest,
    })
}

fn relocate(
    real_source: &Path,
    real_dest: &Path,
    source: &str,
    dest: &str,
) -> Result<(), StorageError> {
    ensure_parent(real_dest)
        .and_then(|_| rename_entry(real_source, real_dest))
        .map_err(|e| {
            error!("Failed to move {} -> {}: {}", source, dest, e);
            StorageError::from(e)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sandbox() -> (TempDir, Sandbox) {
        let dir = TempDir::new().unwrap();
        let sandbox = Sandbox::new(dir.path()).unwrap();
        (dir, sandbox)
    }

    #[test]
    fn test_create_folder_under_parent() {
        let (dir, sandbox) = sandbox();
        let created = create_folder(&sandbox, "logo", "brand").unwrap();
        assert_eq!(
            created,
            CreatedFolder {
                name: "logo".into(),
                path: "brand/logo".into()
            }
        );
        assert!(dir.path().join("brand/logo").is_dir());
    }

    #[test]
    fn test_create_folder_at_root_and_again() {
        let (dir, sandbox) = sandbox();
        assert_eq!(create_folder(&sandbox, "brand", "").unwrap().path, "brand");
        assert!(create_folder(&sandbox, "brand", "").is_ok());
        assert!(dir.path().join("brand").is_dir());
    }

    #[test]
    fn test_create_folder_requires_name() {
        let (_dir, sandbox) = sandbox();
        assert!(matches!(
            create_folder(&sandbox, "", "brand"),
            Err(StorageError::Validation(_))
        ));
        assert!(matches!(
            create_folder(&sandbox, "/", ""),
            Err(StorageError::Validation(_))
        ));
    }

    #[test]
    fn test_create_folder_rejects_traversal() {
        let (_dir, sandbox) = sandbox();
        assert!(matches!(
            create_folder(&sandbox, "..", "brand"),
            Err(StorageError::InvalidPath(_))
        ));
        assert!(matches!(
            create_folder(&sandbox, "x", "../outside"),
            Err(StorageError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_delete_folder_recursive() {
        let (dir, sandbox) = sandbox();
        fs::create_dir_all(dir.path().join("brand/logo")).unwrap();
        fs::write(dir.path().join("brand/logo/a.png"), b"a").unwrap();

        let outcome = delete_folder(&sandbox, "brand").unwrap();
        assert!(outcome.existed);
        assert!(!dir.path().join("brand").exists());
    }

    #[test]
    fn test_delete_missing_folder_succeeds() {
        let (_dir, sandbox) = sandbox();
        let outcome = delete_folder(&sandbox, "never/was").unwrap();
        assert!(!outcome.existed);
        assert_eq!(outcome.path, "never/was");
    }

    #[test]
    fn test_delete_requires_path_and_spares_root() {
        let (dir, sandbox) = sandbox();
        fs::write(dir.path().join("keep.png"), b"k").unwrap();

        assert!(matches!(
            delete_folder(&sandbox, ""),
            Err(StorageError::Validation(_))
        ));
        assert!(matches!(
            delete_folder(&sandbox, "/"),
            Err(StorageError::InvalidPath(_))
        ));
        assert!(dir.path().join("keep.png").exists());
    }

    #[test]
    fn test_move_folder() {
        let (dir, sandbox) = sandbox();
        fs::create_dir_all(dir.path().join("brand")).unwrap();
        fs::write(dir.path().join("brand/a.png"), b"a").unwrap();

        let moved = move_folder(&sandbox, "brand", "archive/2024/brand").unwrap();
        assert_eq!(moved.path, "archive/2024/brand");
        assert!(dir.path().join("archive/2024/brand/a.png").exists());
        assert!(!dir.path().join("brand").exists());
    }

    #[test]
    fn test_move_folder_into_itself_rejected() {
        let (dir, sandbox) = sandbox();
        fs::create_dir_all(dir.path().join("brand/sub")).unwrap();

        for dest in ["brand", "brand/sub", "brand/new", "brand/a/b", "/brand/"] {
            assert!(
                matches!(
                    move_folder(&sandbox, "brand", dest),
                    Err(StorageError::Validation(_))
                ),
                "{dest} should be rejected"
            );
        }
        assert!(dir.path().join("brand/sub").is_dir());
        assert!(!dir.path().join("brand/new").exists());
    }

    #[test]
    fn test_move_folder_sibling_prefix_allowed() {
        let (dir, sandbox) = sandbox();
        fs::create_dir_all(dir.path().join("brand")).unwrap();

        assert!(move_folder(&sandbox, "brand", "brand-old").is_ok());
        assert!(dir.path().join("brand-old").is_dir());
    }

    #[test]
    fn test_move_folder_traversal_rejected() {
        let (_dir, sandbox) = sandbox();
        assert!(matches!(
            move_folder(&sandbox, "../x", "y"),
            Err(StorageError::InvalidPath(_))
        ));
        assert!(matches!(
            move_folder(&sandbox, "x", "y/../../z"),
            Err(StorageError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_move_missing_folder_leaves_destination_untouched() {
        let (dir, sandbox) = sandbox();
        assert!(matches!(
            move_folder(&sandbox, "ghost", "new/parent/ghost"),
            Err(StorageError::NotFound(_))
        ));
        assert!(!dir.path().join("new").exists());
    }

    #[test]
    fn test_move_folder_requires_both_paths() {
        let (_dir, sandbox) = sandbox();
        assert!(matches!(
            move_folder(&sandbox, "", "x"),
            Err(StorageError::Validation(_))
        ));
        assert!(matches!(
            move_folder(&sandbox, "x", ""),
            Err(StorageError::Validation(_))
        ));
    }

    #[test]
    fn test_move_file() {
        let (dir, sandbox) = sandbox();
        fs::create_dir_all(dir.path().join("inbox")).unwrap();
        fs::write(dir.path().join("inbox/logo.png"), b"png").unwrap();

        let moved = move_file(&sandbox, "/media/", "inbox/logo.png", "brand/logo.png").unwrap();
        assert_eq!(moved.path, "brand/logo.png");
        assert_eq!(moved.url, "/media/brand/logo.png");
        assert!(!dir.path().join("inbox/logo.png").exists());
        assert_eq!(fs::read(dir.path().join("brand/logo.png")).unwrap(), b"png");
    }

    #[test]
    fn test_move_missing_file_not_found() {
        let (dir, sandbox) = sandbox();
        assert!(matches!(
            move_file(&sandbox, "/media/", "nope.png", "deep/dir/nope.png"),
            Err(StorageError::NotFound(_))
        ));
        assert!(!dir.path().join("deep").exists());
    }

    #[test]
    fn test_move_file_traversal_rejected() {
        let (_dir, sandbox) = sandbox();
        assert!(matches!(
            move_file(&sandbox, "/media/", "a.png", "../a.png"),
            Err(StorageError::InvalidPath(_))
        ));
    }
}
