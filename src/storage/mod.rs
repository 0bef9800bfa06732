//! File system storage management
//!
//! Sandboxed path resolution, directory listing and the folder/file mutators.

pub mod content_type;
pub mod filesystem;
pub mod listing;
pub mod operations;
pub mod results;
pub mod stats;
pub mod validation;

pub use listing::list_directory;
pub use operations::{create_folder, delete_folder, move_file, move_folder};
pub use stats::{DirectoryStats, LiveDirectoryStats};
pub use validation::Sandbox;
