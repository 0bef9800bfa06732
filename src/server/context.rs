//! Shared request context
//!
//! Everything a request handler needs, built once from the configuration
//! and shared read-only across connections.

use log::info;
use std::io;
use std::sync::Arc;

use crate::config::{AuthConfig, ServerConfig, StorageConfig};
use crate::storage::filesystem::create_directory;
use crate::storage::{DirectoryStats, LiveDirectoryStats, Sandbox};

pub struct ServerContext {
    pub sandbox: Sandbox,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub stats: Arc<dyn DirectoryStats>,
}

impl ServerContext {
    /// Creates the media root if needed and builds the sandbox over it.
    pub fn new(config: &ServerConfig) -> io::Result<Self> {
        let root = config.storage.media_root_path();
        create_directory(&root)?;
        let sandbox = Sandbox::new(&root)?;
        info!("Media root directory: {}", sandbox.root().display());

        Ok(Self {
            sandbox,
            storage: config.storage.clone(),
            auth: config.auth.clone(),
            stats: Arc::new(LiveDirectoryStats),
        })
    }

    /// Replaces the folder item-count source
    pub fn with_stats(mut self, stats: Arc<dyn DirectoryStats>) -> Self {
        self.stats = stats;
        self
    }
}
