//! Configuration management for the media store server
//!
//! Values are layered: built-in defaults, then `config.toml`, then
//! `MEDIA_STORE__*` environment variables. The loaded configuration is
//! immutable and injected into the server at construction.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Locations searched for the configuration file, first match wins.
const CONFIG_PATHS: [&str; 2] = [
    "media-store/config", // Container layout: /app/media-store/config.toml
    "config",             // Local development: ./config.toml
];

const ENV_PREFIX: &str = "MEDIA_STORE";

/// Complete server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: NetworkConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
}

/// Listener settings (restart required)
#[derive(Debug, Deserialize, Clone)]
pub struct NetworkConfig {
    /// IP address to bind the request listener
    pub bind_address: String,

    /// Port for the request listener, 0 picks an ephemeral port
    pub port: u16,

    /// Maximum concurrently served connections
    pub max_clients: usize,

    /// Maximum length of a single request line in bytes
    pub max_request_length: usize,
}

/// Sandbox and listing settings
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Root of the media tree; nothing outside it is ever read or written
    pub media_root: String,

    /// Prefix prepended to relative paths to build public URLs
    pub media_base_url: String,

    /// Page size used when a browse request gives no limit
    pub default_page_limit: usize,
}

/// Static shared-secret authentication
#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    pub api_key: String,
}

// Keep the secret out of debug logs.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from the first `config.toml` found, with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let file = CONFIG_PATHS
            .iter()
            .find(|path| Path::new(&format!("{path}.toml")).exists())
            .copied()
            .unwrap_or(CONFIG_PATHS[1]);

        Self::load_from(file)
    }

    /// Load configuration from an explicit file stem (extension optional)
    pub fn load_from(file: &str) -> Result<Self, ConfigError> {
        let settings = Self::with_defaults(Config::builder())?
            .add_source(File::with_name(file).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn with_defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        builder
            .set_default("server.bind_address", "127.0.0.1")?
            .set_default("server.port", 4040_i64)?
            .set_default("server.max_clients", 64_i64)?
            .set_default("server.max_request_length", 65536_i64)?
            .set_default("storage.media_root", "./media_root")?
            .set_default("storage.media_base_url", "/media/")?
            .set_default("storage.default_page_limit", 50_i64)?
            .set_default("auth.api_key", "")
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind_address.trim().is_empty() {
            return Err(ConfigError::Message("bind_address cannot be empty".into()));
        }

        if self.server.max_clients == 0 {
            return Err(ConfigError::Message(
                "max_clients must be greater than 0".into(),
            ));
        }

        if self.server.max_request_length == 0 {
            return Err(ConfigError::Message(
                "max_request_length must be greater than 0".into(),
            ));
        }

        if self.storage.media_root.trim().is_empty() {
            return Err(ConfigError::Message("media_root cannot be empty".into()));
        }

        if self.storage.default_page_limit == 0 {
            return Err(ConfigError::Message(
                "default_page_limit must be greater than 0".into(),
            ));
        }

        if self.auth.api_key.is_empty() {
            return Err(ConfigError::Message(format!(
                "auth.api_key must be set (config.toml or {ENV_PREFIX}__AUTH__API_KEY)"
            )));
        }

        Ok(())
    }
}

impl NetworkConfig {
    /// Get bind address and port as a socket address string
    pub fn listen_socket(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl StorageConfig {
    /// Get the media root as PathBuf
    pub fn media_root_path(&self) -> PathBuf {
        PathBuf::from(&self.media_root)
    }
}
