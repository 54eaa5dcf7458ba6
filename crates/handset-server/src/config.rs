//! Server configuration.
//!
//! Settings come from three layers, later layers winning:
//!
//! 1. Built-in defaults (`0.0.0.0:8090`, `mongodb://localhost:27017/`,
//!    database `deviceDB`, collection `listings`)
//! 2. An optional TOML file passed with `--config`
//! 3. Command line flags or their `HANDSET_*` environment variables
//!
//! ```toml
//! bind_addr = "0.0.0.0:8090"
//!
//! [database]
//! uri = "mongodb://localhost:27017/"
//! database = "deviceDB"
//! collection = "listings"
//! max_pool_size = 10
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::Parser;
use handset_storage::DatabaseConfig;
use serde::Deserialize;
use thiserror::Error;

/// Default HTTP listen address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8090";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: SocketAddr,

    /// Document store settings
    pub database: DatabaseConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8090)),
            database: DatabaseConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Parse configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

/// Command line interface of the `handset` binary.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "handset", version, about = "Device registry and SMS dispatch service")]
pub struct Cli {
    /// Path to a TOML config file.
    #[arg(short = 'c', long = "config", env = "HANDSET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Listen address (default 0.0.0.0:8090).
    #[arg(long = "listen", env = "HANDSET_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// MongoDB connection string.
    #[arg(long = "mongo-uri", env = "HANDSET_MONGO_URI")]
    pub mongo_uri: Option<String>,

    /// Database name.
    #[arg(long = "database", env = "HANDSET_DATABASE")]
    pub database: Option<String>,

    /// Collection name.
    #[arg(long = "collection", env = "HANDSET_COLLECTION")]
    pub collection: Option<String>,
}

impl Cli {
    /// Build the effective configuration: defaults, then the config file,
    /// then flags.
    pub fn resolve(&self) -> Result<ServerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path)?,
            None => ServerConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut ServerConfig) {
        if let Some(listen) = self.listen {
            config.bind_addr = listen;
        }
        if let Some(uri) = &self.mongo_uri {
            config.database.uri = uri.clone();
        }
        if let Some(database) = &self.database {
            config.database.database = database.clone();
        }
        if let Some(collection) = &self.collection {
            config.database.collection = collection.clone();
        }
    }
}
