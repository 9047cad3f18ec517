//! Configuration: a TOML file under `~/.holomente/` with environment
//! variable overrides.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct HoloConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_holomente_dir()
            .join("holomente.db")
            .to_string_lossy()
            .into_owned();
        Self { db_path }
    }
}

/// `~/.holomente/`
pub fn default_holomente_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".holomente")
}

/// `~/.holomente/config.toml`
pub fn default_config_path() -> PathBuf {
    default_holomente_dir().join("config.toml")
}

impl HoloConfig {
    /// Load the config file from its default location, then apply env
    /// overrides. A missing file is not an error; defaults apply.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("no config file at {}, using defaults", path.display());
            let mut config = HoloConfig::default();
            config.apply_env_overrides();
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut config: HoloConfig = toml::from_str(&contents)
            .with_context(|| format!("bad config TOML at {}", path.display()))?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(db) = std::env::var("HOLOMENTE_DB") {
            self.storage.db_path = db;
        }
        if let Ok(host) = std::env::var("HOLOMENTE_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("HOLOMENTE_PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!(%port, "ignoring unparseable HOLOMENTE_PORT"),
            }
        }
        if let Ok(level) = std::env::var("HOLOMENTE_LOG_LEVEL") {
            self.server.log_level = level;
        }
    }

    /// The database path with `~` expanded.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }

    /// The address the HTTP server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .expect("home directory must exist")
            .join(rest),
        None => PathBuf::from(path),
    }
}
