use anyhow::Context;
use serde::Deserialize;
use std::{fs, io::ErrorKind};

const CONFIG_ENV: &str = "BILL_SERVICE_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "bill-service.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// SQLite database file. Created on first start.
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "bills.db".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    pub bind_addr: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    pub metrics: Option<MetricsConfig>,
}

impl AppConfig {
    /// Load from `$BILL_SERVICE_CONFIG`, or `bill-service.toml` in the working directory.
    ///
    /// A missing default file falls back to built-in defaults; a missing file that was
    /// named explicitly is an error.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(&path),
            Err(_) => match fs::read_to_string(DEFAULT_CONFIG_PATH) {
                Ok(contents) => Self::parse(&contents)
                    .with_context(|| format!("invalid config file {DEFAULT_CONFIG_PATH}")),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
                Err(e) => Err(e).with_context(|| format!("failed to read {DEFAULT_CONFIG_PATH}")),
            },
        }
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("failed to read config file {path}"))?;
        Self::parse(&contents).with_context(|| format!("invalid config file {path}"))
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
