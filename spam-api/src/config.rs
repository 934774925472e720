//! Configuration for spam-api

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use spam_rs::CorpusLayout;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{Result, ServiceError};

/// Environment variable overriding the corpus root
pub const DATA_DIR_ENV: &str = "SPAM_DATA_DIR";

/// Main service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Corpus location and layout
    pub corpus: CorpusConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address (e.g., "127.0.0.1:8080")
    pub listen_addr: String,
    /// Single origin allowed by CORS; any origin when unset
    pub allowed_origin: Option<String>,
    /// Train before accepting requests instead of on the first request
    #[serde(default = "default_train_on_startup")]
    pub train_on_startup: bool,
}

/// Corpus configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Root directory holding the train/ and test/ trees
    pub data_dir: PathBuf,
    /// Directory layout below `data_dir`
    #[serde(flatten)]
    pub layout: CorpusLayout,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default level when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_train_on_startup() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ServiceError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ServiceError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Create a default development configuration
    pub fn development() -> Self {
        Self {
            server: ServerConfig {
                listen_addr: "127.0.0.1:8080".to_string(),
                allowed_origin: None,
                train_on_startup: true,
            },
            corpus: CorpusConfig {
                data_dir: PathBuf::from("data"),
                layout: CorpusLayout::default(),
            },
            logging: LoggingConfig::default(),
        }
    }

    /// Apply environment overrides
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(data_dir) = std::env::var(DATA_DIR_ENV) {
            self.corpus.data_dir = PathBuf::from(data_dir);
        }
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.server.listen_addr.parse::<SocketAddr>().map_err(|e| {
            ServiceError::Config(format!(
                "Invalid listen address '{}': {}",
                self.server.listen_addr, e
            ))
        })?;

        if let Some(origin) = &self.server.allowed_origin {
            HeaderValue::from_str(origin).map_err(|e| {
                ServiceError::Config(format!("Invalid allowed origin '{}': {}", origin, e))
            })?;
        }

        if self.corpus.data_dir.as_os_str().is_empty() {
            return Err(ServiceError::Config("corpus.data_dir is empty".to_string()));
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ServiceError::Config(format!(
                "Unknown log format '{}'",
                self.logging.format
            )));
        }

        self.corpus.layout.validate()?;

        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::development()
    }
}
