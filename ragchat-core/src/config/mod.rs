pub mod error;
pub mod loader;

use crate::constants::DEFAULT_BASE_URL;
use std::path::{Path, PathBuf};

/// Default config file path - can be overridden via CLI argument
pub const CONFIG_PATH: &str = "config/ragchat.toml";

/// Default log file; the TUI owns the terminal so logs go to disk
pub const DEFAULT_LOG_FILE: &str = "ragchat.log";

pub use error::ConfigError;
pub use loader::validate_base_url;

/// Client configuration. Deliberately has no field for the API key.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub base_url: String,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        loader::load_config(path)
    }

    /// Override the backend address, validating it like the file value
    pub fn with_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.base_url = validate_base_url(url)?;
        Ok(self)
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }
}
