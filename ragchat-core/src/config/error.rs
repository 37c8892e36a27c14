use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why `ragchat.toml` could not be turned into an [`super::AppConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {path:?} does not exist")]
    NotFound { path: PathBuf },

    #[error("could not read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config file {path:?} is not valid: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("base_url '{url}' is not usable: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
