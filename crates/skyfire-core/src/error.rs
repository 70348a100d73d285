//! Error types for the few fallible operations outside the frame loop.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain a usable [`GameConfig`](crate::config::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in config")]
    Parse(#[from] toml::de::Error),

    #[error("config field `{field}` is invalid: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}
