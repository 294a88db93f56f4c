//! Configuration errors.

use std::path::PathBuf;
use thiserror::Error;

use super::category::ErrorCategory;

/// Problems loading or validating a [`ClassifierConfig`].
///
/// [`ClassifierConfig`]: crate::config::ClassifierConfig
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid attribute prefix {prefix:?}: expected ASCII letters, digits, '-' or '_'")]
    InvalidAttributePrefix { prefix: String },

    #[error("invalid graft query parameter {param:?}: expected ASCII letters, digits, '-' or '_'")]
    InvalidGraftParam { param: String },

    #[error("invalid default form method {method:?}")]
    InvalidDefaultMethod { method: String },

    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConfigError::Io { .. } => ErrorCategory::System,
            _ => ErrorCategory::Configuration,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidAttributePrefix { .. } => "E_CFG_PREFIX",
            ConfigError::InvalidGraftParam { .. } => "E_CFG_GRAFT_PARAM",
            ConfigError::InvalidDefaultMethod { .. } => "E_CFG_METHOD",
            ConfigError::Io { .. } => "E_CFG_IO",
            ConfigError::Parse(_) => "E_CFG_PARSE",
        }
    }
}
