//! Replay fixture errors.

use std::path::PathBuf;
use thiserror::Error;

use super::build::BuildError;
use super::category::ErrorCategory;

/// Failures while loading or running a replay fixture.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read fixture {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fixture: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("event {index} targets unknown element id {id:?}")]
    UnknownTarget { index: usize, id: String },

    #[error(transparent)]
    Build(#[from] BuildError),
}

impl ReplayError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReplayError::Io { .. } => ErrorCategory::System,
            ReplayError::Parse(_) | ReplayError::UnknownTarget { .. } => ErrorCategory::User,
            ReplayError::Build(err) => err.category(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ReplayError::Io { .. } => "E_REPLAY_IO",
            ReplayError::Parse(_) => "E_REPLAY_PARSE",
            ReplayError::UnknownTarget { .. } => "E_REPLAY_TARGET",
            ReplayError::Build(err) => err.error_code(),
        }
    }
}
