//! Unified error type.

use thiserror::Error;

use super::build::BuildError;
use super::category::ErrorCategory;
use super::config::ConfigError;
use super::replay::ReplayError;

/// Any error this crate can return.
#[derive(Debug, Error)]
pub enum UjsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Replay(#[from] ReplayError),
}

impl UjsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            UjsError::Config(err) => err.category(),
            UjsError::Build(err) => err.category(),
            UjsError::Replay(err) => err.category(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            UjsError::Config(err) => err.error_code(),
            UjsError::Build(err) => err.error_code(),
            UjsError::Replay(err) => err.error_code(),
        }
    }
}

/// Type alias for Results using [`UjsError`].
pub type UjsResult<T> = Result<T, UjsError>;
