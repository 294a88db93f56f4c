//! Classifier construction errors.

use thiserror::Error;

use super::category::ErrorCategory;
use super::config::ConfigError;

/// Returned by [`ClassifierBuilder::build`] when the classifier cannot be
/// assembled.
///
/// [`ClassifierBuilder::build`]: crate::classifier::ClassifierBuilder::build
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("no dispatcher or navigator configured")]
    MissingDispatcher,

    #[error("no form encoder configured")]
    MissingFormEncoder,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BuildError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BuildError::MissingDispatcher | BuildError::MissingFormEncoder => ErrorCategory::Client,
            BuildError::Config(err) => err.category(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            BuildError::MissingDispatcher => "E_BUILD_DISPATCHER",
            BuildError::MissingFormEncoder => "E_BUILD_FORM_ENCODER",
            BuildError::Config(err) => err.error_code(),
        }
    }
}
