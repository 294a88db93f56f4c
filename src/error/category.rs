//! Error category classification.

use std::fmt;

/// High-level categorization of errors for reporting decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Invalid or unreadable configuration.
    /// Fixed by correcting the config, never by retrying.
    Configuration,

    /// The classifier was wired up incorrectly (missing capability).
    /// Indicates a programming error in the host.
    Client,

    /// Invalid input supplied by the user (e.g. a malformed replay fixture).
    User,

    /// Filesystem or other OS-level failure.
    System,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
