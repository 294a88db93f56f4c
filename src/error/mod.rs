//! Error types.
//!
//! Classification itself never fails: an interaction that cannot be handled
//! is reported as an ignored outcome. Errors only arise at the edges:
//!
//! - **Configuration**: invalid prefix/param/method, unreadable config files
//! - **Construction**: a classifier built without a dispatcher or form encoder
//! - **Replay**: unreadable fixtures or events targeting unknown elements
//!
//! Each error carries an [`ErrorCategory`] and a short `error_code()` for logs.

mod build;
mod category;
mod config;
mod replay;
mod ujs_error;

pub use build::BuildError;
pub use category::ErrorCategory;
pub use config::ConfigError;
pub use replay::ReplayError;
pub use ujs_error::{UjsError, UjsResult};
