//! UJS Intercept - link and form interaction classification
//!
//! Turns clicks on opted-in links and submissions of opted-in forms into
//! client-side `visit` or fire-and-forget `remote` dispatches.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod classifier;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod replay;
pub mod traits;

pub use classifier::{ClassifierBuilder, Handlers, IgnoreReason, InteractionClassifier, Outcome};
pub use config::ClassifierConfig;
pub use error::{UjsError, UjsResult};
