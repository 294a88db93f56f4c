//! Trait abstractions for the capabilities the classifier consumes.
//!
//! Every collaborator outside the classification logic is injected through
//! one of these traits, so the classifier can be driven by a real page, an
//! in-memory DOM, or test doubles alike.
//!
//! # Traits
//!
//! - [`InteractionTarget`] - Read-only element view with ancestor walking
//! - [`StateReader`] - Current location lookup
//! - [`Navigator`] - Navigation subsystem receiving resolved intents
//! - [`Dispatcher`] - The overridable `visit`/`remote` primitives
//! - [`FormEncoder`] - Form field capture
//! - [`Confirmer`] - Optional confirmation prompt

pub mod confirm;
pub mod form;
pub mod navigation;
pub mod state;
pub mod target;

pub use confirm::Confirmer;
pub use form::FormEncoder;
pub use navigation::{Dispatcher, Navigator};
pub use state::StateReader;
pub use target::InteractionTarget;
