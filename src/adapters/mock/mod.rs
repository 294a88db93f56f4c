//! Mock implementations for testing.
//!
//! Test doubles for every injected capability, so the classifier can be
//! exercised without a page, a store, or a navigation subsystem.
//!
//! # Available Mocks
//!
//! - [`RecordingDispatcher`] - Records `visit`/`remote` calls
//! - [`RecordingNavigator`] - Records intents reaching the navigation target
//! - [`StaticStateReader`] - Settable current URL with read counting
//! - [`StaticFormEncoder`] - Canned form payload with call counting
//! - [`ScriptedConfirmer`] - Fixed confirmation answer

pub mod confirm;
pub mod dispatcher;
pub mod form;
pub mod state;

pub use confirm::ScriptedConfirmer;
pub use dispatcher::{RecordingDispatcher, RecordingNavigator};
pub use form::StaticFormEncoder;
pub use state::StaticStateReader;
