//! Concrete implementations of the trait abstractions.
//!
//! # Adapters
//!
//! - [`NavigatorDispatcher`] - Default `visit`/`remote` forwarding to a navigator
//! - [`DomNode`] - In-memory element tree usable as an interaction target
//! - [`FieldEncoder`] - Form field capture for [`DomNode`] forms
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::RecordingDispatcher`] - Records dispatch calls
//! - [`mock::RecordingNavigator`] - Records navigation intents
//! - [`mock::StaticStateReader`] - Settable current location
//! - [`mock::StaticFormEncoder`] - Canned form payload
//! - [`mock::ScriptedConfirmer`] - Fixed confirmation answer

pub mod dom;
pub mod field_encoder;
pub mod mock;
pub mod navigator_dispatch;

pub use dom::DomNode;
pub use field_encoder::FieldEncoder;
pub use mock::{
    RecordingDispatcher, RecordingNavigator, ScriptedConfirmer, StaticFormEncoder,
    StaticStateReader,
};
pub use navigator_dispatch::NavigatorDispatcher;
