//! Data types that flow through the classifier.

mod element;
mod event;
mod request;

pub use element::{Attribute, ElementKind};
pub use event::{ClickEvent, Modifiers, MouseButton, SubmitEvent};
pub use request::{
    normalize_method, DispatchIntent, DispatchMode, FormBody, FormField, Headers, RequestOptions,
    CONTENT_TYPE,
};
