//! The request shape handed to the navigation/network layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Header name whose `None` value tells the network layer to infer the
/// content type from the body.
pub const CONTENT_TYPE: &str = "content-type";

/// Request headers. A `None` value is an explicit "unset" (serialized as
/// `null`), not an absent header.
pub type Headers = BTreeMap<String, Option<String>>;

/// Which dispatch primitive an interaction resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    /// Client-side navigation that updates route/state
    Visit,
    /// Fire-and-forget call that leaves navigation state alone
    Remote,
}

impl fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchMode::Visit => write!(f, "visit"),
            DispatchMode::Remote => write!(f, "remote"),
        }
    }
}

/// One captured form control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

impl FormField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Multipart payload captured from a form.
///
/// The classifier treats this as opaque: whatever the [`FormEncoder`]
/// produced is passed through untouched.
///
/// [`FormEncoder`]: crate::traits::FormEncoder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormBody {
    fields: Vec<FormField>,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, keeping insertion (document) order.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push(FormField::new(name, value));
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// First value recorded under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    /// Every value recorded under `name`, in order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.fields
            .iter()
            .filter(move |field| field.name == name)
            .map(|field| field.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<FormField> for FormBody {
    fn from_iter<I: IntoIterator<Item = FormField>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Options accompanying a dispatched URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOptions {
    /// Uppercase HTTP verb
    pub method: String,
    /// Prior render state to show while a graft visit is in flight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Headers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<FormBody>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

impl RequestOptions {
    /// Options for the given verb; the verb is uppercased.
    pub fn new(method: &str) -> Self {
        Self {
            method: normalize_method(method),
            placeholder_key: None,
            headers: None,
            body: None,
        }
    }

    /// Plain `GET` with nothing else attached.
    pub fn get() -> Self {
        Self::new("GET")
    }

    /// Attach a placeholder key (builder pattern)
    pub fn with_placeholder_key(mut self, key: impl Into<String>) -> Self {
        self.placeholder_key = Some(key.into());
        self
    }

    /// Attach headers (builder pattern)
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Attach a form payload (builder pattern)
    pub fn with_body(mut self, body: FormBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Headers that leave the content type for the network layer to infer
    /// from a multipart body.
    pub fn inferred_content_type() -> Headers {
        let mut headers = Headers::new();
        headers.insert(CONTENT_TYPE.to_string(), None);
        headers
    }
}

/// Trim and uppercase an HTTP verb.
pub fn normalize_method(method: &str) -> String {
    method.trim().to_ascii_uppercase()
}

/// A fully resolved dispatch: which primitive, where, and with what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchIntent {
    pub mode: DispatchMode,
    pub url: String,
    pub options: RequestOptions,
}

impl DispatchIntent {
    pub fn new(mode: DispatchMode, url: impl Into<String>, options: RequestOptions) -> Self {
        Self {
            mode,
            url: url.into(),
            options,
        }
    }

    pub fn visit(url: impl Into<String>, options: RequestOptions) -> Self {
        Self::new(DispatchMode::Visit, url, options)
    }

    pub fn remote(url: impl Into<String>, options: RequestOptions) -> Self {
        Self::new(DispatchMode::Remote, url, options)
    }
}
