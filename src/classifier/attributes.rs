//! The enumerated attribute contract.
//!
//! Only these suffixes are ever read under the configured prefix; there is
//! no open-ended attribute lookup.

use crate::traits::InteractionTarget;

/// A recognized `{prefix}-*` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UjsAttribute {
    /// Boolean opt-in for client-side navigation
    Visit,
    /// Boolean opt-in for a fire-and-forget request; beats `Visit`
    Remote,
    /// Explicit placeholder key for graft visits
    Placeholder,
    /// HTTP verb override for links
    Method,
    /// Confirmation prompt text
    Confirm,
}

impl UjsAttribute {
    pub const ALL: [UjsAttribute; 5] = [
        UjsAttribute::Visit,
        UjsAttribute::Remote,
        UjsAttribute::Placeholder,
        UjsAttribute::Method,
        UjsAttribute::Confirm,
    ];

    pub fn suffix(&self) -> &'static str {
        match self {
            UjsAttribute::Visit => "visit",
            UjsAttribute::Remote => "remote",
            UjsAttribute::Placeholder => "placeholder",
            UjsAttribute::Method => "method",
            UjsAttribute::Confirm => "confirm",
        }
    }
}

/// Full attribute names for one prefix, computed once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeNames {
    visit: String,
    remote: String,
    placeholder: String,
    method: String,
    confirm: String,
}

impl AttributeNames {
    pub fn new(prefix: &str) -> Self {
        let name = |attr: UjsAttribute| format!("{}-{}", prefix, attr.suffix());
        Self {
            visit: name(UjsAttribute::Visit),
            remote: name(UjsAttribute::Remote),
            placeholder: name(UjsAttribute::Placeholder),
            method: name(UjsAttribute::Method),
            confirm: name(UjsAttribute::Confirm),
        }
    }

    pub fn name(&self, attr: UjsAttribute) -> &str {
        match attr {
            UjsAttribute::Visit => &self.visit,
            UjsAttribute::Remote => &self.remote,
            UjsAttribute::Placeholder => &self.placeholder,
            UjsAttribute::Method => &self.method,
            UjsAttribute::Confirm => &self.confirm,
        }
    }

    /// Raw value of `attr` on `element`.
    pub fn read<T: InteractionTarget>(&self, element: &T, attr: UjsAttribute) -> Option<String> {
        let name = self.name(attr);
        let value = element.attribute(name);
        tracing::trace!(attribute = name, value = ?value, "read attribute");
        value
    }

    /// Whether a boolean attribute is switched on. See [`is_truthy`].
    pub fn is_set<T: InteractionTarget>(&self, element: &T, attr: UjsAttribute) -> bool {
        is_truthy(self.read(element, attr).as_deref())
    }

    /// Trimmed value of `attr`, or `None` when absent or blank.
    pub fn non_empty<T: InteractionTarget>(&self, element: &T, attr: UjsAttribute) -> Option<String> {
        non_blank(self.read(element, attr))
    }
}

/// An attribute is truthy when present and its trimmed value is neither
/// empty nor `false` (ASCII case-insensitive).
pub fn is_truthy(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        Some(v) => !v.is_empty() && !v.eq_ignore_ascii_case("false"),
        None => false,
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
