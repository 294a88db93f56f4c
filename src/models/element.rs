//! Element vocabulary shared by targets, the in-memory DOM, and replay fixtures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of element an interaction landed on.
///
/// Only anchors and forms take part in classification. The control kinds
/// exist so form encoders can tell which descendants carry field values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// `<a>`
    Anchor,
    /// `<form>`
    Form,
    /// `<input>`
    Input,
    /// `<textarea>`
    Textarea,
    /// `<select>`
    Select,
    /// `<option>`
    #[serde(rename = "option")]
    SelectOption,
    /// `<button>`
    Button,
    /// Any other tag, kept lowercased
    Other(String),
}

impl ElementKind {
    /// Classify a tag name. Matching is ASCII case-insensitive, so both
    /// `nodeName`-style (`"A"`) and markup-style (`"a"`) names work.
    pub fn from_tag_name(tag_name: &str) -> Self {
        match tag_name.to_ascii_lowercase().as_str() {
            "a" => ElementKind::Anchor,
            "form" => ElementKind::Form,
            "input" => ElementKind::Input,
            "textarea" => ElementKind::Textarea,
            "select" => ElementKind::Select,
            "option" => ElementKind::SelectOption,
            "button" => ElementKind::Button,
            other => ElementKind::Other(other.to_string()),
        }
    }

    /// Lowercase tag name for this kind.
    pub fn tag_name(&self) -> &str {
        match self {
            ElementKind::Anchor => "a",
            ElementKind::Form => "form",
            ElementKind::Input => "input",
            ElementKind::Textarea => "textarea",
            ElementKind::Select => "select",
            ElementKind::SelectOption => "option",
            ElementKind::Button => "button",
            ElementKind::Other(name) => name,
        }
    }
}

impl From<&str> for ElementKind {
    fn from(tag_name: &str) -> Self {
        Self::from_tag_name(tag_name)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag_name())
    }
}

/// A single `name="value"` pair on an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
