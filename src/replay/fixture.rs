//! Fixture format for recorded interactions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::adapters::DomNode;
use crate::error::ReplayError;
use crate::models::{Modifiers, MouseButton};

/// A page snapshot plus the interactions performed on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    /// What the state reader reports as the current location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_url: Option<String>,
    /// Scripted answer to every confirmation prompt; no prompts when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm: Option<bool>,
    pub page: ElementSpec,
    #[serde(default)]
    pub events: Vec<ReplayEvent>,
}

impl Fixture {
    pub fn from_json_str(json: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ReplayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}

/// Serialized element: tag, attributes and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSpec {
    pub tag: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    /// Materialize this spec as a detached [`DomNode`] subtree.
    pub fn build(&self) -> DomNode {
        let node = DomNode::element(&self.tag);
        for (name, value) in &self.attributes {
            node.set_attribute(name, value);
        }
        for child in &self.children {
            node.append_child(&child.build());
        }
        node
    }
}

/// One recorded interaction; `target` is the `id` attribute of an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayEvent {
    Click {
        target: String,
        #[serde(default)]
        button: MouseButton,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Submit {
        target: String,
    },
}

impl ReplayEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ReplayEvent::Click { .. } => "click",
            ReplayEvent::Submit { .. } => "submit",
        }
    }

    pub fn target(&self) -> &str {
        match self {
            ReplayEvent::Click { target, .. } | ReplayEvent::Submit { target } => target,
        }
    }
}
