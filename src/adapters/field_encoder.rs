//! Form field capture for the in-memory DOM.

use crate::adapters::dom::DomNode;
use crate::models::{ElementKind, FormBody};
use crate::traits::{FormEncoder, InteractionTarget};

/// Input types that never contribute a value without a submitter.
const SKIPPED_INPUT_TYPES: &[&str] = &["submit", "button", "reset", "image", "file"];

/// Captures the successful controls of a [`DomNode`] form.
///
/// Named, non-disabled `input`, `textarea` and `select` descendants are
/// collected in document order. The current value of a control is read from
/// its `value` attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldEncoder;

impl FieldEncoder {
    pub fn new() -> Self {
        Self
    }

    fn capture(control: &DomNode, body: &mut FormBody) {
        if control.has_attribute("disabled") {
            return;
        }
        let name = match control.attribute("name") {
            Some(name) if !name.is_empty() => name,
            _ => return,
        };

        match control.kind() {
            ElementKind::Input => {
                let input_type = control
                    .attribute("type")
                    .map(|t| t.to_ascii_lowercase())
                    .unwrap_or_else(|| "text".to_string());

                if SKIPPED_INPUT_TYPES.contains(&input_type.as_str()) {
                    return;
                }
                if input_type == "checkbox" || input_type == "radio" {
                    if control.has_attribute("checked") {
                        let value = control.attribute("value").unwrap_or_else(|| "on".to_string());
                        body.append(name, value);
                    }
                    return;
                }
                body.append(name, control.attribute("value").unwrap_or_default());
            }
            ElementKind::Textarea => {
                body.append(name, control.attribute("value").unwrap_or_default());
            }
            ElementKind::Select => {
                let options: Vec<DomNode> = control
                    .descendants()
                    .into_iter()
                    .filter(|node| node.kind() == ElementKind::SelectOption)
                    .collect();
                let selected: Vec<&DomNode> = options
                    .iter()
                    .filter(|option| option.has_attribute("selected"))
                    .collect();

                if selected.is_empty() {
                    // single selects fall back to their first option
                    if !control.has_attribute("multiple") {
                        if let Some(first) = options.first() {
                            body.append(name, first.attribute("value").unwrap_or_default());
                        }
                    }
                    return;
                }
                for option in selected {
                    body.append(name.clone(), option.attribute("value").unwrap_or_default());
                }
            }
            _ => {}
        }
    }
}

impl FormEncoder<DomNode> for FieldEncoder {
    fn encode(&self, form: &DomNode) -> FormBody {
        let mut body = FormBody::new();
        for node in form.descendants() {
            Self::capture(&node, &mut body);
        }
        tracing::trace!(fields = body.len(), "captured form fields");
        body
    }
}
