//! In-memory element tree implementing [`InteractionTarget`].
//!
//! Nodes are shared handles (`Rc<RefCell<..>>`); children are owned by their
//! parent and the back-reference to the parent is a `Weak`, so a subtree
//! never keeps its ancestors alive and no reference cycle forms.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::models::{Attribute, ElementKind};
use crate::traits::InteractionTarget;

struct NodeData {
    kind: ElementKind,
    attributes: Vec<Attribute>,
    parent: Weak<RefCell<NodeData>>,
    children: Vec<DomNode>,
}

/// Handle to an element in an in-memory tree.
///
/// Cloning the handle is cheap and yields the same element.
///
/// # Example
///
/// ```ignore
/// use ujs_intercept::adapters::DomNode;
///
/// let span = DomNode::element("span");
/// let link = DomNode::element("a")
///     .with_attribute("href", "/foo")
///     .with_attribute("data-visit", "true")
///     .with_child(span.clone());
///
/// assert!(span.closest(&ElementKind::Anchor).unwrap().ptr_eq(&link));
/// ```
#[derive(Clone)]
pub struct DomNode(Rc<RefCell<NodeData>>);

impl DomNode {
    /// A detached element with no attributes.
    pub fn element(tag_name: &str) -> Self {
        Self(Rc::new(RefCell::new(NodeData {
            kind: ElementKind::from_tag_name(tag_name),
            attributes: Vec::new(),
            parent: Weak::new(),
            children: Vec::new(),
        })))
    }

    /// Set an attribute (builder pattern)
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Append a child (builder pattern)
    pub fn with_child(self, child: DomNode) -> Self {
        self.append_child(&child);
        self
    }

    /// Set or replace an attribute. Names compare ASCII case-insensitively.
    pub fn set_attribute(&self, name: &str, value: &str) {
        let mut data = self.0.borrow_mut();
        match data
            .attributes
            .iter_mut()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
        {
            Some(existing) => existing.value = value.to_string(),
            None => data.attributes.push(Attribute::new(name, value)),
        }
    }

    pub fn remove_attribute(&self, name: &str) {
        self.0
            .borrow_mut()
            .attributes
            .retain(|attr| !attr.name.eq_ignore_ascii_case(name));
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.0
            .borrow()
            .attributes
            .iter()
            .any(|attr| attr.name.eq_ignore_ascii_case(name))
    }

    pub fn attributes(&self) -> Vec<Attribute> {
        self.0.borrow().attributes.clone()
    }

    /// Append `child` as the last child, detaching it from any previous parent.
    ///
    /// Refused (returns `false`, tree unchanged) when `child` is `self` or
    /// one of its ancestors, since the tree would no longer have a root.
    pub fn append_child(&self, child: &DomNode) -> bool {
        if child.is_inclusive_ancestor_of(self) {
            tracing::trace!(parent = %self.kind(), child = %child.kind(), "refused cyclic append");
            return false;
        }
        child.detach();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
        true
    }

    /// True when `self` is `node` or one of its ancestors.
    pub fn is_inclusive_ancestor_of(&self, node: &DomNode) -> bool {
        let mut current = Some(node.clone());
        while let Some(candidate) = current {
            if candidate.ptr_eq(self) {
                return true;
            }
            current = candidate.parent();
        }
        false
    }

    /// Remove this node from its parent, if any.
    pub fn detach(&self) {
        let parent = self.0.borrow().parent.upgrade();
        if let Some(parent) = parent {
            parent
                .borrow_mut()
                .children
                .retain(|sibling| !sibling.ptr_eq(self));
        }
        self.0.borrow_mut().parent = Weak::new();
    }

    pub fn children(&self) -> Vec<DomNode> {
        self.0.borrow().children.clone()
    }

    /// All descendants in document (pre-)order, excluding `self`.
    pub fn descendants(&self) -> Vec<DomNode> {
        let mut out = Vec::new();
        self.collect_descendants(&mut out);
        out
    }

    fn collect_descendants(&self, out: &mut Vec<DomNode>) {
        for child in self.children() {
            out.push(child.clone());
            child.collect_descendants(out);
        }
    }

    /// First element in this subtree (including `self`) whose `id` matches.
    pub fn find_by_id(&self, id: &str) -> Option<DomNode> {
        if self.attribute("id").as_deref() == Some(id) {
            return Some(self.clone());
        }
        self.descendants()
            .into_iter()
            .find(|node| node.attribute("id").as_deref() == Some(id))
    }

    /// True when both handles point at the same element.
    pub fn ptr_eq(&self, other: &DomNode) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl InteractionTarget for DomNode {
    fn kind(&self) -> ElementKind {
        self.0.borrow().kind.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0
            .borrow()
            .attributes
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
            .map(|attr| attr.value.clone())
    }

    fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.upgrade().map(DomNode)
    }
}

impl fmt::Debug for DomNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        f.debug_struct("DomNode")
            .field("kind", &data.kind)
            .field("attributes", &data.attributes)
            .field("children", &data.children.len())
            .finish()
    }
}
