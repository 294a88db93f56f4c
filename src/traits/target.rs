//! Read-only view of the element an interaction originated from.

use crate::models::ElementKind;

/// An element as seen by the classifier.
///
/// Hosts implement this over whatever node handle their page exposes. The
/// classifier only ever reads through it.
///
/// # Example
///
/// ```ignore
/// use ujs_intercept::traits::InteractionTarget;
/// use ujs_intercept::models::ElementKind;
///
/// // Event delegation: a click on a <span> inside a link resolves to the link.
/// let link = span.closest(&ElementKind::Anchor);
/// ```
pub trait InteractionTarget: Clone {
    /// What kind of element this is.
    fn kind(&self) -> ElementKind;

    /// Raw attribute value, or `None` when the attribute is absent.
    fn attribute(&self, name: &str) -> Option<String>;

    /// The parent element, or `None` at the root.
    fn parent(&self) -> Option<Self>;

    /// Nearest element of `kind`, starting with `self` and walking up.
    ///
    /// The search only ever matches the requested kind; it never stops at
    /// an intermediate element of another kind.
    fn closest(&self, kind: &ElementKind) -> Option<Self> {
        let mut current = Some(self.clone());
        let mut depth = 0usize;
        while let Some(node) = current {
            if &node.kind() == kind {
                tracing::trace!(kind = %kind, depth, "closest match");
                return Some(node);
            }
            current = node.parent();
            depth += 1;
        }
        tracing::trace!(kind = %kind, depth, "no ancestor of kind");
        None
    }
}
