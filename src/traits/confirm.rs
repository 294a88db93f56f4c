//! Confirmation prompt for `{prefix}-confirm` elements.

/// Asks the user to confirm an interaction before it is dispatched.
pub trait Confirmer {
    /// Returns `true` to proceed.
    fn confirm(&self, message: &str) -> bool;
}
