//! Access to the application's current location.

/// Synchronous read of the "current URL" held by application state.
///
/// Queried fresh on every graft click that needs a placeholder fallback;
/// implementations must not assume the value is cached.
pub trait StateReader {
    /// The current location, or `None` when state has no location yet.
    fn current_url(&self) -> Option<String>;
}

impl<F> StateReader for F
where
    F: Fn() -> Option<String>,
{
    fn current_url(&self) -> Option<String> {
        self()
    }
}
