//! Dispatch primitives and the navigation target behind them.

use crate::models::{DispatchIntent, RequestOptions};

/// The navigation subsystem that performs fetch + render.
///
/// Receives resolved intents; everything after this point (network I/O,
/// history, rendering, error handling) belongs to the implementation.
pub trait Navigator {
    fn navigate_to(&self, intent: DispatchIntent);
}

/// The two dispatch primitives the classifier calls.
///
/// Exactly one of these runs per eligible interaction. The default
/// implementation is [`NavigatorDispatcher`], which forwards both to a
/// [`Navigator`]; hosts override either primitive by supplying their own
/// dispatcher.
///
/// [`NavigatorDispatcher`]: crate::adapters::NavigatorDispatcher
pub trait Dispatcher {
    /// Client-side navigation.
    fn visit(&self, url: &str, options: RequestOptions);

    /// Fire-and-forget request without a navigation state change.
    fn remote(&self, url: &str, options: RequestOptions);
}
