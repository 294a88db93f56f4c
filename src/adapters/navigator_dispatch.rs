//! Default dispatch primitives backed by a [`Navigator`].

use crate::models::{DispatchIntent, RequestOptions};
use crate::traits::{Dispatcher, Navigator};

/// Forwards both `visit` and `remote` to a navigation target, tagging each
/// intent with the primitive that produced it.
#[derive(Debug, Clone)]
pub struct NavigatorDispatcher<N> {
    navigator: N,
}

impl<N: Navigator> NavigatorDispatcher<N> {
    pub fn new(navigator: N) -> Self {
        Self { navigator }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }
}

impl<N: Navigator> Dispatcher for NavigatorDispatcher<N> {
    fn visit(&self, url: &str, options: RequestOptions) {
        self.navigator.navigate_to(DispatchIntent::visit(url, options));
    }

    fn remote(&self, url: &str, options: RequestOptions) {
        self.navigator.navigate_to(DispatchIntent::remote(url, options));
    }
}
