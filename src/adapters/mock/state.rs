//! Settable state reader for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::traits::StateReader;

/// State reader whose current URL can be changed between interactions.
///
/// Counts reads so tests can check the classifier queries it fresh each
/// time instead of caching.
#[derive(Debug, Clone, Default)]
pub struct StaticStateReader {
    current_url: Arc<Mutex<Option<String>>>,
    reads: Arc<AtomicUsize>,
}

impl StaticStateReader {
    pub fn new(current_url: Option<&str>) -> Self {
        Self {
            current_url: Arc::new(Mutex::new(current_url.map(str::to_string))),
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A reader that has no current location.
    pub fn empty() -> Self {
        Self::new(None)
    }

    pub fn set_current_url(&self, url: Option<&str>) {
        *self.current_url.lock().unwrap() = url.map(str::to_string);
    }

    /// How many times `current_url` has been called.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl StateReader for StaticStateReader {
    fn current_url(&self) -> Option<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.current_url.lock().unwrap().clone()
    }
}
