//! Form encoder double returning a canned payload.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::models::FormBody;
use crate::traits::FormEncoder;

/// Returns the same body for every form and counts how often it ran.
#[derive(Debug, Clone, Default)]
pub struct StaticFormEncoder {
    body: FormBody,
    calls: Arc<AtomicUsize>,
}

impl StaticFormEncoder {
    pub fn new(body: FormBody) -> Self {
        Self {
            body,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<T> FormEncoder<T> for StaticFormEncoder {
    fn encode(&self, _form: &T) -> FormBody {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.body.clone()
    }
}
