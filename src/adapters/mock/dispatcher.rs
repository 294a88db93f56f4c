//! Recording dispatch doubles.
//!
//! Both doubles share their log between clones, so a test can hand one
//! clone to the classifier and inspect the other.

use std::sync::{Arc, Mutex};

use crate::models::{DispatchIntent, DispatchMode, RequestOptions};
use crate::traits::{Dispatcher, Navigator};

/// Dispatcher that records every `visit`/`remote` call instead of acting.
///
/// # Example
///
/// ```ignore
/// use ujs_intercept::adapters::mock::RecordingDispatcher;
///
/// let dispatcher = RecordingDispatcher::new();
/// let classifier = InteractionClassifier::builder()
///     .dispatcher(dispatcher.clone())
///     .form_encoder(FieldEncoder)
///     .build()?;
///
/// classifier.on_click(&mut ClickEvent::new(link));
/// assert_eq!(dispatcher.visits().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    calls: Arc<Mutex<Vec<DispatchIntent>>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded call, in order.
    pub fn intents(&self) -> Vec<DispatchIntent> {
        self.calls.lock().unwrap().clone()
    }

    /// Recorded `visit` calls.
    pub fn visits(&self) -> Vec<DispatchIntent> {
        self.filtered(DispatchMode::Visit)
    }

    /// Recorded `remote` calls.
    pub fn remotes(&self) -> Vec<DispatchIntent> {
        self.filtered(DispatchMode::Remote)
    }

    pub fn len(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn filtered(&self, mode: DispatchMode) -> Vec<DispatchIntent> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|intent| intent.mode == mode)
            .cloned()
            .collect()
    }

    fn record(&self, intent: DispatchIntent) {
        self.calls.lock().unwrap().push(intent);
    }
}

impl Dispatcher for RecordingDispatcher {
    fn visit(&self, url: &str, options: RequestOptions) {
        self.record(DispatchIntent::visit(url, options));
    }

    fn remote(&self, url: &str, options: RequestOptions) {
        self.record(DispatchIntent::remote(url, options));
    }
}

/// Navigation target that records every intent it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    intents: Arc<Mutex<Vec<DispatchIntent>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intents(&self) -> Vec<DispatchIntent> {
        self.intents.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.intents.lock().unwrap().clear();
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, intent: DispatchIntent) {
        self.intents.lock().unwrap().push(intent);
    }
}
