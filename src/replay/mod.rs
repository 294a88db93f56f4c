//! Replay of recorded interactions against an in-memory page.
//!
//! A [`Fixture`] describes a page and a list of clicks/submissions. Replaying
//! it wires a classifier to a recording dispatcher and reports, per event,
//! what the handler decided and whether default was prevented.
//!
//! # Example
//!
//! ```ignore
//! let fixture = Fixture::load(Path::new("checkout.json"))?;
//! for record in replay(&fixture, ClassifierConfig::default())? {
//!     println!("{}", serde_json::to_string(&record)?);
//! }
//! ```

mod fixture;

pub use fixture::{ElementSpec, Fixture, ReplayEvent};

use serde::{Deserialize, Serialize};

use crate::adapters::mock::{RecordingDispatcher, ScriptedConfirmer};
use crate::adapters::{DomNode, FieldEncoder};
use crate::classifier::{InteractionClassifier, Outcome};
use crate::config::ClassifierConfig;
use crate::error::ReplayError;
use crate::models::{ClickEvent, SubmitEvent};

/// What happened to one replayed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayRecord {
    pub index: usize,
    pub event: String,
    pub target: String,
    pub outcome: Outcome,
    pub default_prevented: bool,
}

/// Run every event of `fixture` through a fresh classifier.
///
/// All targets are resolved before anything runs, so an unknown id fails the
/// whole replay instead of leaving it half done.
pub fn replay(fixture: &Fixture, config: ClassifierConfig) -> Result<Vec<ReplayRecord>, ReplayError> {
    let page = fixture.page.build();
    let targets = resolve_targets(&page, &fixture.events)?;

    let current_url = fixture.current_url.clone();
    let mut builder = InteractionClassifier::<DomNode>::builder()
        .config(config)
        .dispatcher(RecordingDispatcher::new())
        .form_encoder(FieldEncoder)
        .state_reader(move || current_url.clone());
    if let Some(answer) = fixture.confirm {
        builder = builder.confirmer(ScriptedConfirmer::answering(answer));
    }
    let classifier = builder.build()?;

    let records = fixture
        .events
        .iter()
        .zip(targets)
        .enumerate()
        .map(|(index, (event, target))| {
            let (outcome, default_prevented) = match event {
                ReplayEvent::Click {
                    button, modifiers, ..
                } => {
                    let mut click = ClickEvent::new(target)
                        .with_button(*button)
                        .with_modifiers(*modifiers);
                    let outcome = classifier.on_click(&mut click);
                    (outcome, click.default_prevented())
                }
                ReplayEvent::Submit { .. } => {
                    let mut submit = SubmitEvent::new(target);
                    let outcome = classifier.on_submit(&mut submit);
                    (outcome, submit.default_prevented())
                }
            };

            ReplayRecord {
                index,
                event: event.name().to_string(),
                target: event.target().to_string(),
                outcome,
                default_prevented,
            }
        })
        .collect();

    Ok(records)
}

fn resolve_targets(page: &DomNode, events: &[ReplayEvent]) -> Result<Vec<DomNode>, ReplayError> {
    events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            page.find_by_id(event.target())
                .ok_or_else(|| ReplayError::UnknownTarget {
                    index,
                    id: event.target().to_string(),
                })
        })
        .collect()
}
