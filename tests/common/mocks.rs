//! Mock implementations for test fixtures.
//!
//! This module re-exports the mock implementations from
//! `ujs_intercept::adapters::mock` and provides the standard wiring used by
//! the integration tests.

pub use ujs_intercept::adapters::mock::{
    RecordingDispatcher, RecordingNavigator, ScriptedConfirmer, StaticFormEncoder,
    StaticStateReader,
};

use ujs_intercept::adapters::{DomNode, FieldEncoder};
use ujs_intercept::classifier::{ClassifierBuilder, InteractionClassifier};
use ujs_intercept::config::ClassifierConfig;
use ujs_intercept::models::FormBody;

/// A classifier plus handles on every double it was built with.
pub struct Harness {
    pub classifier: InteractionClassifier<DomNode>,
    pub dispatcher: RecordingDispatcher,
    pub state: StaticStateReader,
    pub encoder: StaticFormEncoder,
}

/// Builder for a [`Harness`].
pub struct HarnessBuilder {
    config: ClassifierConfig,
    current_url: Option<String>,
    confirmer: Option<ScriptedConfirmer>,
    field_encoder: bool,
}

impl HarnessBuilder {
    pub fn new() -> Self {
        Self {
            config: ClassifierConfig::default(),
            current_url: Some("/current".to_string()),
            confirmer: None,
            field_encoder: false,
        }
    }

    pub fn with_config(mut self, config: ClassifierConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_current_url(mut self, url: Option<&str>) -> Self {
        self.current_url = url.map(str::to_string);
        self
    }

    pub fn with_confirmer(mut self, confirmer: ScriptedConfirmer) -> Self {
        self.confirmer = Some(confirmer);
        self
    }

    /// Capture real form fields instead of the canned `some=Body` payload.
    #[allow(dead_code)]
    pub fn with_field_encoder(mut self) -> Self {
        self.field_encoder = true;
        self
    }

    pub fn build(self) -> Harness {
        let dispatcher = RecordingDispatcher::new();
        let state = StaticStateReader::new(self.current_url.as_deref());
        let encoder = StaticFormEncoder::new(canned_body());

        let mut builder: ClassifierBuilder<DomNode> = InteractionClassifier::builder()
            .config(self.config)
            .dispatcher(dispatcher.clone())
            .state_reader(state.clone());
        builder = if self.field_encoder {
            builder.form_encoder(FieldEncoder)
        } else {
            builder.form_encoder(encoder.clone())
        };
        if let Some(confirmer) = self.confirmer {
            builder = builder.confirmer(confirmer);
        }

        Harness {
            classifier: builder.build().expect("harness config is valid"),
            dispatcher,
            state,
            encoder,
        }
    }
}

impl Default for HarnessBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The payload [`StaticFormEncoder`] returns in every harness.
pub fn canned_body() -> FormBody {
    let mut body = FormBody::new();
    body.append("some", "Body");
    body
}
