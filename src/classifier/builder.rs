//! Builder for [`InteractionClassifier`].

use std::rc::Rc;

use super::attributes::AttributeNames;
use super::InteractionClassifier;
use crate::adapters::NavigatorDispatcher;
use crate::config::ClassifierConfig;
use crate::error::BuildError;
use crate::traits::{Confirmer, Dispatcher, FormEncoder, InteractionTarget, Navigator, StateReader};

/// Assembles a classifier from configuration and injected capabilities.
///
/// A dispatcher (directly, or via [`navigator`](Self::navigator)) and a form
/// encoder are required; the state reader and confirmer are optional.
///
/// # Example
///
/// ```ignore
/// let classifier = InteractionClassifier::<DomNode>::builder()
///     .attribute_prefix("data")
///     .state_reader(move || store.current_url())
///     .navigator(app_navigator)
///     .form_encoder(FieldEncoder)
///     .build()?;
/// ```
pub struct ClassifierBuilder<T> {
    config: ClassifierConfig,
    dispatcher: Option<Rc<dyn Dispatcher>>,
    form_encoder: Option<Rc<dyn FormEncoder<T>>>,
    state_reader: Option<Rc<dyn StateReader>>,
    confirmer: Option<Rc<dyn Confirmer>>,
}

impl<T: InteractionTarget> Default for ClassifierBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: InteractionTarget> ClassifierBuilder<T> {
    pub fn new() -> Self {
        Self {
            config: ClassifierConfig::default(),
            dispatcher: None,
            form_encoder: None,
            state_reader: None,
            confirmer: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ClassifierConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the attribute prefix.
    pub fn attribute_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.attribute_prefix = prefix.into();
        self
    }

    /// Set the reader used for the "current location" placeholder fallback.
    pub fn state_reader(mut self, reader: impl StateReader + 'static) -> Self {
        self.state_reader = Some(Rc::new(reader));
        self
    }

    /// Use the default `visit`/`remote`, forwarding to `navigator`.
    pub fn navigator(mut self, navigator: impl Navigator + 'static) -> Self {
        self.dispatcher = Some(Rc::new(NavigatorDispatcher::new(navigator)));
        self
    }

    /// Override the `visit`/`remote` primitives.
    pub fn dispatcher(mut self, dispatcher: impl Dispatcher + 'static) -> Self {
        self.dispatcher = Some(Rc::new(dispatcher));
        self
    }

    pub fn form_encoder(mut self, encoder: impl FormEncoder<T> + 'static) -> Self {
        self.form_encoder = Some(Rc::new(encoder));
        self
    }

    /// Enable `{prefix}-confirm` prompts.
    pub fn confirmer(mut self, confirmer: impl Confirmer + 'static) -> Self {
        self.confirmer = Some(Rc::new(confirmer));
        self
    }

    /// Validate the configuration and assemble the classifier.
    pub fn build(self) -> Result<InteractionClassifier<T>, BuildError> {
        self.config.validate()?;
        let dispatcher = self.dispatcher.ok_or(BuildError::MissingDispatcher)?;
        let form_encoder = self.form_encoder.ok_or(BuildError::MissingFormEncoder)?;

        tracing::debug!(
            prefix = %self.config.attribute_prefix,
            graft_param = %self.config.graft_param,
            "built interaction classifier"
        );

        Ok(InteractionClassifier {
            names: AttributeNames::new(&self.config.attribute_prefix),
            config: self.config,
            dispatcher,
            form_encoder,
            state_reader: self.state_reader,
            confirmer: self.confirmer,
        })
    }
}
