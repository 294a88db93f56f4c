//! Interaction classification.
//!
//! [`InteractionClassifier`] inspects link clicks and form submissions
//! delivered to a root listener and turns the eligible ones into exactly one
//! `visit` or `remote` dispatch.
//!
//! # Click rules
//!
//! 1. Non-primary buttons and modifier clicks are never touched.
//! 2. The target resolves to its nearest anchor (itself included).
//! 3. The anchor must opt in with `{prefix}-visit` or `{prefix}-remote`.
//! 4. Default is prevented only once the click is known to be eligible.
//!
//! # Submit rules
//!
//! Default is prevented as soon as the target is recognized as a form,
//! before any opt-in check. A form without an opt-in attribute therefore
//! does nothing at all instead of submitting natively, unlike an opted-out
//! link which keeps its native navigation.
//!
//! # Precedence
//!
//! When both `{prefix}-visit` and `{prefix}-remote` are truthy on the same
//! element, `remote` wins.

mod attributes;
mod builder;
mod graft;
mod outcome;

pub use attributes::{is_truthy, AttributeNames, UjsAttribute};
pub use builder::ClassifierBuilder;
pub use graft::{graft_path, query_param};
pub use outcome::{IgnoreReason, Outcome};

use std::fmt;
use std::rc::Rc;

use crate::config::ClassifierConfig;
use crate::models::{
    normalize_method, ClickEvent, DispatchIntent, DispatchMode, ElementKind, RequestOptions,
    SubmitEvent,
};
use crate::traits::{Confirmer, Dispatcher, FormEncoder, InteractionTarget, StateReader};

/// Classifies interactions on targets of type `T` and dispatches them.
pub struct InteractionClassifier<T> {
    config: ClassifierConfig,
    names: AttributeNames,
    dispatcher: Rc<dyn Dispatcher>,
    form_encoder: Rc<dyn FormEncoder<T>>,
    state_reader: Option<Rc<dyn StateReader>>,
    confirmer: Option<Rc<dyn Confirmer>>,
}

impl<T: InteractionTarget> InteractionClassifier<T> {
    pub fn builder() -> ClassifierBuilder<T> {
        ClassifierBuilder::new()
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn attribute_names(&self) -> &AttributeNames {
        &self.names
    }

    /// Client-side navigation primitive.
    pub fn visit(&self, url: &str, options: RequestOptions) {
        self.dispatcher.visit(url, options);
    }

    /// Fire-and-forget primitive.
    pub fn remote(&self, url: &str, options: RequestOptions) {
        self.dispatcher.remote(url, options);
    }

    /// Handle a click delivered to the root listener.
    pub fn on_click(&self, event: &mut ClickEvent<T>) -> Outcome {
        if !event.button.is_primary() {
            return ignore("click", IgnoreReason::NonPrimaryButton);
        }
        if event.modifiers.any() {
            return ignore("click", IgnoreReason::ModifierHeld);
        }

        let link = match event.target.closest(&ElementKind::Anchor) {
            Some(link) => link,
            None => return ignore("click", IgnoreReason::NoAnchor),
        };
        let mode = match self.opt_in(&link) {
            Some(mode) => mode,
            None => return ignore("click", IgnoreReason::NotOptedIn),
        };
        let url = match attributes::non_blank(link.attribute("href")) {
            Some(url) => url,
            None => return ignore("click", IgnoreReason::MissingUrl),
        };

        event.prevent_default();

        if !self.confirmed(&link) {
            return ignore("click", IgnoreReason::ConfirmDeclined);
        }

        let method = self
            .names
            .non_empty(&link, UjsAttribute::Method)
            .unwrap_or_else(|| "GET".to_string());

        self.dispatch(&link, mode, url, RequestOptions::new(&method))
    }

    /// Handle a form submission delivered to the root listener.
    pub fn on_submit(&self, event: &mut SubmitEvent<T>) -> Outcome {
        if event.target.kind() != ElementKind::Form {
            return ignore("submit", IgnoreReason::NotForm);
        }

        event.prevent_default();
        let form = &event.target;

        let mode = match self.opt_in(form) {
            Some(mode) => mode,
            None => return ignore("submit", IgnoreReason::NotOptedIn),
        };
        if !self.confirmed(form) {
            return ignore("submit", IgnoreReason::ConfirmDeclined);
        }

        // a form without an action submits to the current page
        let action = attributes::non_blank(form.attribute("action"));
        let url = match action.or_else(|| self.current_url()) {
            Some(url) => url,
            None => return ignore("submit", IgnoreReason::MissingUrl),
        };
        let method = attributes::non_blank(form.attribute("method"))
            .unwrap_or_else(|| self.config.default_form_method.clone());

        let options = RequestOptions::new(&method)
            .with_headers(RequestOptions::inferred_content_type())
            .with_body(self.form_encoder.encode(form));

        self.dispatch(form, mode, url, options)
    }

    /// Bind both handlers to this classifier.
    pub fn handlers(self) -> Handlers<T>
    where
        T: 'static,
    {
        Handlers::new(Rc::new(self))
    }

    /// `remote` beats `visit` when both are set on the same element.
    fn opt_in(&self, element: &T) -> Option<DispatchMode> {
        if self.names.is_set(element, UjsAttribute::Remote) {
            Some(DispatchMode::Remote)
        } else if self.names.is_set(element, UjsAttribute::Visit) {
            Some(DispatchMode::Visit)
        } else {
            None
        }
    }

    fn confirmed(&self, element: &T) -> bool {
        let confirmer = match &self.confirmer {
            Some(confirmer) => confirmer,
            None => return true,
        };
        match self.names.non_empty(element, UjsAttribute::Confirm) {
            Some(message) => confirmer.confirm(&message),
            None => true,
        }
    }

    fn current_url(&self) -> Option<String> {
        let reader = self.state_reader.as_ref()?;
        attributes::non_blank(reader.current_url())
    }

    /// Placeholder for a graft visit: explicit attribute first, then the
    /// current location. Non-graft URLs never get one.
    fn placeholder_key(&self, element: &T, url: &str) -> Option<String> {
        let path = graft_path(url, &self.config.graft_param)?;
        tracing::trace!(graft = %path, "graft visit");
        self.names
            .non_empty(element, UjsAttribute::Placeholder)
            .or_else(|| self.current_url())
    }

    /// Graft visits from forms carry a placeholder too, on top of the plain
    /// `{method, headers, body}` submit shape.
    fn dispatch(
        &self,
        element: &T,
        mode: DispatchMode,
        url: String,
        mut options: RequestOptions,
    ) -> Outcome {
        if mode == DispatchMode::Visit {
            options.placeholder_key = self.placeholder_key(element, &url);
        }
        options.method = normalize_method(&options.method);

        tracing::debug!(
            mode = %mode,
            url = %url,
            method = %options.method,
            placeholder = ?options.placeholder_key,
            "dispatching interaction"
        );

        match mode {
            DispatchMode::Visit => self.visit(&url, options.clone()),
            DispatchMode::Remote => self.remote(&url, options.clone()),
        }
        Outcome::Dispatched(DispatchIntent::new(mode, url, options))
    }
}

fn ignore(kind: &'static str, reason: IgnoreReason) -> Outcome {
    tracing::debug!(event = kind, reason = %reason, "interaction ignored");
    Outcome::ignored(reason)
}

impl<T> fmt::Debug for InteractionClassifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionClassifier")
            .field("config", &self.config)
            .field("has_state_reader", &self.state_reader.is_some())
            .field("has_confirmer", &self.confirmer.is_some())
            .finish()
    }
}

/// The `on_click`/`on_submit` pair for one classifier, ready to attach to a
/// root container.
///
/// # Example
///
/// ```ignore
/// let handlers = classifier.handlers();
/// body.add_listener("click", move |event| { (handlers.on_click)(event); });
/// ```
pub struct Handlers<T> {
    pub on_click: Box<dyn Fn(&mut ClickEvent<T>) -> Outcome>,
    pub on_submit: Box<dyn Fn(&mut SubmitEvent<T>) -> Outcome>,
    classifier: Rc<InteractionClassifier<T>>,
}

impl<T: InteractionTarget + 'static> Handlers<T> {
    pub fn new(classifier: Rc<InteractionClassifier<T>>) -> Self {
        let click = Rc::clone(&classifier);
        let submit = Rc::clone(&classifier);
        Self {
            on_click: Box::new(move |event: &mut ClickEvent<T>| click.on_click(event)),
            on_submit: Box::new(move |event: &mut SubmitEvent<T>| submit.on_submit(event)),
            classifier,
        }
    }

    /// The classifier both handlers are bound to.
    pub fn classifier(&self) -> &Rc<InteractionClassifier<T>> {
        &self.classifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{
        RecordingDispatcher, ScriptedConfirmer, StaticFormEncoder, StaticStateReader,
    };
    use crate::adapters::DomNode;
    use crate::models::{FormBody, Modifiers, MouseButton, CONTENT_TYPE};

    struct Fixture {
        dispatcher: RecordingDispatcher,
        state: StaticStateReader,
        encoder: StaticFormEncoder,
        classifier: InteractionClassifier<DomNode>,
    }

    fn fixture() -> Fixture {
        fixture_with(|builder| builder)
    }

    fn fixture_with(
        customize: impl FnOnce(ClassifierBuilder<DomNode>) -> ClassifierBuilder<DomNode>,
    ) -> Fixture {
        let dispatcher = RecordingDispatcher::new();
        let state = StaticStateReader::new(Some("/current"));
        let mut body = FormBody::new();
        body.append("some", "Body");
        let encoder = StaticFormEncoder::new(body);

        let builder = InteractionClassifier::builder()
            .dispatcher(dispatcher.clone())
            .state_reader(state.clone())
            .form_encoder(encoder.clone());
        let classifier = customize(builder).build().unwrap();

        Fixture {
            dispatcher,
            state,
            encoder,
            classifier,
        }
    }

    fn link(href: &str) -> DomNode {
        DomNode::element("A").with_attribute("href", href)
    }

    fn form(action: &str) -> DomNode {
        DomNode::element("FORM")
            .with_attribute("action", action)
            .with_attribute("method", "POST")
    }

    // ============= Click Tests =============

    #[test]
    fn test_click_visit_link() {
        let f = fixture();
        let mut event = ClickEvent::new(link("/foo").with_attribute("data-visit", "true"));

        let outcome = f.classifier.on_click(&mut event);

        assert!(event.default_prevented());
        assert_eq!(
            f.dispatcher.intents(),
            vec![DispatchIntent::visit("/foo", RequestOptions::get())]
        );
        assert_eq!(outcome.intent(), Some(&f.dispatcher.intents()[0]));
    }

    #[test]
    fn test_click_graft_uses_placeholder_attribute() {
        let f = fixture();
        f.state.set_current_url(Some("/elsewhere"));
        let mut event = ClickEvent::new(
            link("/foo?bzq=data.hello")
                .with_attribute("data-visit", "true")
                .with_attribute("data-placeholder", "/current"),
        );

        f.classifier.on_click(&mut event);

        assert_eq!(
            f.dispatcher.visits(),
            vec![DispatchIntent::visit(
                "/foo?bzq=data.hello",
                RequestOptions::get().with_placeholder_key("/current")
            )]
        );
        assert_eq!(f.state.reads(), 0);
    }

    #[test]
    fn test_click_graft_falls_back_to_current_url() {
        let f = fixture();
        let target = link("/foo?bzq=data.hello").with_attribute("data-visit", "true");
        let mut event = ClickEvent::new(target);

        f.classifier.on_click(&mut event);

        let visits = f.dispatcher.visits();
        assert_eq!(visits[0].options.placeholder_key.as_deref(), Some("/current"));
        assert_eq!(f.state.reads(), 1);
    }

    #[test]
    fn test_click_graft_without_location_omits_placeholder() {
        let f = fixture();
        f.state.set_current_url(None);
        let target = link("/foo?bzq=data.hello").with_attribute("data-visit", "true");
        let mut event = ClickEvent::new(target);

        f.classifier.on_click(&mut event);

        assert_eq!(f.dispatcher.visits()[0].options.placeholder_key, None);
    }

    #[test]
    fn test_click_without_graft_ignores_placeholder_attribute() {
        let f = fixture();
        let mut event = ClickEvent::new(
            link("/foo")
                .with_attribute("data-visit", "true")
                .with_attribute("data-placeholder", "/current"),
        );

        f.classifier.on_click(&mut event);

        assert_eq!(f.dispatcher.visits()[0].options, RequestOptions::get());
        assert_eq!(f.state.reads(), 0);
    }

    #[test]
    fn test_click_remote_link() {
        let f = fixture();
        let mut event = ClickEvent::new(link("/foo").with_attribute("data-remote", "true"));

        f.classifier.on_click(&mut event);

        assert!(event.default_prevented());
        assert!(f.dispatcher.visits().is_empty());
        assert_eq!(
            f.dispatcher.remotes(),
            vec![DispatchIntent::remote("/foo", RequestOptions::get())]
        );
    }

    #[test]
    fn test_click_remote_beats_visit() {
        let f = fixture();
        let mut event = ClickEvent::new(
            link("/foo?bzq=data.a")
                .with_attribute("data-visit", "true")
                .with_attribute("data-remote", "true"),
        );

        f.classifier.on_click(&mut event);

        assert_eq!(f.dispatcher.len(), 1);
        let remotes = f.dispatcher.remotes();
        assert_eq!(remotes[0].options.placeholder_key, None);
    }

    #[test]
    fn test_click_modifiers_and_buttons_win() {
        let f = fixture();
        let target = link("/foo").with_attribute("data-visit", "true");

        for modifiers in [
            Modifiers::meta(),
            Modifiers::ctrl(),
            Modifiers::alt(),
            Modifiers::shift(),
        ] {
            let mut event = ClickEvent::new(target.clone()).with_modifiers(modifiers);
            let outcome = f.classifier.on_click(&mut event);
            assert_eq!(outcome.ignore_reason(), Some(IgnoreReason::ModifierHeld));
            assert!(!event.default_prevented());
        }

        let mut event = ClickEvent::new(target).with_button(MouseButton::Auxiliary);
        let outcome = f.classifier.on_click(&mut event);
        assert_eq!(outcome.ignore_reason(), Some(IgnoreReason::NonPrimaryButton));
        assert!(!event.default_prevented());

        assert!(f.dispatcher.is_empty());
    }

    #[test]
    fn test_click_without_opt_in() {
        let f = fixture();
        let mut event = ClickEvent::new(link("/foo"));

        let outcome = f.classifier.on_click(&mut event);

        assert_eq!(outcome.ignore_reason(), Some(IgnoreReason::NotOptedIn));
        assert!(!event.default_prevented());
        assert!(f.dispatcher.is_empty());
    }

    #[test]
    fn test_click_false_attribute_is_not_opt_in() {
        let f = fixture();
        let mut event = ClickEvent::new(link("/foo").with_attribute("data-visit", "false"));

        let outcome = f.classifier.on_click(&mut event);

        assert_eq!(outcome.ignore_reason(), Some(IgnoreReason::NotOptedIn));
    }

    #[test]
    fn test_click_inside_anchor_resolves_ancestor() {
        let f = fixture();
        let span = DomNode::element("span");
        let _anchor = link("/foo")
            .with_attribute("data-visit", "true")
            .with_child(DomNode::element("strong").with_child(span.clone()));

        let mut event = ClickEvent::new(span);
        f.classifier.on_click(&mut event);

        assert_eq!(f.dispatcher.visits()[0].url, "/foo");
        assert!(event.default_prevented());
    }

    #[test]
    fn test_click_outside_anchor() {
        let f = fixture();
        let button = DomNode::element("button").with_attribute("data-visit", "true");
        let _body = DomNode::element("body").with_child(button.clone());

        let mut event = ClickEvent::new(button);
        let outcome = f.classifier.on_click(&mut event);

        assert_eq!(outcome.ignore_reason(), Some(IgnoreReason::NoAnchor));
        assert!(!event.default_prevented());
    }

    #[test]
    fn test_click_missing_href() {
        let f = fixture();
        let mut event = ClickEvent::new(DomNode::element("a").with_attribute("data-visit", "true"));

        let outcome = f.classifier.on_click(&mut event);

        assert_eq!(outcome.ignore_reason(), Some(IgnoreReason::MissingUrl));
        assert!(!event.default_prevented());
    }

    #[test]
    fn test_click_method_override() {
        let f = fixture();
        let mut event = ClickEvent::new(
            link("/posts/1")
                .with_attribute("data-remote", "true")
                .with_attribute("data-method", "delete"),
        );

        f.classifier.on_click(&mut event);

        assert_eq!(f.dispatcher.remotes()[0].options.method, "DELETE");
    }

    #[test]
    fn test_click_custom_prefix() {
        let f = fixture_with(|builder| builder.attribute_prefix("ujs"));
        let mut ignored = ClickEvent::new(link("/foo").with_attribute("data-visit", "true"));
        let mut handled = ClickEvent::new(link("/foo").with_attribute("ujs-visit", "true"));

        f.classifier.on_click(&mut ignored);
        f.classifier.on_click(&mut handled);

        assert!(!ignored.default_prevented());
        assert!(handled.default_prevented());
        assert_eq!(f.dispatcher.len(), 1);
    }

    // ============= Confirm Tests =============

    #[test]
    fn test_confirm_declined_intercepts_without_dispatch() {
        let confirmer = ScriptedConfirmer::declining();
        let f = fixture_with(|builder| builder.confirmer(confirmer.clone()));
        let mut event = ClickEvent::new(
            link("/posts/1")
                .with_attribute("data-remote", "true")
                .with_attribute("data-confirm", "Really delete?"),
        );

        let outcome = f.classifier.on_click(&mut event);

        assert_eq!(outcome.ignore_reason(), Some(IgnoreReason::ConfirmDeclined));
        assert!(event.default_prevented());
        assert!(f.dispatcher.is_empty());
        assert_eq!(confirmer.prompts(), vec!["Really delete?".to_string()]);
    }

    #[test]
    fn test_confirm_accepted_dispatches() {
        let confirmer = ScriptedConfirmer::accepting();
        let f = fixture_with(|builder| builder.confirmer(confirmer.clone()));
        let mut event = SubmitEvent::new(
            form("/foo")
                .with_attribute("data-visit", "true")
                .with_attribute("data-confirm", "Sure?"),
        );

        f.classifier.on_submit(&mut event);

        assert_eq!(f.dispatcher.visits().len(), 1);
        assert_eq!(confirmer.prompts().len(), 1);
    }

    #[test]
    fn test_confirm_attribute_ignored_without_confirmer() {
        let f = fixture();
        let mut event = ClickEvent::new(
            link("/foo")
                .with_attribute("data-visit", "true")
                .with_attribute("data-confirm", "Sure?"),
        );

        f.classifier.on_click(&mut event);

        assert_eq!(f.dispatcher.visits().len(), 1);
    }

    // ============= Submit Tests =============

    #[test]
    fn test_submit_visit_form() {
        let f = fixture();
        let mut event = SubmitEvent::new(form("/foo").with_attribute("data-visit", "true"));

        f.classifier.on_submit(&mut event);

        let visits = f.dispatcher.visits();
        assert_eq!(visits.len(), 1);
        assert_eq!(visits[0].url, "/foo");
        assert_eq!(visits[0].options.method, "POST");
        let headers = visits[0].options.headers.as_ref().unwrap();
        assert_eq!(headers.get(CONTENT_TYPE), Some(&None));
        assert_eq!(visits[0].options.body.as_ref().unwrap().get("some"), Some("Body"));
        assert_eq!(f.encoder.calls(), 1);
        assert!(event.default_prevented());
    }

    #[test]
    fn test_submit_remote_form() {
        let f = fixture();
        let mut event = SubmitEvent::new(form("/foo").with_attribute("data-remote", "true"));

        f.classifier.on_submit(&mut event);

        assert!(f.dispatcher.visits().is_empty());
        let remotes = f.dispatcher.remotes();
        assert_eq!(remotes.len(), 1);
        assert_eq!(remotes[0].options.method, "POST");
        assert!(remotes[0].options.body.is_some());
    }

    #[test]
    fn test_submit_without_opt_in_still_prevents_default() {
        let f = fixture();
        let mut event = SubmitEvent::new(form("/foo").with_attribute("data-visit", "false"));

        let outcome = f.classifier.on_submit(&mut event);

        assert_eq!(outcome.ignore_reason(), Some(IgnoreReason::NotOptedIn));
        assert!(event.default_prevented());
        assert!(f.dispatcher.is_empty());
        assert_eq!(f.encoder.calls(), 0);
    }

    #[test]
    fn test_submit_non_form_is_noop() {
        let f = fixture();
        let mut event = SubmitEvent::new(link("/foo").with_attribute("data-visit", "true"));

        let outcome = f.classifier.on_submit(&mut event);

        assert_eq!(outcome.ignore_reason(), Some(IgnoreReason::NotForm));
        assert!(!event.default_prevented());
        assert!(f.dispatcher.is_empty());
    }

    #[test]
    fn test_submit_method_defaults_and_case() {
        let f = fixture();
        let no_method = DomNode::element("form")
            .with_attribute("action", "/a")
            .with_attribute("data-visit", "true");
        let lower = form("/b")
            .with_attribute("method", "patch")
            .with_attribute("data-visit", "true");

        f.classifier.on_submit(&mut SubmitEvent::new(no_method));
        f.classifier.on_submit(&mut SubmitEvent::new(lower));

        let visits = f.dispatcher.visits();
        assert_eq!(visits[0].options.method, "POST");
        assert_eq!(visits[1].options.method, "PATCH");
    }

    #[test]
    fn test_submit_configured_default_method() {
        let f = fixture_with(|builder| {
            builder.config(ClassifierConfig::default().with_default_form_method("put"))
        });
        let target = DomNode::element("form")
            .with_attribute("action", "/a")
            .with_attribute("data-remote", "true");

        f.classifier.on_submit(&mut SubmitEvent::new(target));

        assert_eq!(f.dispatcher.remotes()[0].options.method, "PUT");
    }

    #[test]
    fn test_submit_without_action_uses_current_url() {
        let f = fixture();
        let target = DomNode::element("form").with_attribute("data-visit", "true");

        f.classifier.on_submit(&mut SubmitEvent::new(target.clone()));
        f.state.set_current_url(None);
        let outcome = f.classifier.on_submit(&mut SubmitEvent::new(target));

        assert_eq!(f.dispatcher.visits()[0].url, "/current");
        assert_eq!(outcome.ignore_reason(), Some(IgnoreReason::MissingUrl));
    }

    #[test]
    fn test_submit_graft_visit_gets_placeholder() {
        let f = fixture();
        let target = form("/posts?bzq=data.comments").with_attribute("data-visit", "true");

        f.classifier.on_submit(&mut SubmitEvent::new(target));

        assert_eq!(
            f.dispatcher.visits()[0].options.placeholder_key.as_deref(),
            Some("/current")
        );
    }

    #[test]
    fn test_submit_graft_remote_keeps_plain_shape() {
        let f = fixture();
        let target = form("/posts?bzq=data.comments").with_attribute("data-remote", "true");

        f.classifier.on_submit(&mut SubmitEvent::new(target));

        let remotes = f.dispatcher.remotes();
        assert_eq!(remotes[0].options.placeholder_key, None);
        assert!(remotes[0].options.headers.is_some());
        assert_eq!(f.state.reads(), 0);
    }

    // ============= Handlers Tests =============

    #[test]
    fn test_handlers_are_independent_per_call() {
        let f = fixture();
        let dispatcher = f.dispatcher.clone();
        let handlers = f.classifier.handlers();
        let target = link("/foo").with_attribute("data-visit", "true");

        let first = (handlers.on_click)(&mut ClickEvent::new(target.clone()));
        let second = (handlers.on_click)(&mut ClickEvent::new(target));

        assert_eq!(first, second);
        assert_eq!(dispatcher.len(), 2);
        let intents = dispatcher.intents();
        assert_eq!(intents[0], intents[1]);
    }

    #[test]
    fn test_handlers_share_one_classifier_instance() {
        let f = fixture();
        let handlers = f.classifier.handlers();

        // held by both closures plus the accessor handle
        assert_eq!(Rc::strong_count(handlers.classifier()), 3);
    }

    #[test]
    fn test_handlers_submit_and_direct_primitives() {
        let f = fixture();
        let dispatcher = f.dispatcher.clone();
        let handlers = f.classifier.handlers();

        (handlers.on_submit)(&mut SubmitEvent::new(
            form("/foo").with_attribute("data-remote", "true"),
        ));
        handlers.classifier().visit("/direct", RequestOptions::get());

        assert_eq!(dispatcher.remotes().len(), 1);
        assert_eq!(dispatcher.visits()[0].url, "/direct");
    }
}
