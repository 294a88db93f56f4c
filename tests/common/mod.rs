//! Common test utilities for integration tests.
//!
//! This module provides reusable page fixtures, mock wiring, and helper
//! functions for exercising the classifier end to end.
//!
//! # Example
//!
//! ```ignore
//! use common::{harness, visit_link};
//!
//! let h = harness();
//! let outcome = h.classifier.on_click(&mut ClickEvent::new(visit_link("/foo")));
//! ```

pub mod mocks;

pub use mocks::*;

use ujs_intercept::adapters::DomNode;

/// Default harness: `data` prefix, current URL `/current`, canned form body.
pub fn harness() -> Harness {
    HarnessBuilder::new().build()
}

/// `<a href=..>` with no opt-in.
pub fn link(href: &str) -> DomNode {
    DomNode::element("a").with_attribute("href", href)
}

/// `<a href=.. data-visit>`
pub fn visit_link(href: &str) -> DomNode {
    link(href).with_attribute("data-visit", "true")
}

/// `<a href=.. data-remote>`
pub fn remote_link(href: &str) -> DomNode {
    link(href).with_attribute("data-remote", "true")
}

/// `<form action=.. method=POST>` with no opt-in.
pub fn form(action: &str) -> DomNode {
    DomNode::element("form")
        .with_attribute("action", action)
        .with_attribute("method", "POST")
}

/// Wrap `node` under `depth` nested `<div>`s inside a `<body>`; returns the body.
#[allow(dead_code)]
pub fn nest(node: DomNode, depth: usize) -> DomNode {
    let mut current = node;
    for _ in 0..depth {
        current = DomNode::element("div").with_child(current);
    }
    DomNode::element("body").with_child(current)
}
