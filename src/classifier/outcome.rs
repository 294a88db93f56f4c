//! What a handler decided for one interaction.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::DispatchIntent;

/// Why an interaction was left alone (or intercepted without dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// Middle/right/other button; native behavior proceeds
    NonPrimaryButton,
    /// Meta, ctrl, alt or shift held; native behavior proceeds
    ModifierHeld,
    /// Click target has no anchor ancestor
    NoAnchor,
    /// Submit target is not a form
    NotForm,
    /// Neither `{prefix}-visit` nor `{prefix}-remote` is truthy
    NotOptedIn,
    /// No usable `href`/`action`
    MissingUrl,
    /// The confirmation prompt was declined
    ConfirmDeclined,
}

impl IgnoreReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            IgnoreReason::NonPrimaryButton => "non_primary_button",
            IgnoreReason::ModifierHeld => "modifier_held",
            IgnoreReason::NoAnchor => "no_anchor",
            IgnoreReason::NotForm => "not_form",
            IgnoreReason::NotOptedIn => "not_opted_in",
            IgnoreReason::MissingUrl => "missing_url",
            IgnoreReason::ConfirmDeclined => "confirm_declined",
        }
    }
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of running one interaction through a handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    /// Exactly one of `visit`/`remote` was invoked with this intent
    Dispatched(DispatchIntent),
    /// Nothing was dispatched
    Ignored { reason: IgnoreReason },
}

impl Outcome {
    pub fn ignored(reason: IgnoreReason) -> Self {
        Outcome::Ignored { reason }
    }

    pub fn is_dispatched(&self) -> bool {
        matches!(self, Outcome::Dispatched(_))
    }

    pub fn intent(&self) -> Option<&DispatchIntent> {
        match self {
            Outcome::Dispatched(intent) => Some(intent),
            Outcome::Ignored { .. } => None,
        }
    }

    pub fn ignore_reason(&self) -> Option<IgnoreReason> {
        match self {
            Outcome::Dispatched(_) => None,
            Outcome::Ignored { reason } => Some(*reason),
        }
    }
}
