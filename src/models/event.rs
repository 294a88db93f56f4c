//! Interaction events handed to the classifier by the host page.
//!
//! Both event types carry a target (any [`InteractionTarget`]) and a
//! prevent-default flag. Preventing default is the only cancellation
//! primitive and is idempotent.
//!
//! [`InteractionTarget`]: crate::traits::InteractionTarget

use serde::{Deserialize, Serialize};

/// Which mouse button produced a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Main button (usually left). Keyboard activation also reports this.
    #[default]
    Primary,
    /// Middle button / wheel click
    Auxiliary,
    /// Right button
    Secondary,
    /// Browser back button
    Back,
    /// Browser forward button
    Forward,
}

impl MouseButton {
    /// Map a legacy `which` value (1 = left, 2 = middle, 3 = right).
    ///
    /// `0` means the event carried no button information, which happens for
    /// keyboard-activated links, and counts as primary.
    pub fn from_which(which: u16) -> Self {
        match which {
            0 | 1 => MouseButton::Primary,
            2 => MouseButton::Auxiliary,
            3 => MouseButton::Secondary,
            4 => MouseButton::Back,
            _ => MouseButton::Forward,
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, MouseButton::Primary)
    }
}

/// Modifier keys held during a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub meta: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    /// No modifier held.
    pub const NONE: Modifiers = Modifiers {
        meta: false,
        ctrl: false,
        alt: false,
        shift: false,
    };

    pub const fn meta() -> Self {
        Self {
            meta: true,
            ..Self::NONE
        }
    }

    pub const fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub const fn alt() -> Self {
        Self {
            alt: true,
            ..Self::NONE
        }
    }

    pub const fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    /// True when any modifier is held.
    pub fn any(&self) -> bool {
        self.meta || self.ctrl || self.alt || self.shift
    }
}

/// A click delivered to the root listener.
#[derive(Debug, Clone)]
pub struct ClickEvent<T> {
    /// The element the click originated from (not necessarily an anchor)
    pub target: T,
    pub button: MouseButton,
    pub modifiers: Modifiers,
    default_prevented: bool,
}

impl<T> ClickEvent<T> {
    /// A plain primary-button click with no modifiers.
    pub fn new(target: T) -> Self {
        Self {
            target,
            button: MouseButton::Primary,
            modifiers: Modifiers::NONE,
            default_prevented: false,
        }
    }

    /// Set the button (builder pattern)
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    /// Set the held modifiers (builder pattern)
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Suppress the browser's native navigation. Calling twice is harmless.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// A form submission delivered to the root listener.
#[derive(Debug, Clone)]
pub struct SubmitEvent<T> {
    /// The element the submission was fired on; expected to be a form
    pub target: T,
    default_prevented: bool,
}

impl<T> SubmitEvent<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            default_prevented: false,
        }
    }

    /// Suppress the browser's native submission. Calling twice is harmless.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
