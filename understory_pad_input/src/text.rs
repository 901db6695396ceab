// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable names and descriptions for [`Buttons`].
//!
//! [`BUTTON_TEXT`] is the built-in table. Hosts that localize their UI
//! implement [`ButtonText`] and wrap it in [`TextWithFallback`], which uses the
//! override's text when it has some and the built-in table otherwise.
//!
//! ```
//! use understory_pad_input::{Buttons, ButtonText, TextWithFallback};
//!
//! struct French;
//!
//! impl ButtonText for French {
//!     fn name(&self, button: Buttons) -> Option<&str> {
//!         (button == Buttons::ACCEPT).then_some("Valider")
//!     }
//!
//!     fn description(&self, _: Buttons) -> Option<&str> {
//!         None
//!     }
//! }
//!
//! let text = TextWithFallback::new(Some(French));
//! assert_eq!(text.name(Buttons::ACCEPT), Some("Valider"));
//! assert_eq!(text.name(Buttons::DECLINE), Some("Decline"));
//! ```

use crate::Buttons;

/// Display text for a single named button.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ButtonInfo {
    /// The button this entry describes.
    pub button: Buttons,
    /// Short display name.
    pub name: &'static str,
    /// One-line explanation of what the button does.
    pub description: &'static str,
}

/// Built-in text for every named button, in bit order.
pub static BUTTON_TEXT: [ButtonInfo; 11] = [
    ButtonInfo {
        button: Buttons::UP,
        name: "Up",
        description: "Navigates the menu up.",
    },
    ButtonInfo {
        button: Buttons::DOWN,
        name: "Down",
        description: "Navigates the menu down.",
    },
    ButtonInfo {
        button: Buttons::LEFT,
        name: "Left",
        description: "Navigates the menu left.",
    },
    ButtonInfo {
        button: Buttons::RIGHT,
        name: "Right",
        description: "Navigates the menu right.",
    },
    ButtonInfo {
        button: Buttons::ACCEPT,
        name: "Accept",
        description: "Clicks a button.",
    },
    ButtonInfo {
        button: Buttons::DECLINE,
        name: "Decline",
        description: "Closes the current non-main window.",
    },
    ButtonInfo {
        button: Buttons::NEXT_PAGE,
        name: "NextPage",
        description: "Navigates to the next page, on supported applications.",
    },
    ButtonInfo {
        button: Buttons::PREVIOUS_PAGE,
        name: "PreviousPage",
        description: "Navigates to the previous page, on supported applications.",
    },
    ButtonInfo {
        button: Buttons::INCREMENT,
        name: "Increment",
        description: "+1 to the current value.",
    },
    ButtonInfo {
        button: Buttons::DECREMENT,
        name: "Decrement",
        description: "-1 to the current value.",
    },
    ButtonInfo {
        button: Buttons::MODIFIER,
        name: "Modifier",
        description: "Allows for alternate behaviour on some element.\n\
                      e.g. Mod+Up increases the value by 1.",
    },
];

impl Buttons {
    /// Built-in text for a single named button.
    ///
    /// Returns `None` for the empty set and for combinations.
    #[must_use]
    pub fn info(self) -> Option<&'static ButtonInfo> {
        BUTTON_TEXT.iter().find(|info| info.button == self)
    }

    /// Built-in display name for a single named button.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        self.info().map(|info| info.name)
    }

    /// Built-in description for a single named button.
    #[must_use]
    pub fn description(self) -> Option<&'static str> {
        self.info().map(|info| info.description)
    }
}

/// Source of display text for buttons.
///
/// Return `None` (or an empty string) for anything the provider does not
/// cover; [`TextWithFallback`] fills the gap from [`BUTTON_TEXT`].
pub trait ButtonText {
    /// Display name for `button`, if known.
    fn name(&self, button: Buttons) -> Option<&str>;
    /// Description for `button`, if known.
    fn description(&self, button: Buttons) -> Option<&str>;
}

/// The built-in [`BUTTON_TEXT`] table as a [`ButtonText`] provider.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultText;

impl ButtonText for DefaultText {
    fn name(&self, button: Buttons) -> Option<&str> {
        Buttons::name(button)
    }

    fn description(&self, button: Buttons) -> Option<&str> {
        Buttons::description(button)
    }
}

/// An optional override provider backed by the built-in table.
#[derive(Clone, Debug)]
pub struct TextWithFallback<T> {
    overrides: Option<T>,
}

impl<T> Default for TextWithFallback<T> {
    fn default() -> Self {
        Self { overrides: None }
    }
}

impl<T: ButtonText> TextWithFallback<T> {
    /// Wrap an optional override provider.
    pub fn new(overrides: Option<T>) -> Self {
        Self { overrides }
    }

    /// The override provider, if any.
    pub fn overrides(&self) -> Option<&T> {
        self.overrides.as_ref()
    }
}

impl<T: ButtonText> ButtonText for TextWithFallback<T> {
    fn name(&self, button: Buttons) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|o| o.name(button))
            .filter(|text| !text.is_empty())
            .or_else(|| Buttons::name(button))
    }

    fn description(&self, button: Buttons) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|o| o.description(button))
            .filter(|text| !text.is_empty())
            .or_else(|| Buttons::description(button))
    }
}
