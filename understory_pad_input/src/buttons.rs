// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logical button vocabulary and the raw per-frame input sample.

use kurbo::Vec2;

bitflags::bitflags! {
    /// Logical actions a directional input device can request.
    ///
    /// Values are single bits and combine with `|`. The empty set means no
    /// button is down. Bits outside the named set are dropped by
    /// [`Buttons::from_bits_truncate`], which is how hosts should convert raw
    /// hardware masks.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Buttons: u16 {
        /// Moves focus up.
        const UP            = 1 << 0;
        /// Moves focus down.
        const DOWN          = 1 << 1;
        /// Moves focus left.
        const LEFT          = 1 << 2;
        /// Moves focus right.
        const RIGHT         = 1 << 3;
        /// Activates the focused element.
        const ACCEPT        = 1 << 4;
        /// Backs out of the current element or window.
        const DECLINE       = 1 << 5;
        /// Goes to the next page, where the host supports paging.
        const NEXT_PAGE     = 1 << 6;
        /// Goes to the previous page, where the host supports paging.
        const PREVIOUS_PAGE = 1 << 7;
        /// Increases the focused element's value.
        const INCREMENT     = 1 << 8;
        /// Decreases the focused element's value.
        const DECREMENT     = 1 << 9;
        /// Switches other buttons to their alternate behavior.
        ///
        /// Never a movement direction: while it is held, directional buttons
        /// do not move focus.
        const MODIFIER      = 1 << 10;
    }
}

impl Buttons {
    /// The four directional buttons.
    pub const MOVEMENT: Self = Self::UP
        .union(Self::DOWN)
        .union(Self::LEFT)
        .union(Self::RIGHT);

    /// Returns `true` if any bit of `mask` is set in `self`.
    #[must_use]
    pub const fn has_any(self, mask: Self) -> bool {
        self.intersects(mask)
    }

    /// Returns `true` if any directional button is set.
    #[must_use]
    pub const fn has_movement(self) -> bool {
        self.intersects(Self::MOVEMENT)
    }

    /// Direction requested by the movement buttons in this set.
    ///
    /// Right is `+x` and Up is `+y`; opposing buttons cancel out. The flips
    /// let a host whose axes point the other way (for example, `y` growing
    /// downward on screen) reuse the same mapping.
    ///
    /// ```
    /// use kurbo::Vec2;
    /// use understory_pad_input::Buttons;
    ///
    /// let up_right = Buttons::UP | Buttons::RIGHT;
    /// assert_eq!(up_right.direction(false, false), Vec2::new(1.0, 1.0));
    /// assert_eq!(up_right.direction(false, true), Vec2::new(1.0, -1.0));
    /// ```
    #[must_use]
    pub fn direction(self, flip_x: bool, flip_y: bool) -> Vec2 {
        let mut x = 0.0;
        let mut y = 0.0;
        if self.contains(Self::RIGHT) {
            x += 1.0;
        }
        if self.contains(Self::LEFT) {
            x -= 1.0;
        }
        if self.contains(Self::UP) {
            y += 1.0;
        }
        if self.contains(Self::DOWN) {
            y -= 1.0;
        }
        if flip_x {
            x = -x;
        }
        if flip_y {
            y = -y;
        }
        Vec2::new(x, y)
    }
}

/// Raw button mask sampled for a single tick.
///
/// Produced once per tick by a controller and never modified afterwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FrameInput {
    buttons: Buttons,
}

impl FrameInput {
    /// Wrap a sampled button mask.
    #[must_use]
    pub const fn new(buttons: Buttons) -> Self {
        Self { buttons }
    }

    /// Build a sample from a raw hardware mask, dropping unknown bits.
    #[must_use]
    pub const fn from_bits_truncate(bits: u16) -> Self {
        Self::new(Buttons::from_bits_truncate(bits))
    }

    /// Buttons that were down when the sample was taken.
    #[must_use]
    pub const fn buttons(self) -> Buttons {
        self.buttons
    }
}

impl From<Buttons> for FrameInput {
    fn from(buttons: Buttons) -> Self {
        Self::new(buttons)
    }
}
