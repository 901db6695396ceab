// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side collaborators of the [`Navigator`](crate::Navigator).
//!
//! A [`Controller`] samples the input device; a [`Platform`] answers focus
//! queries for the host UI toolkit and carries out focus changes.

use kurbo::Point;
use understory_pad_input::{FrameInput, InputState};

/// Source of raw per-frame input.
///
/// Any `FnMut() -> FrameInput` closure is a controller, which is handy for
/// scripted input and tests.
pub trait Controller {
    /// Sample the device once.
    fn poll(&mut self) -> FrameInput;
}

impl<F> Controller for F
where
    F: FnMut() -> FrameInput,
{
    fn poll(&mut self) -> FrameInput {
        self()
    }
}

/// A host UI toolkit, as seen by the navigator.
///
/// Positions are in a coordinate space of the platform's choosing, used
/// consistently for [`Platform::current_position`] and
/// [`Platform::fill_candidates`]. Use [`Platform::flip_x`] and
/// [`Platform::flip_y`] to tell the navigator which way the axes point:
/// with no flips, Right is `+x` and Up is `+y`.
pub trait Platform {
    /// Returns `true` to mirror horizontal movement.
    fn flip_x(&self) -> bool {
        false
    }

    /// Returns `true` to mirror vertical movement (for example when `y` grows downward).
    fn flip_y(&self) -> bool {
        false
    }

    /// Returns `true` if the window holding the focused element is active.
    fn has_focus(&self) -> bool;

    /// Position of the focused element.
    fn current_position(&self) -> Point;

    /// Write the positions of every focusable element other than the focused
    /// one into the front of `buffer`, and return how many were written.
    ///
    /// Elements that do not fit are dropped; counts past `buffer.len()` are
    /// ignored.
    fn fill_candidates(&mut self, buffer: &mut [Point]) -> usize;

    /// Move focus to the candidate at `index` from the latest
    /// [`Platform::fill_candidates`] call.
    fn select(&mut self, index: usize);

    /// Handle everything other than directional focus movement for this tick
    /// (accept, decline, paging, value changes, and so on).
    fn process_input(&mut self, state: &InputState);
}
