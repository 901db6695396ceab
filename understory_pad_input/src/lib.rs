// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Pad Input: button state for directional input devices.
//!
//! This crate turns the raw button mask a gamepad (or D-pad, or remote) reports
//! every frame into the signals a focus-driven UI acts on:
//!
//! - [`Buttons`]: the logical action vocabulary (four directions, accept,
//!   decline, paging, increment/decrement, and a modifier) with
//!   [`Buttons::direction`] mapping movement bits to a [`kurbo::Vec2`].
//! - [`InputState`]: per-tick edge detection (pressed/released), the held
//!   level, and a navigation set that auto-repeats held buttons at a fixed
//!   cadence after an initial delay ([`RepeatTiming`]).
//! - [`BUTTON_TEXT`] and [`ButtonText`]: display names and descriptions, with
//!   an override hook for localized text.
//!
//! It does not read hardware. Controllers sample their device, map it to
//! [`Buttons`], and hand the result over as a [`FrameInput`].
//!
//! ## Example
//!
//! ```rust
//! use understory_pad_input::{Buttons, FrameInput, InputState};
//!
//! let mut state = InputState::new();
//! let frame = FrameInput::new(Buttons::RIGHT | Buttons::ACCEPT);
//!
//! assert!(state.update(frame.buttons(), 16.0));
//! assert!(state.is_pressed(Buttons::ACCEPT));
//! assert!(state.navigation().has_movement());
//!
//! // Release Accept, keep holding Right.
//! state.update(Buttons::RIGHT, 16.0);
//! assert!(state.is_released(Buttons::ACCEPT));
//! assert!(state.is_held(Buttons::RIGHT));
//! assert!(!state.is_navigation_pressed(Buttons::RIGHT));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for [`Buttons`] and [`RepeatTiming`].
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod buttons;
pub mod state;
pub mod text;

pub use buttons::{Buttons, FrameInput};
pub use state::{
    InputState, MIN_REPEAT_INTERVAL_MS, REPEAT_INTERVAL_MS, RepeatPhase, RepeatTiming,
    TIME_UNTIL_REPEAT_MS,
};
pub use text::{BUTTON_TEXT, ButtonInfo, ButtonText, DefaultText, TextWithFallback};
