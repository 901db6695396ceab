// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Pad Nav: gamepad-driven focus navigation for UI toolkits.
//!
//! ## Overview
//!
//! A [`Navigator`] sits between an input device and a UI toolkit. Once per
//! frame the host calls a tick method; the navigator then
//!
//! 1. polls a [`Controller`] for the raw [`Buttons`] mask,
//! 2. updates its [`InputState`] (edges, holds, auto-repeat),
//! 3. when a direction was requested, asks the [`Platform`] where focus is and
//!    where it could go, and moves focus to the best candidate,
//! 4. forwards the state to [`Platform::process_input`] for accept, decline,
//!    paging and the like.
//!
//! Ticks in which nothing observable changed stop after step 2.
//!
//! The navigator does not enumerate widgets, hit test, or transform
//! coordinates: those are the platform's job. Candidate selection comes from
//! [`understory_pad_focus`], input state from [`understory_pad_input`]; both
//! are re-exported.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_pad_nav::{Buttons, FrameInput, InputState, Navigator, Platform, TickOutcome};
//!
//! /// Two buttons side by side.
//! struct Row {
//!     focused: usize,
//! }
//!
//! impl Platform for Row {
//!     fn has_focus(&self) -> bool {
//!         true
//!     }
//!     fn current_position(&self) -> Point {
//!         Point::new(self.focused as f64 * 100.0, 0.0)
//!     }
//!     fn fill_candidates(&mut self, buffer: &mut [Point]) -> usize {
//!         buffer[0] = Point::new((1 - self.focused) as f64 * 100.0, 0.0);
//!         1
//!     }
//!     fn select(&mut self, _index: usize) {
//!         self.focused = 1 - self.focused;
//!     }
//!     fn process_input(&mut self, _state: &InputState) {}
//! }
//!
//! let mut pressed = [Buttons::RIGHT, Buttons::empty(), Buttons::LEFT].into_iter();
//! let controller = move || FrameInput::new(pressed.next().unwrap_or_default());
//! let mut nav = Navigator::new(controller, Row { focused: 0 });
//!
//! assert_eq!(nav.tick_with_delta(16.0), TickOutcome::Processed { moved_to: Some(0) });
//! assert_eq!(nav.platform().focused, 1);
//! nav.tick_with_delta(16.0);
//! nav.tick_with_delta(16.0);
//! assert_eq!(nav.platform().focused, 0);
//! ```
//!
//! ## Configuration
//!
//! [`NavigatorConfig`] holds the tunables (repeat timing, scoring bias,
//! maximum selection angle, candidate capacity). [`Navigator::with_config`]
//! validates them and reports a [`ConfigError`] for unusable values. With the
//! `serde` feature the config can be loaded from any serde format.
//!
//! ## Logging
//!
//! Decisions are reported through the [`log`] facade: `trace` for skipped
//! moves, `debug` for focus changes. No logger is installed.
//!
//! ## Features
//!
//! - `std` (default): enables [`Navigator::tick`], timed with `std::time::Instant`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for the configuration types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod config;
mod error;
mod navigator;
mod platform;

pub use config::NavigatorConfig;
pub use error::ConfigError;
pub use navigator::{Navigator, TickOutcome};
pub use platform::{Controller, Platform};

pub use understory_pad_focus::{
    self as focus, DirectionalPolicy, MAX_CANDIDATES, ScoredPolicy, SelectionParams,
};
pub use understory_pad_input::{self as input, Buttons, FrameInput, InputState, RepeatTiming};
