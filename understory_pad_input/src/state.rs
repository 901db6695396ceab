// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-tick button state with edge detection and auto-repeat.
//!
//! [`InputState`] turns a level signal (the raw mask sampled each tick) into
//! edge signals (pressed/released this tick) and a navigation set that
//! re-fires while buttons stay held.
//!
//! ## Repeat timing
//!
//! Every press or release restarts the wait. Once nothing has changed for
//! longer than [`RepeatTiming::delay_ms`], the state enters repeat mode and
//! adds the whole held set to [`InputState::navigation`] each time another
//! [`RepeatTiming::interval_ms`] has accumulated. A long tick fires once per
//! elapsed interval, so the cadence does not depend on frame rate.
//!
//! ```
//! use understory_pad_input::{Buttons, InputState};
//!
//! let mut state = InputState::new();
//!
//! // The press itself navigates once.
//! assert!(state.update(Buttons::DOWN, 16.0));
//! assert!(state.is_navigation_pressed(Buttons::DOWN));
//!
//! // Holding stays quiet until the delay has passed…
//! state.update(Buttons::DOWN, 200.0);
//! assert!(!state.is_navigation_pressed(Buttons::DOWN));
//!
//! // …then 300 ms into the wait enters repeat mode, and the next 300 ms repeats.
//! state.update(Buttons::DOWN, 100.0);
//! state.update(Buttons::DOWN, 300.0);
//! assert!(state.is_navigation_pressed(Buttons::DOWN));
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Vec2;

use crate::Buttons;

/// Default time a button must be held before auto-repeat starts, in milliseconds.
pub const TIME_UNTIL_REPEAT_MS: f64 = 1000.0 / 4.0;

/// Default time between successive auto-repeats, in milliseconds.
pub const REPEAT_INTERVAL_MS: f64 = 1000.0 / 8.0;

/// Shortest accepted repeat interval, in milliseconds.
pub const MIN_REPEAT_INTERVAL_MS: f64 = 1.0;

/// Auto-repeat timing.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RepeatTiming {
    /// Quiet time after the last press or release before repeating starts.
    pub delay_ms: f64,
    /// Time between repeats once repeating.
    pub interval_ms: f64,
}

impl Default for RepeatTiming {
    fn default() -> Self {
        Self {
            delay_ms: TIME_UNTIL_REPEAT_MS,
            interval_ms: REPEAT_INTERVAL_MS,
        }
    }
}

impl RepeatTiming {
    /// Returns `true` if both durations are finite, the delay is not negative,
    /// and the interval is at least [`MIN_REPEAT_INTERVAL_MS`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.delay_ms.is_finite()
            && self.delay_ms >= 0.0
            && self.interval_ms.is_finite()
            && self.interval_ms >= MIN_REPEAT_INTERVAL_MS
    }
}

/// Which half of the repeat state machine is active.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RepeatPhase {
    /// Counting quiet time since the last press or release.
    Waiting {
        /// Milliseconds since the last press or release.
        idle_ms: f64,
    },
    /// Repeating the held buttons at a fixed cadence.
    Repeating {
        /// Milliseconds accumulated toward the next repeat.
        accumulator_ms: f64,
    },
}

impl RepeatPhase {
    const IDLE: Self = Self::Waiting { idle_ms: 0.0 };
}

/// Button state derived from successive raw samples.
///
/// Construct once and call [`InputState::update`] once per tick. The state is
/// plain data: it holds no clock and never allocates.
#[derive(Clone, Debug, PartialEq)]
pub struct InputState {
    held: Buttons,
    pressed: Buttons,
    released: Buttons,
    navigation: Buttons,
    phase: RepeatPhase,
    timing: RepeatTiming,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Create an empty state with the default [`RepeatTiming`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_timing(RepeatTiming::default())
    }

    /// Create an empty state with custom repeat timing.
    ///
    /// Callers are expected to pass timing that satisfies
    /// [`RepeatTiming::is_valid`]; an invalid interval is replaced by the default.
    #[must_use]
    pub fn with_timing(timing: RepeatTiming) -> Self {
        debug_assert!(timing.is_valid(), "invalid repeat timing: {timing:?}");
        let timing = if timing.is_valid() {
            timing
        } else {
            RepeatTiming::default()
        };
        Self {
            held: Buttons::empty(),
            pressed: Buttons::empty(),
            released: Buttons::empty(),
            navigation: Buttons::empty(),
            phase: RepeatPhase::IDLE,
            timing,
        }
    }

    /// Feed one raw sample and the time elapsed since the previous one.
    ///
    /// Returns `true` if any of the held, pressed, released, or navigation
    /// sets differs from before the call. Negative or non-finite deltas count
    /// as zero.
    pub fn update(&mut self, raw: Buttons, delta_ms: f64) -> bool {
        let before = self.signals();
        let delta_ms = if delta_ms.is_finite() && delta_ms > 0.0 {
            delta_ms
        } else {
            0.0
        };

        self.pressed = raw.difference(self.held);
        self.released = self.held.difference(raw);
        self.navigation = self.pressed;
        self.held = raw;

        if !(self.pressed | self.released).is_empty() {
            // Any edge restarts the wait and drops an in-progress repeat.
            self.phase = RepeatPhase::IDLE;
        } else {
            self.phase = match self.phase {
                RepeatPhase::Waiting { idle_ms } => {
                    let idle_ms = idle_ms + delta_ms;
                    if idle_ms <= self.timing.delay_ms {
                        RepeatPhase::Waiting { idle_ms }
                    } else {
                        RepeatPhase::Repeating {
                            accumulator_ms: idle_ms - self.timing.delay_ms,
                        }
                    }
                }
                RepeatPhase::Repeating { accumulator_ms } => {
                    let interval = self.timing.interval_ms;
                    let mut accumulator_ms = accumulator_ms + delta_ms;
                    if accumulator_ms > interval {
                        // Drain whole intervals while strictly more than one remains.
                        let fired = (accumulator_ms / interval).ceil() - 1.0;
                        self.navigation |= self.held;
                        accumulator_ms = (accumulator_ms - fired * interval).max(0.0);
                    }
                    RepeatPhase::Repeating { accumulator_ms }
                }
            };
        }

        self.signals() != before
    }

    /// Return to the freshly constructed state, keeping the timing.
    pub fn reset(&mut self) {
        *self = Self::with_timing(self.timing);
    }

    fn signals(&self) -> (Buttons, Buttons, Buttons, Buttons) {
        (self.held, self.pressed, self.released, self.navigation)
    }

    /// Buttons currently down.
    #[must_use]
    pub const fn held(&self) -> Buttons {
        self.held
    }

    /// Buttons that went down this tick.
    #[must_use]
    pub const fn pressed(&self) -> Buttons {
        self.pressed
    }

    /// Buttons that went up this tick.
    #[must_use]
    pub const fn released(&self) -> Buttons {
        self.released
    }

    /// Buttons to act on for navigation this tick: fresh presses plus any
    /// auto-repeated holds.
    #[must_use]
    pub const fn navigation(&self) -> Buttons {
        self.navigation
    }

    /// Current repeat phase.
    #[must_use]
    pub const fn phase(&self) -> RepeatPhase {
        self.phase
    }

    /// Repeat timing in use.
    #[must_use]
    pub const fn timing(&self) -> RepeatTiming {
        self.timing
    }

    /// Returns `true` if any of `buttons` went down this tick.
    #[must_use]
    pub const fn is_pressed(&self, buttons: Buttons) -> bool {
        self.pressed.has_any(buttons)
    }

    /// Returns `true` if any of `buttons` is down.
    #[must_use]
    pub const fn is_held(&self, buttons: Buttons) -> bool {
        self.held.has_any(buttons)
    }

    /// Returns `true` if any of `buttons` went up this tick.
    #[must_use]
    pub const fn is_released(&self, buttons: Buttons) -> bool {
        self.released.has_any(buttons)
    }

    /// Returns `true` if any of `buttons` is in the navigation set.
    #[must_use]
    pub const fn is_navigation_pressed(&self, buttons: Buttons) -> bool {
        self.navigation.has_any(buttons)
    }

    /// Direction requested by the navigation set this tick.
    #[must_use]
    pub fn direction(&self, flip_x: bool, flip_y: bool) -> Vec2 {
        self.navigation.direction(flip_x, flip_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    /// Hold `raw` for `ticks` ticks of `dt` ms each and return the tick
    /// indices (starting at 0) where `probe` was in the navigation set.
    fn navigation_ticks(
        state: &mut InputState,
        raw: Buttons,
        dt: f64,
        ticks: usize,
        probe: Buttons,
    ) -> Vec<usize> {
        (0..ticks)
            .filter(|_| {
                state.update(raw, dt);
                state.is_navigation_pressed(probe)
            })
            .collect()
    }

    #[test]
    fn edges_follow_raw_sequence() {
        let seq = [
            Buttons::empty(),
            Buttons::UP,
            Buttons::UP | Buttons::ACCEPT,
            Buttons::ACCEPT,
            Buttons::LEFT | Buttons::MODIFIER,
            Buttons::empty(),
            Buttons::all(),
        ];
        let mut state = InputState::new();
        let mut prev = Buttons::empty();
        for raw in seq {
            state.update(raw, 16.0);
            assert_eq!(state.held(), raw);
            assert_eq!(state.pressed(), raw & !prev);
            assert_eq!(state.released(), prev & !raw);
            assert!(
                (state.pressed() & state.released()).is_empty(),
                "a button cannot be pressed and released in the same tick"
            );
            prev = raw;
        }
    }

    #[test]
    fn repeated_sample_clears_edges() {
        let mut state = InputState::new();
        assert!(state.update(Buttons::ACCEPT | Buttons::UP, 10.0));
        assert!(state.update(Buttons::ACCEPT | Buttons::UP, 0.0));
        assert_eq!(state.pressed(), Buttons::empty());
        assert_eq!(state.released(), Buttons::empty());
        assert_eq!(state.navigation(), Buttons::empty());
        // Third identical sample: nothing observable changes.
        assert!(!state.update(Buttons::ACCEPT | Buttons::UP, 0.0));
    }

    #[test]
    fn no_input_is_unchanged() {
        let mut state = InputState::new();
        for _ in 0..20 {
            assert!(!state.update(Buttons::empty(), 50.0));
        }
        assert_eq!(state.navigation(), Buttons::empty());
    }

    #[test]
    fn hold_repeats_after_delay_at_interval() {
        let mut state = InputState::new();
        // 50 ms ticks: the press at tick 0, quiet until more than 250 ms has
        // elapsed (tick 6 enters repeat mode with 50 ms banked), then a repeat
        // each time the bank exceeds 125 ms.
        let fired = navigation_ticks(&mut state, Buttons::UP, 50.0, 19, Buttons::UP);
        assert_eq!(fired, [0, 8, 11, 13, 16, 18]);
    }

    #[test]
    fn phase_switches_after_delay() {
        let mut state = InputState::new();
        state.update(Buttons::RIGHT, 0.0);
        state.update(Buttons::RIGHT, 250.0);
        assert_eq!(state.phase(), RepeatPhase::Waiting { idle_ms: 250.0 });
        state.update(Buttons::RIGHT, 10.0);
        assert_eq!(
            state.phase(),
            RepeatPhase::Repeating {
                accumulator_ms: 10.0
            }
        );
    }

    #[test]
    fn long_tick_catches_up() {
        let mut state = InputState::new();
        state.update(Buttons::DOWN, 0.0);
        // Enter repeat mode exactly at the threshold plus one millisecond.
        state.update(Buttons::DOWN, 251.0);
        assert_eq!(state.navigation(), Buttons::empty());
        // 1 + 400 = 401 ms banked: three repeats fire, 26 ms remain.
        assert!(state.update(Buttons::DOWN, 400.0));
        assert!(state.is_navigation_pressed(Buttons::DOWN));
        assert_eq!(
            state.phase(),
            RepeatPhase::Repeating {
                accumulator_ms: 26.0
            }
        );
    }

    #[test]
    fn huge_tick_drains_in_one_step() {
        let timing = RepeatTiming {
            delay_ms: 0.0,
            interval_ms: MIN_REPEAT_INTERVAL_MS,
        };
        let mut state = InputState::with_timing(timing);
        state.update(Buttons::UP, 0.0);
        state.update(Buttons::UP, 1.0);
        // A trillion intervals in one tick: one repeat, remainder within one interval.
        assert!(state.update(Buttons::UP, 1e12));
        assert_eq!(state.navigation(), Buttons::UP);
        let RepeatPhase::Repeating { accumulator_ms } = state.phase() else {
            panic!("expected repeat mode");
        };
        assert!(
            (0.0..=MIN_REPEAT_INTERVAL_MS).contains(&accumulator_ms),
            "accumulator left at {accumulator_ms}"
        );
    }

    #[test]
    fn exact_multiple_keeps_one_interval_banked() {
        let mut state = InputState::new();
        state.update(Buttons::LEFT, 0.0);
        state.update(Buttons::LEFT, 251.0);
        // 1 + 249 = 250 ms banked: one repeat, and 125 ms is not more than the interval.
        state.update(Buttons::LEFT, 249.0);
        assert!(state.is_navigation_pressed(Buttons::LEFT));
        assert_eq!(
            state.phase(),
            RepeatPhase::Repeating {
                accumulator_ms: 125.0
            }
        );
    }

    #[test]
    fn new_edge_cancels_repeat() {
        let mut state = InputState::new();
        state.update(Buttons::UP, 0.0);
        state.update(Buttons::UP, 200.0);
        // Swap Up for Accept before the repeat threshold.
        assert!(state.update(Buttons::ACCEPT, 16.0));
        assert!(state.is_released(Buttons::UP));
        assert!(state.is_pressed(Buttons::ACCEPT));
        assert_eq!(state.phase(), RepeatPhase::Waiting { idle_ms: 0.0 });

        let fired = navigation_ticks(&mut state, Buttons::ACCEPT, 50.0, 20, Buttons::UP);
        assert!(fired.is_empty(), "stale repeat fired for Up: {fired:?}");
    }

    #[test]
    fn edge_during_repeat_restarts_wait() {
        let mut state = InputState::new();
        state.update(Buttons::LEFT, 0.0);
        state.update(Buttons::LEFT, 300.0);
        state.update(Buttons::LEFT, 200.0);
        assert!(matches!(state.phase(), RepeatPhase::Repeating { .. }));

        // Adding a button is an edge even though Left stays held.
        state.update(Buttons::LEFT | Buttons::MODIFIER, 16.0);
        assert!(state.is_navigation_pressed(Buttons::MODIFIER));
        assert!(!state.is_navigation_pressed(Buttons::LEFT));
        assert_eq!(state.phase(), RepeatPhase::Waiting { idle_ms: 0.0 });

        state.update(Buttons::LEFT | Buttons::MODIFIER, 200.0);
        assert_eq!(state.navigation(), Buttons::empty());
    }

    #[test]
    fn repeat_includes_every_held_button() {
        let mut state = InputState::new();
        let held = Buttons::UP | Buttons::INCREMENT;
        state.update(held, 0.0);
        state.update(held, 260.0);
        state.update(held, 130.0);
        assert_eq!(state.navigation(), held);
    }

    #[test]
    fn custom_timing_is_used() {
        let timing = RepeatTiming {
            delay_ms: 100.0,
            interval_ms: 20.0,
        };
        let mut state = InputState::with_timing(timing);
        let fired = navigation_ticks(&mut state, Buttons::RIGHT, 25.0, 8, Buttons::RIGHT);
        // Tick 5 crosses 100 ms with 25 banked; tick 6 banks 50 (two repeats,
        // 10 left) and tick 7 banks 35 (one repeat).
        assert_eq!(fired, [0, 6, 7]);
        assert_eq!(state.timing(), timing);
    }

    #[test]
    fn bad_deltas_count_as_zero() {
        let mut state = InputState::new();
        state.update(Buttons::UP, 0.0);
        state.update(Buttons::UP, -500.0);
        state.update(Buttons::UP, f64::NAN);
        state.update(Buttons::UP, f64::INFINITY);
        assert_eq!(state.phase(), RepeatPhase::Waiting { idle_ms: 0.0 });
    }

    #[test]
    fn reset_clears_state() {
        let mut state = InputState::new();
        state.update(Buttons::UP | Buttons::ACCEPT, 0.0);
        state.update(Buttons::UP | Buttons::ACCEPT, 400.0);
        state.reset();
        assert_eq!(state, InputState::new());
    }

    #[test]
    fn timing_validation() {
        assert!(RepeatTiming::default().is_valid());
        let zero_delay = RepeatTiming {
            delay_ms: 0.0,
            ..RepeatTiming::default()
        };
        assert!(zero_delay.is_valid());
        let zero_interval = RepeatTiming {
            interval_ms: 0.0,
            ..RepeatTiming::default()
        };
        assert!(!zero_interval.is_valid());
        let tiny_interval = RepeatTiming {
            interval_ms: 1e-20,
            ..RepeatTiming::default()
        };
        assert!(!tiny_interval.is_valid());
        let shortest = RepeatTiming {
            interval_ms: MIN_REPEAT_INTERVAL_MS,
            ..RepeatTiming::default()
        };
        assert!(shortest.is_valid());
        let nan_delay = RepeatTiming {
            delay_ms: f64::NAN,
            ..RepeatTiming::default()
        };
        assert!(!nan_delay.is_valid());
    }

    #[test]
    fn direction_uses_navigation_set() {
        let mut state = InputState::new();
        state.update(Buttons::UP, 0.0);
        assert_eq!(state.direction(false, true), Vec2::new(0.0, -1.0));
        state.update(Buttons::UP, 0.0);
        assert_eq!(state.direction(false, false), Vec2::ZERO);
    }
}
