// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-tick driver.
//!
//! ## Tick sequence
//!
//! 1. Compute the time since the previous tick.
//! 2. Poll the [`Controller`] for one [`FrameInput`](understory_pad_input::FrameInput).
//! 3. Update the [`InputState`]. If nothing observable changed, the tick ends here.
//! 4. If the navigation set holds a direction and the modifier is not held, and
//!    the platform has focus, gather candidates and move focus to the one the
//!    [`DirectionalPolicy`] picks.
//! 5. Hand the state to [`Platform::process_input`] for everything else.

use alloc::boxed::Box;
use alloc::vec;
use core::time::Duration;

use kurbo::Point;
use understory_pad_focus::{DirectionalPolicy, ScoredPolicy};
use understory_pad_input::{Buttons, InputState};

use crate::{ConfigError, Controller, NavigatorConfig, Platform};

/// What a tick did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The input state did not change; nothing was queried or forwarded.
    Unchanged,
    /// The state changed and was forwarded to the platform.
    Processed {
        /// Candidate index passed to [`Platform::select`], if focus moved.
        moved_to: Option<usize>,
    },
}

/// Drives focus navigation from a [`Controller`] into a [`Platform`].
///
/// ## Usage
///
/// - Construct with [`Navigator::new`] for default tunables,
///   [`Navigator::with_config`] to customize them, or
///   [`Navigator::with_policy`] to replace the selection policy.
/// - Call one of the tick methods once per frame from the host's update loop:
///   [`Navigator::tick`] (with `std`), [`Navigator::tick_at`] with the host's
///   own monotonic clock, or [`Navigator::tick_with_delta`].
///
/// The candidate buffer is allocated once, at construction; ticks never allocate.
/// A navigator is meant for a single thread of control. Hosts driving several
/// UIs use one navigator each.
pub struct Navigator<C, P, D = ScoredPolicy> {
    controller: C,
    platform: P,
    policy: D,
    config: NavigatorConfig,
    state: InputState,
    candidates: Box<[Point]>,
    last_tick: Option<Duration>,
    #[cfg(feature = "std")]
    epoch: std::time::Instant,
}

impl<C, P, D> core::fmt::Debug for Navigator<C, P, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Navigator")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("last_tick", &self.last_tick)
            .finish_non_exhaustive()
    }
}

impl<C: Controller, P: Platform> Navigator<C, P> {
    /// Create a navigator with [`NavigatorConfig::default`].
    pub fn new(controller: C, platform: P) -> Self {
        let config = NavigatorConfig::default();
        Self::build(
            controller,
            platform,
            ScoredPolicy::new(config.selection_params()),
            config,
        )
    }

    /// Create a navigator with custom tunables.
    pub fn with_config(
        controller: C,
        platform: P,
        config: NavigatorConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(
            controller,
            platform,
            ScoredPolicy::new(config.selection_params()),
            config,
        ))
    }
}

impl<C: Controller, P: Platform, D: DirectionalPolicy> Navigator<C, P, D> {
    /// Create a navigator that picks candidates with a custom policy.
    ///
    /// The scoring fields of `config` are neither consulted nor validated; the
    /// policy carries its own parameters.
    pub fn with_policy(
        controller: C,
        platform: P,
        policy: D,
        config: NavigatorConfig,
    ) -> Result<Self, ConfigError> {
        config.validate_input()?;
        Ok(Self::build(controller, platform, policy, config))
    }

    fn build(controller: C, platform: P, policy: D, config: NavigatorConfig) -> Self {
        Self {
            controller,
            platform,
            policy,
            state: InputState::with_timing(config.repeat),
            candidates: vec![Point::ZERO; config.max_candidates].into_boxed_slice(),
            config,
            last_tick: None,
            #[cfg(feature = "std")]
            epoch: std::time::Instant::now(),
        }
    }

    /// Run one tick timed by [`std::time::Instant`].
    #[cfg(feature = "std")]
    pub fn tick(&mut self) -> TickOutcome {
        let now = self.epoch.elapsed();
        self.tick_at(now)
    }

    /// Run one tick at `now` on the host's monotonic clock.
    ///
    /// The first tick after construction or [`Navigator::reset`] counts as
    /// zero elapsed time, as does a clock that went backwards.
    pub fn tick_at(&mut self, now: Duration) -> TickOutcome {
        let delta_ms = self
            .last_tick
            .map_or(0.0, |last| now.saturating_sub(last).as_secs_f64() * 1000.0);
        self.last_tick = Some(now);
        self.tick_with_delta(delta_ms)
    }

    /// Run one tick with an explicit elapsed time in milliseconds.
    pub fn tick_with_delta(&mut self, delta_ms: f64) -> TickOutcome {
        let input = self.controller.poll();
        if !self.state.update(input.buttons(), delta_ms) {
            return TickOutcome::Unchanged;
        }

        let moved_to = self.move_focus();
        self.platform.process_input(&self.state);
        TickOutcome::Processed { moved_to }
    }

    fn move_focus(&mut self) -> Option<usize> {
        let navigation = self.state.navigation();
        if !navigation.has_movement() || self.state.is_held(Buttons::MODIFIER) {
            return None;
        }
        if !self.platform.has_focus() {
            log::trace!("platform has no focus; ignoring {navigation:?}");
            return None;
        }

        let origin = self.platform.current_position();
        let count = self
            .platform
            .fill_candidates(&mut self.candidates)
            .min(self.candidates.len());
        if count == 0 {
            log::trace!("no focus candidates for {navigation:?}");
            return None;
        }

        let direction = navigation.direction(self.platform.flip_x(), self.platform.flip_y());
        if direction.hypot2() == 0.0 {
            // Opposing buttons cancel out.
            log::trace!("{navigation:?} has no net direction");
            return None;
        }

        let index = self
            .policy
            .select(origin, direction, &self.candidates[..count])?;
        if index >= count {
            log::debug!("policy picked candidate {index}, but only {count} were offered");
            return None;
        }
        log::debug!("moving focus {navigation:?} to candidate {index} of {count}");
        self.platform.select(index);
        Some(index)
    }

    /// Forget all input state and the previous tick time.
    pub fn reset(&mut self) {
        self.state.reset();
        self.last_tick = None;
    }

    /// The current input state.
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// The tunables this navigator was built with.
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// The candidate selection policy.
    pub fn policy(&self) -> &D {
        &self.policy
    }

    /// The input source.
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Mutable access to the input source.
    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }

    /// The host platform.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Mutable access to the host platform.
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Take the navigator apart, returning the controller and platform.
    pub fn into_parts(self) -> (C, P) {
        (self.controller, self.platform)
    }
}
