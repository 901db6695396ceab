// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

/// A [`NavigatorConfig`](crate::NavigatorConfig) value that cannot be used.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The distance bias is zero, negative, or not finite.
    #[error("distance bias must be finite and positive, got {0}")]
    DistanceBias(f64),
    /// The maximum selection angle is outside `(0, 180]` degrees.
    #[error("maximum selection angle must be in (0, 180] degrees, got {0}")]
    MaxSelectionAngle(f64),
    /// The repeat delay is negative or not finite, or the interval is shorter than
    /// [`MIN_REPEAT_INTERVAL_MS`](understory_pad_input::MIN_REPEAT_INTERVAL_MS).
    #[error(
        "repeat timing needs a finite non-negative delay and an interval of at least 1 ms, \
         got {delay_ms} ms delay and {interval_ms} ms interval"
    )]
    RepeatTiming {
        /// Requested delay before repeating starts.
        delay_ms: f64,
        /// Requested time between repeats.
        interval_ms: f64,
    },
    /// The candidate buffer capacity is zero or larger than supported.
    #[error("candidate capacity must be between 1 and {max}, got {requested}")]
    CandidateCapacity {
        /// Requested capacity.
        requested: usize,
        /// Largest supported capacity.
        max: usize,
    },
}
