// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigator tunables.

use understory_pad_focus::{MAX_CANDIDATES, SelectionParams};
use understory_pad_input::RepeatTiming;

use crate::ConfigError;

/// Tunables for a [`Navigator`](crate::Navigator).
///
/// The defaults match the usual gamepad menu feel: 250 ms before a held
/// direction repeats, a repeat every 125 ms after that, and candidates within
/// 89° of the requested direction.
///
/// With the `serde` feature this type (de)serializes with every field
/// optional, so hosts can keep only the values they change in their own
/// settings files.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavigatorConfig {
    /// Multiplier applied to squared distance when scoring candidates.
    pub distance_bias: f64,
    /// Candidates must lie strictly within this many degrees of the requested direction.
    pub max_selection_angle: f64,
    /// Auto-repeat timing for held buttons.
    pub repeat: RepeatTiming,
    /// Capacity of the candidate buffer handed to the platform each move.
    pub max_candidates: usize,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        let selection = SelectionParams::default();
        Self {
            distance_bias: selection.distance_bias,
            max_selection_angle: selection.max_angle_degrees,
            repeat: RepeatTiming::default(),
            max_candidates: MAX_CANDIDATES,
        }
    }
}

impl NavigatorConfig {
    /// Check every field, reporting the first invalid one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let selection = self.selection_params();
        if !(selection.distance_bias.is_finite() && selection.distance_bias > 0.0) {
            return Err(ConfigError::DistanceBias(self.distance_bias));
        }
        if !selection.is_valid() {
            return Err(ConfigError::MaxSelectionAngle(self.max_selection_angle));
        }
        self.validate_input()
    }

    /// Check the repeat timing and candidate capacity, skipping the scoring fields.
    ///
    /// Used when a custom policy replaces the default scoring.
    pub fn validate_input(&self) -> Result<(), ConfigError> {
        if !self.repeat.is_valid() {
            return Err(ConfigError::RepeatTiming {
                delay_ms: self.repeat.delay_ms,
                interval_ms: self.repeat.interval_ms,
            });
        }
        if self.max_candidates == 0 || self.max_candidates > MAX_CANDIDATES {
            return Err(ConfigError::CandidateCapacity {
                requested: self.max_candidates,
                max: MAX_CANDIDATES,
            });
        }
        Ok(())
    }

    /// The scoring parameters for the default selection policy.
    #[must_use]
    pub fn selection_params(&self) -> SelectionParams {
        SelectionParams {
            distance_bias: self.distance_bias,
            max_angle_degrees: self.max_selection_angle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(NavigatorConfig::default().validate(), Ok(()));
        assert_eq!(NavigatorConfig::default().max_candidates, 2048);
    }

    #[test]
    fn rejects_bad_bias() {
        let config = NavigatorConfig {
            distance_bias: -1.0,
            ..NavigatorConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::DistanceBias(-1.0)));
        let config = NavigatorConfig {
            distance_bias: f64::INFINITY,
            ..NavigatorConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::DistanceBias(_))));
    }

    #[test]
    fn rejects_bad_angle() {
        for angle in [0.0, -10.0, 180.5, f64::NAN] {
            let config = NavigatorConfig {
                max_selection_angle: angle,
                ..NavigatorConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::MaxSelectionAngle(_))),
                "angle {angle} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_bad_timing() {
        let config = NavigatorConfig {
            repeat: RepeatTiming {
                delay_ms: 250.0,
                interval_ms: 0.0,
            },
            ..NavigatorConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::RepeatTiming {
                delay_ms: 250.0,
                interval_ms: 0.0
            })
        );

        // Too short to ever drain in practice.
        let config = NavigatorConfig {
            repeat: RepeatTiming {
                delay_ms: 0.0,
                interval_ms: 1e-20,
            },
            ..NavigatorConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::RepeatTiming {
                delay_ms: 0.0,
                interval_ms: 1e-20
            })
        );
        assert!(config.validate_input().is_err());
    }

    #[test]
    fn input_checks_skip_scoring_fields() {
        let config = NavigatorConfig {
            distance_bias: -1.0,
            max_selection_angle: 0.0,
            ..NavigatorConfig::default()
        };
        assert_eq!(config.validate_input(), Ok(()));
        assert!(config.validate().is_err());
        let config = NavigatorConfig {
            max_candidates: 0,
            ..config
        };
        assert!(matches!(
            config.validate_input(),
            Err(ConfigError::CandidateCapacity { .. })
        ));
    }

    #[test]
    fn rejects_bad_capacity() {
        for requested in [0, MAX_CANDIDATES + 1] {
            let config = NavigatorConfig {
                max_candidates: requested,
                ..NavigatorConfig::default()
            };
            assert_eq!(
                config.validate(),
                Err(ConfigError::CandidateCapacity {
                    requested,
                    max: MAX_CANDIDATES
                })
            );
        }
    }

    #[test]
    fn error_messages_name_the_value() {
        use alloc::string::ToString;

        let message = ConfigError::CandidateCapacity {
            requested: 0,
            max: 2048,
        }
        .to_string();
        assert_eq!(message, "candidate capacity must be between 1 and 2048, got 0");
        assert_eq!(
            ConfigError::DistanceBias(0.0).to_string(),
            "distance bias must be finite and positive, got 0"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_settings() {
        let config: NavigatorConfig = serde_json::from_str(
            r#"{ "max_selection_angle": 60.0, "repeat": { "delay_ms": 400.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.max_selection_angle, 60.0);
        assert_eq!(config.repeat.delay_ms, 400.0);
        assert_eq!(config.repeat.interval_ms, 125.0);
        assert_eq!(config.distance_bias, 1.0);
        assert_eq!(config.validate(), Ok(()));
    }
}
