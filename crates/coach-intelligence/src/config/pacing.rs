// ABOUTME: Pacing analyzer thresholds with environment overrides
// ABOUTME: Lap length, stationary cutoff, split threshold and surge detection parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use super::{env_or, ConfigError};
use coach_core::constants::pacing;
use serde::{Deserialize, Serialize};

/// Pacing analyzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Lap length in meters
    pub lap_distance_m: f64,
    /// Remaining distance above which a partial lap is emitted (m)
    pub partial_lap_min_distance_m: f64,
    /// Velocity at or below which a sample is stationary (m/s)
    pub stationary_velocity_mps: f64,
    /// Half-to-half difference that flips the split classification (s/km)
    pub split_difference_threshold_s: f64,
    /// Multiplier applied to the coefficient of variation for evenness
    pub evenness_cv_multiplier: f64,
    /// Velocity increase that counts as a surge (m/s)
    pub surge_threshold_mps: f64,
    /// Look-back distance in samples
    pub surge_lookback_samples: usize,
    /// Samples skipped after a surge
    pub surge_skip_samples: usize,
    /// Minimum current velocity for a surge (m/s)
    pub surge_min_velocity_mps: f64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            lap_distance_m: pacing::DEFAULT_LAP_DISTANCE_M,
            partial_lap_min_distance_m: pacing::PARTIAL_LAP_MIN_DISTANCE_M,
            stationary_velocity_mps: pacing::STATIONARY_VELOCITY_MPS,
            split_difference_threshold_s: pacing::SPLIT_DIFFERENCE_THRESHOLD_S,
            evenness_cv_multiplier: pacing::EVENNESS_CV_MULTIPLIER,
            surge_threshold_mps: pacing::SURGE_THRESHOLD_MPS,
            surge_lookback_samples: pacing::SURGE_LOOKBACK_SAMPLES,
            surge_skip_samples: pacing::SURGE_SKIP_SAMPLES,
            surge_min_velocity_mps: pacing::SURGE_MIN_VELOCITY_MPS,
        }
    }
}

impl PacingConfig {
    /// Load pacing configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            lap_distance_m: env_or("PACING_LAP_DISTANCE_M", pacing::DEFAULT_LAP_DISTANCE_M),
            partial_lap_min_distance_m: env_or(
                "PACING_PARTIAL_LAP_MIN_DISTANCE_M",
                pacing::PARTIAL_LAP_MIN_DISTANCE_M,
            ),
            stationary_velocity_mps: env_or(
                "PACING_STATIONARY_VELOCITY_MPS",
                pacing::STATIONARY_VELOCITY_MPS,
            ),
            split_difference_threshold_s: env_or(
                "PACING_SPLIT_DIFFERENCE_THRESHOLD_S",
                pacing::SPLIT_DIFFERENCE_THRESHOLD_S,
            ),
            evenness_cv_multiplier: env_or(
                "PACING_EVENNESS_CV_MULTIPLIER",
                pacing::EVENNESS_CV_MULTIPLIER,
            ),
            surge_threshold_mps: env_or("PACING_SURGE_THRESHOLD_MPS", pacing::SURGE_THRESHOLD_MPS),
            surge_lookback_samples: env_or(
                "PACING_SURGE_LOOKBACK_SAMPLES",
                pacing::SURGE_LOOKBACK_SAMPLES,
            ),
            surge_skip_samples: env_or("PACING_SURGE_SKIP_SAMPLES", pacing::SURGE_SKIP_SAMPLES),
            surge_min_velocity_mps: env_or(
                "PACING_SURGE_MIN_VELOCITY_MPS",
                pacing::SURGE_MIN_VELOCITY_MPS,
            ),
        }
    }

    /// Validate pacing configuration
    ///
    /// # Errors
    ///
    /// Returns an error if distances, thresholds or sample counts are not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lap_distance_m <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "lap distance must be positive",
            ));
        }
        if self.partial_lap_min_distance_m < 0.0
            || self.partial_lap_min_distance_m >= self.lap_distance_m
        {
            return Err(ConfigError::ValueOutOfRange(
                "partial lap minimum must be within [0, lap distance)",
            ));
        }
        if self.stationary_velocity_mps < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "stationary velocity must not be negative",
            ));
        }
        if self.split_difference_threshold_s < 0.0 || self.evenness_cv_multiplier < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "split threshold and evenness multiplier must not be negative",
            ));
        }
        if self.surge_threshold_mps <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "surge threshold must be positive",
            ));
        }
        if self.surge_lookback_samples == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "surge look-back must be at least one sample",
            ));
        }
        Ok(())
    }
}
