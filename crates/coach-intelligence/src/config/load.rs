// ABOUTME: Load trend, intensity bucket and structured workout settings
// ABOUTME: Each section loads from environment and checks its own bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use super::{env_or, ConfigError};
use coach_core::constants::{intensity, structured, training_load};
use serde::{Deserialize, Serialize};

/// Structured workout normalization settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StructuredWorkoutConfig {
    /// Target ratio below which a step is inferred as rest
    pub rest_ratio_threshold: f64,
}

impl Default for StructuredWorkoutConfig {
    fn default() -> Self {
        Self {
            rest_ratio_threshold: structured::REST_RATIO_THRESHOLD,
        }
    }
}

impl StructuredWorkoutConfig {
    /// Load structured workout configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            rest_ratio_threshold: env_or(
                "STRUCTURED_REST_RATIO_THRESHOLD",
                structured::REST_RATIO_THRESHOLD,
            ),
        }
    }

    /// Validate structured workout configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the rest threshold is outside (0, 2]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rest_ratio_threshold <= 0.0 || self.rest_ratio_threshold > 2.0 {
            return Err(ConfigError::ValueOutOfRange(
                "rest ratio threshold must be within (0, 2]",
            ));
        }
        Ok(())
    }
}

/// Load trend settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadTrendConfig {
    /// Relative CTL change below which the trend is stable
    pub trend_relative_tolerance: f64,
}

impl Default for LoadTrendConfig {
    fn default() -> Self {
        Self {
            trend_relative_tolerance: training_load::TREND_RELATIVE_TOLERANCE,
        }
    }
}

impl LoadTrendConfig {
    /// Load trend configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            trend_relative_tolerance: env_or(
                "LOAD_TREND_RELATIVE_TOLERANCE",
                training_load::TREND_RELATIVE_TOLERANCE,
            ),
        }
    }

    /// Validate load trend configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is outside [0, 1)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.trend_relative_tolerance) {
            return Err(ConfigError::ValueOutOfRange(
                "trend tolerance must be within [0, 1)",
            ));
        }
        Ok(())
    }
}

/// Intensity factor bucket boundaries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityConfig {
    /// Recovery is below this IF
    pub recovery_upper: f64,
    /// Endurance is below this IF
    pub endurance_upper: f64,
    /// Tempo is below this IF
    pub tempo_upper: f64,
    /// Threshold is at or below this IF, vo2max above
    pub threshold_upper: f64,
}

impl Default for IntensityConfig {
    fn default() -> Self {
        Self {
            recovery_upper: intensity::RECOVERY_UPPER,
            endurance_upper: intensity::ENDURANCE_UPPER,
            tempo_upper: intensity::TEMPO_UPPER,
            threshold_upper: intensity::THRESHOLD_UPPER,
        }
    }
}

impl IntensityConfig {
    /// Load intensity buckets from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            recovery_upper: env_or("INTENSITY_RECOVERY_UPPER", intensity::RECOVERY_UPPER),
            endurance_upper: env_or("INTENSITY_ENDURANCE_UPPER", intensity::ENDURANCE_UPPER),
            tempo_upper: env_or("INTENSITY_TEMPO_UPPER", intensity::TEMPO_UPPER),
            threshold_upper: env_or("INTENSITY_THRESHOLD_UPPER", intensity::THRESHOLD_UPPER),
        }
    }

    /// Validate bucket ordering
    ///
    /// # Errors
    ///
    /// Returns an error if the boundaries are not positive and strictly ascending
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recovery_upper <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "recovery upper bound must be positive",
            ));
        }
        if !(self.recovery_upper < self.endurance_upper
            && self.endurance_upper < self.tempo_upper
            && self.tempo_upper < self.threshold_upper)
        {
            return Err(ConfigError::UnorderedThresholds(
                "intensity buckets must be strictly ascending",
            ));
        }
        Ok(())
    }
}
