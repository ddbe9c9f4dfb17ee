// ABOUTME: Analytics configuration with environment overrides and validation
// ABOUTME: Pacing, structured workout, load trend and intensity bucket settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

//! Every analyzer takes its thresholds from one of these structs. `Default`
//! reproduces the values in `coach_core::constants`; `from_env` lets an
//! operator override individual values without a config file.

mod error;
mod load;
mod pacing;

pub use error::ConfigError;
pub use load::{IntensityConfig, LoadTrendConfig, StructuredWorkoutConfig};
pub use pacing::PacingConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Read an environment variable and parse it, falling back to `default`
pub(crate) fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

/// Aggregate of all analytics settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Pacing analyzer settings
    pub pacing: PacingConfig,
    /// Structured workout normalization settings
    pub structured: StructuredWorkoutConfig,
    /// Load trend settings
    pub load_trend: LoadTrendConfig,
    /// Intensity factor buckets
    pub intensity: IntensityConfig,
}

impl AnalyticsConfig {
    /// Load all analytics settings from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            pacing: PacingConfig::from_env(),
            structured: StructuredWorkoutConfig::from_env(),
            load_trend: LoadTrendConfig::from_env(),
            intensity: IntensityConfig::from_env(),
        }
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section error encountered
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pacing.validate()?;
        self.structured.validate()?;
        self.load_trend.validate()?;
        self.intensity.validate()
    }
}
