// ABOUTME: Named threshold zone profiles for heart rate and power
// ABOUTME: Zones are ascending and non-overlapping, the last one is open-ended
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Metric a zone profile applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneMetric {
    /// Heart rate (bpm)
    HeartRate,
    /// Power (W)
    Power,
}

/// A single named zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Zone name (e.g., "Z2 Endurance")
    pub name: String,
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound (ignored for the last zone)
    pub max: f64,
}

impl Zone {
    /// Create a zone
    pub fn new(name: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            min,
            max,
        }
    }
}

/// Ordered zone list for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ZoneProfile {
    /// Ascending zones
    pub zones: Vec<Zone>,
}

impl ZoneProfile {
    /// Create a profile after checking ordering
    ///
    /// # Errors
    ///
    /// Returns an error if the zones are empty, unordered, inverted or overlapping
    pub fn new(zones: Vec<Zone>) -> AppResult<Self> {
        let profile = Self { zones };
        profile.validate()?;
        Ok(profile)
    }

    /// Check the ordering invariant
    ///
    /// # Errors
    ///
    /// Returns an error if the zones are empty, unordered, inverted or overlapping
    pub fn validate(&self) -> AppResult<()> {
        if self.zones.is_empty() {
            return Err(AppError::invalid_input("Zone profile has no zones"));
        }
        for zone in &self.zones {
            if zone.max < zone.min {
                return Err(AppError::invalid_input(format!(
                    "Zone '{}' has max {} below min {}",
                    zone.name, zone.max, zone.min
                )));
            }
        }
        for pair in self.zones.windows(2) {
            if pair[1].min <= pair[0].max {
                return Err(AppError::invalid_input(format!(
                    "Zone '{}' overlaps or precedes zone '{}'",
                    pair[1].name, pair[0].name
                )));
            }
        }
        Ok(())
    }

    /// Number of zones
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether the profile has no zones
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
