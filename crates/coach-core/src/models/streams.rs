// ABOUTME: Per-workout time-series bundle and derived pacing artifacts
// ABOUTME: Raw arrays come from storage, derived fields are written back by the analyzers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use serde::{Deserialize, Serialize};

/// Summary of one fixed-distance lap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LapSplit {
    /// 1-based lap number
    pub lap: u32,
    /// Distance covered in the lap (m)
    pub distance: f64,
    /// Time taken for the lap (s)
    pub time: f64,
    /// Pace formatted as `m:ss/km`
    pub pace: String,
    /// Pace in seconds per km
    pub pace_seconds: f64,
}

/// Split classification of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitStrategy {
    /// Second half slower than the first
    PositiveSplit,
    /// Second half faster than the first
    NegativeSplit,
    /// Halves within the threshold of each other
    Even,
}

/// Pacing strategy derived from lap splits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PacingStrategy {
    /// Split classification
    pub strategy: SplitStrategy,
    /// 0-100, higher is more even
    pub evenness_score: f64,
    /// Average pace of the first half (s/km)
    pub first_half_pace: f64,
    /// Average pace of the second half (s/km)
    pub second_half_pace: f64,
    /// Second half minus first half (s/km)
    pub difference_seconds: f64,
}

/// A sudden acceleration in the velocity stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurgeEvent {
    /// Sample index where the surge was detected
    pub index: usize,
    /// Elapsed time at detection (s)
    pub time: f64,
    /// Velocity at the look-back sample (m/s)
    pub velocity_before: f64,
    /// Velocity at detection (m/s)
    pub velocity_after: f64,
    /// Velocity increase (m/s)
    pub increase: f64,
}

/// Time-series data for a single workout plus derived artifacts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamBundle {
    /// Workout the streams belong to
    pub workout_id: String,
    /// Elapsed seconds per sample
    #[serde(default)]
    pub time: Vec<f64>,
    /// Cumulative distance per sample (m)
    #[serde(default)]
    pub distance: Vec<f64>,
    /// Velocity per sample (m/s)
    #[serde(default)]
    pub velocity: Vec<f64>,
    /// Heart rate per sample (bpm)
    #[serde(default)]
    pub heartrate: Vec<f64>,
    /// Cadence per sample
    #[serde(default)]
    pub cadence: Vec<f64>,
    /// Power per sample (W)
    #[serde(default)]
    pub watts: Vec<f64>,
    /// Altitude per sample (m)
    #[serde(default)]
    pub altitude: Vec<f64>,
    /// Derived lap splits
    pub lap_splits: Option<Vec<LapSplit>>,
    /// Standard deviation of moving velocity (m/s)
    pub pace_variability: Option<f64>,
    /// Average pace over the moving distance (s/km)
    pub avg_pace_per_km: Option<f64>,
    /// Derived pacing strategy
    pub pacing_strategy: Option<PacingStrategy>,
    /// Detected surges
    pub surges: Option<Vec<SurgeEvent>>,
    /// Pre-computed seconds per heart-rate zone
    pub hr_zone_times: Option<Vec<f64>>,
    /// Pre-computed seconds per power zone
    pub power_zone_times: Option<Vec<f64>>,
}

impl StreamBundle {
    /// Whether pace-related artifacts have been derived
    #[must_use]
    pub fn has_pace_artifacts(&self) -> bool {
        self.lap_splits.as_ref().is_some_and(|laps| !laps.is_empty())
            || self.pace_variability.is_some()
    }
}
