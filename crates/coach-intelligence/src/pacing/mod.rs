// ABOUTME: Pacing analysis over per-workout time-series streams
// ABOUTME: Lap splits, variability, pace zones, split strategy, surges and cadence targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

//! # Pacing Analyzer
//!
//! Works on the raw arrays of a [`StreamBundle`]. Every function is pure and
//! degrades to `None` / empty output when a stream is missing or too short,
//! so a bundle with only heart rate can still go through
//! [`PacingAnalyzer::derive_artifacts`] without error.

mod cadence;
mod splits;
mod strategy;
mod surges;
mod variability;

pub use cadence::{
    optimal_cadence, CadenceGoal, CadenceRange, CadenceRecommendation, CadenceStatus,
    RunnerProfile,
};
pub use splits::{average_pace_per_km, lap_splits};
pub use strategy::pacing_strategy;
pub use surges::detect_surges;
pub use variability::{pace_variability, pace_zone_distribution};

use crate::config::PacingConfig;
use coach_core::constants::units::SECONDS_PER_MINUTE;
use coach_core::models::StreamBundle;
use tracing::debug;

/// Format seconds per km as `m:ss/km`
///
/// Total seconds are rounded before splitting, so 299.6 becomes `5:00/km`
/// rather than `4:60/km`.
#[must_use]
pub fn format_pace(seconds_per_km: f64) -> String {
    let total = seconds_per_km.max(0.0).round() as u64;
    let minutes_per_unit = SECONDS_PER_MINUTE as u64;
    format!(
        "{}:{:02}/km",
        total / minutes_per_unit,
        total % minutes_per_unit
    )
}

/// Elapsed seconds of sample `index` relative to the previous sample
///
/// The first sample contributes nothing; without a time stream every sample
/// counts as one second.
pub(crate) fn sample_dt(time: &[f64], index: usize) -> f64 {
    if time.is_empty() {
        return 1.0;
    }
    match (index.checked_sub(1).and_then(|prev| time.get(prev)), time.get(index)) {
        (Some(prev), Some(current)) => (current - prev).max(0.0),
        _ => 0.0,
    }
}

/// Seconds a single sample stands for when bucketing into zones
///
/// The first sample takes the gap to the next one (1 s when alone); every
/// other sample takes the gap from the previous one. Without a time stream
/// every sample counts as one second.
pub(crate) fn sample_weight(time: &[f64], index: usize) -> f64 {
    if time.is_empty() {
        return 1.0;
    }
    if index == 0 {
        return match (time.first(), time.get(1)) {
            (Some(first), Some(next)) => (next - first).max(0.0),
            _ => 1.0,
        };
    }
    sample_dt(time, index)
}

/// Derives every pacing artifact for a stream bundle
#[derive(Debug, Clone, Default)]
pub struct PacingAnalyzer {
    config: PacingConfig,
}

impl PacingAnalyzer {
    /// Create an analyzer with the given thresholds
    #[must_use]
    pub const fn new(config: PacingConfig) -> Self {
        Self { config }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn config(&self) -> &PacingConfig {
        &self.config
    }

    /// Compute lap splits, variability, average pace, strategy and surges,
    /// writing them onto the bundle
    ///
    /// Artifacts that cannot be derived are set to `None`, replacing any
    /// stale value from an earlier run.
    pub fn derive_artifacts(&self, bundle: &mut StreamBundle) {
        let splits = lap_splits(&bundle.distance, &bundle.time, &self.config);
        bundle.pacing_strategy = pacing_strategy(&splits, &self.config);
        bundle.lap_splits = (!splits.is_empty()).then_some(splits);
        bundle.pace_variability = pace_variability(&bundle.velocity, &self.config);
        bundle.avg_pace_per_km = average_pace_per_km(bundle, &self.config);

        let surges = detect_surges(&bundle.velocity, &bundle.time, &self.config);
        bundle.surges = (!bundle.velocity.is_empty()).then_some(surges);

        debug!(
            workout_id = %bundle.workout_id,
            laps = bundle.lap_splits.as_ref().map_or(0, Vec::len),
            surges = bundle.surges.as_ref().map_or(0, Vec::len),
            "Derived pacing artifacts"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pace() {
        assert_eq!(format_pace(300.0), "5:00/km");
        assert_eq!(format_pace(299.6), "5:00/km");
        assert_eq!(format_pace(272.4), "4:32/km");
        assert_eq!(format_pace(59.0), "0:59/km");
    }

    #[test]
    fn test_sample_dt() {
        let time = [0.0, 2.0, 5.0];
        assert!((sample_dt(&time, 0) - 0.0).abs() < f64::EPSILON);
        assert!((sample_dt(&time, 2) - 3.0).abs() < f64::EPSILON);
        assert!((sample_dt(&[], 7) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sample_weight_counts_first_sample() {
        let time = [0.0, 2.0, 5.0];
        assert!((sample_weight(&time, 0) - 2.0).abs() < f64::EPSILON);
        assert!((sample_weight(&time, 2) - 3.0).abs() < f64::EPSILON);
        assert!((sample_weight(&[4.0], 0) - 1.0).abs() < f64::EPSILON);
        assert!((sample_weight(&[], 3) - 1.0).abs() < f64::EPSILON);
    }
}
