// ABOUTME: Per-sport activity breakdown and duration-weighted intensity distribution
// ABOUTME: Sports are keyed by canonical sport key in an ordered map
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use super::stress::{resolve_duration_seconds, resolve_intensity_factor, resolve_tss};
use crate::config::IntensityConfig;
use coach_core::models::Workout;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Totals for one sport
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SportBreakdown {
    /// Number of workouts
    pub count: u32,
    /// Summed duration (s)
    pub total_duration_seconds: u64,
    /// Summed training stress
    pub total_tss: f64,
    /// Mean training stress per workout
    pub average_tss: f64,
}

/// Group workouts by sport
#[must_use]
pub fn activity_breakdown(workouts: &[Workout]) -> BTreeMap<String, SportBreakdown> {
    let mut breakdown: BTreeMap<String, SportBreakdown> = BTreeMap::new();
    for workout in workouts {
        let entry = breakdown
            .entry(workout.sport_type.key().to_owned())
            .or_default();
        entry.count += 1;
        entry.total_duration_seconds += resolve_duration_seconds(workout);
        entry.total_tss += resolve_tss(workout);
    }
    for entry in breakdown.values_mut() {
        entry.average_tss = if entry.count > 0 {
            entry.total_tss / f64::from(entry.count)
        } else {
            0.0
        };
    }
    breakdown
}

/// Percentage of training time per intensity bucket
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntensityDistribution {
    /// IF below 0.70
    pub recovery: f64,
    /// IF 0.70 to 0.85
    pub endurance: f64,
    /// IF 0.85 to 0.95
    pub tempo: f64,
    /// IF 0.95 to 1.05
    pub threshold: f64,
    /// IF above 1.05
    pub vo2max: f64,
}

/// Bucket index for an intensity factor
fn bucket(intensity: f64, config: &IntensityConfig) -> usize {
    if intensity < config.recovery_upper {
        0
    } else if intensity < config.endurance_upper {
        1
    } else if intensity < config.tempo_upper {
        2
    } else if intensity <= config.threshold_upper {
        3
    } else {
        4
    }
}

/// Duration-weighted share of time per intensity bucket
///
/// Workouts without duration or without a resolvable IF are ignored.
/// Percentages are rounded to one decimal.
#[must_use]
pub fn intensity_distribution(
    workouts: &[Workout],
    config: &IntensityConfig,
) -> IntensityDistribution {
    let mut seconds = [0.0_f64; 5];
    for workout in workouts {
        let duration = resolve_duration_seconds(workout) as f64;
        if duration <= 0.0 {
            continue;
        }
        if let Some(intensity) = resolve_intensity_factor(workout) {
            seconds[bucket(intensity, config)] += duration;
        }
    }

    let total: f64 = seconds.iter().sum();
    let share = |secs: f64| {
        if total > 0.0 {
            (secs / total * 1000.0).round() / 10.0
        } else {
            0.0
        }
    };
    IntensityDistribution {
        recovery: share(seconds[0]),
        endurance: share(seconds[1]),
        tempo: share(seconds[2]),
        threshold: share(seconds[3]),
        vo2max: share(seconds[4]),
    }
}
