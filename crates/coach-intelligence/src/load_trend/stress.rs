// ABOUTME: Per-workout training stress and intensity factor resolution
// ABOUTME: Falls back through the provider's stress fields, synthesizing IF when absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use coach_core::constants::units::SECONDS_PER_HOUR;
use coach_core::models::Workout;

/// Training stress of a workout: `tss`, else `trimp`, else `plannedTss`, else 0
#[must_use]
pub fn resolve_tss(workout: &Workout) -> f64 {
    [workout.tss, workout.trimp, workout.planned_tss]
        .into_iter()
        .flatten()
        .find(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Duration used for weighting: moving time, else elapsed time
#[must_use]
pub fn resolve_duration_seconds(workout: &Workout) -> u64 {
    workout
        .duration_seconds
        .or(workout.elapsed_seconds)
        .unwrap_or(0)
}

/// Intensity factor of a workout
///
/// Uses the provider value when present, otherwise derives it from stress
/// and duration as `sqrt(TSS x 3600 / (duration x 100))`. Returns `None`
/// when neither is possible.
#[must_use]
pub fn resolve_intensity_factor(workout: &Workout) -> Option<f64> {
    if let Some(intensity) = workout.intensity_factor.filter(|v| v.is_finite() && *v > 0.0) {
        return Some(intensity);
    }
    let tss = resolve_tss(workout);
    let duration = resolve_duration_seconds(workout) as f64;
    if tss <= 0.0 || duration <= 0.0 {
        return None;
    }
    Some((tss * SECONDS_PER_HOUR / (duration * 100.0)).sqrt())
}
