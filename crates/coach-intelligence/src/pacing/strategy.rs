// ABOUTME: Classifies a run as positive, negative or even split from its laps
// ABOUTME: Evenness score penalises lap-to-lap pace variation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use crate::config::PacingConfig;
use coach_core::models::{LapSplit, PacingStrategy, SplitStrategy};

/// Mean of the lap paces in one half (s/km); a partial lap weighs as much as a full one
fn half_pace(laps: &[LapSplit]) -> f64 {
    if laps.is_empty() {
        return 0.0;
    }
    laps.iter().map(|lap| lap.pace_seconds).sum::<f64>() / laps.len() as f64
}

/// `max(0, 100 - multiplier * CV%)` over lap paces
fn evenness_score(laps: &[LapSplit], multiplier: f64) -> f64 {
    let count = laps.len() as f64;
    let mean = laps.iter().map(|lap| lap.pace_seconds).sum::<f64>() / count;
    if mean <= 0.0 {
        return 0.0;
    }
    let variance = laps
        .iter()
        .map(|lap| (lap.pace_seconds - mean).powi(2))
        .sum::<f64>()
        / count;
    let cv_percent = variance.sqrt() / mean * 100.0;
    multiplier.mul_add(-cv_percent, 100.0).max(0.0)
}

/// Compare the first and second half of the laps
///
/// With an odd lap count the middle lap belongs to the second half. Partial
/// laps take part. Fewer than two laps yields `None`.
#[must_use]
pub fn pacing_strategy(laps: &[LapSplit], config: &PacingConfig) -> Option<PacingStrategy> {
    if laps.len() < 2 {
        return None;
    }

    let (first, second) = laps.split_at(laps.len() / 2);
    let first_half_pace = half_pace(first);
    let second_half_pace = half_pace(second);
    let difference_seconds = second_half_pace - first_half_pace;

    let strategy = if difference_seconds > config.split_difference_threshold_s {
        SplitStrategy::PositiveSplit
    } else if difference_seconds < -config.split_difference_threshold_s {
        SplitStrategy::NegativeSplit
    } else {
        SplitStrategy::Even
    };

    Some(PacingStrategy {
        strategy,
        evenness_score: evenness_score(laps, config.evenness_cv_multiplier),
        first_half_pace,
        second_half_pace,
        difference_seconds,
    })
}
