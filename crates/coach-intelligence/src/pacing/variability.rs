// ABOUTME: Velocity variability and time-weighted pace zone distribution
// ABOUTME: Stationary samples are excluded from both
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use super::sample_weight;
use crate::config::PacingConfig;
use crate::zones::{zone_index, ZoneDistribution};
use coach_core::models::ZoneProfile;

/// Population standard deviation of moving velocity samples (m/s)
///
/// Returns `None` when no sample is above the stationary cutoff.
#[must_use]
pub fn pace_variability(velocity: &[f64], config: &PacingConfig) -> Option<f64> {
    let moving: Vec<f64> = velocity
        .iter()
        .copied()
        .filter(|&v| v > config.stationary_velocity_mps)
        .collect();
    if moving.is_empty() {
        return None;
    }

    let count = moving.len() as f64;
    let mean = moving.iter().sum::<f64>() / count;
    let variance = moving.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;
    Some(variance.sqrt())
}

/// Share of moving time spent in each velocity zone
///
/// `zones` bounds are velocities in m/s. Percentages are of total moving
/// time, so moving samples below the first zone lower every share.
#[must_use]
pub fn pace_zone_distribution(
    velocity: &[f64],
    time: &[f64],
    zones: &ZoneProfile,
    config: &PacingConfig,
) -> ZoneDistribution {
    let mut seconds = vec![0.0; zones.len()];
    for (i, &v) in velocity.iter().enumerate() {
        if v <= config.stationary_velocity_mps {
            continue;
        }
        if let Some(zone) = zone_index(v, zones) {
            seconds[zone] += sample_weight(time, i);
        }
    }
    let moving_total: f64 = velocity
        .iter()
        .enumerate()
        .filter(|(_, v)| **v > config.stationary_velocity_mps)
        .map(|(i, _)| sample_weight(time, i))
        .sum();
    ZoneDistribution::with_total(zones, &seconds, moving_total)
}
