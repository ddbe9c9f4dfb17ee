// ABOUTME: Fixed-distance lap splits and average moving pace
// ABOUTME: A partial final lap is emitted when enough distance remains after the last full lap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use super::{format_pace, sample_dt};
use crate::config::PacingConfig;
use coach_core::constants::units::METERS_PER_KM;
use coach_core::models::{LapSplit, StreamBundle};

fn split(lap: u32, distance: f64, time: f64) -> LapSplit {
    let pace_seconds = if distance > 0.0 {
        time / (distance / METERS_PER_KM)
    } else {
        0.0
    };
    LapSplit {
        lap,
        distance,
        time,
        pace: format_pace(pace_seconds),
        pace_seconds,
    }
}

/// Cut the cumulative distance stream into laps of `config.lap_distance_m`
///
/// A lap closes at the first sample whose distance reaches the boundary.
/// Streams of different lengths are truncated to the shorter one.
#[must_use]
pub fn lap_splits(distance: &[f64], time: &[f64], config: &PacingConfig) -> Vec<LapSplit> {
    let samples = distance.len().min(time.len());
    if samples < 2 || config.lap_distance_m <= 0.0 {
        return Vec::new();
    }

    let mut splits = Vec::new();
    let mut lap_start_distance = distance[0];
    let mut lap_start_time = time[0];
    let mut next_boundary = lap_start_distance + config.lap_distance_m;

    for (&d, &t) in distance.iter().zip(time).take(samples).skip(1) {
        if d >= next_boundary {
            let lap = u32::try_from(splits.len() + 1).unwrap_or(u32::MAX);
            splits.push(split(lap, d - lap_start_distance, t - lap_start_time));
            lap_start_distance = d;
            lap_start_time = t;
            next_boundary += config.lap_distance_m;
        }
    }

    let remaining = distance[samples - 1] - lap_start_distance;
    if remaining > config.partial_lap_min_distance_m {
        let lap = u32::try_from(splits.len() + 1).unwrap_or(u32::MAX);
        splits.push(split(lap, remaining, time[samples - 1] - lap_start_time));
    }

    splits
}

/// Average pace in seconds per km over moving samples
///
/// Moving time sums the sample intervals whose velocity is above the
/// stationary cutoff; without a velocity stream the full elapsed time is used.
#[must_use]
pub fn average_pace_per_km(bundle: &StreamBundle, config: &PacingConfig) -> Option<f64> {
    let first = bundle.distance.first()?;
    let last = bundle.distance.last()?;
    let covered = last - first;
    if covered <= 0.0 || bundle.time.len() < 2 {
        return None;
    }

    let moving_seconds: f64 = if bundle.velocity.is_empty() {
        bundle.time[bundle.time.len() - 1] - bundle.time[0]
    } else {
        bundle
            .velocity
            .iter()
            .enumerate()
            .filter(|(_, v)| **v > config.stationary_velocity_mps)
            .map(|(i, _)| sample_dt(&bundle.time, i))
            .sum()
    };

    (moving_seconds > 0.0).then(|| moving_seconds / (covered / METERS_PER_KM))
}
