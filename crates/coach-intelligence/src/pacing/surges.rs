// ABOUTME: Detects sudden accelerations in the velocity stream
// ABOUTME: Compares each sample against a fixed look-back and skips ahead after a hit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use crate::config::PacingConfig;
use coach_core::models::SurgeEvent;

/// Find surges: `velocity[i] - velocity[i - lookback] > threshold` while
/// `velocity[i]` is above the minimum surge velocity
///
/// After a surge the next `surge_skip_samples` samples are not examined.
/// When no time stream is present the event time is the sample index.
#[must_use]
pub fn detect_surges(velocity: &[f64], time: &[f64], config: &PacingConfig) -> Vec<SurgeEvent> {
    let lookback = config.surge_lookback_samples.max(1);
    let mut surges = Vec::new();
    let mut i = lookback;

    while i < velocity.len() {
        let before = velocity[i - lookback];
        let after = velocity[i];
        let increase = after - before;
        if increase > config.surge_threshold_mps && after > config.surge_min_velocity_mps {
            surges.push(SurgeEvent {
                index: i,
                time: time.get(i).copied().unwrap_or(i as f64),
                velocity_before: before,
                velocity_after: after,
                increase,
            });
            i += config.surge_skip_samples.max(1);
        } else {
            i += 1;
        }
    }

    surges
}
