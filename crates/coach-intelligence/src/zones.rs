// ABOUTME: Buckets heart-rate and power samples into threshold zones
// ABOUTME: Percent-of-time distributions from raw streams or pre-computed zone seconds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

//! # Zone Analyzer
//!
//! Heart rate and power are bucketed independently, each against its own
//! [`ZoneProfile`]. A profile that belongs to the activity wins over the
//! user's default profile.

use crate::pacing::sample_weight;
use coach_core::models::{StreamBundle, ZoneProfile};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Index of the zone containing `value`
///
/// Values at or above the last zone's minimum fall in the last zone, values
/// in a gap between two zones fall in the lower one, and values below the
/// first zone are out of range (`None`).
#[must_use]
pub fn zone_index(value: f64, profile: &ZoneProfile) -> Option<usize> {
    if value.is_nan() {
        return None;
    }
    profile.zones.iter().rposition(|zone| zone.min <= value)
}

/// Time spent in one zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneShare {
    /// Zone name
    pub name: String,
    /// Seconds spent in the zone
    pub seconds: f64,
    /// Rounded percentage of the total
    pub percentage: f64,
}

/// Per-zone time and percentage for one metric
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDistribution {
    /// One entry per zone, in profile order
    pub zones: Vec<ZoneShare>,
    /// Denominator used for the percentages (s); the sum of zone seconds
    /// except for pace zones, which divide by moving time
    pub total_seconds: f64,
}

fn percentage(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        (part / total * 100.0).round()
    } else {
        0.0
    }
}

impl ZoneDistribution {
    /// Build from per-zone seconds, using their sum as the total
    #[must_use]
    pub fn from_seconds(profile: &ZoneProfile, seconds: &[f64]) -> Self {
        let total = seconds.iter().take(profile.len()).sum();
        Self::with_total(profile, seconds, total)
    }

    /// Build from per-zone seconds against an explicit total
    #[must_use]
    pub fn with_total(profile: &ZoneProfile, seconds: &[f64], total_seconds: f64) -> Self {
        let zones = profile
            .zones
            .iter()
            .enumerate()
            .map(|(i, zone)| {
                let secs = seconds.get(i).copied().unwrap_or(0.0);
                ZoneShare {
                    name: zone.name.clone(),
                    seconds: secs,
                    percentage: percentage(secs, total_seconds),
                }
            })
            .collect();
        Self {
            zones,
            total_seconds,
        }
    }

    /// Per-zone seconds in profile order
    #[must_use]
    pub fn seconds(&self) -> Vec<f64> {
        self.zones.iter().map(|zone| zone.seconds).collect()
    }
}

/// Seconds per zone from a raw sample stream
///
/// Samples below the first zone are dropped.
#[must_use]
pub fn zone_seconds(values: &[f64], time: &[f64], profile: &ZoneProfile) -> Vec<f64> {
    let mut seconds = vec![0.0; profile.len()];
    for (i, &value) in values.iter().enumerate() {
        if let Some(zone) = zone_index(value, profile) {
            seconds[zone] += sample_weight(time, i);
        }
    }
    seconds
}

/// Distribution for one metric
///
/// Pre-computed zone seconds are used when they cover every zone of the
/// profile; otherwise the raw stream is resampled through [`zone_index`].
/// Both paths divide by the sum of zone seconds, so feeding a distribution's
/// own seconds back in reproduces it. Returns `None` when neither source has
/// data.
#[must_use]
pub fn zone_distribution(
    values: &[f64],
    time: &[f64],
    precomputed: Option<&[f64]>,
    profile: &ZoneProfile,
) -> Option<ZoneDistribution> {
    if profile.is_empty() {
        return None;
    }
    if let Some(seconds) = precomputed.filter(|secs| secs.len() >= profile.len()) {
        return Some(ZoneDistribution::from_seconds(profile, seconds));
    }
    if values.is_empty() {
        return None;
    }
    let seconds = zone_seconds(values, time, profile);
    Some(ZoneDistribution::from_seconds(profile, &seconds))
}

/// Sum several distributions into one, matching zones by name
///
/// Zone order follows first appearance. Percentages are recomputed from the
/// summed seconds.
#[must_use]
pub fn merge_distributions<'a, I>(distributions: I) -> ZoneDistribution
where
    I: IntoIterator<Item = &'a ZoneDistribution>,
{
    let mut merged: Vec<ZoneShare> = Vec::new();
    let mut total_seconds = 0.0;
    for distribution in distributions {
        total_seconds += distribution.total_seconds;
        for share in &distribution.zones {
            if let Some(existing) = merged.iter_mut().find(|z| z.name == share.name) {
                existing.seconds += share.seconds;
            } else {
                merged.push(ZoneShare {
                    name: share.name.clone(),
                    seconds: share.seconds,
                    percentage: 0.0,
                });
            }
        }
    }
    for share in &mut merged {
        share.percentage = percentage(share.seconds, total_seconds);
    }
    ZoneDistribution {
        zones: merged,
        total_seconds,
    }
}

/// Pick the activity-specific profile, else the user's default
///
/// Profiles that fail validation are skipped with a warning.
#[must_use]
pub fn resolve_profile<'a>(
    activity_profile: Option<&'a ZoneProfile>,
    default_profile: Option<&'a ZoneProfile>,
) -> Option<&'a ZoneProfile> {
    [activity_profile, default_profile]
        .into_iter()
        .flatten()
        .find(|profile| match profile.validate() {
            Ok(()) => true,
            Err(e) => {
                warn!("Skipping invalid zone profile: {e}");
                false
            }
        })
}

/// Heart-rate and power distributions of one workout
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutZones {
    /// Heart-rate zone distribution
    pub heart_rate: Option<ZoneDistribution>,
    /// Power zone distribution
    pub power: Option<ZoneDistribution>,
}

/// Compute both distributions for a bundle
#[must_use]
pub fn analyze_zones(
    bundle: &StreamBundle,
    hr_profile: Option<&ZoneProfile>,
    power_profile: Option<&ZoneProfile>,
) -> WorkoutZones {
    WorkoutZones {
        heart_rate: hr_profile.and_then(|profile| {
            zone_distribution(
                &bundle.heartrate,
                &bundle.time,
                bundle.hr_zone_times.as_deref(),
                profile,
            )
        }),
        power: power_profile.and_then(|profile| {
            zone_distribution(
                &bundle.watts,
                &bundle.time,
                bundle.power_zone_times.as_deref(),
                profile,
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_core::models::Zone;

    fn two_zones() -> ZoneProfile {
        ZoneProfile {
            zones: vec![Zone::new("Z1", 0.0, 100.0), Zone::new("Z2", 101.0, 200.0)],
        }
    }

    #[test]
    fn test_zone_index_boundaries() {
        let profile = two_zones();
        assert_eq!(zone_index(50.0, &profile), Some(0));
        assert_eq!(zone_index(150.0, &profile), Some(1));
        assert_eq!(zone_index(300.0, &profile), Some(1));
        assert_eq!(zone_index(-10.0, &profile), None);
        assert_eq!(zone_index(100.5, &profile), Some(0));
    }

    #[test]
    fn test_precomputed_too_short_falls_back_to_stream() {
        let profile = two_zones();
        let dist = zone_distribution(&[50.0, 50.0, 150.0], &[], Some(&[10.0]), &profile).unwrap();
        assert!((dist.total_seconds - 3.0).abs() < f64::EPSILON);
        assert!((dist.zones[0].percentage - 67.0).abs() < f64::EPSILON);
    }
}
