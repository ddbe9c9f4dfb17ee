// ABOUTME: Integration tests for zone bucketing, distributions and profile resolution
// ABOUTME: Covers boundary values, pre-computed zone seconds and cross-workout merging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use coach_telemetry::intelligence::config::PacingConfig;
use coach_telemetry::intelligence::pacing::pace_zone_distribution;
use coach_telemetry::intelligence::zones::{
    analyze_zones, merge_distributions, resolve_profile, zone_distribution, zone_index,
};
use coach_telemetry::models::{StreamBundle, Zone, ZoneProfile};
use helpers::fixtures::{heart_rate_profile, power_profile};

fn two_zones() -> ZoneProfile {
    ZoneProfile::new(vec![Zone::new("Z1", 0.0, 100.0), Zone::new("Z2", 101.0, 200.0)]).unwrap()
}

#[test]
fn test_zone_index_examples() {
    let profile = two_zones();
    assert_eq!(zone_index(50.0, &profile), Some(0));
    assert_eq!(zone_index(150.0, &profile), Some(1));
    assert_eq!(zone_index(300.0, &profile), Some(1));
    assert_eq!(zone_index(-10.0, &profile), None);
    assert_eq!(zone_index(f64::NAN, &profile), None);
}

#[test]
fn test_profile_validation_rejects_overlap_and_inversion() {
    assert!(ZoneProfile::new(vec![]).is_err());
    assert!(ZoneProfile::new(vec![Zone::new("A", 10.0, 5.0)]).is_err());
    assert!(ZoneProfile::new(vec![Zone::new("A", 0.0, 100.0), Zone::new("B", 90.0, 150.0)]).is_err());
}

#[test]
fn test_time_weighted_distribution_from_stream() {
    let profile = two_zones();
    let values = [90.0, 90.0, 150.0, 150.0];
    let time = [0.0, 10.0, 20.0, 50.0];
    let distribution = zone_distribution(&values, &time, None, &profile).unwrap();
    assert!((distribution.total_seconds - 60.0).abs() < f64::EPSILON);
    assert!((distribution.zones[0].seconds - 20.0).abs() < f64::EPSILON);
    assert!((distribution.zones[1].seconds - 40.0).abs() < f64::EPSILON);
    assert!((distribution.zones[0].percentage - 33.0).abs() < f64::EPSILON);
    assert!((distribution.zones[1].percentage - 67.0).abs() < f64::EPSILON);
}

#[test]
fn test_first_sample_takes_gap_to_next_sample() {
    let profile = two_zones();
    let distribution = zone_distribution(&[90.0, 150.0], &[0.0, 5.0], None, &profile).unwrap();
    assert!((distribution.zones[0].seconds - 5.0).abs() < f64::EPSILON);
    assert!((distribution.zones[1].seconds - 5.0).abs() < f64::EPSILON);
    assert!((distribution.total_seconds - 10.0).abs() < f64::EPSILON);
    assert!((distribution.zones[0].percentage - 50.0).abs() < f64::EPSILON);

    let single = zone_distribution(&[90.0], &[12.0], None, &profile).unwrap();
    assert!((single.zones[0].seconds - 1.0).abs() < f64::EPSILON);
    assert!((single.zones[0].percentage - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_below_range_samples_are_excluded() {
    let profile = ZoneProfile::new(vec![Zone::new("Z1", 100.0, 150.0), Zone::new("Z2", 151.0, 200.0)])
        .unwrap();
    let distribution = zone_distribution(&[80.0, 80.0, 120.0, 160.0], &[], None, &profile).unwrap();
    assert!((distribution.total_seconds - 2.0).abs() < f64::EPSILON);
    assert!((distribution.zones[0].seconds - 1.0).abs() < f64::EPSILON);
    assert!((distribution.zones[1].seconds - 1.0).abs() < f64::EPSILON);
    assert!((distribution.zones[0].percentage - 50.0).abs() < f64::EPSILON);
    assert!((distribution.zones[1].percentage - 50.0).abs() < f64::EPSILON);

    let rebuilt =
        zone_distribution(&[], &[], Some(&distribution.seconds()), &profile).unwrap();
    assert_eq!(rebuilt, distribution);
}

#[test]
fn test_precomputed_seconds_are_preferred() {
    let profile = two_zones();
    let distribution =
        zone_distribution(&[150.0; 10], &[], Some(&[30.0, 90.0]), &profile).unwrap();
    assert!((distribution.total_seconds - 120.0).abs() < f64::EPSILON);
    assert!((distribution.zones[0].percentage - 25.0).abs() < f64::EPSILON);
}

#[test]
fn test_empty_stream_without_precomputed_is_none() {
    assert!(zone_distribution(&[], &[], None, &two_zones()).is_none());
}

#[test]
fn test_zero_total_gives_zero_percentages() {
    let distribution = zone_distribution(&[], &[], Some(&[0.0, 0.0]), &two_zones()).unwrap();
    assert!(distribution.zones.iter().all(|z| z.percentage.abs() < f64::EPSILON));
}

#[test]
fn test_merge_by_zone_name() {
    let profile = two_zones();
    let first = zone_distribution(&[], &[], Some(&[60.0, 0.0]), &profile).unwrap();
    let second = zone_distribution(&[], &[], Some(&[0.0, 180.0]), &profile).unwrap();
    let merged = merge_distributions([&first, &second]);
    assert!((merged.total_seconds - 240.0).abs() < f64::EPSILON);
    assert_eq!(merged.zones.len(), 2);
    assert!((merged.zones[0].percentage - 25.0).abs() < f64::EPSILON);
    assert!((merged.zones[1].percentage - 75.0).abs() < f64::EPSILON);
}

#[test]
fn test_activity_profile_wins_and_invalid_is_skipped() {
    let default = heart_rate_profile();
    let activity = two_zones();
    assert_eq!(resolve_profile(Some(&activity), Some(&default)), Some(&activity));
    assert_eq!(resolve_profile(None, Some(&default)), Some(&default));

    let broken = ZoneProfile {
        zones: vec![Zone::new("Z2", 150.0, 200.0), Zone::new("Z1", 0.0, 149.0)],
    };
    assert_eq!(resolve_profile(Some(&broken), Some(&default)), Some(&default));
    assert_eq!(resolve_profile(Some(&broken), None), None);
}

#[test]
fn test_analyze_zones_per_metric() {
    let bundle = StreamBundle {
        workout_id: "ride".to_owned(),
        time: vec![0.0, 1.0, 2.0, 3.0],
        heartrate: vec![110.0, 130.0, 150.0, 165.0],
        watts: vec![100.0, 200.0, 300.0, 300.0],
        ..StreamBundle::default()
    };
    let zones = analyze_zones(&bundle, Some(&heart_rate_profile()), Some(&power_profile()));
    let hr = zones.heart_rate.unwrap();
    assert_eq!(hr.zones.len(), 5);
    assert!((hr.total_seconds - 4.0).abs() < f64::EPSILON);
    let power = zones.power.unwrap();
    assert!((power.zones[2].seconds - 2.0).abs() < f64::EPSILON);

    let no_profiles = analyze_zones(&bundle, None, None);
    assert!(no_profiles.heart_rate.is_none());
    assert!(no_profiles.power.is_none());
}

#[test]
fn test_pace_zones_skip_stationary_samples() {
    let profile = ZoneProfile::new(vec![
        Zone::new("Easy", 0.0, 3.0),
        Zone::new("Fast", 3.01, 10.0),
    ])
    .unwrap();
    let velocity = [0.0, 2.5, 2.5, 4.0, 0.2];
    let time = [0.0, 1.0, 2.0, 3.0, 4.0];
    let distribution = pace_zone_distribution(&velocity, &time, &profile, &PacingConfig::default());
    assert!((distribution.total_seconds - 3.0).abs() < f64::EPSILON);
    assert!((distribution.zones[0].seconds - 2.0).abs() < f64::EPSILON);
    assert!((distribution.zones[1].seconds - 1.0).abs() < f64::EPSILON);
}
