// ABOUTME: Integration tests for primary metric selection and narrative rules
// ABOUTME: Checks per-sport preferences, overrides, availability and fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use coach_telemetry::intelligence::metric_priority::{
    parse_preference, resolve_for_workout, resolve_priority, Metric, MetricAvailability,
    MetricPreferences, NarrativeRule,
};
use coach_telemetry::models::{SportType, Workout};
use helpers::fixtures::{at, even_run, workout};

#[test]
fn test_unknown_tokens_are_ignored() {
    assert_eq!(
        parse_preference("cadence>POWER>vibes"),
        vec![Metric::Power, Metric::HeartRate, Metric::Pace]
    );
}

#[test]
fn test_running_prefers_pace_and_condenses_heart_rate() {
    let run = Workout {
        average_speed: Some(3.3),
        average_heart_rate: Some(150.0),
        ..workout("r", at(2024, 6, 1, 7), SportType::Run)
    };
    let priority = resolve_for_workout(&run, None, &MetricPreferences::default());
    assert_eq!(priority.primary.metric, Metric::Pace);
    assert!(priority.primary.available);
    assert_eq!(priority.secondary.metric, Metric::HeartRate);
    assert_eq!(priority.narrative_rules, vec![NarrativeRule::CondenseHeartRate]);
}

#[test]
fn test_pace_from_stream_artifacts() {
    let treadmill = workout("t", at(2024, 6, 1, 7), SportType::VirtualRun);
    let mut bundle = even_run("t", 3000, 900);
    bundle.lap_splits = Some(Vec::new());
    bundle.pace_variability = Some(0.1);
    let availability = MetricAvailability::from_workout(&treadmill, Some(&bundle));
    assert!(availability.pace);
    assert!(!availability.heart_rate);
}

#[test]
fn test_cycling_without_power_discloses_fallback() {
    let ride = Workout {
        average_heart_rate: Some(140.0),
        ..workout("b", at(2024, 6, 1, 7), SportType::Ride)
    };
    let priority = resolve_for_workout(&ride, None, &MetricPreferences::default());
    assert_eq!(priority.primary.metric, Metric::Power);
    assert!(!priority.primary.available);
    assert_eq!(
        priority.narrative_rules,
        vec![NarrativeRule::DiscloseFallback {
            fallback: Metric::HeartRate
        }]
    );
}

#[test]
fn test_no_metric_data() {
    let priority = resolve_priority(&[Metric::HeartRate], MetricAvailability::default());
    assert_eq!(priority.order.len(), 3);
    assert_eq!(priority.narrative_rules, vec![NarrativeRule::NoMetricData]);
}

#[test]
fn test_sport_override_beats_family() {
    let mut preferences = MetricPreferences::default();
    preferences
        .overrides
        .insert("trail_run".to_owned(), "HR>PACE".to_owned());
    assert_eq!(preferences.order_for(&SportType::TrailRun)[0], Metric::HeartRate);
    assert_eq!(preferences.order_for(&SportType::Run)[0], Metric::Pace);
    assert_eq!(preferences.order_for(&SportType::Swim)[0], Metric::HeartRate);
}

#[test]
fn test_priority_serializes_rule_tags() {
    let priority = resolve_priority(
        &[Metric::Power],
        MetricAvailability {
            pace: false,
            heart_rate: true,
            power: false,
        },
    );
    let json = serde_json::to_value(&priority).unwrap();
    assert_eq!(json["primary"]["metric"], "POWER");
    assert_eq!(json["narrativeRules"][0]["rule"], "disclose_fallback");
    assert_eq!(json["narrativeRules"][0]["fallback"], "HR");
}
