// ABOUTME: Integration tests for stress resolution, load trend, breakdowns and readiness mode
// ABOUTME: Builds small synthetic record sets with hand-checked expected values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use coach_telemetry::intelligence::config::{IntensityConfig, LoadTrendConfig};
use coach_telemetry::intelligence::load_trend::{
    activity_breakdown, apply_readiness, build_trend, check_overtraining_risk,
    intensity_distribution, interpret_tsb, resolve_intensity_factor, resolve_tss,
    trend_direction, AnalyticsInput, DateRange, LoadTrendAnalyzer, RiskFactor, RiskLevel,
    TrainingStatus,
};
use coach_telemetry::intelligence::zones::{zone_distribution, WorkoutZones};
use coach_telemetry::models::{SportType, TrendDirection, TrendPoint, Workout};
use helpers::fixtures::{
    at, day, heart_rate_profile, planned_session, wellness_day, workout, workout_with_intensity,
    workout_with_load,
};

fn june() -> DateRange {
    DateRange::new(day(2024, 6, 1), day(2024, 6, 30))
}

#[test]
fn test_tss_fallback_chain() {
    let base = workout("w", at(2024, 6, 1, 8), SportType::Run);
    let full = Workout {
        tss: Some(100.0),
        trimp: Some(50.0),
        planned_tss: Some(20.0),
        ..base.clone()
    };
    let trimp = Workout {
        trimp: Some(50.0),
        planned_tss: Some(20.0),
        ..base.clone()
    };
    let planned = Workout {
        planned_tss: Some(20.0),
        ..base.clone()
    };
    assert!((resolve_tss(&full) - 100.0).abs() < f64::EPSILON);
    assert!((resolve_tss(&trimp) - 50.0).abs() < f64::EPSILON);
    assert!((resolve_tss(&planned) - 20.0).abs() < f64::EPSILON);
    assert!(resolve_tss(&base).abs() < f64::EPSILON);
}

#[test]
fn test_intensity_factor_is_synthesized_from_tss() {
    let hour_at_threshold = Workout {
        tss: Some(100.0),
        duration_seconds: Some(3600),
        ..workout("w", at(2024, 6, 1, 8), SportType::Ride)
    };
    assert!((resolve_intensity_factor(&hour_at_threshold).unwrap() - 1.0).abs() < 1e-9);

    let no_duration = Workout {
        tss: Some(100.0),
        ..workout("w", at(2024, 6, 1, 8), SportType::Ride)
    };
    assert!(resolve_intensity_factor(&no_duration).is_none());
}

#[test]
fn test_five_buckets_at_twenty_percent() {
    let workouts: Vec<Workout> = [0.6, 0.8, 0.9, 1.0, 1.1]
        .into_iter()
        .enumerate()
        .map(|(i, intensity)| {
            workout_with_intensity(&format!("w{i}"), at(2024, 6, 2, 7), 3600, intensity)
        })
        .collect();
    let distribution = intensity_distribution(&workouts, &IntensityConfig::default());
    for share in [
        distribution.recovery,
        distribution.endurance,
        distribution.tempo,
        distribution.threshold,
        distribution.vo2max,
    ] {
        assert!((share - 20.0).abs() < f64::EPSILON);
    }
}

#[test]
fn test_threshold_bucket_includes_upper_bound() {
    let workouts = [workout_with_intensity("w", at(2024, 6, 2, 7), 1800, 1.05)];
    let distribution = intensity_distribution(&workouts, &IntensityConfig::default());
    assert!((distribution.threshold - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_empty_intensity_distribution_is_zero() {
    let distribution = intensity_distribution(&[], &IntensityConfig::default());
    assert!(distribution.recovery.abs() < f64::EPSILON);
    assert!(distribution.vo2max.abs() < f64::EPSILON);
}

#[test]
fn test_activity_breakdown_by_sport() {
    let workouts = [
        Workout {
            tss: Some(60.0),
            duration_seconds: Some(3600),
            ..workout("r1", at(2024, 6, 3, 6), SportType::Run)
        },
        Workout {
            tss: Some(40.0),
            duration_seconds: Some(1800),
            ..workout("r2", at(2024, 6, 4, 6), SportType::Run)
        },
        Workout {
            tss: Some(90.0),
            elapsed_seconds: Some(7200),
            ..workout("b1", at(2024, 6, 5, 6), SportType::Ride)
        },
    ];
    let breakdown = activity_breakdown(&workouts);
    assert_eq!(breakdown.len(), 2);
    let run = &breakdown[SportType::Run.key()];
    assert_eq!(run.count, 2);
    assert_eq!(run.total_duration_seconds, 5400);
    assert!((run.average_tss - 50.0).abs() < f64::EPSILON);
    assert_eq!(breakdown[SportType::Ride.key()].total_duration_seconds, 7200);
}

#[test]
fn test_trend_prefers_latest_workout_over_wellness() {
    let workouts = [
        workout_with_load("am", at(2024, 6, 10, 6), 50.0, 60.0),
        workout_with_load("pm", at(2024, 6, 10, 18), 51.0, 65.0),
    ];
    let wellness = [
        wellness_day(day(2024, 6, 10), 49.0, 55.0),
        wellness_day(day(2024, 6, 11), 50.5, 62.0),
    ];
    let trend = build_trend(&workouts, &wellness, june());
    assert_eq!(trend.len(), 2);
    assert_eq!(trend[0].date, day(2024, 6, 10));
    assert!((trend[0].ctl - 51.0).abs() < f64::EPSILON);
    assert!((trend[0].tsb - (51.0 - 65.0)).abs() < f64::EPSILON);
    assert_eq!(trend[1].date, day(2024, 6, 11));
}

#[test]
fn test_trend_skips_incomplete_snapshots_and_out_of_range() {
    let mut partial = workout_with_load("x", at(2024, 6, 12, 6), 50.0, 60.0);
    partial.atl = None;
    let outside = workout_with_load("y", at(2024, 7, 1, 6), 50.0, 60.0);
    assert!(build_trend(&[partial, outside], &[], june()).is_empty());
}

#[test]
fn test_trend_direction_uses_relative_tolerance() {
    let config = LoadTrendConfig::default();
    let points = |first: f64, last: f64| {
        vec![
            TrendPoint::new(day(2024, 6, 1), first, 0.0),
            TrendPoint::new(day(2024, 6, 20), last, 0.0),
        ]
    };
    assert_eq!(trend_direction(&points(50.0, 53.0), &config), TrendDirection::Increasing);
    assert_eq!(trend_direction(&points(50.0, 52.0), &config), TrendDirection::Stable);
    assert_eq!(trend_direction(&points(50.0, 47.0), &config), TrendDirection::Decreasing);
    assert_eq!(trend_direction(&points(0.0, 5.0), &config), TrendDirection::Increasing);
    assert_eq!(trend_direction(&[], &config), TrendDirection::Stable);
}

#[test]
fn test_readiness_subtracts_pending_planned_load() {
    let today = day(2024, 6, 15);
    let mut trend = vec![TrendPoint::new(today, 60.0, 80.0)];
    let planned = [
        planned_session(today, 30.0, false),
        planned_session(today, 25.0, true),
        planned_session(day(2024, 6, 16), 100.0, false),
    ];
    let adjusted = apply_readiness(&mut trend, &planned, today).unwrap();
    assert!((adjusted.atl - 50.0).abs() < f64::EPSILON);
    assert!((adjusted.tsb - 10.0).abs() < f64::EPSILON);
    assert_eq!(trend[0], adjusted);

    let mut floored = vec![TrendPoint::new(today, 20.0, 10.0)];
    let adjusted = apply_readiness(&mut floored, &planned, today).unwrap();
    assert!(adjusted.atl.abs() < f64::EPSILON);

    assert!(apply_readiness(&mut [], &planned, today).is_none());
}

#[test]
fn test_status_and_risk_flags() {
    assert_eq!(interpret_tsb(-15.0), TrainingStatus::Overreaching);
    assert_eq!(interpret_tsb(-5.0), TrainingStatus::Productive);
    assert_eq!(interpret_tsb(5.0), TrainingStatus::Fresh);
    assert_eq!(interpret_tsb(15.0), TrainingStatus::Detraining);

    let spike = check_overtraining_risk(&TrendPoint::new(day(2024, 6, 1), 100.0, 160.0));
    assert_eq!(spike.risk_level, RiskLevel::High);
    assert_eq!(
        spike.risk_factors,
        vec![
            RiskFactor::AcuteSpike,
            RiskFactor::VeryHighAcuteLoad,
            RiskFactor::DeepFatigue
        ]
    );

    let calm = check_overtraining_risk(&TrendPoint::new(day(2024, 6, 1), 60.0, 55.0));
    assert_eq!(calm.risk_level, RiskLevel::Low);
}

#[test]
fn test_analyzer_builds_full_payload() {
    let workouts = vec![
        Workout {
            tss: Some(80.0),
            duration_seconds: Some(3600),
            distance_meters: Some(10_000.0),
            ..workout_with_load("w1", at(2024, 6, 10, 7), 50.0, 55.0)
        },
        Workout {
            tss: Some(120.0),
            duration_seconds: Some(5400),
            distance_meters: Some(40_000.0),
            ..workout_with_load("w2", at(2024, 6, 14, 7), 54.0, 70.0)
        },
        workout_with_load("old", at(2024, 5, 1, 7), 30.0, 30.0),
    ];
    let mut rested = wellness_day(day(2024, 6, 15), 54.0, 68.0);
    rested.hrv = Some(60.0);
    rested.readiness = Some(7);
    let wellness = vec![rested];
    let planned = vec![planned_session(day(2024, 6, 15), 18.0, false)];
    let hr = heart_rate_profile();
    let zones = vec![WorkoutZones {
        heart_rate: zone_distribution(&[130.0; 4], &[], None, &hr),
        power: None,
    }];

    let analyzer = LoadTrendAnalyzer::default();
    let payload = analyzer.analyze(&AnalyticsInput {
        workouts: &workouts,
        wellness: &wellness,
        planned: &planned,
        zones: &zones,
        range: june(),
        readiness_today: Some(day(2024, 6, 15)),
    });

    assert_eq!(payload.summary.total_workouts, 2);
    assert_eq!(payload.summary.total_duration_seconds, 9000);
    assert!((payload.summary.total_tss - 200.0).abs() < f64::EPSILON);
    assert!((payload.summary.average_tss - 100.0).abs() < f64::EPSILON);
    assert_eq!(payload.load_trend.len(), 3);
    assert_eq!(payload.summary.trend, TrendDirection::Increasing);
    assert!(payload.summary.readiness_adjusted);

    let current = payload.summary.current.unwrap();
    assert!((current.atl - 50.0).abs() < f64::EPSILON);
    assert!((current.tsb - 4.0).abs() < f64::EPSILON);
    assert_eq!(payload.summary.training_status, Some(TrainingStatus::Fresh));
    assert_eq!(payload.summary.wellness.days, 1);
    assert_eq!(payload.summary.wellness.average_readiness, Some(7.0));

    let hr_zones = payload.summary.heart_rate_zones.as_ref().unwrap();
    assert!((hr_zones.zones[1].percentage - 100.0).abs() < f64::EPSILON);
    assert!(payload.summary.power_zones.is_none());

    let json = serde_json::to_value(&payload).unwrap();
    assert!(json["loadTrend"].is_array());
    assert!(json["activityBreakdown"]["run"].is_object());
    assert!(json["intensityDistribution"]["vo2max"].is_number());
    assert!(json["summary"].get("powerZones").is_none());
}

#[test]
fn test_reversed_range_is_normalized() {
    let range = DateRange::new(day(2024, 6, 30), day(2024, 6, 1));
    assert_eq!(range, june());
    assert!(range.contains(day(2024, 6, 15)));
    assert!(!range.contains(day(2024, 7, 1)));
}
