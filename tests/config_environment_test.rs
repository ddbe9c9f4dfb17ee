// ABOUTME: Unit tests for environment-driven telemetry configuration
// ABOUTME: Validates defaults, overrides, metric preference tokens and rejected values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use coach_telemetry::config::{TelemetryConfig, ZoneCacheConfig};
use coach_telemetry::errors::ErrorCode;
use coach_telemetry::intelligence::config::{AnalyticsConfig, IntensityConfig, PacingConfig};
use coach_telemetry::intelligence::metric_priority::Metric;
use coach_telemetry::logging::{LogFormat, LoggingConfig};
use coach_telemetry::models::SportType;
use serial_test::serial;
use std::env;

const OVERRIDE_VARS: &[&str] = &[
    "PACING_LAP_DISTANCE_M",
    "PACING_SURGE_LOOKBACK_SAMPLES",
    "INTENSITY_TEMPO_UPPER",
    "ZONE_CACHE_TTL_SECS",
    "ZONE_CACHE_MAX_ENTRIES",
    "METRIC_PREFERENCE_RUNNING",
    "LOG_FORMAT",
];

fn clear_overrides() {
    for name in OVERRIDE_VARS {
        env::remove_var(name);
    }
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("COMPACT"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty); // Default fallback
}

#[test]
fn test_defaults_are_valid() {
    assert!(AnalyticsConfig::default().validate().is_ok());
    assert!(TelemetryConfig::default().validate().is_ok());
    assert_eq!(LoggingConfig::default().service_name, "coach-telemetry");
}

#[test]
#[serial]
fn test_from_env_without_overrides_matches_defaults() {
    clear_overrides();
    let config = TelemetryConfig::from_env().unwrap();
    assert_eq!(config.analytics, AnalyticsConfig::default());
    assert_eq!(config.zone_cache, ZoneCacheConfig::default());
}

#[test]
#[serial]
fn test_env_overrides_are_applied() {
    clear_overrides();
    env::set_var("PACING_LAP_DISTANCE_M", "400");
    env::set_var("PACING_SURGE_LOOKBACK_SAMPLES", "3");
    env::set_var("ZONE_CACHE_TTL_SECS", "60");
    env::set_var("METRIC_PREFERENCE_RUNNING", "HR>PACE");
    env::set_var("LOG_FORMAT", "json");

    let config = TelemetryConfig::from_env().unwrap();
    assert!((config.analytics.pacing.lap_distance_m - 400.0).abs() < f64::EPSILON);
    assert_eq!(config.analytics.pacing.surge_lookback_samples, 3);
    assert_eq!(config.zone_cache.ttl().num_seconds(), 60);
    assert_eq!(
        config.metric_preferences.order_for(&SportType::Run),
        vec![Metric::HeartRate, Metric::Pace, Metric::Power]
    );
    assert_eq!(config.logging.format, LogFormat::Json);
    clear_overrides();
}

#[test]
#[serial]
fn test_unparseable_override_falls_back_to_default() {
    clear_overrides();
    env::set_var("PACING_LAP_DISTANCE_M", "a mile");
    let config = TelemetryConfig::from_env().unwrap();
    assert!(
        (config.analytics.pacing.lap_distance_m - PacingConfig::default().lap_distance_m).abs()
            < f64::EPSILON
    );
    clear_overrides();
}

#[test]
#[serial]
fn test_unordered_intensity_buckets_are_rejected() {
    clear_overrides();
    env::set_var("INTENSITY_TEMPO_UPPER", "0.5");
    let error = TelemetryConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    clear_overrides();
}

#[test]
#[serial]
fn test_zero_cache_entries_is_rejected() {
    clear_overrides();
    env::set_var("ZONE_CACHE_MAX_ENTRIES", "0");
    let error = TelemetryConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
    clear_overrides();
}

#[test]
fn test_invalid_pacing_values() {
    let config = PacingConfig {
        lap_distance_m: 0.0,
        ..PacingConfig::default()
    };
    assert!(config.validate().is_err());

    let intensity = IntensityConfig {
        endurance_upper: 0.6,
        ..IntensityConfig::default()
    };
    assert!(intensity.validate().is_err());
}
