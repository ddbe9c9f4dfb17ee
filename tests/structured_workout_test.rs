// ABOUTME: Integration tests for structured-workout step normalization
// ABOUTME: Percent targets become ratios once and re-normalizing is a no-op
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use coach_telemetry::intelligence::config::StructuredWorkoutConfig;
use coach_telemetry::models::{StepTarget, StepType, TargetRange};
use coach_telemetry::providers::{normalize_step, normalize_steps, RawTarget};
use serde_json::json;

#[test]
fn test_raw_target_classification() {
    let percent = RawTarget::parse(&json!({"value": 95, "units": "%lthr"})).unwrap();
    assert!(matches!(percent, RawTarget::Percentage(_)));
    assert_eq!(percent.into_ratio(), StepTarget::Steady { value: 0.95 });

    let ratio = RawTarget::parse(&json!({"range": {"start": 0.8, "end": 0.9}})).unwrap();
    assert!(matches!(ratio, RawTarget::Ratio(_)));
    assert_eq!(
        ratio.into_ratio(),
        StepTarget::Ramp {
            range: TargetRange { start: 0.8, end: 0.9 }
        }
    );

    assert!(RawTarget::parse(&json!({"units": "%ftp"})).is_none());
}

#[test]
fn test_heart_rate_and_cadence_shapes() {
    let step = normalize_step(
        &json!({
            "duration": 300,
            "hr": {"value": 80, "units": "%lthr"},
            "cadence": {"value": 90, "units": "rpm"}
        }),
        &StructuredWorkoutConfig::default(),
    );
    assert_eq!(step.heart_rate, Some(StepTarget::Steady { value: 0.8 }));
    assert_eq!(step.cadence, Some(90.0));
    assert_eq!(step.step_type, StepType::Active);
    assert_eq!(step.duration, step.duration_seconds);
}

#[test]
fn test_normalization_is_idempotent() {
    let config = StructuredWorkoutConfig::default();
    let raw = json!([
        {"text": "Easy spin", "duration": 900, "warmup": true,
         "power": {"start": 45, "end": 65, "units": "%ftp"}},
        {"reps": 3, "steps": [
            {"text": "On", "duration": 300, "power": {"value": 105, "units": "%ftp"}, "cadence": 95},
            {"text": "Off", "duration": 180, "power": {"value": 0.5}}
        ]},
        {"duration": 600, "cooldown": true, "hr": {"value": 65, "units": "%lthr"}}
    ]);

    let first = normalize_steps(&raw, &config);
    let serialized = serde_json::to_value(&first).unwrap();
    let second = normalize_steps(&serialized, &config);
    assert_eq!(first, second);

    let text = serialized.to_string();
    assert!(!text.contains("units"));
    assert!(!text.contains('%'));
    assert_eq!(serialized[0]["type"], "Warmup");
    assert_eq!(serialized[0]["durationSeconds"], 900.0);
    assert_eq!(serialized[2]["type"], "Cooldown");
}

#[test]
fn test_rest_threshold_is_configurable() {
    let step = json!({"duration": 120, "power": {"value": 65, "units": "%ftp"}});
    let default = normalize_step(&step, &StructuredWorkoutConfig::default());
    assert_eq!(default.step_type, StepType::Active);

    let strict = StructuredWorkoutConfig {
        rest_ratio_threshold: 0.7,
    };
    assert_eq!(normalize_step(&step, &strict).step_type, StepType::Rest);
}

#[test]
fn test_non_list_steps_yield_nothing() {
    assert!(normalize_steps(&json!({"duration": 60}), &StructuredWorkoutConfig::default()).is_empty());
}
