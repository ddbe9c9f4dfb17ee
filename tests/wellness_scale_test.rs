// ABOUTME: Integration tests for subjective wellness scale conversion
// ABOUTME: Sleep score lands on 0-100 and readiness on 1-10 whatever the source scale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use coach_telemetry::intelligence::wellness_scale::{
    clamp_readiness, normalize_readiness, normalize_sleep_score,
};
use coach_telemetry::models::WellnessScale;

#[test]
fn test_sleep_score_conversions() {
    assert_eq!(normalize_sleep_score(8.5, WellnessScale::TenPoint), 85);
    assert_eq!(normalize_sleep_score(3.5, WellnessScale::Polar), 58);
    assert_eq!(normalize_sleep_score(110.0, WellnessScale::Standard), 100);
    assert_eq!(normalize_sleep_score(-4.0, WellnessScale::Standard), 0);
}

#[test]
fn test_readiness_conversions() {
    assert_eq!(normalize_readiness(3.5, WellnessScale::Polar), 6);
    assert_eq!(normalize_readiness(85.0, WellnessScale::Standard), 9);
    assert_eq!(normalize_readiness(8.0, WellnessScale::TenPoint), 8);
}

#[test]
fn test_readiness_clamp() {
    assert_eq!(clamp_readiness(0), 1);
    assert_eq!(clamp_readiness(14), 10);
    assert_eq!(clamp_readiness(7), 7);
}
