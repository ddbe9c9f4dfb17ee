// ABOUTME: Converts subjective wellness values from provider scales to canonical ranges
// ABOUTME: Sleep score becomes 0-100 and readiness becomes 1-10, rounded half away from zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

//! Wellness scale normalization
//!
//! Providers report sleep and readiness on three different scales:
//!
//! | scale        | range  |
//! |--------------|--------|
//! | `STANDARD`   | 0-100  |
//! | `TEN_POINT`  | 1-10   |
//! | `POLAR`      | 1-6    |
//!
//! `f64::round` rounds half away from zero, which is the rounding used here.

use coach_core::constants::wellness::{
    POLAR_SCALE_MAX, READINESS_MAX, READINESS_MIN, SLEEP_SCORE_MAX, SLEEP_SCORE_MIN,
};
use coach_core::models::WellnessScale;

/// Convert a sleep score to the canonical 0-100 scale
///
/// The result is clamped, so an out-of-range `STANDARD` value of 110 becomes 100.
#[must_use]
pub fn normalize_sleep_score(value: f64, scale: WellnessScale) -> i32 {
    let scaled = match scale {
        WellnessScale::Standard => value,
        WellnessScale::TenPoint => value * 10.0,
        WellnessScale::Polar => value / POLAR_SCALE_MAX * 100.0,
    };
    (scaled.round() as i32).clamp(SLEEP_SCORE_MIN, SLEEP_SCORE_MAX)
}

/// Convert a readiness value to the 1-10 scale
///
/// Not clamped; callers building canonical records use
/// [`clamp_readiness`] afterwards.
#[must_use]
pub fn normalize_readiness(value: f64, scale: WellnessScale) -> i32 {
    let scaled = match scale {
        WellnessScale::TenPoint => value,
        WellnessScale::Polar => value / POLAR_SCALE_MAX * 10.0,
        WellnessScale::Standard => value / 10.0,
    };
    scaled.round() as i32
}

/// Clamp a normalized readiness value into the canonical 1-10 range
#[must_use]
pub fn clamp_readiness(value: i32) -> i32 {
    value.clamp(READINESS_MIN, READINESS_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_score_scales() {
        assert_eq!(normalize_sleep_score(8.5, WellnessScale::TenPoint), 85);
        assert_eq!(normalize_sleep_score(3.5, WellnessScale::Polar), 58);
        assert_eq!(normalize_sleep_score(110.0, WellnessScale::Standard), 100);
        assert_eq!(normalize_sleep_score(-4.0, WellnessScale::Standard), 0);
    }

    #[test]
    fn test_readiness_scales() {
        assert_eq!(normalize_readiness(3.5, WellnessScale::Polar), 6);
        assert_eq!(normalize_readiness(85.0, WellnessScale::Standard), 9);
        assert_eq!(normalize_readiness(8.0, WellnessScale::TenPoint), 8);
    }

    #[test]
    fn test_readiness_not_clamped_until_asked() {
        assert_eq!(normalize_readiness(0.0, WellnessScale::Standard), 0);
        assert_eq!(clamp_readiness(0), 1);
        assert_eq!(clamp_readiness(12), 10);
    }
}
