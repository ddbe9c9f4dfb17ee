// ABOUTME: Optimal running cadence from speed and runner anthropometrics
// ABOUTME: Regression on speed, adjusted for leg ratio or height and the runner's goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use coach_core::constants::cadence::{
    ANTHROPOMETRIC_ADJUSTMENT_SPM, INJURY_PREVENTION_MULTIPLIER, LONG_LEG_RATIO,
    LOW_CADENCE_INCREASE_MAX, LOW_CADENCE_INCREASE_MIN, OPTIMAL_RANGE_HALF_WIDTH_SPM,
    REGRESSION_INTERCEPT, REGRESSION_SLOPE, SHORT_HEIGHT_CM, SHORT_LEG_RATIO, TALL_HEIGHT_CM,
};
use serde::{Deserialize, Serialize};

/// What the runner is optimising cadence for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CadenceGoal {
    /// Cadence for running economy
    #[default]
    Performance,
    /// Higher cadence to reduce impact loading
    InjuryPrevention,
}

/// Anthropometrics used to adjust the regression
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RunnerProfile {
    /// Standing height (cm)
    pub height_cm: Option<f64>,
    /// Leg length (cm)
    pub leg_length_cm: Option<f64>,
    /// Runner goal
    pub goal: CadenceGoal,
}

/// Inclusive cadence range (steps per minute)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CadenceRange {
    /// Lower bound
    pub min: i32,
    /// Upper bound
    pub max: i32,
}

/// Current cadence relative to the optimal range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CadenceStatus {
    /// Below the range
    Low,
    /// Within the range
    Optimal,
    /// Above the range
    High,
}

/// Cadence target for a runner at a given speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CadenceRecommendation {
    /// Optimal cadence (spm)
    pub optimal_cadence: i32,
    /// Optimal range around it
    pub optimal_range: CadenceRange,
    /// Status of the current cadence, when one was given
    pub status: Option<CadenceStatus>,
    /// Gradual 3-5% increase target when the current cadence is low
    pub suggested_range: Option<CadenceRange>,
}

fn anthropometric_adjustment(profile: &RunnerProfile) -> f64 {
    match (profile.height_cm, profile.leg_length_cm) {
        (Some(height), Some(leg)) if height > 0.0 => {
            let ratio = leg / height;
            if ratio > LONG_LEG_RATIO {
                -ANTHROPOMETRIC_ADJUSTMENT_SPM
            } else if ratio < SHORT_LEG_RATIO {
                ANTHROPOMETRIC_ADJUSTMENT_SPM
            } else {
                0.0
            }
        }
        (Some(height), _) if height > TALL_HEIGHT_CM => -ANTHROPOMETRIC_ADJUSTMENT_SPM,
        (Some(height), _) if height > 0.0 && height < SHORT_HEIGHT_CM => {
            ANTHROPOMETRIC_ADJUSTMENT_SPM
        }
        _ => 0.0,
    }
}

/// Recommend a cadence for running at `speed_kmh`
///
/// `124.4 + 3.83 x speed`, then the leg-ratio adjustment when leg length is
/// known (height otherwise), then the injury-prevention multiplier, rounded.
#[must_use]
pub fn optimal_cadence(
    speed_kmh: f64,
    profile: &RunnerProfile,
    current_cadence: Option<f64>,
) -> CadenceRecommendation {
    let mut cadence = REGRESSION_SLOPE.mul_add(speed_kmh, REGRESSION_INTERCEPT);
    cadence += anthropometric_adjustment(profile);
    if profile.goal == CadenceGoal::InjuryPrevention {
        cadence *= INJURY_PREVENTION_MULTIPLIER;
    }

    let optimal_cadence = cadence.round() as i32;
    let optimal_range = CadenceRange {
        min: optimal_cadence - OPTIMAL_RANGE_HALF_WIDTH_SPM,
        max: optimal_cadence + OPTIMAL_RANGE_HALF_WIDTH_SPM,
    };

    let status = current_cadence.map(|current| {
        if current < f64::from(optimal_range.min) {
            CadenceStatus::Low
        } else if current > f64::from(optimal_range.max) {
            CadenceStatus::High
        } else {
            CadenceStatus::Optimal
        }
    });

    let suggested_range = match (status, current_cadence) {
        (Some(CadenceStatus::Low), Some(current)) => Some(CadenceRange {
            min: (current * (1.0 + LOW_CADENCE_INCREASE_MIN)).round() as i32,
            max: (current * (1.0 + LOW_CADENCE_INCREASE_MAX)).round() as i32,
        }),
        _ => None,
    };

    CadenceRecommendation {
        optimal_cadence,
        optimal_range,
        status,
        suggested_range,
    }
}
