// ABOUTME: Training context summary over a date range
// ABOUTME: Totals, current loads, status, risk flags, wellness averages and merged zones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use super::status::{check_overtraining_risk, interpret_tsb, OvertrainingRisk, TrainingStatus};
use super::stress::{resolve_duration_seconds, resolve_tss};
use crate::zones::ZoneDistribution;
use coach_core::models::{TrendDirection, TrendPoint, WellnessRecord, Workout};
use serde::{Deserialize, Serialize};

/// Averages of the wellness days in range
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessSummary {
    /// Number of wellness days
    pub days: u32,
    /// Mean HRV (ms)
    pub average_hrv: Option<f64>,
    /// Mean resting heart rate (bpm)
    pub average_resting_hr: Option<f64>,
    /// Mean sleep duration (h)
    pub average_sleep_hours: Option<f64>,
    /// Mean canonical sleep score
    pub average_sleep_score: Option<f64>,
    /// Mean canonical readiness
    pub average_readiness: Option<f64>,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0_u32), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / f64::from(count))
}

/// Average every wellness field over the given records
#[must_use]
pub fn summarize_wellness(records: &[WellnessRecord]) -> WellnessSummary {
    WellnessSummary {
        days: u32::try_from(records.len()).unwrap_or(u32::MAX),
        average_hrv: mean(records.iter().filter_map(|r| r.hrv)),
        average_resting_hr: mean(records.iter().filter_map(|r| r.resting_hr)),
        average_sleep_hours: mean(records.iter().filter_map(|r| r.sleep_hours)),
        average_sleep_score: mean(records.iter().filter_map(|r| r.sleep_score.map(f64::from))),
        average_readiness: mean(records.iter().filter_map(|r| r.readiness.map(f64::from))),
    }
}

/// Training context over a range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSummary {
    /// Workouts in range
    pub total_workouts: u32,
    /// Summed duration (s)
    pub total_duration_seconds: u64,
    /// Summed distance (m)
    pub total_distance_meters: f64,
    /// Summed resolved training stress
    pub total_tss: f64,
    /// Mean resolved training stress
    pub average_tss: f64,
    /// Latest trend point, after any readiness adjustment
    pub current: Option<TrendPoint>,
    /// Direction of CTL over the range
    pub trend: TrendDirection,
    /// Status from the latest TSB
    pub training_status: Option<TrainingStatus>,
    /// Overtraining flags from the latest point
    pub overtraining_risk: Option<OvertrainingRisk>,
    /// Whether `current` was adjusted for today's planned sessions
    pub readiness_adjusted: bool,
    /// Wellness averages
    pub wellness: WellnessSummary,
    /// Heart-rate zones merged over the range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate_zones: Option<ZoneDistribution>,
    /// Power zones merged over the range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_zones: Option<ZoneDistribution>,
}

impl TrainingSummary {
    /// Build the summary from in-range records and the finished trend
    #[must_use]
    pub fn build(
        workouts: &[Workout],
        wellness: &[WellnessRecord],
        trend: &[TrendPoint],
        direction: TrendDirection,
    ) -> Self {
        let total_workouts = u32::try_from(workouts.len()).unwrap_or(u32::MAX);
        let total_tss: f64 = workouts.iter().map(resolve_tss).sum();
        let current = trend.last().copied();

        Self {
            total_workouts,
            total_duration_seconds: workouts.iter().map(resolve_duration_seconds).sum(),
            total_distance_meters: workouts.iter().filter_map(|w| w.distance_meters).sum(),
            total_tss,
            average_tss: if total_workouts > 0 {
                total_tss / f64::from(total_workouts)
            } else {
                0.0
            },
            current,
            trend: direction,
            training_status: current.map(|point| interpret_tsb(point.tsb)),
            overtraining_risk: current.as_ref().map(check_overtraining_risk),
            readiness_adjusted: false,
            wellness: summarize_wellness(wellness),
            heart_rate_zones: None,
            power_zones: None,
        }
    }
}
