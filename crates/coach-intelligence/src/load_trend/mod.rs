// ABOUTME: Training load analytics over a date range of canonical records
// ABOUTME: Stress resolution, daily trend, sport breakdown, intensity mix and summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

//! # Load Trend Analyzer
//!
//! Aggregates completed workouts, wellness days and per-workout zone
//! outputs into the analytics payload. CTL/ATL are never recomputed here:
//! they are the provider's own snapshots, merged per calendar day.
//!
//! `today` is an explicit input so identical inputs always produce
//! identical output.

mod breakdown;
mod status;
mod stress;
mod summary;
mod trend;

pub use breakdown::{
    activity_breakdown, intensity_distribution, IntensityDistribution, SportBreakdown,
};
pub use status::{
    check_overtraining_risk, interpret_tsb, OvertrainingRisk, RiskFactor, RiskLevel,
    TrainingStatus,
};
pub use stress::{resolve_duration_seconds, resolve_intensity_factor, resolve_tss};
pub use summary::{summarize_wellness, TrainingSummary, WellnessSummary};
pub use trend::{apply_readiness, build_trend, trend_direction, DateRange};

use crate::config::{IntensityConfig, LoadTrendConfig};
use crate::zones::{merge_distributions, WorkoutZones, ZoneDistribution};
use chrono::NaiveDate;
use coach_core::models::{PlannedWorkout, TrendPoint, WellnessRecord, Workout};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Records to analyze
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsInput<'a> {
    /// Completed workouts (filtered to the range by the analyzer)
    pub workouts: &'a [Workout],
    /// Wellness days (filtered to the range by the analyzer)
    pub wellness: &'a [WellnessRecord],
    /// Planned sessions, used in readiness mode
    pub planned: &'a [PlannedWorkout],
    /// Per-workout zone outputs to merge
    pub zones: &'a [WorkoutZones],
    /// Calendar range
    pub range: DateRange,
    /// Set to today's date to enable readiness mode
    pub readiness_today: Option<NaiveDate>,
}

/// Output payload handed to presentation collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsPayload {
    /// Training context summary
    pub summary: TrainingSummary,
    /// One point per day with a load snapshot
    pub load_trend: Vec<TrendPoint>,
    /// Totals per sport key
    pub activity_breakdown: BTreeMap<String, SportBreakdown>,
    /// Share of time per intensity bucket
    pub intensity_distribution: IntensityDistribution,
}

/// Builds analytics payloads
#[derive(Debug, Clone, Default)]
pub struct LoadTrendAnalyzer {
    load: LoadTrendConfig,
    intensity: IntensityConfig,
}

impl LoadTrendAnalyzer {
    /// Create an analyzer with the given settings
    #[must_use]
    pub const fn new(load: LoadTrendConfig, intensity: IntensityConfig) -> Self {
        Self { load, intensity }
    }

    /// Build the full payload for a range
    #[must_use]
    pub fn analyze(&self, input: &AnalyticsInput<'_>) -> AnalyticsPayload {
        let workouts: Vec<Workout> = input
            .workouts
            .iter()
            .filter(|w| input.range.contains(w.day()))
            .cloned()
            .collect();
        let wellness: Vec<WellnessRecord> = input
            .wellness
            .iter()
            .filter(|r| input.range.contains(r.day()))
            .cloned()
            .collect();

        let mut load_trend = build_trend(&workouts, &wellness, input.range);
        let direction = trend_direction(&load_trend, &self.load);
        let adjusted = input
            .readiness_today
            .and_then(|today| apply_readiness(&mut load_trend, input.planned, today));

        let mut summary = TrainingSummary::build(&workouts, &wellness, &load_trend, direction);
        if let Some(point) = adjusted {
            summary.current = Some(point);
            summary.training_status = Some(interpret_tsb(point.tsb));
            summary.overtraining_risk = Some(check_overtraining_risk(&point));
            summary.readiness_adjusted = true;
        }
        summary.heart_rate_zones =
            merged(input.zones.iter().filter_map(|z| z.heart_rate.as_ref()));
        summary.power_zones = merged(input.zones.iter().filter_map(|z| z.power.as_ref()));

        debug!(
            workouts = workouts.len(),
            wellness_days = wellness.len(),
            trend_points = load_trend.len(),
            "Built analytics payload"
        );

        AnalyticsPayload {
            summary,
            activity_breakdown: activity_breakdown(&workouts),
            intensity_distribution: intensity_distribution(&workouts, &self.intensity),
            load_trend,
        }
    }
}

fn merged<'a>(
    distributions: impl Iterator<Item = &'a ZoneDistribution>,
) -> Option<ZoneDistribution> {
    let collected: Vec<_> = distributions.collect();
    (!collected.is_empty()).then(|| merge_distributions(collected))
}
