// ABOUTME: Daily CTL/ATL/TSB trend merged from workout and wellness snapshots
// ABOUTME: Includes the overall trend label and the readiness-mode adjustment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use crate::config::LoadTrendConfig;
use chrono::NaiveDate;
use coach_core::models::{PlannedWorkout, TrendDirection, TrendPoint, WellnessRecord, Workout};
use std::collections::BTreeMap;

/// Inclusive calendar range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// First day
    pub start: NaiveDate,
    /// Last day
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range, swapping the bounds if given in reverse
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Whether `day` lies in the range
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

/// One trend point per day that has a load snapshot
///
/// The latest workout of the day carrying both `ctl` and `atl` wins; days
/// without one use the wellness snapshot. Days with neither are omitted.
#[must_use]
pub fn build_trend(
    workouts: &[Workout],
    wellness: &[WellnessRecord],
    range: DateRange,
) -> Vec<TrendPoint> {
    let mut from_workouts: BTreeMap<NaiveDate, &Workout> = BTreeMap::new();
    for workout in workouts {
        if workout.ctl.is_none() || workout.atl.is_none() || !range.contains(workout.day()) {
            continue;
        }
        from_workouts
            .entry(workout.day())
            .and_modify(|latest| {
                if workout.date >= latest.date {
                    *latest = workout;
                }
            })
            .or_insert(workout);
    }

    let mut days: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
    for record in wellness {
        if let (Some(ctl), Some(atl)) = (record.ctl, record.atl) {
            if range.contains(record.day()) {
                days.insert(record.day(), (ctl, atl));
            }
        }
    }
    for (day, workout) in from_workouts {
        if let (Some(ctl), Some(atl)) = (workout.ctl, workout.atl) {
            days.insert(day, (ctl, atl));
        }
    }

    days.into_iter()
        .map(|(date, (ctl, atl))| TrendPoint::new(date, ctl, atl))
        .collect()
}

/// Label the trend from the first and last CTL
///
/// A relative change within the configured tolerance is `Stable`. When the
/// first CTL is zero any rise counts as increasing.
#[must_use]
pub fn trend_direction(points: &[TrendPoint], config: &LoadTrendConfig) -> TrendDirection {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return TrendDirection::Stable;
    };
    if first.ctl.abs() < f64::EPSILON {
        return if last.ctl > 0.0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::Stable
        };
    }
    let change = (last.ctl - first.ctl) / first.ctl.abs();
    if change > config.trend_relative_tolerance {
        TrendDirection::Increasing
    } else if change < -config.trend_relative_tolerance {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    }
}

/// Readiness mode: lower today's ATL by the planned stress not yet done
///
/// Only planned sessions on `today` that are not completed count. ATL is
/// floored at zero and TSB recomputed. Returns the adjusted point, if
/// today is in the trend.
pub fn apply_readiness(
    points: &mut [TrendPoint],
    planned: &[PlannedWorkout],
    today: NaiveDate,
) -> Option<TrendPoint> {
    let point = points.iter_mut().find(|point| point.date == today)?;
    let pending: f64 = planned
        .iter()
        .filter(|session| session.day() == today && !session.completed)
        .filter_map(|session| session.planned_tss)
        .sum();
    point.atl = (point.atl - pending).max(0.0);
    point.tsb = point.ctl - point.atl;
    Some(*point)
}
