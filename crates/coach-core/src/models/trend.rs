// ABOUTME: Daily fitness/fatigue trend point and overall trend direction
// ABOUTME: tsb is always ctl minus atl
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of the load trend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Calendar day
    pub date: NaiveDate,
    /// Chronic training load (fitness)
    pub ctl: f64,
    /// Acute training load (fatigue)
    pub atl: f64,
    /// Training stress balance (form)
    pub tsb: f64,
}

impl TrendPoint {
    /// Build a point, deriving `tsb`
    #[must_use]
    pub fn new(date: NaiveDate, ctl: f64, atl: f64) -> Self {
        Self {
            date,
            ctl,
            atl,
            tsb: ctl - atl,
        }
    }
}

/// Direction of fitness over a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// CTL rose over the range
    Increasing,
    /// CTL fell over the range
    Decreasing,
    /// CTL held within tolerance
    Stable,
}
