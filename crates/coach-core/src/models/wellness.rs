// ABOUTME: Canonical daily wellness record and subjective scale declarations
// ABOUTME: Normalized sleep score is 0-100, readiness is 1-10
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Source scale of a subjective wellness value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WellnessScale {
    /// 0-100
    #[default]
    Standard,
    /// 1-10
    TenPoint,
    /// Polar's 1-6 scale
    Polar,
}

/// Declared source scales for the subjective fields of one provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WellnessScales {
    /// Scale of the incoming sleep score
    pub sleep_score: WellnessScale,
    /// Scale of the incoming readiness value
    pub readiness: WellnessScale,
}

/// One wellness day in canonical shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessRecord {
    /// Owning user
    pub user_id: Uuid,
    /// Provider the record came from
    pub source: String,
    /// UTC midnight of the wellness day
    pub date: DateTime<Utc>,
    /// Heart rate variability (ms)
    pub hrv: Option<f64>,
    /// Resting heart rate (bpm)
    pub resting_hr: Option<f64>,
    /// Sleep duration in hours
    pub sleep_hours: Option<f64>,
    /// Sleep score on the canonical 0-100 scale
    pub sleep_score: Option<i32>,
    /// Readiness on the canonical 1-10 scale
    pub readiness: Option<i32>,
    /// Chronic training load snapshot
    pub ctl: Option<f64>,
    /// Acute training load snapshot
    pub atl: Option<f64>,
    /// Body weight (kg)
    pub weight_kg: Option<f64>,
    /// Provider's own sleep quality rating, unchanged
    pub sleep_quality: Option<f64>,
    /// Muscle soreness, unchanged
    pub soreness: Option<f64>,
    /// Fatigue, unchanged
    pub fatigue: Option<f64>,
    /// Stress, unchanged
    pub stress: Option<f64>,
    /// Mood, unchanged
    pub mood: Option<f64>,
    /// Motivation, unchanged
    pub motivation: Option<f64>,
    /// Injury status, unchanged
    pub injury: Option<f64>,
    /// Provider payload as received
    pub raw: serde_json::Value,
}

impl WellnessRecord {
    /// Wellness calendar day
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}
