// ABOUTME: Canonical completed-workout and planned-workout records
// ABOUTME: Completed workouts are instant-scoped, planned sessions are day-scoped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{SportType, StructuredStep};

/// A completed activity in canonical shape
///
/// `date` is the exact UTC instant the activity started. The provider payload
/// is retained in `raw` so records can be re-normalized later.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Provider-side identifier, also the key of the workout's streams
    pub external_id: String,
    /// Provider the record came from
    pub source: String,
    /// Owning user
    pub user_id: Uuid,
    /// Activity title
    pub title: Option<String>,
    /// Exact start instant (UTC)
    pub date: DateTime<Utc>,
    /// Canonical sport type
    #[serde(rename = "type")]
    pub sport_type: SportType,
    /// Moving duration in seconds (falls back to elapsed, then generic duration)
    pub duration_seconds: Option<u64>,
    /// Elapsed (wall clock) duration in seconds
    pub elapsed_seconds: Option<u64>,
    /// Distance in meters
    pub distance_meters: Option<f64>,
    /// Elevation gain in meters
    pub elevation_gain: Option<f64>,
    /// Average speed (m/s)
    pub average_speed: Option<f64>,
    /// Maximum speed (m/s)
    pub max_speed: Option<f64>,
    /// Average power (W)
    pub average_power: Option<f64>,
    /// Normalized power (W)
    pub normalized_power: Option<f64>,
    /// Weighted average power (W)
    pub weighted_average_power: Option<f64>,
    /// Maximum power (W)
    pub max_power: Option<f64>,
    /// Average heart rate (bpm)
    pub average_heart_rate: Option<f64>,
    /// Maximum heart rate (bpm)
    pub max_heart_rate: Option<f64>,
    /// Average cadence (rpm or spm)
    pub average_cadence: Option<f64>,
    /// Maximum cadence
    pub max_cadence: Option<f64>,
    /// Energy expenditure (kcal)
    pub calories: Option<f64>,
    /// Mechanical work (kJ)
    pub kilojoules: Option<f64>,
    /// Training stress score
    pub tss: Option<f64>,
    /// Heart-rate based training impulse
    pub trimp: Option<f64>,
    /// TSS of the planned session this workout fulfilled
    pub planned_tss: Option<f64>,
    /// Intensity factor as a ratio (never a percentage)
    pub intensity_factor: Option<f64>,
    /// Chronic training load snapshot after this workout
    pub ctl: Option<f64>,
    /// Acute training load snapshot after this workout
    pub atl: Option<f64>,
    /// FTP in effect for this workout (W)
    pub ftp: Option<f64>,
    /// LTHR in effect for this workout (bpm)
    pub lthr: Option<f64>,
    /// Perceived exertion
    pub rpe: Option<f64>,
    /// Subjective feel
    pub feel: Option<f64>,
    /// Recording device
    pub device_name: Option<String>,
    /// Provider payload as received
    pub raw: serde_json::Value,
}

impl Workout {
    /// Calendar day of the workout in UTC
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Whether any heart-rate summary is present
    #[must_use]
    pub const fn has_heart_rate(&self) -> bool {
        self.average_heart_rate.is_some() || self.max_heart_rate.is_some()
    }

    /// Whether any power summary is present
    #[must_use]
    pub const fn has_power(&self) -> bool {
        self.average_power.is_some()
            || self.normalized_power.is_some()
            || self.weighted_average_power.is_some()
            || self.max_power.is_some()
    }

    /// Whether a usable average speed is present
    #[must_use]
    pub fn has_speed(&self) -> bool {
        self.average_speed.is_some_and(|speed| speed > 0.0)
    }
}

/// A scheduled session in canonical shape
///
/// `date` is always UTC midnight of the local calendar day the session is
/// scheduled for. Any clock time lives in `start_time_local`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedWorkout {
    /// Provider-side identifier
    pub external_id: Option<String>,
    /// Provider the record came from
    pub source: String,
    /// Owning user
    pub user_id: Uuid,
    /// Session title
    pub title: Option<String>,
    /// Free-text description
    pub description: Option<String>,
    /// UTC midnight of the scheduled calendar day
    pub date: DateTime<Utc>,
    /// Local clock time the session is scheduled for
    pub start_time_local: Option<NaiveTime>,
    /// Canonical sport type
    #[serde(rename = "type")]
    pub sport_type: SportType,
    /// Planned duration in seconds
    pub planned_duration_seconds: Option<u64>,
    /// Planned distance in meters
    pub planned_distance_meters: Option<f64>,
    /// Planned training stress
    pub planned_tss: Option<f64>,
    /// Planned intensity factor (ratio)
    pub planned_intensity_factor: Option<f64>,
    /// Normalized step list
    pub structured_workout: Option<Vec<StructuredStep>>,
    /// Whether a completed workout has been paired with this session
    pub completed: bool,
    /// Provider payload as received
    pub raw: serde_json::Value,
}

impl PlannedWorkout {
    /// Scheduled calendar day
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}
