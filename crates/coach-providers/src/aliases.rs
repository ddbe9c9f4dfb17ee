// ABOUTME: Per-field ordered alias tables mapping provider keys onto canonical fields
// ABOUTME: First non-null alias wins; an alias may carry a unit scale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

//! # Field Alias Tables
//!
//! Supporting another provider means adding its key names here. Keys are
//! tried in order and the first one holding a non-null, parseable value is
//! used. Keys may be dotted paths (`workout_doc.steps`) into nested objects.

use crate::conversions::{value_as_bool, value_as_f64, value_as_string};
use serde_json::Value;

/// One provider key for a canonical field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldAlias {
    /// Provider key, optionally a dotted path
    pub key: &'static str,
    /// Multiplier converting the provider unit into the canonical unit
    pub scale: f64,
}

const fn alias(key: &'static str) -> FieldAlias {
    FieldAlias { key, scale: 1.0 }
}

const fn scaled(key: &'static str, scale: f64) -> FieldAlias {
    FieldAlias { key, scale }
}

/// Resolve a possibly dotted key against a payload
#[must_use]
pub fn lookup<'a>(payload: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.')
        .try_fold(payload, |node, part| node.get(part))
        .filter(|value| !value.is_null())
}

/// First alias holding a number, scaled into the canonical unit
#[must_use]
pub fn first_f64(payload: &Value, aliases: &[FieldAlias]) -> Option<f64> {
    aliases.iter().find_map(|alias| {
        lookup(payload, alias.key)
            .and_then(value_as_f64)
            .map(|value| value * alias.scale)
    })
}

/// First alias holding text
#[must_use]
pub fn first_string(payload: &Value, aliases: &[FieldAlias]) -> Option<String> {
    aliases
        .iter()
        .find_map(|alias| lookup(payload, alias.key).and_then(value_as_string))
}

/// First alias holding a boolean
#[must_use]
pub fn first_bool(payload: &Value, aliases: &[FieldAlias]) -> Option<bool> {
    aliases
        .iter()
        .find_map(|alias| lookup(payload, alias.key).and_then(value_as_bool))
}

/// First alias holding any non-null value
#[must_use]
pub fn first_value<'a>(payload: &'a Value, aliases: &[FieldAlias]) -> Option<&'a Value> {
    aliases.iter().find_map(|alias| lookup(payload, alias.key))
}

/// Aliases shared by activities and planned sessions
pub mod common {
    use super::{alias, FieldAlias};

    /// Provider identifier
    pub const EXTERNAL_ID: &[FieldAlias] = &[alias("id"), alias("activity_id"), alias("activityId")];
    /// Display name
    pub const TITLE: &[FieldAlias] = &[alias("name"), alias("title"), alias("activityName")];
    /// Sport string
    pub const SPORT: &[FieldAlias] = &[
        alias("type"),
        alias("sport_type"),
        alias("sportType"),
        alias("activity_type"),
        alias("activityType.typeKey"),
    ];
    /// Local wall-clock start
    pub const START_LOCAL: &[FieldAlias] = &[
        alias("start_date_local"),
        alias("startDateLocal"),
        alias("start_time_local"),
        alias("startTimeLocal"),
    ];
    /// Distance (m)
    pub const DISTANCE: &[FieldAlias] = &[
        alias("distance"),
        alias("distance_meters"),
        alias("distanceInMeters"),
    ];
    /// Training stress score
    pub const TSS: &[FieldAlias] = &[
        alias("icu_training_load"),
        alias("tss"),
        alias("training_stress_score"),
        alias("trainingStressScore"),
    ];
    /// Intensity factor (ratio or percent)
    pub const INTENSITY_FACTOR: &[FieldAlias] = &[
        alias("icu_intensity"),
        alias("intensity_factor"),
        alias("intensityFactor"),
    ];
}

/// Completed activity aliases
pub mod activity {
    use super::{alias, FieldAlias};

    /// Explicit UTC start instant
    pub const START_UTC: &[FieldAlias] = &[
        alias("start_date"),
        alias("startDate"),
        alias("start_time_utc"),
        alias("startTimeGMT"),
    ];
    /// Moving time (s)
    pub const MOVING_TIME: &[FieldAlias] = &[
        alias("moving_time"),
        alias("movingTime"),
        alias("movingDuration"),
    ];
    /// Elapsed time (s)
    pub const ELAPSED_TIME: &[FieldAlias] = &[
        alias("elapsed_time"),
        alias("elapsedTime"),
        alias("elapsedDuration"),
    ];
    /// Generic duration (s)
    pub const DURATION: &[FieldAlias] = &[
        alias("duration"),
        alias("durationSeconds"),
        alias("duration_seconds"),
    ];
    /// Elevation gain (m)
    pub const ELEVATION_GAIN: &[FieldAlias] = &[
        alias("total_elevation_gain"),
        alias("elevationGain"),
        alias("elevation_gain"),
    ];
    /// Average speed (m/s)
    pub const AVERAGE_SPEED: &[FieldAlias] = &[
        alias("average_speed"),
        alias("averageSpeed"),
        alias("avgSpeed"),
    ];
    /// Max speed (m/s)
    pub const MAX_SPEED: &[FieldAlias] = &[alias("max_speed"), alias("maxSpeed")];
    /// Average power (W)
    pub const AVERAGE_POWER: &[FieldAlias] = &[
        alias("icu_average_watts"),
        alias("average_watts"),
        alias("averagePower"),
        alias("avgPower"),
    ];
    /// Normalized power (W)
    pub const NORMALIZED_POWER: &[FieldAlias] = &[
        alias("normalized_power"),
        alias("normPower"),
        alias("icu_normalized_watts"),
    ];
    /// Weighted average power (W)
    pub const WEIGHTED_POWER: &[FieldAlias] = &[
        alias("icu_weighted_avg_watts"),
        alias("weighted_average_watts"),
    ];
    /// Max power (W)
    pub const MAX_POWER: &[FieldAlias] = &[alias("max_watts"), alias("maxPower")];
    /// Average heart rate (bpm)
    pub const AVERAGE_HR: &[FieldAlias] = &[
        alias("average_heartrate"),
        alias("averageHR"),
        alias("average_heart_rate"),
        alias("avgHr"),
    ];
    /// Max heart rate (bpm)
    pub const MAX_HR: &[FieldAlias] = &[
        alias("max_heartrate"),
        alias("maxHR"),
        alias("max_heart_rate"),
    ];
    /// Average cadence
    pub const AVERAGE_CADENCE: &[FieldAlias] = &[
        alias("average_cadence"),
        alias("averageRunningCadenceInStepsPerMinute"),
        alias("avgCadence"),
    ];
    /// Max cadence
    pub const MAX_CADENCE: &[FieldAlias] = &[alias("max_cadence"), alias("maxCadence")];
    /// Energy (kcal)
    pub const CALORIES: &[FieldAlias] = &[alias("calories"), alias("activeKilocalories")];
    /// Work (kJ)
    pub const KILOJOULES: &[FieldAlias] = &[alias("kilojoules"), alias("icu_joules")];
    /// TRIMP
    pub const TRIMP: &[FieldAlias] = &[alias("trimp"), alias("icu_trimp")];
    /// Planned stress of the paired session
    pub const PLANNED_TSS: &[FieldAlias] = &[alias("planned_tss"), alias("plannedTss")];
    /// Fitness snapshot
    pub const CTL: &[FieldAlias] = &[alias("icu_ctl"), alias("ctl")];
    /// Fatigue snapshot
    pub const ATL: &[FieldAlias] = &[alias("icu_atl"), alias("atl")];
    /// FTP at the time of the activity (W)
    pub const FTP: &[FieldAlias] = &[alias("icu_ftp"), alias("ftp")];
    /// Threshold heart rate (bpm)
    pub const LTHR: &[FieldAlias] = &[alias("lthr"), alias("icu_lthr")];
    /// Perceived exertion
    pub const RPE: &[FieldAlias] = &[
        alias("perceived_exertion"),
        alias("icu_rpe"),
        alias("rpe"),
    ];
    /// Feel rating
    pub const FEEL: &[FieldAlias] = &[alias("feel")];
    /// Recording device
    pub const DEVICE: &[FieldAlias] = &[alias("device_name"), alias("deviceName")];
}

/// Planned session aliases
pub mod planned {
    use super::{alias, FieldAlias};

    /// Description text
    pub const DESCRIPTION: &[FieldAlias] = &[alias("description"), alias("notes")];
    /// Planned duration (s)
    pub const DURATION: &[FieldAlias] = &[
        alias("moving_time"),
        alias("duration"),
        alias("durationSeconds"),
        alias("plannedDuration"),
    ];
    /// Structured workout document
    pub const STRUCTURED: &[FieldAlias] = &[
        alias("workout_doc.steps"),
        alias("structuredWorkout"),
        alias("structured_workout"),
        alias("steps"),
    ];
    /// Completion flag
    pub const COMPLETED: &[FieldAlias] = &[alias("completed"), alias("isCompleted")];
    /// Linked activity, implying completion
    pub const PAIRED_ACTIVITY: &[FieldAlias] = &[
        alias("paired_activity_id"),
        alias("pairedActivityId"),
    ];
}

/// Wellness day aliases
pub mod wellness {
    use super::{alias, scaled, FieldAlias};

    /// Seconds to hours
    const HOURS_PER_SECOND: f64 = 1.0 / 3600.0;

    /// Calendar day of the record
    pub const DATE: &[FieldAlias] = &[alias("date"), alias("calendarDate"), alias("id")];
    /// Heart rate variability (ms)
    pub const HRV: &[FieldAlias] = &[alias("hrv"), alias("hrvRMSSD"), alias("hrv_rmssd")];
    /// Resting heart rate (bpm)
    pub const RESTING_HR: &[FieldAlias] = &[
        alias("restingHR"),
        alias("resting_hr"),
        alias("restingHeartRate"),
    ];
    /// Sleep duration (h)
    pub const SLEEP_HOURS: &[FieldAlias] = &[
        alias("sleepHours"),
        alias("sleep_hours"),
        scaled("sleepSecs", HOURS_PER_SECOND),
        scaled("sleep_seconds", HOURS_PER_SECOND),
    ];
    /// Sleep score in the provider's scale
    pub const SLEEP_SCORE: &[FieldAlias] = &[alias("sleepScore"), alias("sleep_score")];
    /// Readiness in the provider's scale
    pub const READINESS: &[FieldAlias] = &[
        alias("readiness"),
        alias("readinessScore"),
        alias("readiness_score"),
    ];
    /// Fitness snapshot
    pub const CTL: &[FieldAlias] = &[alias("ctl"), alias("icu_ctl")];
    /// Fatigue snapshot
    pub const ATL: &[FieldAlias] = &[alias("atl"), alias("icu_atl")];
    /// Body weight (kg)
    pub const WEIGHT: &[FieldAlias] = &[alias("weight"), alias("weight_kg")];
    /// Sleep quality rating
    pub const SLEEP_QUALITY: &[FieldAlias] = &[alias("sleepQuality"), alias("sleep_quality")];
    /// Soreness rating
    pub const SORENESS: &[FieldAlias] = &[alias("soreness")];
    /// Fatigue rating
    pub const FATIGUE: &[FieldAlias] = &[alias("fatigue")];
    /// Stress rating
    pub const STRESS: &[FieldAlias] = &[alias("stress")];
    /// Mood rating
    pub const MOOD: &[FieldAlias] = &[alias("mood")];
    /// Motivation rating
    pub const MOTIVATION: &[FieldAlias] = &[alias("motivation")];
    /// Injury rating
    pub const INJURY: &[FieldAlias] = &[alias("injury")];
}
