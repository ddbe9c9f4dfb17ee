// ABOUTME: Completed activity normalization with instant-scoped dates
// ABOUTME: Resolves duration, power, heart rate and training load fields through aliases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use crate::aliases::{activity, common, first_f64, first_string, first_value, FieldAlias};
use crate::conversions::{f64_to_u64, reconcile_intensity_factor};
use crate::timestamps::{parse_instant, parse_local_day};
use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use coach_core::errors::{AppError, AppResult};
use coach_core::models::{SportType, Workout};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

/// Start instant: explicit UTC field, else the local timestamp read as UTC
///
/// An unparseable UTC field falls through to the local field.
fn start_instant(payload: &Value) -> AppResult<DateTime<Utc>> {
    let utc_raw = first_value(payload, activity::START_UTC);
    if let Some(instant) = utc_raw.and_then(parse_instant) {
        return Ok(instant);
    }
    let Some(raw) = first_value(payload, common::START_LOCAL) else {
        return Err(utc_raw.map_or_else(
            || AppError::missing_field("start_date"),
            |raw| AppError::invalid_format(format!("Unparseable start instant: {raw}")),
        ));
    };
    if let Some(bad) = utc_raw {
        debug!(utc = %bad, "UTC start unparseable, using local start");
    }
    parse_instant(raw)
        .or_else(|| {
            parse_local_day(raw).map(|(day, time)| {
                Utc.from_utc_datetime(&day.and_time(time.unwrap_or(NaiveTime::MIN)))
            })
        })
        .ok_or_else(|| AppError::invalid_format(format!("Unparseable local start: {raw}")))
}

fn seconds(payload: &Value, aliases: &[FieldAlias]) -> Option<u64> {
    first_f64(payload, aliases).map(f64_to_u64)
}

pub(super) fn normalize(
    payload: &Value,
    user_id: Uuid,
    source: &str,
) -> AppResult<Workout> {
    let external_id = first_string(payload, common::EXTERNAL_ID)
        .ok_or_else(|| AppError::missing_field("id"))?;
    let date = start_instant(payload).map_err(|e| e.with_resource_id(external_id.clone()))?;

    let elapsed_seconds = seconds(payload, activity::ELAPSED_TIME);
    let duration_seconds = seconds(payload, activity::MOVING_TIME)
        .or(elapsed_seconds)
        .or_else(|| seconds(payload, activity::DURATION));

    let workout = Workout {
        title: first_string(payload, common::TITLE),
        sport_type: first_string(payload, common::SPORT)
            .map_or_else(SportType::default, |s| SportType::from_provider_string(&s)),
        date,
        duration_seconds,
        elapsed_seconds,
        distance_meters: first_f64(payload, common::DISTANCE),
        elevation_gain: first_f64(payload, activity::ELEVATION_GAIN),
        average_speed: first_f64(payload, activity::AVERAGE_SPEED),
        max_speed: first_f64(payload, activity::MAX_SPEED),
        average_power: first_f64(payload, activity::AVERAGE_POWER),
        normalized_power: first_f64(payload, activity::NORMALIZED_POWER),
        weighted_average_power: first_f64(payload, activity::WEIGHTED_POWER),
        max_power: first_f64(payload, activity::MAX_POWER),
        average_heart_rate: first_f64(payload, activity::AVERAGE_HR),
        max_heart_rate: first_f64(payload, activity::MAX_HR),
        average_cadence: first_f64(payload, activity::AVERAGE_CADENCE),
        max_cadence: first_f64(payload, activity::MAX_CADENCE),
        calories: first_f64(payload, activity::CALORIES),
        kilojoules: first_f64(payload, activity::KILOJOULES),
        tss: first_f64(payload, common::TSS),
        trimp: first_f64(payload, activity::TRIMP),
        planned_tss: first_f64(payload, activity::PLANNED_TSS),
        intensity_factor: first_f64(payload, common::INTENSITY_FACTOR)
            .map(reconcile_intensity_factor),
        ctl: first_f64(payload, activity::CTL),
        atl: first_f64(payload, activity::ATL),
        ftp: first_f64(payload, activity::FTP),
        lthr: first_f64(payload, activity::LTHR),
        rpe: first_f64(payload, activity::RPE),
        feel: first_f64(payload, activity::FEEL),
        device_name: first_string(payload, activity::DEVICE),
        raw: payload.clone(),
        external_id,
        source: source.to_owned(),
        user_id,
    };

    debug!(
        external_id = %workout.external_id,
        source,
        sport = workout.sport_type.key(),
        "Normalized activity"
    );
    Ok(workout)
}
