// ABOUTME: Wellness day normalization with scale conversion and clamping
// ABOUTME: Subjective ratings without a declared scale pass through unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use crate::aliases::{first_f64, first_value, wellness};
use crate::timestamps::{parse_local_day, utc_midnight};
use coach_core::errors::{AppError, AppResult};
use coach_core::models::{WellnessRecord, WellnessScales};
use coach_intelligence::wellness_scale::{
    clamp_readiness, normalize_readiness, normalize_sleep_score,
};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

pub(super) fn normalize(
    payload: &Value,
    user_id: Uuid,
    source: &str,
    scales: WellnessScales,
) -> AppResult<WellnessRecord> {
    let raw_date =
        first_value(payload, wellness::DATE).ok_or_else(|| AppError::missing_field("date"))?;
    let (day, _) = parse_local_day(raw_date)
        .ok_or_else(|| AppError::invalid_format(format!("Unparseable wellness date: {raw_date}")))?;

    let record = WellnessRecord {
        user_id,
        source: source.to_owned(),
        date: utc_midnight(day),
        hrv: first_f64(payload, wellness::HRV),
        resting_hr: first_f64(payload, wellness::RESTING_HR),
        sleep_hours: first_f64(payload, wellness::SLEEP_HOURS),
        sleep_score: first_f64(payload, wellness::SLEEP_SCORE)
            .map(|score| normalize_sleep_score(score, scales.sleep_score)),
        readiness: first_f64(payload, wellness::READINESS)
            .map(|value| clamp_readiness(normalize_readiness(value, scales.readiness))),
        ctl: first_f64(payload, wellness::CTL),
        atl: first_f64(payload, wellness::ATL),
        weight_kg: first_f64(payload, wellness::WEIGHT),
        sleep_quality: first_f64(payload, wellness::SLEEP_QUALITY),
        soreness: first_f64(payload, wellness::SORENESS),
        fatigue: first_f64(payload, wellness::FATIGUE),
        stress: first_f64(payload, wellness::STRESS),
        mood: first_f64(payload, wellness::MOOD),
        motivation: first_f64(payload, wellness::MOTIVATION),
        injury: first_f64(payload, wellness::INJURY),
        raw: payload.clone(),
    };

    debug!(source, day = %day, "Normalized wellness day");
    Ok(record)
}
