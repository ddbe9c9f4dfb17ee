// ABOUTME: Planned session normalization with day-scoped dates
// ABOUTME: Same local calendar day always yields the same UTC-midnight date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use crate::aliases::{activity, common, first_bool, first_f64, first_string, first_value, planned};
use crate::conversions::{f64_to_u64, reconcile_intensity_factor};
use crate::structured::normalize_steps;
use crate::timestamps::{parse_local_day, utc_midnight};
use coach_core::errors::{AppError, AppResult};
use coach_core::models::{PlannedWorkout, SportType};
use coach_intelligence::config::StructuredWorkoutConfig;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

pub(super) fn normalize(
    payload: &Value,
    user_id: Uuid,
    source: &str,
    config: &StructuredWorkoutConfig,
) -> AppResult<PlannedWorkout> {
    let external_id = first_string(payload, common::EXTERNAL_ID);
    let raw_start = first_value(payload, common::START_LOCAL)
        .or_else(|| first_value(payload, activity::START_UTC))
        .ok_or_else(|| AppError::missing_field("start_date_local"))?;
    let (day, start_time_local) = parse_local_day(raw_start).ok_or_else(|| {
        let error = AppError::invalid_format(format!("Unparseable planned date: {raw_start}"));
        match &external_id {
            Some(id) => error.with_resource_id(id.clone()),
            None => error,
        }
    })?;

    let structured_workout = first_value(payload, planned::STRUCTURED)
        .map(|steps| normalize_steps(steps, config))
        .filter(|steps| !steps.is_empty());
    let completed = first_bool(payload, planned::COMPLETED).unwrap_or(false)
        || first_value(payload, planned::PAIRED_ACTIVITY).is_some();

    let planned = PlannedWorkout {
        title: first_string(payload, common::TITLE),
        description: first_string(payload, planned::DESCRIPTION),
        date: utc_midnight(day),
        start_time_local,
        sport_type: first_string(payload, common::SPORT)
            .map_or_else(SportType::default, |s| SportType::from_provider_string(&s)),
        planned_duration_seconds: first_f64(payload, planned::DURATION).map(f64_to_u64),
        planned_distance_meters: first_f64(payload, common::DISTANCE),
        planned_tss: first_f64(payload, common::TSS),
        planned_intensity_factor: first_f64(payload, common::INTENSITY_FACTOR)
            .map(reconcile_intensity_factor),
        structured_workout,
        completed,
        raw: payload.clone(),
        external_id,
        source: source.to_owned(),
        user_id,
    };

    debug!(
        external_id = planned.external_id.as_deref().unwrap_or("-"),
        source,
        day = %day,
        steps = planned.structured_workout.as_ref().map_or(0, Vec::len),
        "Normalized planned session"
    );
    Ok(planned)
}
