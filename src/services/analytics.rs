// ABOUTME: Builds the analytics payload for a user over a date range
// ABOUTME: Gathers per-workout zone outputs from stored streams before aggregating
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use super::collaborators::StreamRepository;
use super::zones::ResolvedZones;
use crate::logging::TelemetryLogger;
use chrono::NaiveDate;
use coach_core::errors::AppResult;
use coach_core::models::{PlannedWorkout, WellnessRecord, Workout};
use coach_intelligence::config::{IntensityConfig, LoadTrendConfig};
use coach_intelligence::load_trend::{
    AnalyticsInput, AnalyticsPayload, DateRange, LoadTrendAnalyzer,
};
use coach_intelligence::zones::{analyze_zones, WorkoutZones};
use serde_json::Value;
use std::time::Instant;
use tracing::{instrument, warn};
use uuid::Uuid;

/// Records for one analytics request
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsRequest<'a> {
    /// User the records belong to
    pub user_id: Uuid,
    /// Completed workouts
    pub workouts: &'a [Workout],
    /// Wellness days
    pub wellness: &'a [WellnessRecord],
    /// Planned sessions
    pub planned: &'a [PlannedWorkout],
    /// Calendar range
    pub range: DateRange,
    /// Today, when readiness mode is wanted
    pub readiness_today: Option<NaiveDate>,
}

/// Aggregates canonical records and stream zone outputs
#[derive(Debug, Clone, Default)]
pub struct AnalyticsService {
    analyzer: LoadTrendAnalyzer,
}

impl AnalyticsService {
    /// Create a service with the given settings
    #[must_use]
    pub const fn new(load: LoadTrendConfig, intensity: IntensityConfig) -> Self {
        Self {
            analyzer: LoadTrendAnalyzer::new(load, intensity),
        }
    }

    /// Zone outputs of every in-range workout that has stored streams
    ///
    /// Workouts without streams, or whose streams fail to load, are skipped.
    pub async fn collect_zones(
        repository: &dyn StreamRepository,
        request: &AnalyticsRequest<'_>,
        zones: &ResolvedZones,
    ) -> Vec<WorkoutZones> {
        let mut collected = Vec::new();
        for workout in request
            .workouts
            .iter()
            .filter(|w| request.range.contains(w.day()))
        {
            match repository.load_streams(&workout.external_id).await {
                Ok(Some(bundle)) => collected.push(analyze_zones(
                    &bundle,
                    zones.heart_rate.as_ref(),
                    zones.power.as_ref(),
                )),
                Ok(None) => {}
                Err(e) => warn!(
                    workout_id = %workout.external_id,
                    "Skipping zones for workout: {e}"
                ),
            }
        }
        collected
    }

    /// Build the payload from records and pre-computed zone outputs
    #[must_use]
    pub fn build_payload(
        &self,
        request: &AnalyticsRequest<'_>,
        zones: &[WorkoutZones],
    ) -> AnalyticsPayload {
        let started = Instant::now();
        let payload = self.analyzer.analyze(&AnalyticsInput {
            workouts: request.workouts,
            wellness: request.wellness,
            planned: request.planned,
            zones,
            range: request.range,
            readiness_today: request.readiness_today,
        });
        TelemetryLogger::log_analytics(
            request.user_id,
            usize::try_from(payload.summary.total_workouts).unwrap_or(usize::MAX),
            payload.load_trend.len(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        payload
    }

    /// Load stream zones and build the payload
    #[instrument(skip_all, fields(user_id = %request.user_id))]
    pub async fn build(
        &self,
        repository: &dyn StreamRepository,
        request: &AnalyticsRequest<'_>,
        zones: &ResolvedZones,
    ) -> AnalyticsPayload {
        let workout_zones = Self::collect_zones(repository, request, zones).await;
        self.build_payload(request, &workout_zones)
    }

    /// Build the payload and serialize it to JSON
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the payload cannot be encoded
    pub async fn build_json(
        &self,
        repository: &dyn StreamRepository,
        request: &AnalyticsRequest<'_>,
        zones: &ResolvedZones,
    ) -> AppResult<Value> {
        let payload = self.build(repository, request, zones).await;
        Ok(serde_json::to_value(payload)?)
    }
}
