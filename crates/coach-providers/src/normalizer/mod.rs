// ABOUTME: Turns raw provider payloads into canonical workouts, planned sessions and wellness days
// ABOUTME: One payload in, one record out; absent optional fields become None
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

//! # Provider Normalizer
//!
//! Field names are resolved through the alias tables in
//! [`crate::aliases`]. Dates follow the record kind: completed activities
//! keep their exact instant, planned sessions and wellness days are pinned
//! to UTC midnight of their local calendar day.

mod activity;
mod planned;
mod wellness;

use coach_core::errors::{AppError, AppResult};
use coach_core::models::{PlannedWorkout, WellnessRecord, WellnessScales, Workout};
use coach_intelligence::config::StructuredWorkoutConfig;
use serde_json::{Map, Value};
use uuid::Uuid;

/// Kind of record a payload describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// Completed activity
    Activity,
    /// Planned session
    PlannedEvent,
    /// Wellness day
    Wellness,
}

impl PayloadKind {
    /// Short name used in logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::PlannedEvent => "planned_event",
            Self::Wellness => "wellness",
        }
    }
}

/// A normalized record of any kind
#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalRecord {
    /// Completed activity
    Workout(Box<Workout>),
    /// Planned session
    Planned(Box<PlannedWorkout>),
    /// Wellness day
    Wellness(Box<WellnessRecord>),
}

/// Normalizes provider payloads
#[derive(Debug, Clone, Default)]
pub struct ProviderNormalizer {
    structured: StructuredWorkoutConfig,
}

impl ProviderNormalizer {
    /// Create a normalizer with the given structured workout settings
    #[must_use]
    pub const fn new(structured: StructuredWorkoutConfig) -> Self {
        Self { structured }
    }

    /// Normalize a completed activity
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not an object, has no identifier,
    /// or has no parseable start time
    pub fn normalize_activity(
        &self,
        payload: &Value,
        user_id: Uuid,
        source: &str,
    ) -> AppResult<Workout> {
        as_object(payload)?;
        activity::normalize(payload, user_id, source).map_err(|e| e.with_user_id(user_id))
    }

    /// Normalize a planned session
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not an object, has no identifier,
    /// or has no parseable local start date
    pub fn normalize_planned_event(
        &self,
        payload: &Value,
        user_id: Uuid,
        source: &str,
    ) -> AppResult<PlannedWorkout> {
        as_object(payload)?;
        planned::normalize(payload, user_id, source, &self.structured)
            .map_err(|e| e.with_user_id(user_id))
    }

    /// Normalize a wellness day, converting subjective values from `scales`
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not an object or has no parseable date
    pub fn normalize_wellness(
        &self,
        payload: &Value,
        user_id: Uuid,
        source: &str,
        scales: WellnessScales,
    ) -> AppResult<WellnessRecord> {
        as_object(payload)?;
        wellness::normalize(payload, user_id, source, scales).map_err(|e| e.with_user_id(user_id))
    }

    /// Normalize any payload kind
    ///
    /// # Errors
    ///
    /// Propagates the error of the kind-specific normalizer
    pub fn normalize(
        &self,
        kind: PayloadKind,
        payload: &Value,
        user_id: Uuid,
        source: &str,
        scales: WellnessScales,
    ) -> AppResult<CanonicalRecord> {
        Ok(match kind {
            PayloadKind::Activity => CanonicalRecord::Workout(Box::new(
                self.normalize_activity(payload, user_id, source)?,
            )),
            PayloadKind::PlannedEvent => CanonicalRecord::Planned(Box::new(
                self.normalize_planned_event(payload, user_id, source)?,
            )),
            PayloadKind::Wellness => CanonicalRecord::Wellness(Box::new(
                self.normalize_wellness(payload, user_id, source, scales)?,
            )),
        })
    }
}

fn as_object(payload: &Value) -> AppResult<&Map<String, Value>> {
    payload
        .as_object()
        .ok_or_else(|| AppError::invalid_input("Provider payload must be a JSON object"))
}
