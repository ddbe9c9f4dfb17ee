// ABOUTME: Async collaborator traits for zone profiles, stream storage and record persistence
// ABOUTME: Implemented by the host application; the core never persists anything itself
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use async_trait::async_trait;
use coach_core::errors::AppResult;
use coach_core::models::{StreamBundle, ZoneMetric, ZoneProfile};
use coach_providers::CanonicalRecord;
use uuid::Uuid;

/// Source of user zone profiles
#[async_trait]
pub trait ZoneProfileSource: Send + Sync {
    /// Profile for a metric; `activity_id` selects an activity-specific
    /// profile, `None` the user's default
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    async fn zone_profile(
        &self,
        user_id: Uuid,
        metric: ZoneMetric,
        activity_id: Option<&str>,
    ) -> AppResult<Option<ZoneProfile>>;
}

/// Storage of per-workout stream bundles
#[async_trait]
pub trait StreamRepository: Send + Sync {
    /// Load the raw arrays (and any earlier artifacts) for a workout
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    async fn load_streams(&self, workout_id: &str) -> AppResult<Option<StreamBundle>>;

    /// Write back derived pacing artifacts and zone seconds
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    async fn save_artifacts(&self, bundle: &StreamBundle) -> AppResult<()>;
}

/// Persistence of canonical records
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Store one canonical record
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    async fn store(&self, record: CanonicalRecord) -> AppResult<()>;
}
