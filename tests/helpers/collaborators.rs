// ABOUTME: In-memory implementations of the async collaborator traits
// ABOUTME: Records calls so tests can assert on cache-aside and write-back behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use async_trait::async_trait;
use coach_telemetry::errors::{AppError, AppResult};
use coach_telemetry::models::{StreamBundle, ZoneMetric, ZoneProfile};
use coach_telemetry::providers::CanonicalRecord;
use coach_telemetry::services::{RecordSink, StreamRepository, ZoneProfileSource};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Zone profiles keyed by metric and optional activity
#[derive(Default)]
pub struct InMemoryZoneSource {
    profiles: HashMap<(ZoneMetric, Option<String>), ZoneProfile>,
    calls: AtomicUsize,
}

impl InMemoryZoneSource {
    pub fn with_default(mut self, metric: ZoneMetric, profile: ZoneProfile) -> Self {
        self.profiles.insert((metric, None), profile);
        self
    }

    pub fn with_activity(mut self, metric: ZoneMetric, activity_id: &str, profile: ZoneProfile) -> Self {
        self.profiles
            .insert((metric, Some(activity_id.to_owned())), profile);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ZoneProfileSource for InMemoryZoneSource {
    async fn zone_profile(
        &self,
        _user_id: Uuid,
        metric: ZoneMetric,
        activity_id: Option<&str>,
    ) -> AppResult<Option<ZoneProfile>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .profiles
            .get(&(metric, activity_id.map(str::to_owned)))
            .cloned())
    }
}

/// Stream bundles keyed by workout id, with saved artifacts captured
#[derive(Default)]
pub struct InMemoryStreams {
    bundles: Mutex<HashMap<String, StreamBundle>>,
    saved: Mutex<Vec<StreamBundle>>,
    failing: Vec<String>,
}

impl InMemoryStreams {
    pub async fn insert(&self, bundle: StreamBundle) {
        self.bundles
            .lock()
            .await
            .insert(bundle.workout_id.clone(), bundle);
    }

    pub fn failing_on(mut self, workout_id: &str) -> Self {
        self.failing.push(workout_id.to_owned());
        self
    }

    pub async fn saved(&self) -> Vec<StreamBundle> {
        self.saved.lock().await.clone()
    }
}

#[async_trait]
impl StreamRepository for InMemoryStreams {
    async fn load_streams(&self, workout_id: &str) -> AppResult<Option<StreamBundle>> {
        if self.failing.iter().any(|id| id == workout_id) {
            return Err(AppError::storage(format!("stream store offline for {workout_id}")));
        }
        Ok(self.bundles.lock().await.get(workout_id).cloned())
    }

    async fn save_artifacts(&self, bundle: &StreamBundle) -> AppResult<()> {
        self.saved.lock().await.push(bundle.clone());
        self.bundles
            .lock()
            .await
            .insert(bundle.workout_id.clone(), bundle.clone());
        Ok(())
    }
}

/// Captures stored records; optionally rejects everything
#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<CanonicalRecord>>,
    reject_all: bool,
}

impl RecordingSink {
    pub fn rejecting() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            reject_all: true,
        }
    }

    pub async fn records(&self) -> Vec<CanonicalRecord> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl RecordSink for RecordingSink {
    async fn store(&self, record: CanonicalRecord) -> AppResult<()> {
        if self.reject_all {
            return Err(AppError::storage("sink unavailable"));
        }
        self.records.lock().await.push(record);
        Ok(())
    }
}
