// ABOUTME: Parallel batch normalization and pacing derivation using rayon
// ABOUTME: A malformed item is recorded as a failure and never aborts the batch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use super::collaborators::RecordSink;
use crate::logging::TelemetryLogger;
use coach_core::errors::{AppError, AppResult, ErrorCode};
use coach_core::models::{StreamBundle, WellnessScales};
use coach_intelligence::pacing::PacingAnalyzer;
use coach_providers::{CanonicalRecord, PayloadKind, ProviderNormalizer};
use rayon::prelude::*;
use serde_json::Value;
use std::time::Instant;
use tracing::{instrument, warn};
use uuid::Uuid;

/// One item that could not be processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    /// Position of the item in the input
    pub index: usize,
    /// Error code
    pub code: ErrorCode,
    /// Error message
    pub message: String,
}

/// Outcome of a batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Records produced, in input order
    pub records: Vec<CanonicalRecord>,
    /// Items that failed, in input order
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    /// Number of items processed
    #[must_use]
    pub fn total(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

/// Payloads of one kind from one provider for one user
#[derive(Debug, Clone, Copy)]
pub struct BatchRequest<'a> {
    /// Record kind of every payload
    pub kind: PayloadKind,
    /// Raw payloads
    pub payloads: &'a [Value],
    /// Owning user
    pub user_id: Uuid,
    /// Provider name
    pub source: &'a str,
    /// Declared wellness scales of the provider
    pub scales: WellnessScales,
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Batch operations over many payloads or bundles
#[derive(Debug, Clone, Default)]
pub struct BatchService {
    normalizer: ProviderNormalizer,
    pacing: PacingAnalyzer,
}

impl BatchService {
    /// Create a batch service
    #[must_use]
    pub const fn new(normalizer: ProviderNormalizer, pacing: PacingAnalyzer) -> Self {
        Self { normalizer, pacing }
    }

    /// Normalize payloads in parallel, collecting per-item results
    #[must_use]
    pub fn normalize_batch(&self, request: &BatchRequest<'_>) -> BatchReport {
        let started = Instant::now();
        let results: Vec<AppResult<CanonicalRecord>> = request
            .payloads
            .par_iter()
            .map(|payload| {
                self.normalizer.normalize(
                    request.kind,
                    payload,
                    request.user_id,
                    request.source,
                    request.scales,
                )
            })
            .collect();

        let mut report = BatchReport::default();
        for (index, result) in results.into_iter().enumerate() {
            TelemetryLogger::log_normalization(
                request.kind.as_str(),
                request.source,
                request.user_id,
                result.is_ok(),
            );
            match result {
                Ok(record) => report.records.push(record),
                Err(e) => {
                    warn!(index, code = ?e.code, "Skipping payload: {}", e.message);
                    report.failures.push(BatchFailure {
                        index,
                        code: e.code,
                        message: e.message,
                    });
                }
            }
        }

        TelemetryLogger::log_batch_summary(
            "normalize",
            report.total(),
            report.failures.len(),
            elapsed_ms(started),
        );
        report
    }

    /// Derive pacing artifacts for many bundles in parallel
    pub fn derive_pacing_batch(&self, bundles: &mut [StreamBundle]) {
        let started = Instant::now();
        bundles
            .par_iter_mut()
            .for_each(|bundle| self.pacing.derive_artifacts(bundle));
        TelemetryLogger::log_batch_summary("derive_pacing", bundles.len(), 0, elapsed_ms(started));
    }

    /// Normalize a batch and hand every record to the sink
    ///
    /// Sink failures are added to the report as failures of the item.
    ///
    /// # Errors
    ///
    /// Returns an error only if every item failed and at least one failure
    /// is not a per-item error
    #[instrument(skip_all, fields(user_id = %request.user_id, source = request.source))]
    pub async fn ingest(
        &self,
        sink: &dyn RecordSink,
        request: &BatchRequest<'_>,
    ) -> AppResult<BatchReport> {
        let normalized = self.normalize_batch(request);
        let record_indices: Vec<usize> = (0..request.payloads.len())
            .filter(|i| !normalized.failures.iter().any(|f| f.index == *i))
            .collect();
        let mut report = BatchReport {
            records: Vec::with_capacity(normalized.records.len()),
            failures: normalized.failures,
        };

        for (index, record) in record_indices.into_iter().zip(normalized.records) {
            match sink.store(record.clone()).await {
                Ok(()) => report.records.push(record),
                Err(e) => {
                    warn!(index, "Sink rejected record: {e}");
                    report.failures.push(BatchFailure {
                        index,
                        code: e.code,
                        message: e.message,
                    });
                }
            }
        }
        report.failures.sort_by_key(|failure| failure.index);

        let all_failed = report.records.is_empty() && !report.failures.is_empty();
        if all_failed && report.failures.iter().any(|f| !f.code.is_per_item()) {
            return Err(AppError::storage(format!(
                "All {} records failed to ingest",
                report.failures.len()
            ))
            .with_user_id(request.user_id));
        }
        Ok(report)
    }
}
