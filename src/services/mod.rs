// ABOUTME: Service layer wiring normalizers and analyzers to external collaborators
// ABOUTME: Collaborator traits, zone profile resolution, stream processing, analytics and batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

//! Services own no storage. Persistence and profile lookup happen behind
//! the collaborator traits in [`collaborators`]; everything else delegates
//! to the pure analyzers in `coach_intelligence`.

/// Analytics payload construction over a date range
pub mod analytics;
/// Rayon-parallel batch normalization and artifact derivation
pub mod batch;
/// Storage and profile collaborator traits
pub mod collaborators;
/// Stream bundle processing
pub mod streams;
/// Cache-aside zone profile resolution
pub mod zones;

pub use analytics::AnalyticsService;
pub use batch::{BatchFailure, BatchReport, BatchRequest, BatchService};
pub use collaborators::{RecordSink, StreamRepository, ZoneProfileSource};
pub use streams::StreamProcessor;
pub use zones::{resolve_zone_profiles, ResolvedZones};
