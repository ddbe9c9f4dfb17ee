// ABOUTME: Provider payload normalization into canonical training records
// ABOUTME: Alias tables, timestamp policy, structured workouts and per-kind normalizers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

#![deny(unsafe_code)]

//! # Coach Providers
//!
//! Raw payloads arrive as `serde_json::Value` from whichever collaborator
//! fetched them. This crate never talks to a provider API; it only maps
//! their shapes onto `coach_core::models`.

/// Per-field provider key tables
pub mod aliases;

/// Loose JSON coercion helpers
pub mod conversions;

/// Activity, planned session and wellness normalizers
pub mod normalizer;

/// Structured workout step normalization
pub mod structured;

/// Instant and calendar-day timestamp parsing
pub mod timestamps;

pub use normalizer::{CanonicalRecord, PayloadKind, ProviderNormalizer};
pub use structured::{normalize_step, normalize_steps, RawTarget};
