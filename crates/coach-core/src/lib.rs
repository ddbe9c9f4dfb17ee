// ABOUTME: Core types and constants for the coach telemetry workspace
// ABOUTME: Foundation crate with error handling, canonical training models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

#![deny(unsafe_code)]

//! # Coach Core
//!
//! Foundation crate providing the canonical record shapes shared by the
//! normalization and analytics crates. It changes infrequently, so the
//! heavier crates above it keep their incremental compilation benefits.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Thresholds and unit constants organized by domain
//! - **models**: Workout, `PlannedWorkout`, `WellnessRecord`, `StreamBundle`, zones and trends

/// Unified error handling system with standard error codes
pub mod errors;

/// Thresholds and unit constants organized by domain
pub mod constants;

/// Canonical training telemetry models
pub mod models;
