// ABOUTME: Canonical training telemetry models shared across the workspace
// ABOUTME: Re-exports Workout, PlannedWorkout, WellnessRecord, StreamBundle, zones and trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

//! # Data Models
//!
//! Provider payloads arrive in many shapes; these are the one shape the rest
//! of the workspace sees.
//!
//! ## Design Principles
//!
//! - **Provider Agnostic**: provider field names never leak past normalization
//! - **Optional by default**: absent provider fields are `None`, never guessed
//! - **Serializable**: camelCase JSON, the shape handed to persistence
//! - **Date semantics by kind**: completed workouts are instants, planned
//!   sessions and wellness days are UTC midnight of their calendar day

mod sport;
mod streams;
mod structured;
mod trend;
mod wellness;
mod workout;
mod zones;

pub use sport::{SportFamily, SportType};
pub use streams::{LapSplit, PacingStrategy, SplitStrategy, StreamBundle, SurgeEvent};
pub use structured::{StepTarget, StepType, StructuredStep, TargetRange};
pub use trend::{TrendDirection, TrendPoint};
pub use wellness::{WellnessRecord, WellnessScale, WellnessScales};
pub use workout::{PlannedWorkout, Workout};
pub use zones::{Zone, ZoneMetric, ZoneProfile};
