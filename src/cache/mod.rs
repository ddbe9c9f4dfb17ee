// ABOUTME: Zone profile caching for the analytics call boundary
// ABOUTME: Explicit cache values with LRU eviction and caller-supplied clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

//! The cache is a plain value owned by the caller and passed to each call.
//! Freshness is checked against a `now` the caller supplies, so lookups are
//! deterministic in tests.

/// LRU zone profile cache with TTL
pub mod zone_profiles;

pub use zone_profiles::{ZoneCacheKey, ZoneProfileCache};
