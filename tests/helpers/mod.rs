// ABOUTME: Shared test helpers for the telemetry integration tests
// ABOUTME: Exports record fixtures and in-memory collaborator implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod collaborators;
pub mod fixtures;
