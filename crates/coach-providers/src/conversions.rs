// ABOUTME: Numeric and string coercion helpers for loosely typed provider JSON
// ABOUTME: Accepts numbers and numeric strings, clamping float-to-integer conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use coach_core::constants::intensity::PERCENT_IF_CUTOFF;
use serde_json::Value;

/// Safely convert f64 to u64, clamping to valid range
/// Used for duration values from providers that report floats
#[must_use]
pub fn f64_to_u64(value: f64) -> u64 {
    if value.is_nan() {
        return 0;
    }
    value.max(0.0).min(u64::MAX as f64) as u64
}

/// Read a JSON number, or a string holding one
///
/// Non-finite values are treated as absent.
#[must_use]
pub fn value_as_f64(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Read a JSON string or number as text
#[must_use]
pub fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read a JSON boolean, accepting `"true"`/`"false"` and 0/1
#[must_use]
pub fn value_as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|v| v != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Bring a provider intensity factor onto the ratio scale
///
/// Some providers report IF as a percentage (e.g. 85 for 0.85).
#[must_use]
pub fn reconcile_intensity_factor(value: f64) -> f64 {
    if value > PERCENT_IF_CUTOFF {
        value / 100.0
    } else {
        value
    }
}
