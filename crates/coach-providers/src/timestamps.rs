// ABOUTME: Timestamp parsing for instant-scoped and day-scoped provider records
// ABOUTME: Offset-less timestamps are read as UTC; explicit offsets are honored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

//! Completed activities are instants: the parsed value is the exact UTC
//! moment. Planned sessions and wellness days are calendar days: only the
//! date as written in the local timestamp matters, and the result is UTC
//! midnight of that date, whatever the clock time or offset.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde_json::Value;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M"];

/// Epoch values at or above this are milliseconds
const EPOCH_MILLIS_CUTOFF: f64 = 100_000_000_000.0;

fn parse_epoch(seconds_or_millis: f64) -> Option<DateTime<Utc>> {
    let millis = if seconds_or_millis.abs() >= EPOCH_MILLIS_CUTOFF {
        seconds_or_millis
    } else {
        seconds_or_millis * 1000.0
    };
    DateTime::from_timestamp_millis(millis.round() as i64)
}

/// Parse an instant
///
/// Accepts RFC 3339 (offset honored), offset-less date-times (read as UTC),
/// bare dates (UTC midnight) and epoch seconds or milliseconds.
#[must_use]
pub fn parse_instant(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => n.as_f64().and_then(parse_epoch),
        Value::String(s) => parse_instant_str(s.trim()),
        _ => None,
    }
}

fn parse_instant_str(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
    {
        return Some(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(utc_midnight)
}

/// UTC midnight of a calendar day
#[must_use]
pub fn utc_midnight(day: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN))
}

/// Calendar day and optional clock time of a local timestamp
///
/// The date is taken from the first ten characters as written, so
/// `2024-03-10T23:30:00-05:00` is the 10th. Epoch numbers are read as UTC.
#[must_use]
pub fn parse_local_day(value: &Value) -> Option<(NaiveDate, Option<NaiveTime>)> {
    match value {
        Value::String(s) => parse_local_day_str(s.trim()),
        Value::Number(n) => n
            .as_f64()
            .and_then(parse_epoch)
            .map(|instant| (instant.date_naive(), Some(instant.time()))),
        _ => None,
    }
}

fn parse_local_day_str(text: &str) -> Option<(NaiveDate, Option<NaiveTime>)> {
    let day = NaiveDate::parse_from_str(text.get(..10)?, "%Y-%m-%d").ok()?;
    let time = text
        .get(10..)
        .and_then(|rest| rest.strip_prefix(['T', ' ']))
        .and_then(|rest| {
            let clock = rest.get(..8).unwrap_or(rest);
            TIME_FORMATS
                .iter()
                .find_map(|format| NaiveTime::parse_from_str(clock, format).ok())
        });
    Some((day, time))
}
