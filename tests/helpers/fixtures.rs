// ABOUTME: Deterministic canonical-record and stream fixtures for tests
// ABOUTME: Builds workouts, wellness days, planned sessions, zone profiles and even-paced runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use coach_telemetry::models::{
    PlannedWorkout, SportType, StreamBundle, WellnessRecord, Workout, Zone, ZoneProfile,
};
use uuid::Uuid;

/// Fixed user for fixtures
pub fn test_user() -> Uuid {
    Uuid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef)
}

/// Calendar day helper
pub fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dom).unwrap()
}

/// UTC instant helper
pub fn at(year: i32, month: u32, dom: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, dom, hour, 0, 0).unwrap()
}

/// Minimal completed workout
pub fn workout(id: &str, date: DateTime<Utc>, sport_type: SportType) -> Workout {
    Workout {
        external_id: id.to_owned(),
        source: "intervals".to_owned(),
        user_id: test_user(),
        date,
        sport_type,
        ..Workout::default()
    }
}

/// Workout carrying a CTL/ATL snapshot
pub fn workout_with_load(id: &str, date: DateTime<Utc>, ctl: f64, atl: f64) -> Workout {
    Workout {
        ctl: Some(ctl),
        atl: Some(atl),
        ..workout(id, date, SportType::Run)
    }
}

/// Workout with duration and intensity factor
pub fn workout_with_intensity(id: &str, date: DateTime<Utc>, seconds: u64, intensity: f64) -> Workout {
    Workout {
        duration_seconds: Some(seconds),
        intensity_factor: Some(intensity),
        ..workout(id, date, SportType::Ride)
    }
}

/// Wellness day with a load snapshot
pub fn wellness_day(date: NaiveDate, ctl: f64, atl: f64) -> WellnessRecord {
    WellnessRecord {
        user_id: test_user(),
        source: "intervals".to_owned(),
        date: Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap()),
        ctl: Some(ctl),
        atl: Some(atl),
        ..WellnessRecord::default()
    }
}

/// Planned session on a day
pub fn planned_session(date: NaiveDate, tss: f64, completed: bool) -> PlannedWorkout {
    PlannedWorkout {
        external_id: Some(format!("plan-{date}")),
        source: "intervals".to_owned(),
        user_id: test_user(),
        date: Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap()),
        planned_tss: Some(tss),
        completed,
        ..PlannedWorkout::default()
    }
}

/// Five-zone heart-rate profile
pub fn heart_rate_profile() -> ZoneProfile {
    ZoneProfile::new(vec![
        Zone::new("Z1 Recovery", 0.0, 120.0),
        Zone::new("Z2 Endurance", 121.0, 140.0),
        Zone::new("Z3 Tempo", 141.0, 155.0),
        Zone::new("Z4 Threshold", 156.0, 170.0),
        Zone::new("Z5 VO2max", 171.0, 220.0),
    ])
    .unwrap()
}

/// Three-zone power profile
pub fn power_profile() -> ZoneProfile {
    ZoneProfile::new(vec![
        Zone::new("Easy", 0.0, 150.0),
        Zone::new("Steady", 151.0, 250.0),
        Zone::new("Hard", 251.0, 2000.0),
    ])
    .unwrap()
}

/// Evenly paced run sampled once per second: `meters` over `seconds`
pub fn even_run(workout_id: &str, meters: u32, seconds: u32) -> StreamBundle {
    let speed = f64::from(meters) / f64::from(seconds);
    let time: Vec<f64> = (0..=seconds).map(f64::from).collect();
    let distance: Vec<f64> = (0..=seconds)
        .map(|t| f64::from(t) * f64::from(meters) / f64::from(seconds))
        .collect();
    StreamBundle {
        workout_id: workout_id.to_owned(),
        velocity: vec![speed; time.len()],
        time,
        distance,
        ..StreamBundle::default()
    }
}
