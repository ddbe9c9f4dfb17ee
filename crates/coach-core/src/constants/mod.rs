// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Thresholds for pacing, zones, intensity buckets, wellness scales and units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coach Telemetry Contributors

//! Constants module
//!
//! Classification thresholds live here so that every crate reproduces the
//! same numeric policy. Configurable values use these as their defaults.

/// Unit conversion constants
pub mod units {
    /// Meters in one kilometer
    pub const METERS_PER_KM: f64 = 1000.0;
    /// Seconds in one hour
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
    /// Seconds in one minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
    /// m/s to km/h factor
    pub const MPS_TO_KMH: f64 = 3.6;
}

/// Pacing analysis thresholds
pub mod pacing {
    /// Default lap length in meters
    pub const DEFAULT_LAP_DISTANCE_M: f64 = 1000.0;
    /// Uncaptured distance above which a partial final lap is emitted
    pub const PARTIAL_LAP_MIN_DISTANCE_M: f64 = 100.0;
    /// Velocity at or below this is treated as stationary noise (m/s)
    pub const STATIONARY_VELOCITY_MPS: f64 = 0.5;
    /// Half-to-half pace difference that flips the split classification (s/km)
    pub const SPLIT_DIFFERENCE_THRESHOLD_S: f64 = 5.0;
    /// Multiplier applied to the lap-pace coefficient of variation
    pub const EVENNESS_CV_MULTIPLIER: f64 = 3.0;
    /// Velocity increase that counts as a surge (m/s)
    pub const SURGE_THRESHOLD_MPS: f64 = 1.0;
    /// Samples to look back when comparing velocity
    pub const SURGE_LOOKBACK_SAMPLES: usize = 5;
    /// Samples skipped after a detected surge
    pub const SURGE_SKIP_SAMPLES: usize = 20;
    /// Minimum current velocity for a surge to count (m/s)
    pub const SURGE_MIN_VELOCITY_MPS: f64 = 2.0;
}

/// Running cadence regression and adjustments
pub mod cadence {
    /// Regression intercept (steps per minute)
    pub const REGRESSION_INTERCEPT: f64 = 124.4;
    /// Regression slope (steps per minute per km/h)
    pub const REGRESSION_SLOPE: f64 = 3.83;
    /// Leg-to-height ratio above which cadence is lowered
    pub const LONG_LEG_RATIO: f64 = 0.49;
    /// Leg-to-height ratio below which cadence is raised
    pub const SHORT_LEG_RATIO: f64 = 0.45;
    /// Height above which cadence is lowered (cm)
    pub const TALL_HEIGHT_CM: f64 = 185.0;
    /// Height below which cadence is raised (cm)
    pub const SHORT_HEIGHT_CM: f64 = 165.0;
    /// Anthropometric adjustment (steps per minute)
    pub const ANTHROPOMETRIC_ADJUSTMENT_SPM: f64 = 3.0;
    /// Multiplier for the injury prevention goal
    pub const INJURY_PREVENTION_MULTIPLIER: f64 = 1.05;
    /// Half-width of the optimal range (steps per minute)
    pub const OPTIMAL_RANGE_HALF_WIDTH_SPM: i32 = 5;
    /// Suggested increase when cadence is low (lower bound)
    pub const LOW_CADENCE_INCREASE_MIN: f64 = 0.03;
    /// Suggested increase when cadence is low (upper bound)
    pub const LOW_CADENCE_INCREASE_MAX: f64 = 0.05;
}

/// Intensity factor buckets
pub mod intensity {
    /// Upper bound of the recovery bucket (exclusive)
    pub const RECOVERY_UPPER: f64 = 0.70;
    /// Upper bound of the endurance bucket (exclusive)
    pub const ENDURANCE_UPPER: f64 = 0.85;
    /// Upper bound of the tempo bucket (exclusive)
    pub const TEMPO_UPPER: f64 = 0.95;
    /// Upper bound of the threshold bucket (inclusive)
    pub const THRESHOLD_UPPER: f64 = 1.05;
    /// Provider IF values above this are percentages, not ratios
    pub const PERCENT_IF_CUTOFF: f64 = 3.0;
}

/// Structured workout step inference
pub mod structured {
    /// Target ratio below which a step is a rest step
    pub const REST_RATIO_THRESHOLD: f64 = 0.6;
    /// Divisor that turns a percentage target into a ratio
    pub const PERCENT_DIVISOR: f64 = 100.0;
}

/// Wellness scale bounds
pub mod wellness {
    /// Canonical sleep score lower bound
    pub const SLEEP_SCORE_MIN: i32 = 0;
    /// Canonical sleep score upper bound
    pub const SLEEP_SCORE_MAX: i32 = 100;
    /// Canonical readiness lower bound
    pub const READINESS_MIN: i32 = 1;
    /// Canonical readiness upper bound
    pub const READINESS_MAX: i32 = 10;
    /// Top of the Polar 1-6 scale
    pub const POLAR_SCALE_MAX: f64 = 6.0;
}

/// Training load thresholds
pub mod training_load {
    /// Relative CTL change treated as a real trend
    pub const TREND_RELATIVE_TOLERANCE: f64 = 0.05;
    /// TSB below which the athlete is overreaching
    pub const OVERREACHING_TSB: f64 = -10.0;
    /// TSB above which the athlete risks detraining
    pub const DETRAINING_TSB: f64 = 10.0;
    /// ATL over CTL ratio signalling an acute spike
    pub const ACUTE_SPIKE_RATIO: f64 = 1.3;
    /// Absolute ATL considered very high
    pub const VERY_HIGH_ATL: f64 = 150.0;
}

/// Zone profile cache defaults
pub mod cache {
    /// Zone profile freshness window in seconds
    pub const ZONE_PROFILE_TTL_SECS: i64 = 900;
    /// Maximum cached zone profiles
    pub const ZONE_PROFILE_MAX_ENTRIES: usize = 1024;
}
