//! Lifestyle-adjusted lifespan estimate.
//!
//! Rough public averages nudged by a handful of self-reported factors. Not an
//! actuarial model: the numbers only size the narrative.

use serde::Serialize;

use crate::constants::{FIXED_HORIZON_YEARS, MAX_LIFESPAN, MIN_LIFESPAN};
use crate::profile::{Activity, ActivityLevel, Drinking, Gender, InputProfile, Smoking};
use crate::settings::Settings;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DerivedEstimate {
    pub expected_lifespan_years: i32,
    pub years_remaining: f64,
}

pub fn baseline_lifespan(gender: Gender) -> i32 {
    match gender {
        Gender::Male => 79,
        Gender::Female => 83,
        Gender::Unspecified | Gender::Nonbinary => 81,
    }
}

pub fn smoking_adjustment(status: Smoking) -> i32 {
    match status {
        Smoking::Current => -8,
        Smoking::Former => -3,
        Smoking::Never => 0,
    }
}

pub fn drinking_adjustment(status: Drinking) -> i32 {
    match status {
        Drinking::Heavy => -5,
        Drinking::Moderate => -1,
        Drinking::None => 0,
    }
}

/// Cadence suffix is ignored; only the level counts.
pub fn activity_adjustment(activity: Activity) -> i32 {
    match activity.level {
        ActivityLevel::High => 2,
        ActivityLevel::Low => -2,
        ActivityLevel::Moderate => 0,
    }
}

/// Case-insensitive substring scan. Each match stacks independently.
pub fn conditions_adjustment(text: &str) -> i32 {
    let t = text.to_lowercase();
    let mut adj = 0;
    if t.contains("diab") {
        adj -= 3;
    }
    if t.contains("asthma") {
        adj -= 1;
    }
    if t.contains("hypertension") {
        adj -= 1;
    }
    adj
}

/// Baseline plus every adjustment, clamped to [60, 100].
pub fn expected_lifespan(profile: &InputProfile, settings: &Settings) -> i32 {
    let drinking = if settings.drinking_adjustment {
        drinking_adjustment(profile.drinking)
    } else {
        0
    };
    let raw = baseline_lifespan(profile.gender)
        + smoking_adjustment(profile.smoking)
        + drinking
        + activity_adjustment(profile.activity)
        + conditions_adjustment(&profile.conditions);
    raw.clamp(MIN_LIFESPAN, MAX_LIFESPAN)
}

pub fn estimate(profile: &InputProfile, settings: &Settings) -> DerivedEstimate {
    let expected = expected_lifespan(profile, settings);
    let years_remaining = if profile.use_smart_estimate {
        (f64::from(expected) - f64::from(profile.age)).max(0.0)
    } else {
        FIXED_HORIZON_YEARS
    };

    tracing::debug!(
        expected,
        years_remaining,
        smart = profile.use_smart_estimate,
        "derived estimate"
    );

    DerivedEstimate {
        expected_lifespan_years: expected,
        years_remaining,
    }
}
