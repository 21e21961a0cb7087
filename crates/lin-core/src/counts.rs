use serde::Serialize;

use crate::constants::{
    DAYS_PER_YEAR, FULL_MOONS_PER_YEAR, MAX_HOBBIES, MEALS_PER_DAY, NEW_FACES_PER_YEAR,
    WEEKEND_MORNINGS_PER_YEAR,
};
use crate::format::round_count;
use crate::profile::{Cadence, Hobby};

/// Total sessions for one non-blank hobby.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HobbyCount {
    /// Trimmed label as entered.
    pub label: String,
    pub cadence: Cadence,
    pub total: u64,
}

/// Every quantity the narrative cites, all driven by years remaining.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CountSet {
    pub days: u64,
    pub weekends: u64,
    pub full_moons: u64,
    pub meals: u64,
    pub new_faces: u64,
    pub hobbies: Vec<HobbyCount>,
}

impl CountSet {
    /// Derive every count from `years` (Y). Each product is rounded on its own.
    /// Only the first `MAX_HOBBIES` slots are read; blank slots are skipped.
    pub fn derive(years: f64, hobbies: &[Hobby]) -> Self {
        let years = years.max(0.0);
        let hobbies = hobbies
            .iter()
            .take(MAX_HOBBIES)
            .filter(|h| !h.is_blank())
            .map(|h| HobbyCount {
                label: h.label.trim().to_string(),
                cadence: h.cadence,
                total: round_count(years * h.cadence.per_year()),
            })
            .collect();

        Self {
            days: round_count(years * DAYS_PER_YEAR),
            weekends: round_count(years * WEEKEND_MORNINGS_PER_YEAR),
            full_moons: round_count(years * FULL_MOONS_PER_YEAR),
            meals: round_count(years * DAYS_PER_YEAR * MEALS_PER_DAY),
            new_faces: round_count(years * NEW_FACES_PER_YEAR),
            hobbies,
        }
    }
}
