//! Expand an estimate into the ordered narrative.
//!
//! Line order is fixed: greeting, horizon, sunrises, full moons, weekend
//! mornings, meals, new faces, one line per hobby, location, pet, closing.
//! The tone transform runs over every line on its way in.

use serde::Serialize;

use crate::closing::Closing;
use crate::constants::FALLBACK_NAME;
use crate::counts::{CountSet, HobbyCount};
use crate::estimate::DerivedEstimate;
use crate::format::{render_count, round_count};
use crate::profile::{Cadence, InputProfile, Pet, PetKind};
use crate::settings::Settings;
use crate::tone::apply_tone;

/// Rendered output for one snapshot.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Narrative {
    pub estimate: DerivedEstimate,
    pub counts: CountSet,
    pub lines: Vec<String>,
}

impl Narrative {
    /// Plain-text export: lines separated by a blank line.
    pub fn to_plain_text(&self) -> String {
        self.lines.join("\n\n")
    }
}

fn greeting(name: &str) -> String {
    let name = name.trim();
    let name = if name.is_empty() { FALLBACK_NAME } else { name };
    format!("{name}, let’s count the good things still coming.")
}

fn horizon_line(profile: &InputProfile, years: f64, grouped: bool) -> String {
    if profile.use_smart_estimate {
        let shown = render_count(round_count(years.max(1.0)), grouped);
        format!("About {shown} more years of moments to notice, explore, and enjoy.")
    } else {
        "Let’s look at the next ten years and fill them with gentle joys.".to_string()
    }
}

fn hobby_line(hobby: &HobbyCount, grouped: bool) -> String {
    let total = render_count(hobby.total, grouped);
    let label = hobby.label.to_lowercase();
    match hobby.cadence {
        Cadence::Weekly => format!(
            "{total} tiny {label} moments to stack — even once a week becomes a beautiful pattern."
        ),
        Cadence::Monthly => format!(
            "{total} {label} days to look forward to — once a month adds up to something wonderful."
        ),
        Cadence::Quarterly => format!(
            "{total} {label} seasons to plan for — every quarter brings another chance to dive in!"
        ),
    }
}

fn location_line(location: &str) -> Option<String> {
    let location = location.trim();
    if location.is_empty() {
        return None;
    }
    Some(format!(
        "Plenty of {location} days to notice what makes home feel like home."
    ))
}

fn pet_line(pet: &Pet) -> Option<String> {
    let name = pet.name.trim();
    if name.is_empty() {
        return None;
    }
    match pet.kind {
        PetKind::None => None,
        PetKind::Dog => Some(format!(
            "Countless walks with {name} — every wagging tail a reminder to be right here, right now!"
        )),
        PetKind::Cat => Some(format!(
            "Endless slow mornings with {name} curled up nearby, purring like nothing could ever go wrong."
        )),
        PetKind::Other => Some(format!(
            "So many quiet moments with {name}, your small companion through all of it."
        )),
    }
}

/// Build the narrative for `profile` from an already-derived estimate.
pub fn narrate(
    profile: &InputProfile,
    estimate: DerivedEstimate,
    closing: Closing,
    settings: &Settings,
) -> Narrative {
    let years = estimate.years_remaining;
    let counts = CountSet::derive(years, &profile.hobbies);
    let g = settings.group_thousands;

    let mut raw = vec![
        greeting(&profile.name),
        horizon_line(profile, years, g),
        format!(
            "{} sunrises still ahead — that many soft starts to fall in love with life again.",
            render_count(counts.days, g)
        ),
        format!(
            "{} full moons to look up at — reminders that wonder keeps returning.",
            render_count(counts.full_moons, g)
        ),
        format!(
            "{} weekend mornings to stretch, sip slowly, and begin again.",
            render_count(counts.weekends, g)
        ),
        format!(
            "{} meals to enjoy — invitations to slow down and connect.",
            render_count(counts.meals, g)
        ),
        format!(
            "{}+ new faces you haven’t met yet — friends, mentors, and people who bring out your unfiltered self.",
            render_count(counts.new_faces, g)
        ),
    ];
    raw.extend(counts.hobbies.iter().map(|h| hobby_line(h, g)));
    raw.extend(location_line(&profile.location));
    raw.extend(pet_line(&profile.pet));
    raw.push(closing.text().to_string());

    let lines = raw
        .iter()
        .map(|line| apply_tone(line, profile.tone))
        .collect();

    Narrative {
        estimate,
        counts,
        lines,
    }
}
