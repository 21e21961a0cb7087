//! The input snapshot: everything the presentation layer collects.
//!
//! Every enum parses leniently from free text. Unknown values land on the
//! neutral variant instead of failing, so a profile can always be built.

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::format::to_int;

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Gender {
    #[default]
    Unspecified,
    Male,
    Female,
    Nonbinary,
}

impl Gender {
    pub fn parse(s: &str) -> Self {
        match normalize(s).as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            "nonbinary" | "non-binary" => Self::Nonbinary,
            _ => Self::Unspecified,
        }
    }
}

impl From<String> for Gender {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Smoking {
    #[default]
    Never,
    Former,
    Current,
}

impl Smoking {
    pub fn parse(s: &str) -> Self {
        match normalize(s).as_str() {
            "former" => Self::Former,
            "current" => Self::Current,
            _ => Self::Never,
        }
    }
}

impl From<String> for Smoking {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Drinking {
    #[default]
    None,
    Moderate,
    Heavy,
}

impl Drinking {
    pub fn parse(s: &str) -> Self {
        match normalize(s).as_str() {
            "moderate" => Self::Moderate,
            "heavy" => Self::Heavy,
            _ => Self::None,
        }
    }
}

impl From<String> for Drinking {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

/// How often a hobby (or activity) repeats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Cadence {
    #[default]
    Weekly,
    Monthly,
    Quarterly,
}

impl Cadence {
    /// Occurrences per year.
    pub fn per_year(self) -> f64 {
        match self {
            Self::Weekly => 52.0,
            Self::Monthly => 12.0,
            Self::Quarterly => 4.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
        }
    }

    /// Substring match, so "hiking monthly" or "high-quarterly" both resolve.
    fn find_in(s: &str) -> Option<Self> {
        if s.contains("quarterly") {
            Some(Self::Quarterly)
        } else if s.contains("monthly") {
            Some(Self::Monthly)
        } else if s.contains("weekly") {
            Some(Self::Weekly)
        } else {
            None
        }
    }

    pub fn parse(s: &str) -> Self {
        Self::find_in(&normalize(s)).unwrap_or_default()
    }
}

impl From<String> for Cadence {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    #[default]
    Moderate,
    High,
}

/// Activity level with an optional cadence suffix ("high-weekly").
/// Only the level feeds the estimate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Activity {
    pub level: ActivityLevel,
    pub cadence: Option<Cadence>,
}

impl Activity {
    pub fn new(level: ActivityLevel) -> Self {
        Self {
            level,
            cadence: None,
        }
    }

    pub fn parse(s: &str) -> Self {
        let s = normalize(s);
        let level = if s.contains("high") {
            ActivityLevel::High
        } else if s.contains("low") {
            ActivityLevel::Low
        } else {
            ActivityLevel::Moderate
        };
        Self {
            level,
            cadence: Cadence::find_in(&s),
        }
    }
}

impl From<String> for Activity {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Activity> for String {
    fn from(a: Activity) -> Self {
        a.to_string()
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.level {
            ActivityLevel::Low => "low",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::High => "high",
        };
        match self.cadence {
            Some(c) => write!(f, "{level}-{c}"),
            None => f.write_str(level),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hobby {
    pub label: String,
    #[serde(default)]
    pub cadence: Cadence,
}

impl Hobby {
    pub fn new(label: &str, cadence: Cadence) -> Self {
        Self {
            label: label.to_string(),
            cadence,
        }
    }

    pub fn weekly(label: &str) -> Self {
        Self::new(label, Cadence::Weekly)
    }

    pub fn is_blank(&self) -> bool {
        self.label.trim().is_empty()
    }
}

/// Named-slot layout: one weekly, one monthly, one quarterly hobby.
pub fn slotted_hobbies(weekly: &str, monthly: &str, quarterly: &str) -> Vec<Hobby> {
    vec![
        Hobby::new(weekly, Cadence::Weekly),
        Hobby::new(monthly, Cadence::Monthly),
        Hobby::new(quarterly, Cadence::Quarterly),
    ]
}

/// Generic-slot layout: every hobby repeats weekly.
pub fn weekly_hobbies(labels: &[&str]) -> Vec<Hobby> {
    labels.iter().map(|l| Hobby::weekly(l)).collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HobbyRepr {
    Label(String),
    Full(Hobby),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum HobbiesRepr {
    // List first: a struct would otherwise accept a sequence positionally.
    List(Vec<HobbyRepr>),
    Slots {
        #[serde(default)]
        weekly: String,
        #[serde(default)]
        monthly: String,
        #[serde(default)]
        quarterly: String,
    },
}

fn de_hobbies<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Hobby>, D::Error> {
    Ok(match HobbiesRepr::deserialize(d)? {
        HobbiesRepr::List(items) => items
            .into_iter()
            .map(|h| match h {
                HobbyRepr::Label(label) => Hobby::weekly(&label),
                HobbyRepr::Full(hobby) => hobby,
            })
            .collect(),
        HobbiesRepr::Slots {
            weekly,
            monthly,
            quarterly,
        } => slotted_hobbies(&weekly, &monthly, &quarterly),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AgeRepr {
    Number(i64),
    Float(f64),
    Text(String),
    // null, bools, arrays: anything else degrades to age 0.
    Other(IgnoredAny),
}

/// Age arrives as a number or as free text; integers and text go through
/// `to_int`. Fractional numbers drop the fraction (sign stripped, saturating).
fn de_age<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    Ok(match AgeRepr::deserialize(d)? {
        AgeRepr::Number(n) => to_int(&n.to_string(), 0),
        AgeRepr::Float(f) if f.is_finite() => f.abs().trunc() as u32,
        AgeRepr::Float(_) | AgeRepr::Other(_) => 0,
        AgeRepr::Text(s) => to_int(&s, 0),
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PetKind {
    #[default]
    None,
    Dog,
    Cat,
    Other,
}

impl PetKind {
    pub fn parse(s: &str) -> Self {
        match normalize(s).as_str() {
            "dog" => Self::Dog,
            "cat" => Self::Cat,
            "other" => Self::Other,
            _ => Self::None,
        }
    }
}

impl From<String> for PetKind {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pet {
    #[serde(rename = "type", default)]
    pub kind: PetKind,
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Tone {
    #[default]
    Warm,
    Gentle,
    Playful,
}

impl Tone {
    pub fn parse(s: &str) -> Self {
        match normalize(s).as_str() {
            "gentle" => Self::Gentle,
            "playful" => Self::Playful,
            _ => Self::Warm,
        }
    }
}

impl From<String> for Tone {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

/// One immutable snapshot of the user's inputs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct InputProfile {
    pub name: String,
    #[serde(deserialize_with = "de_age")]
    pub age: u32,
    pub location: String,
    pub gender: Gender,
    pub smoking: Smoking,
    pub drinking: Drinking,
    pub activity: Activity,
    pub conditions: String,
    #[serde(deserialize_with = "de_hobbies")]
    pub hobbies: Vec<Hobby>,
    pub pet: Pet,
    pub tone: Tone,
    pub use_smart_estimate: bool,
}

impl Default for InputProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 0,
            location: String::new(),
            gender: Gender::default(),
            smoking: Smoking::default(),
            drinking: Drinking::default(),
            activity: Activity::default(),
            conditions: String::new(),
            hobbies: Vec::new(),
            pet: Pet::default(),
            tone: Tone::default(),
            use_smart_estimate: true,
        }
    }
}

impl InputProfile {
    /// Set age from raw form text ("3a0" → 30, "" → 0).
    pub fn set_age_text(&mut self, raw: &str) {
        self.age = to_int(raw, 0);
    }

    /// Hash over every tracked field. Two snapshots with equal keys render
    /// the same closing line.
    pub fn snapshot_key(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse() {
        assert_eq!(Gender::parse("Male"), Gender::Male);
        assert_eq!(Gender::parse(" female "), Gender::Female);
        assert_eq!(Gender::parse("non-binary"), Gender::Nonbinary);
        assert_eq!(Gender::parse("prefer not to say"), Gender::Unspecified);
    }

    #[test]
    fn test_unknown_values_fall_back() {
        assert_eq!(Smoking::parse("sometimes"), Smoking::Never);
        assert_eq!(Drinking::parse(""), Drinking::None);
        assert_eq!(PetKind::parse("goldfish"), PetKind::None);
        assert_eq!(Tone::parse("sarcastic"), Tone::Warm);
        assert_eq!(Cadence::parse("daily"), Cadence::Weekly);
    }

    #[test]
    fn test_activity_composite() {
        let a = Activity::parse("high-weekly");
        assert_eq!(a.level, ActivityLevel::High);
        assert_eq!(a.cadence, Some(Cadence::Weekly));

        let b = Activity::parse("Low (monthly)");
        assert_eq!(b.level, ActivityLevel::Low);
        assert_eq!(b.cadence, Some(Cadence::Monthly));

        let c = Activity::parse("moderate");
        assert_eq!(c.level, ActivityLevel::Moderate);
        assert_eq!(c.cadence, None);
    }

    #[test]
    fn test_activity_display() {
        assert_eq!(Activity::parse("high-quarterly").to_string(), "high-quarterly");
        assert_eq!(Activity::new(ActivityLevel::Low).to_string(), "low");
    }

    #[test]
    fn test_set_age_text() {
        let mut p = InputProfile::default();
        p.set_age_text("3a0");
        assert_eq!(p.age, 30);
        p.set_age_text("");
        assert_eq!(p.age, 0);
    }

    #[test]
    fn test_default_profile_is_smart() {
        let p = InputProfile::default();
        assert!(p.use_smart_estimate);
        assert_eq!(p.tone, Tone::Warm);
    }

    #[test]
    fn test_snapshot_key_tracks_fields() {
        let a = InputProfile::default();
        let mut b = a.clone();
        assert_eq!(a.snapshot_key(), b.snapshot_key());

        b.pet.name = "Biscuit".to_string();
        assert_ne!(a.snapshot_key(), b.snapshot_key());
    }

    #[test]
    fn test_slotted_hobbies_order() {
        let h = slotted_hobbies("Running", "Pottery", "Camping");
        let cadences: Vec<_> = h.iter().map(|h| h.cadence).collect();
        assert_eq!(
            cadences,
            vec![Cadence::Weekly, Cadence::Monthly, Cadence::Quarterly]
        );
    }

    #[test]
    fn test_blank_hobby() {
        assert!(Hobby::weekly("   ").is_blank());
        assert!(!Hobby::weekly("chess").is_blank());
    }
}
