//! Life in Numbers: estimation and narrative engine.
//!
//! Turns a handful of self-reported attributes into a rough "years remaining"
//! figure, then into an encouraging list of the ordinary good things that
//! still lie ahead (sunrises, weekends, meals, hobby sessions, new faces).
//!
//! Zero I/O. Every render is a pure re-derivation from the input snapshot,
//! except the dealt closing line, which is memoized per snapshot.

pub mod closing;
pub mod constants;
pub mod counts;
pub mod engine;
pub mod estimate;
pub mod format;
pub mod narrate;
pub mod profile;
pub mod settings;
pub mod tone;

pub use closing::{CLOSING_POOL, Closing, ClosingMemo, FIXED_CLOSING};
pub use constants::{FIXED_HORIZON_YEARS, MAX_HOBBIES, MAX_LIFESPAN, MIN_LIFESPAN};
pub use counts::{CountSet, HobbyCount};
pub use engine::Engine;
pub use estimate::{DerivedEstimate, estimate, expected_lifespan};
pub use format::{group_thousands, to_int};
pub use narrate::{Narrative, narrate};
pub use profile::{
    Activity, ActivityLevel, Cadence, Drinking, Gender, Hobby, InputProfile, Pet, PetKind, Smoking,
    Tone, slotted_hobbies, weekly_hobbies,
};
pub use settings::Settings;
pub use tone::apply_tone;
