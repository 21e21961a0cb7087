use serde::{Deserialize, Serialize};

/// Engine switches. Every field defaults to the current behaviour; turning
/// one off reproduces the earlier, simpler rendition of that feature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Apply the drinking adjustment to the lifespan estimate.
    pub drinking_adjustment: bool,
    /// Close with a line dealt from the pool instead of the fixed sentence.
    pub random_closing: bool,
    /// Render counts as "17,885" instead of "17885".
    pub group_thousands: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            drinking_adjustment: true,
            random_closing: true,
            group_thousands: true,
        }
    }
}

impl Settings {
    /// The first rendition: no drinking input, fixed closing, bare numbers.
    pub fn classic() -> Self {
        Self {
            drinking_adjustment: false,
            random_closing: false,
            group_thousands: false,
        }
    }
}
