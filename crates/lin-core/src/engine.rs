use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::closing::{Closing, ClosingMemo};
use crate::estimate::estimate;
use crate::narrate::{Narrative, narrate};
use crate::profile::InputProfile;
use crate::settings::Settings;

/// Estimator and narrator behind one call, plus the closing-line memo.
///
/// The presentation layer owns the profile and calls [`Engine::render`] on
/// every change. Rendering an unchanged profile again yields identical lines.
pub struct Engine<R: Rng = SmallRng> {
    settings: Settings,
    closing: ClosingMemo<R>,
}

impl Engine<SmallRng> {
    pub fn new(settings: Settings) -> Self {
        Self::with_rng(settings, SmallRng::from_os_rng())
    }

    pub fn seeded(settings: Settings, seed: u64) -> Self {
        Self::with_rng(settings, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Engine<R> {
    pub fn with_rng(settings: Settings, rng: R) -> Self {
        Self {
            settings,
            closing: ClosingMemo::new(rng),
        }
    }

    pub fn render(&mut self, profile: &InputProfile) -> Narrative {
        let derived = estimate(profile, &self.settings);
        let closing = if self.settings.random_closing {
            self.closing.deal(profile)
        } else {
            Closing::Fixed
        };
        narrate(profile, derived, closing, &self.settings)
    }
}
