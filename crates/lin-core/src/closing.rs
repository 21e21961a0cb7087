//! The last line of the narrative.
//!
//! Either a fixed reassurance, or one line dealt from a small pool. A dealt
//! line must not flicker: [`ClosingMemo`] keeps it until the snapshot changes.

use rand::Rng;

use crate::profile::InputProfile;

pub const FIXED_CLOSING: &str = "And through it all: more laughter sneaking up on you, more pauses that feel like peace, more proof you’re allowed to take your time.";

pub const CLOSING_POOL: [&str; 5] = [
    "And through it all: more laughter sneaking up on you, more pauses that feel like peace, more proof you’re allowed to take your time.",
    "Somewhere ahead is a day you’ll call one of the best of your life, and you haven’t even lived it yet!",
    "There is still so much room for second chances, small victories, and ordinary afternoons that turn golden.",
    "Every count above is a quiet promise: more mornings, more meals, more moments to be exactly who you are!",
    "The best part? Most of these good things will arrive without asking, right in the middle of an ordinary week.",
];

/// Which closing line to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Closing {
    Fixed,
    /// Index into [`CLOSING_POOL`], taken modulo the pool size.
    Pooled(usize),
}

impl Closing {
    pub fn text(self) -> &'static str {
        match self {
            Closing::Fixed => FIXED_CLOSING,
            Closing::Pooled(i) => CLOSING_POOL[i % CLOSING_POOL.len()],
        }
    }
}

/// Deals a pooled closing line once per distinct snapshot.
///
/// Repeated calls with an unchanged profile return the same index without
/// touching the RNG. Any change to a tracked field re-rolls exactly once.
pub struct ClosingMemo<R: Rng> {
    rng: R,
    dealt: Option<(u64, usize)>,
}

impl<R: Rng> ClosingMemo<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, dealt: None }
    }

    pub fn deal(&mut self, profile: &InputProfile) -> Closing {
        let key = profile.snapshot_key();
        match self.dealt {
            Some((k, idx)) if k == key => Closing::Pooled(idx),
            _ => {
                let idx = self.rng.random_range(0..CLOSING_POOL.len());
                tracing::debug!(key, idx, "dealt new closing line");
                self.dealt = Some((key, idx));
                Closing::Pooled(idx)
            }
        }
    }
}
