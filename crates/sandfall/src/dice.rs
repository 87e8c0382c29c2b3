//! Random source used by particle factories and element rules.
//!
//! Every rule draws from the grid's own `Dice`, so a run is reproducible
//! from its seed and tests can swap in [`FixedDice`] to pin offsets and rolls.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait Dice: fmt::Debug {
    /// Fair coin.
    fn coin(&mut self) -> bool;

    /// Uniform integer in `[1, max]`. `max == 0` is treated as 1.
    fn roll(&mut self, max: u32) -> u32;

    /// Random lateral offset: +1 on heads, -1 on tails.
    fn offset(&mut self) -> i32 {
        if self.coin() {
            1
        } else {
            -1
        }
    }
}

/// Seeded `StdRng`-backed dice.
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: StdRng,
}

impl SeededDice {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Dice for SeededDice {
    fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn roll(&mut self, max: u32) -> u32 {
        self.rng.gen_range(1..=max.max(1))
    }
}

/// Dice that always land the same way. `roll` returns `value` clamped
/// into `[1, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDice {
    pub heads: bool,
    pub value: u32,
}

impl FixedDice {
    /// Heads, and every roll is 1: offsets are always +1, every corrosion
    /// check passes, and color jitter is minimal.
    #[must_use]
    pub fn low() -> Self {
        Self {
            heads: true,
            value: 1,
        }
    }

    /// Heads, and every roll is the maximum: corrosion never succeeds.
    #[must_use]
    pub fn high() -> Self {
        Self {
            heads: true,
            value: u32::MAX,
        }
    }
}

impl Dice for FixedDice {
    fn coin(&mut self) -> bool {
        self.heads
    }

    fn roll(&mut self, max: u32) -> u32 {
        self.value.clamp(1, max.max(1))
    }
}
