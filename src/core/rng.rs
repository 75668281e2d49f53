//! Dice randomness: injected roll sources.
//!
//! The controller never calls a global RNG. It is generic over [`RollSource`]
//! so callers pick the source: [`DiceRng`] (seeded ChaCha8) in production,
//! [`ScriptedRolls`] when a test needs exact dice.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

use crate::scoring::{Dice, DICE_PER_ROLL, MAX_FACE, MIN_FACE};

/// Source of five-die throws.
pub trait RollSource {
    /// Produce one throw: five dice, each in 1..=6.
    fn roll_dice(&mut self) -> Dice;
}

/// Production roll source backed by a seeded ChaCha8 stream.
///
/// Deterministic: the same seed produces the same sequence of throws.
///
/// ```
/// use dice_knockout::{DiceRng, RollSource};
///
/// let mut a = DiceRng::new(42);
/// let mut b = DiceRng::new(42);
/// assert_eq!(a.roll_dice(), b.roll_dice());
/// ```
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
}

impl DiceRng {
    /// Create a roll source with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a roll source seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl RollSource for DiceRng {
    fn roll_dice(&mut self) -> Dice {
        let mut dice = [0u8; DICE_PER_ROLL];
        for die in &mut dice {
            // Each die independent and uniform.
            *die = self.inner.gen_range(MIN_FACE..=MAX_FACE);
        }
        dice
    }
}

/// Scripted roll source that replays a fixed sequence of throws.
///
/// Used by tests and demos to drive exact elimination scenarios.
///
/// # Panics
///
/// [`RollSource::roll_dice`] panics when the script is exhausted; a scripted
/// scenario asking for more throws than it supplied is a bug in the script.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRolls {
    queue: VecDeque<Dice>,
}

impl ScriptedRolls {
    /// Create a script from throws in play order.
    #[must_use]
    pub fn new(rolls: impl IntoIterator<Item = Dice>) -> Self {
        Self {
            queue: rolls.into_iter().collect(),
        }
    }

    /// Append a throw to the end of the script.
    pub fn push(&mut self, dice: Dice) {
        self.queue.push_back(dice);
    }

    /// Throws left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl RollSource for ScriptedRolls {
    fn roll_dice(&mut self) -> Dice {
        self.queue.pop_front().expect("scripted rolls exhausted")
    }
}
