//! The outcome of a single five-die throw.

use serde::{Deserialize, Serialize};

use crate::scoring::{self, Combination, Dice};

/// A committed throw: the dice, the score they earned, and the combination
/// label the score came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    /// The dice, in the order they were thrown.
    pub dice: Dice,

    /// Score awarded for this throw.
    pub score: u32,

    /// The pattern the throw classified as.
    pub combination: Combination,
}

impl Roll {
    /// Score a throw through the scoring engine.
    #[must_use]
    pub fn evaluate(dice: Dice) -> Self {
        let (score, combination) = scoring::evaluate(dice);
        Self {
            dice,
            score,
            combination,
        }
    }
}
