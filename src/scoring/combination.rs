//! Named dice combinations.

use serde::{Deserialize, Serialize};

/// The named pattern a roll classifies as, highest-value first.
///
/// Produced by [`evaluate`](super::evaluate) alongside the score; rendering
/// layers display the label, they never re-derive it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Combination {
    /// All five dice show the same face.
    FiveOfAKind,
    /// The dice are exactly 1-2-3-4-5 or 2-3-4-5-6.
    Straight,
    /// Four dice share a face.
    FourOfAKind,
    /// A triple plus a pair.
    FullHouse,
    /// Three dice share a face, no pair beside them.
    ThreeOfAKind,
    /// Two distinct pairs.
    TwoPairs,
    /// A single pair.
    OnePair,
    /// No pattern; the roll scores its face sum.
    Nothing,
}

impl Combination {
    /// Human-readable label for the rendering layer.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Combination::FiveOfAKind => "Five of a Kind!",
            Combination::Straight => "Straight!",
            Combination::FourOfAKind => "Four of a Kind",
            Combination::FullHouse => "Full House",
            Combination::ThreeOfAKind => "Three of a Kind",
            Combination::TwoPairs => "Two Pairs",
            Combination::OnePair => "One Pair",
            Combination::Nothing => "No Combination",
        }
    }
}

impl std::fmt::Display for Combination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
