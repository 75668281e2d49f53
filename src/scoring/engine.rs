//! The scoring algorithm.
//!
//! Builds a face-frequency map and walks the combination ladder in strict
//! priority order. Higher-value combinations are checked first: a
//! four-of-a-kind roll also contains pairs, so first match wins.

use rustc_hash::FxHashMap;

use super::{Combination, Dice};

/// Score a five-die roll.
///
/// Pure and order-insensitive: permuting the dice never changes the result.
///
/// ```
/// use dice_knockout::scoring::{evaluate, Combination};
///
/// let (score, combination) = evaluate([3, 3, 3, 2, 2]);
/// assert_eq!(score, 1500); // 500 x the triple's face
/// assert_eq!(combination, Combination::FullHouse);
/// ```
#[must_use]
pub fn evaluate(dice: Dice) -> (u32, Combination) {
    let mut counts: FxHashMap<u8, u8> = FxHashMap::default();
    for &face in &dice {
        *counts.entry(face).or_insert(0) += 1;
    }

    // (face, count) groups ordered by count descending, then face descending,
    // so groups[0] is always the face that multiplies the base and the
    // two-pair rule picks the higher pair for free.
    let mut groups: Vec<(u8, u8)> = counts.into_iter().collect();
    groups.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

    let (top_face, top_count) = groups[0];
    let second_is_pair = matches!(groups.get(1), Some(&(_, 2)));

    if top_count == 5 {
        return (5000 * u32::from(top_face), Combination::FiveOfAKind);
    }

    let mut sorted = dice;
    sorted.sort_unstable();
    if sorted == [1, 2, 3, 4, 5] || sorted == [2, 3, 4, 5, 6] {
        return (10_000, Combination::Straight);
    }

    if top_count == 4 {
        return (1500 * u32::from(top_face), Combination::FourOfAKind);
    }

    if top_count == 3 {
        if second_is_pair {
            return (500 * u32::from(top_face), Combination::FullHouse);
        }
        return (250 * u32::from(top_face), Combination::ThreeOfAKind);
    }

    if top_count == 2 {
        if second_is_pair {
            return (100 * u32::from(top_face), Combination::TwoPairs);
        }
        return (10 * u32::from(top_face), Combination::OnePair);
    }

    (dice.iter().map(|&d| u32::from(d)).sum(), Combination::Nothing)
}
