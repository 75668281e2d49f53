//! Scoring engine properties: bounds, order-insensitivity, and an exhaustive
//! sweep of all 6^5 hands against an independent recount.

use dice_knockout::{evaluate, Combination, Dice};
use proptest::prelude::*;

proptest! {
    #[test]
    fn score_within_bounds(dice in prop::array::uniform5(1u8..=6)) {
        let (score, _) = evaluate(dice);
        // Lowest hand is a pair of ones (10) or a five-distinct sum (>= 16);
        // highest is five sixes (30000).
        prop_assert!(score >= 5);
        prop_assert!(score <= 30_000);
    }

    #[test]
    fn score_is_order_insensitive(dice in prop::array::uniform5(1u8..=6), rot in 0usize..5) {
        let mut rotated = dice;
        rotated.rotate_left(rot);
        prop_assert_eq!(evaluate(rotated), evaluate(dice));

        let mut reversed = dice;
        reversed.reverse();
        prop_assert_eq!(evaluate(reversed), evaluate(dice));
    }

    #[test]
    fn score_matches_combination_base(dice in prop::array::uniform5(1u8..=6)) {
        let (score, combination) = evaluate(dice);
        let base_ok = match combination {
            Combination::FiveOfAKind => score % 5000 == 0,
            Combination::Straight => score == 10_000,
            Combination::FourOfAKind => score % 1500 == 0,
            Combination::FullHouse => score % 500 == 0,
            Combination::ThreeOfAKind => score % 250 == 0,
            Combination::TwoPairs => score % 100 == 0,
            Combination::OnePair => score % 10 == 0,
            Combination::Nothing => score == dice.iter().map(|&d| u32::from(d)).sum::<u32>(),
        };
        prop_assert!(base_ok, "score {} inconsistent with {:?}", score, combination);
    }
}

/// Independent recount of a hand using fixed-size face bins, used as an
/// oracle against the production scorer.
fn oracle(dice: Dice) -> (u32, Combination) {
    let mut bins = [0u8; 6];
    for &d in &dice {
        bins[usize::from(d) - 1] += 1;
    }

    // Highest face wins ties, matching the two-pair rule.
    let face_with_count = |n: u8| {
        (1..=6u8)
            .rev()
            .find(|&f| bins[usize::from(f) - 1] == n)
            .map(u32::from)
    };

    if let Some(face) = face_with_count(5) {
        return (5000 * face, Combination::FiveOfAKind);
    }
    if bins == [1, 1, 1, 1, 1, 0] || bins == [0, 1, 1, 1, 1, 1] {
        return (10_000, Combination::Straight);
    }
    if let Some(face) = face_with_count(4) {
        return (1500 * face, Combination::FourOfAKind);
    }
    if let Some(face) = face_with_count(3) {
        if face_with_count(2).is_some() {
            return (500 * face, Combination::FullHouse);
        }
        return (250 * face, Combination::ThreeOfAKind);
    }
    let pairs: Vec<u32> = (1..=6u8)
        .filter(|&f| bins[usize::from(f) - 1] == 2)
        .map(u32::from)
        .collect();
    match pairs.as_slice() {
        [_, high] => (100 * high, Combination::TwoPairs),
        [face] => (10 * face, Combination::OnePair),
        _ => (
            dice.iter().map(|&d| u32::from(d)).sum(),
            Combination::Nothing,
        ),
    }
}

#[test]
fn test_exhaustive_parity_all_hands() {
    // 6^5 = 7776 hands.
    for a in 1u8..=6 {
        for b in 1u8..=6 {
            for c in 1u8..=6 {
                for d in 1u8..=6 {
                    for e in 1u8..=6 {
                        let dice = [a, b, c, d, e];
                        assert_eq!(evaluate(dice), oracle(dice), "mismatch for {:?}", dice);
                    }
                }
            }
        }
    }
}

#[test]
fn test_score_table_anchor_hands() {
    assert_eq!(evaluate([1, 1, 1, 1, 1]).0, 5000);
    assert_eq!(evaluate([6, 6, 6, 6, 6]).0, 30_000);
    assert_eq!(evaluate([1, 2, 3, 4, 5]).0, 10_000);
    assert_eq!(evaluate([2, 3, 4, 5, 6]).0, 10_000);
    assert_eq!(evaluate([5, 5, 5, 5, 3]).0, 1500 * 5);
    assert_eq!(evaluate([3, 3, 3, 2, 2]).0, 500 * 3);
    assert_eq!(evaluate([3, 3, 2, 2, 4]).0, 100 * 3);
    assert_eq!(evaluate([2, 2, 6, 5, 1]).0, 10 * 2);
    assert_eq!(evaluate([1, 2, 3, 4, 6]).0, 16);
}
