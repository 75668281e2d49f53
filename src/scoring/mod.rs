//! Dice scoring: pure classification of a five-die roll.
//!
//! The scoring engine is a leaf with no dependencies on the rest of the
//! crate. [`evaluate`] maps a roll to a score and a [`Combination`] label;
//! it is deterministic, order-insensitive, and has no side effects.

pub mod combination;
pub mod engine;

pub use combination::Combination;
pub use engine::evaluate;

/// Number of dice in a roll.
pub const DICE_PER_ROLL: usize = 5;

/// Lowest die face.
pub const MIN_FACE: u8 = 1;

/// Highest die face.
pub const MAX_FACE: u8 = 6;

/// A roll's dice, in the order they were thrown.
pub type Dice = [u8; DICE_PER_ROLL];
