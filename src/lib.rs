//! # dice-knockout
//!
//! A turn-based dice elimination game engine.
//!
//! Each round every active player rolls five dice and a score is computed
//! from the resulting combination. At the end of a round the player(s) with
//! the lowest cumulative score are eliminated; play continues until one
//! player remains.
//!
//! ## Design Principles
//!
//! 1. **State machine over flags**: one explicit `Setup -> Playing ->
//!    GameOver` lifecycle. Rendering layers derive every visual flag from
//!    snapshots; they never mutate game state.
//!
//! 2. **Injected randomness**: the controller is generic over [`RollSource`],
//!    so tests substitute scripted dice and production uses a seeded
//!    ChaCha8 stream. Same seed, same game.
//!
//! 3. **Atomic commands**: every operation either fully applies or has no
//!    effect. Rejected commands leave the session untouched.
//!
//! ## Modules
//!
//! - `scoring`: pure classification of a five-die roll into score + label
//! - `core`: players, rolls, settings, roll sources
//! - `game`: session state machine, turn/round controller, facade

pub mod scoring;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::scoring::{evaluate, Combination, Dice, DICE_PER_ROLL, MAX_FACE, MIN_FACE};

pub use crate::core::{
    DiceRng, GameSettings, GameType, Player, PlayerId, Roll, RollSource, ScriptedRolls,
    MAX_PLAYERS, MIN_PLAYERS,
};

pub use crate::game::{
    DiceGame, GameController, GameError, GameResult, IllegalStateError, Phase, Session,
    TurnOutcome, ValidationError, MIN_NAME_LEN,
};
