//! Core data types: players, rolls, settings, roll sources.
//!
//! These are the building blocks the game module composes into a session.
//! None of them contain turn or round logic.

pub mod player;
pub mod rng;
pub mod roll;
pub mod settings;

pub use player::{Player, PlayerId};
pub use rng::{DiceRng, RollSource, ScriptedRolls};
pub use roll::Roll;
pub use settings::{GameSettings, GameType, MAX_PLAYERS, MIN_PLAYERS};
