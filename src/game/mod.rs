//! The game state machine: session, turn/round controller, facade.
//!
//! - [`Session`] holds the mutable state of one game from setup to game over.
//! - [`GameController`] is the only writer: roster management, turn
//!   sequencing, round resolution, elimination.
//! - [`DiceGame`] is the thin facade a rendering layer talks to.

pub mod controller;
pub mod error;
pub mod facade;
pub mod session;

pub use controller::{GameController, GameResult, TurnOutcome};
pub use error::{GameError, IllegalStateError, ValidationError, MIN_NAME_LEN};
pub use facade::DiceGame;
pub use session::{Phase, Session};
