//! Error taxonomy.
//!
//! Two kinds of failure, both local to a single command and both leaving the
//! session untouched:
//!
//! - [`ValidationError`]: recoverable input rejection, surfaced to the caller
//!   for re-prompting.
//! - [`IllegalStateError`]: a caller contract violation (wrong phase,
//!   out-of-turn roll). Correct callers never trigger these.

use thiserror::Error;

use super::session::Phase;
use crate::core::PlayerId;

/// Minimum trimmed name length accepted by `add_player`.
pub const MIN_NAME_LEN: usize = 2;

/// Recoverable rejection of a player name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Trimmed name is shorter than [`MIN_NAME_LEN`] characters.
    #[error("player name must be at least 2 characters")]
    NameTooShort,

    /// Another player already uses this exact name.
    #[error("player name `{0}` is already taken")]
    DuplicateName(String),
}

/// A command was issued in a state that forbids it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalStateError {
    /// The command is only legal in a different phase.
    #[error("expected phase {expected:?} but session is in {actual:?}")]
    WrongPhase {
        /// Phase the command requires.
        expected: Phase,
        /// Phase the session is actually in.
        actual: Phase,
    },

    /// The player already has a roll recorded this round.
    #[error("{0} has already rolled this round")]
    AlreadyRolled(PlayerId),

    /// The turn pointer landed on an eliminated player. Indicates a broken
    /// invariant; correct sessions never produce this.
    #[error("{0} is eliminated and cannot act")]
    PlayerEliminated(PlayerId),

    /// `advance_turn` was called before the current player rolled.
    #[error("the current player has not rolled yet")]
    RollNotRecorded,

    /// The turn scan found no active, un-rolled player to hand the turn to.
    #[error("no eligible player remains to take the next turn")]
    NoEligiblePlayer,
}

/// Umbrella error for commands that can fail either way.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Recoverable input rejection.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Caller contract violation.
    #[error(transparent)]
    IllegalState(#[from] IllegalStateError),
}
