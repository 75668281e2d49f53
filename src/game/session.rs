//! Session state: the complete mutable state of one game instance.
//!
//! A session moves one way through `Setup -> Playing -> GameOver`. Reset
//! discards the session and starts a fresh one; an old session is never
//! rewound. Only [`GameController`](super::GameController) mutates a session;
//! everything public here is read-only.

use serde::{Deserialize, Serialize};

use crate::core::{GameSettings, Player};

/// Lifecycle phase of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Collecting players until the roster is full.
    Setup,
    /// Turns and rounds in progress.
    Playing,
    /// Terminal. A fresh session is required to play again.
    GameOver,
}

/// The complete state of one game instance.
///
/// `players` is in seating order (insertion order); `current_player_index`
/// refers to a non-eliminated player whenever the phase is `Playing`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub(crate) settings: GameSettings,
    pub(crate) players: Vec<Player>,
    pub(crate) current_player_index: usize,
    pub(crate) round: u32,
    pub(crate) phase: Phase,
}

impl Session {
    /// Create an empty session in Setup.
    pub(crate) fn new(settings: GameSettings) -> Self {
        Self {
            settings,
            players: Vec::with_capacity(settings.player_count),
            current_player_index: 0,
            round: 1,
            phase: Phase::Setup,
        }
    }

    /// Settings this session was created with.
    #[must_use]
    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current round, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// All players in seating order, eliminated ones included.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Seating index of the player whose turn it is.
    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// The player whose turn it is. `None` outside of Playing.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        if self.phase == Phase::Playing {
            self.players.get(self.current_player_index)
        } else {
            None
        }
    }

    /// Players still in contention, in seating order.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_active())
    }

    /// Number of players still in contention.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active_players().count()
    }
}
