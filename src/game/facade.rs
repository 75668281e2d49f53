//! Session facade: the surface a rendering layer talks to.
//!
//! [`DiceGame`] forwards commands to the controller and exposes read-only
//! snapshots. It computes nothing itself; a view derives every visual flag
//! ("show roll button", "waiting for next player") from these queries and
//! owns its animation state entirely.

use super::controller::{GameController, GameResult, TurnOutcome};
use super::error::{GameError, IllegalStateError};
use super::session::Phase;
use crate::core::{DiceRng, GameSettings, Player, Roll};

/// One game of dice knockout, from setup to game over.
///
/// ```
/// use dice_knockout::{DiceGame, GameSettings, Phase};
///
/// let mut game = DiceGame::with_seed(7);
/// game.create_session(GameSettings::new(2));
/// game.add_player("Ada").unwrap();
/// game.add_player("Grace").unwrap();
/// assert_eq!(game.phase(), Phase::Playing);
///
/// let roll = game.roll().unwrap();
/// assert!(roll.score >= 5);
///
/// game.advance().unwrap();
/// assert_eq!(game.current_player().map(|p| p.name.as_str()), Some("Grace"));
/// ```
pub struct DiceGame {
    controller: GameController<DiceRng>,
}

impl Default for DiceGame {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceGame {
    /// Create a game with default settings and an entropy-seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        Self {
            controller: GameController::new(GameSettings::default()),
        }
    }

    /// Create a game with default settings and a fixed seed, for
    /// reproducible sessions.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            controller: GameController::with_seed(GameSettings::default(), seed),
        }
    }

    // === Commands ===

    /// Discard any current session and start a fresh one.
    pub fn create_session(&mut self, settings: GameSettings) {
        self.controller.start_session(settings);
    }

    /// Add a player; returns a snapshot of the seated player.
    pub fn add_player(&mut self, name: &str) -> Result<Player, GameError> {
        self.controller.add_player(name).map(Player::clone)
    }

    /// Roll for the player on turn.
    pub fn roll(&mut self) -> Result<Roll, IllegalStateError> {
        self.controller.roll_current_player()
    }

    /// Hand the turn onward, resolving the round when it is complete.
    pub fn advance(&mut self) -> Result<TurnOutcome, IllegalStateError> {
        self.controller.advance_turn()
    }

    /// Back to an empty Setup with default settings.
    pub fn reset(&mut self) {
        self.controller.reset();
    }

    // === Queries ===

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.controller.session().phase()
    }

    /// All players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        self.controller.session().players()
    }

    /// The player on turn, while Playing.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.controller.session().current_player()
    }

    /// Current round, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.controller.session().round()
    }

    /// Players still in contention.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.controller.session().active_count()
    }

    /// Active players by total score descending, seating order on ties.
    #[must_use]
    pub fn standings(&self) -> Vec<&Player> {
        self.controller.standings()
    }

    /// All players by total score descending, for the game-over screen.
    #[must_use]
    pub fn final_rankings(&self) -> Vec<&Player> {
        self.controller.final_rankings()
    }

    /// The sole survivor, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.controller.winner()
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.controller.result()
    }
}
