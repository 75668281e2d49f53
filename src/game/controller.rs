//! Turn/round controller: the single writer of session state.
//!
//! ## Turn flow
//!
//! While Playing, the cycle per turn is `roll_current_player` then
//! `advance_turn`. When every active player has rolled, `advance_turn`
//! resolves the round: every active player tied at the lowest cumulative
//! score is eliminated, all recorded rolls are cleared, and either the next
//! round starts or the game ends.
//!
//! ## Failure semantics
//!
//! Every command either fully applies or has no effect. Rolling out of turn,
//! rolling twice, or adding a player after Setup is rejected with an
//! [`IllegalStateError`], never silently ignored.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::{GameError, IllegalStateError, ValidationError, MIN_NAME_LEN};
use super::session::{Phase, Session};
use crate::core::{DiceRng, GameSettings, Player, PlayerId, Roll, RollSource};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Sole survivor.
    Winner(PlayerId),
    /// Every remaining player tied at the minimum and was eliminated in the
    /// same round; nobody survived.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// What a successful `advance_turn` did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The turn passed to the next active player.
    NextPlayer(PlayerId),
    /// The round resolved and play continues.
    RoundComplete {
        /// Players eliminated at the round's low-score cutoff.
        eliminated: Vec<PlayerId>,
        /// The round now in progress.
        round: u32,
    },
    /// The round resolved and ended the game.
    GameOver {
        /// Players eliminated at the final cutoff.
        eliminated: Vec<PlayerId>,
        /// Winner, or a draw if the whole field was eliminated at once.
        result: GameResult,
    },
}

/// Owns a [`Session`] and a roll source; the only writer of game state.
///
/// Generic over [`RollSource`] so tests can script exact dice. Production
/// code uses the [`DiceRng`] default.
pub struct GameController<R = DiceRng> {
    session: Session,
    rolls: R,
}

impl GameController<DiceRng> {
    /// Create a controller with an entropy-seeded roll source.
    #[must_use]
    pub fn new(settings: GameSettings) -> Self {
        Self::with_rolls(settings, DiceRng::from_entropy())
    }

    /// Create a controller with a fixed seed. Same seed, same game.
    #[must_use]
    pub fn with_seed(settings: GameSettings, seed: u64) -> Self {
        Self::with_rolls(settings, DiceRng::new(seed))
    }
}

impl<R: RollSource> GameController<R> {
    /// Create a controller with an explicit roll source.
    #[must_use]
    pub fn with_rolls(settings: GameSettings, rolls: R) -> Self {
        Self {
            session: Session::new(settings),
            rolls,
        }
    }

    /// Read-only view of the session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Discard the session and start a fresh one with the given settings.
    /// The roll source is retained; RNG state is not session state.
    pub fn start_session(&mut self, settings: GameSettings) {
        self.session = Session::new(settings);
        info!(player_count = settings.player_count, "session created");
    }

    /// Discard the session and return to an empty Setup with default
    /// settings.
    pub fn reset(&mut self) {
        self.session = Session::new(GameSettings::default());
        info!("session reset");
    }

    /// Add a player to the roster.
    ///
    /// Names are trimmed before validation and storage. Rejects names shorter
    /// than [`MIN_NAME_LEN`] characters and exact (case-sensitive) duplicates;
    /// a rejection leaves the roster unchanged. Filling the roster transitions
    /// the session to Playing with the first seat on turn.
    pub fn add_player(&mut self, name: &str) -> Result<&Player, GameError> {
        if self.session.phase != Phase::Setup {
            return Err(IllegalStateError::WrongPhase {
                expected: Phase::Setup,
                actual: self.session.phase,
            }
            .into());
        }

        let trimmed = name.trim();
        if trimmed.chars().count() < MIN_NAME_LEN {
            return Err(ValidationError::NameTooShort.into());
        }
        if self.session.players.iter().any(|p| p.name == trimmed) {
            return Err(ValidationError::DuplicateName(trimmed.to_owned()).into());
        }

        let id = PlayerId::new(self.session.players.len() as u8 + 1);
        self.session.players.push(Player::new(id, trimmed));
        debug!(%id, name = trimmed, "player joined");

        if self.session.players.len() == self.session.settings.player_count {
            self.session.phase = Phase::Playing;
            self.session.current_player_index = 0;
            info!(players = self.session.players.len(), "roster full, play begins");
        }

        Ok(&self.session.players[id.index()])
    }

    /// Roll five dice for the player on turn.
    ///
    /// The single mutation point for scores: evaluates the throw, adds the
    /// score to the player's total, and records the roll for this round. The
    /// final result is committed atomically; a view that animates the dice
    /// reveals this result progressively, it never re-rolls.
    pub fn roll_current_player(&mut self) -> Result<Roll, IllegalStateError> {
        if self.session.phase != Phase::Playing {
            return Err(IllegalStateError::WrongPhase {
                expected: Phase::Playing,
                actual: self.session.phase,
            });
        }

        let idx = self.session.current_player_index;
        let player = &self.session.players[idx];
        if player.eliminated {
            return Err(IllegalStateError::PlayerEliminated(player.id));
        }
        if player.last_roll.is_some() {
            return Err(IllegalStateError::AlreadyRolled(player.id));
        }

        let roll = Roll::evaluate(self.rolls.roll_dice());

        let player = &mut self.session.players[idx];
        player.total_score += roll.score;
        player.last_roll = Some(roll);
        debug!(
            player = %player.id,
            score = roll.score,
            combination = %roll.combination,
            total = player.total_score,
            "roll committed"
        );

        Ok(roll)
    }

    /// Hand the turn onward after a roll.
    ///
    /// If active players are still waiting to roll, scans forward circularly
    /// (skipping eliminated and already-rolled players) and reports
    /// [`TurnOutcome::NextPlayer`]. Once every active player has rolled, the
    /// round resolves instead. The scan is bounded by the roster length; if
    /// it exhausts without a candidate the invariant is broken and
    /// [`IllegalStateError::NoEligiblePlayer`] is returned rather than
    /// looping.
    pub fn advance_turn(&mut self) -> Result<TurnOutcome, IllegalStateError> {
        if self.session.phase != Phase::Playing {
            return Err(IllegalStateError::WrongPhase {
                expected: Phase::Playing,
                actual: self.session.phase,
            });
        }
        if self.session.players[self.session.current_player_index]
            .last_roll
            .is_none()
        {
            return Err(IllegalStateError::RollNotRecorded);
        }

        let active = self.session.active_count();
        let rolled = self
            .session
            .active_players()
            .filter(|p| p.last_roll.is_some())
            .count();

        if rolled == active && active > 1 {
            return Ok(self.complete_round());
        }

        let len = self.session.players.len();
        let start = self.session.current_player_index;
        for offset in 1..=len {
            let idx = (start + offset) % len;
            let candidate = &self.session.players[idx];
            if candidate.is_active() && candidate.last_roll.is_none() {
                let id = candidate.id;
                self.session.current_player_index = idx;
                debug!(player = %id, "turn passes");
                return Ok(TurnOutcome::NextPlayer(id));
            }
        }
        Err(IllegalStateError::NoEligiblePlayer)
    }

    /// Resolve the round: eliminate every active player tied at the minimum
    /// total, clear all recorded rolls, then either start the next round or
    /// end the game.
    fn complete_round(&mut self) -> TurnOutcome {
        let session = &mut self.session;

        let lowest = session
            .active_players()
            .map(|p| p.total_score)
            .min()
            .unwrap_or(0);

        let mut eliminated = Vec::new();
        for player in &mut session.players {
            if player.is_active() && player.total_score == lowest {
                player.eliminated = true;
                eliminated.push(player.id);
            }
            player.last_roll = None;
        }
        info!(round = session.round, ?eliminated, lowest, "round complete");

        let remaining: Vec<usize> = session
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_active())
            .map(|(i, _)| i)
            .collect();

        if remaining.len() <= 1 {
            session.phase = Phase::GameOver;
            let result = match remaining.first() {
                Some(&idx) => GameResult::Winner(session.players[idx].id),
                None => GameResult::Draw,
            };
            info!(?result, "game over");
            TurnOutcome::GameOver { eliminated, result }
        } else {
            session.round += 1;
            session.current_player_index = remaining[0];
            TurnOutcome::RoundComplete {
                eliminated,
                round: session.round,
            }
        }
    }

    // === Queries ===

    /// Active players ordered by total score descending; ties keep seating
    /// order (the sort is stable).
    #[must_use]
    pub fn standings(&self) -> Vec<&Player> {
        let mut standings: Vec<&Player> = self.session.active_players().collect();
        standings.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        standings
    }

    /// All players, eliminated included, ordered by total score descending.
    #[must_use]
    pub fn final_rankings(&self) -> Vec<&Player> {
        let mut rankings: Vec<&Player> = self.session.players.iter().collect();
        rankings.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        rankings
    }

    /// The sole survivor, once the game is over. `None` before GameOver and
    /// in the zero-survivor draw.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        if self.session.phase != Phase::GameOver {
            return None;
        }
        self.session.active_players().next()
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.session.phase != Phase::GameOver {
            return None;
        }
        Some(
            self.winner()
                .map_or(GameResult::Draw, |p| GameResult::Winner(p.id)),
        )
    }
}
