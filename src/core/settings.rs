//! Session configuration.

use serde::{Deserialize, Serialize};

/// Smallest playable roster.
pub const MIN_PLAYERS: usize = 2;

/// Largest playable roster.
pub const MAX_PLAYERS: usize = 9;

/// Game variant. Only [`GameType::PlayerVsPlayer`] is playable; the others
/// are reserved and exist so settings round-trip without loss.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    /// Free-for-all elimination between human players.
    #[default]
    PlayerVsPlayer,
    /// Reserved: dealer-driven variant.
    VsDealer,
    /// Reserved: wagering variant.
    Gambling,
}

/// Settings fixed at session creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Seats at the table; the session leaves Setup when the roster reaches
    /// this count.
    pub player_count: usize,

    /// Game variant.
    pub game_type: GameType,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            game_type: GameType::default(),
        }
    }
}

impl GameSettings {
    /// Create settings for a player-vs-player table.
    ///
    /// # Panics
    ///
    /// Panics if `player_count` is outside 2..=9. An out-of-range count is a
    /// caller bug, not a game error.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count),
            "Player count must be 2-9"
        );
        Self {
            player_count,
            game_type: GameType::default(),
        }
    }

    /// Set the game variant.
    #[must_use]
    pub fn with_game_type(mut self, game_type: GameType) -> Self {
        self.game_type = game_type;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GameSettings::default();
        assert_eq!(settings.player_count, 2);
        assert_eq!(settings.game_type, GameType::PlayerVsPlayer);
    }

    #[test]
    fn test_new_accepts_full_range() {
        for count in MIN_PLAYERS..=MAX_PLAYERS {
            assert_eq!(GameSettings::new(count).player_count, count);
        }
    }

    #[test]
    #[should_panic(expected = "Player count must be 2-9")]
    fn test_new_rejects_one_player() {
        let _ = GameSettings::new(1);
    }

    #[test]
    #[should_panic(expected = "Player count must be 2-9")]
    fn test_new_rejects_ten_players() {
        let _ = GameSettings::new(10);
    }

    #[test]
    fn test_with_game_type() {
        let settings = GameSettings::new(4).with_game_type(GameType::VsDealer);
        assert_eq!(settings.game_type, GameType::VsDealer);
    }

    #[test]
    fn test_serialization() {
        let settings = GameSettings::new(5);
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: GameSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, deserialized);
    }
}
