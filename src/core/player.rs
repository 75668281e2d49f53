//! Player identification and roster entries.
//!
//! ## PlayerId
//!
//! Stable 1-based identifier assigned at creation, in seating order.
//!
//! ## Player
//!
//! One seat at the table: name, cumulative score, elimination flag, and the
//! roll recorded this round (if any).

use serde::{Deserialize, Serialize};

use super::roll::Roll;

/// Player identifier, 1-based and stable for the session lifetime.
///
/// ```
/// use dice_knockout::PlayerId;
///
/// let first = PlayerId::new(1);
/// assert_eq!(first.index(), 0);
/// assert_eq!(format!("{}", first), "Player 1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID. The first player is `PlayerId(1)`.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Seating index of this player (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One player's state within a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable id, 1-based, assigned at creation.
    pub id: PlayerId,

    /// Display name, stored trimmed, unique within the session.
    pub name: String,

    /// Cumulative score. Monotonically non-decreasing: rolls only add.
    pub total_score: u32,

    /// Whether this player has been knocked out.
    pub eliminated: bool,

    /// The roll recorded this round, cleared when the round resolves.
    pub last_roll: Option<Roll>,
}

impl Player {
    /// Create a fresh player with no score and no roll.
    #[must_use]
    pub fn new(id: PlayerId, name: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
            total_score: 0,
            eliminated: false,
            last_roll: None,
        }
    }

    /// Whether this player is still in contention.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.eliminated
    }
}
