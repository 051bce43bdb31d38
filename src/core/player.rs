//! Player identity and per-player score record.
//!
//! ## PlayerId
//!
//! Registration-order index of a player, stable for the whole session.
//!
//! ## Player
//!
//! Name, behavior kind, banked and unbanked scores, roll history.
//! Only the engine mutates a `Player`, and only during that player's turn.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PigError;

/// Player identifier in registration order.
///
/// Player indices are 0-based: the first registered player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use rust_pig::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// How a player decides between rolling and holding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Actions come from the human action channel.
    Human,
    /// Actions come from the automated hold-at policy.
    Computer,
}

impl PlayerKind {
    /// Lowercase name as accepted on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Computer => "computer",
        }
    }
}

impl FromStr for PlayerKind {
    type Err = PigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "computer" => Ok(PlayerKind::Computer),
            other => Err(PigError::config(format!(
                "Not a valid player type: {other:?}. Valid types: computer or human."
            ))),
        }
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score record for one player.
///
/// `total_score` is banked and never decreases. `turn_score` is the unbanked
/// amount of the current turn and is zeroed on every bank or forfeit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    total_score: u32,
    turn_score: u32,
    total_rolls: u32,
    last_roll: u8,
}

impl Player {
    /// Create a player. Surrounding whitespace is trimmed from the name.
    pub fn new(name: impl AsRef<str>, kind: PlayerKind) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            kind,
            total_score: 0,
            turn_score: 0,
            total_rolls: 0,
            last_roll: 0,
        }
    }

    pub fn human(name: impl AsRef<str>) -> Self {
        Self::new(name, PlayerKind::Human)
    }

    pub fn computer(name: impl AsRef<str>) -> Self {
        Self::new(name, PlayerKind::Computer)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    #[must_use]
    pub fn turn_score(&self) -> u32 {
        self.turn_score
    }

    #[must_use]
    pub fn total_rolls(&self) -> u32 {
        self.total_rolls
    }

    /// Last face rolled, 0 before the first roll.
    #[must_use]
    pub fn last_roll(&self) -> u8 {
        self.last_roll
    }

    /// Banked plus unbanked score.
    #[must_use]
    pub fn provisional_total(&self) -> u32 {
        self.total_score + self.turn_score
    }

    /// Count a roll and remember its face.
    pub fn record_roll(&mut self, face: u8) {
        self.total_rolls += 1;
        self.last_roll = face;
    }

    /// Add a non-1 face to the unbanked turn score.
    pub fn add_to_turn(&mut self, face: u8) {
        self.turn_score += u32::from(face);
    }

    /// Lose the unbanked turn score.
    ///
    /// The zeroed turn score is still committed, so the forfeit is a bank
    /// point that leaves `total_score` unchanged.
    pub fn forfeit_turn(&mut self) {
        self.turn_score = 0;
        self.bank_turn();
    }

    /// Commit the unbanked turn score into the total, then zero it.
    ///
    /// Returns the amount banked.
    pub fn bank_turn(&mut self) -> u32 {
        let banked = self.turn_score;
        self.total_score += banked;
        self.turn_score = 0;
        banked
    }
}
