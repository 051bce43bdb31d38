//! Session configuration and fixed rule constants.
//!
//! The startup layer fills a `GameConfig`:
//! - `PlayerSpec`: display name + behavior kind, in registration order
//! - `timed`: selects the 60-second variant
//! - `seed`: fixed die seed, or `None` for OS entropy
//!
//! Win threshold, greed ceiling and time limit are rules, not settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::PigError;
use super::player::{Player, PlayerKind};
use super::rotation::Rotation;

/// Banked-plus-unbanked score that ends the game.
pub const WINNING_SCORE: u32 = 100;

/// Turn score at which the automated policy always holds.
pub const GREED_CEILING: u32 = 25;

/// Length of a timed session.
pub const TIME_LIMIT: Duration = Duration::from_secs(60);

/// Name given to a computer player registered at 1-based `position`.
#[must_use]
pub fn computer_name(position: usize) -> String {
    format!("Computer [Player {position}]")
}

/// One player to register.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    /// Display name; trimmed when the player is created.
    pub name: String,

    /// Human or computer.
    pub kind: PlayerKind,
}

impl PlayerSpec {
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Create the player record.
    #[must_use]
    pub fn to_player(&self) -> Player {
        Player::new(&self.name, self.kind)
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Players in registration (and turn) order.
    pub players: Vec<PlayerSpec>,

    /// Play the deadline-bounded variant.
    pub timed: bool,

    /// Die seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create an empty untimed configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player.
    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>, kind: PlayerKind) -> Self {
        self.players.push(PlayerSpec::new(name, kind));
        self
    }

    /// Select the timed variant.
    #[must_use]
    pub fn with_timed(mut self, timed: bool) -> Self {
        self.timed = timed;
        self
    }

    /// Fix the die seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configurations that cannot start a game.
    pub fn validate(&self) -> Result<(), PigError> {
        if self.players.len() < 2 {
            return Err(PigError::config(format!(
                "Pig needs at least 2 players, got {}",
                self.players.len()
            )));
        }
        if let Some(position) = self.players.iter().position(|p| p.name.trim().is_empty()) {
            return Err(PigError::config(format!(
                "Player {} has an empty name",
                position + 1
            )));
        }
        Ok(())
    }

    /// Validate and build the initial rotation.
    pub fn rotation(&self) -> Result<Rotation, PigError> {
        self.validate()?;
        Rotation::new(self.players.iter().map(PlayerSpec::to_player).collect())
    }
}
