//! Turn actions and per-turn states.
//!
//! A human supplies a single-character token per decision point:
//! - `"r"` = roll
//! - `"h"` = hold (bank the turn score)
//!
//! Any other token is an invalid action: nothing changes and the same player
//! is asked again.

use serde::{Deserialize, Serialize};

/// What a player does at a decision point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnAction {
    Roll,
    Hold,
}

impl TurnAction {
    /// Parse an action token, ignoring surrounding whitespace.
    ///
    /// ```
    /// use rust_pig::core::TurnAction;
    ///
    /// assert_eq!(TurnAction::parse("r"), Some(TurnAction::Roll));
    /// assert_eq!(TurnAction::parse(" h\n"), Some(TurnAction::Hold));
    /// assert_eq!(TurnAction::parse("roll"), None);
    /// ```
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim() {
            "r" => Some(TurnAction::Roll),
            "h" => Some(TurnAction::Hold),
            _ => None,
        }
    }

    /// The token that selects this action.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            TurnAction::Roll => "r",
            TurnAction::Hold => "h",
        }
    }
}

/// State of the current turn after resolving an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// The player may act again.
    Rolling,
    /// Rolled a 1; the unbanked turn score is lost.
    Forfeited,
    /// Held; the turn score was banked.
    Banked,
    /// The roll brought the player to the winning score.
    GameWon,
}

impl TurnState {
    /// Whether the turn is over.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, TurnState::Rolling)
    }
}
