//! Human and automated turn policies.

use tracing::{debug, warn};

use crate::core::{Player, PigError, PlayerKind, TurnAction, GREED_CEILING, WINNING_SCORE};

use super::input::ActionInput;

/// Prompt shown to a human at each decision point.
pub const HUMAN_PROMPT: &str = "Please enter 'r' to roll or 'h' to hold. Your Choice? ";

// =============================================================================
// Automated Policy
// =============================================================================

/// Hold-at decision for the automated player.
///
/// Rolls while the turn score is below both the greed ceiling and the points
/// still missing to `WINNING_SCORE`; holds otherwise.
///
/// ```
/// use rust_pig::policy::automated_action;
/// use rust_pig::core::TurnAction;
///
/// assert_eq!(automated_action(80, 0), TurnAction::Roll);
/// assert_eq!(automated_action(80, 20), TurnAction::Hold);
/// assert_eq!(automated_action(0, 25), TurnAction::Hold);
/// ```
#[must_use]
pub fn automated_action(total_score: u32, turn_score: u32) -> TurnAction {
    let missing = WINNING_SCORE.saturating_sub(total_score + turn_score);
    if turn_score < GREED_CEILING.min(missing) {
        TurnAction::Roll
    } else {
        TurnAction::Hold
    }
}

// =============================================================================
// Turn Policy
// =============================================================================

/// Decision strategy, fixed for the player's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnPolicy {
    Human,
    Automated,
}

impl TurnPolicy {
    /// Policy for a player kind.
    #[must_use]
    pub fn for_kind(kind: PlayerKind) -> Self {
        match kind {
            PlayerKind::Human => TurnPolicy::Human,
            PlayerKind::Computer => TurnPolicy::Automated,
        }
    }

    /// Policy for a player.
    #[must_use]
    pub fn of(player: &Player) -> Self {
        Self::for_kind(player.kind())
    }

    /// Ask for the next action.
    ///
    /// Returns `Ok(None)` when a human supplied an unrecognized token; the
    /// caller reports it and asks again. Automated players never do.
    pub fn request_action(
        self,
        player: &Player,
        input: &mut dyn ActionInput,
    ) -> Result<Option<TurnAction>, PigError> {
        match self {
            TurnPolicy::Human => {
                let token = input.read_token(player, HUMAN_PROMPT)?;
                let action = TurnAction::parse(&token);
                if action.is_none() {
                    warn!(player = player.name(), token = %token, "invalid action token");
                }
                Ok(action)
            }
            TurnPolicy::Automated => {
                let action = automated_action(player.total_score(), player.turn_score());
                debug!(
                    player = player.name(),
                    total = player.total_score(),
                    turn = player.turn_score(),
                    ?action,
                    "automated decision"
                );
                Ok(Some(action))
            }
        }
    }
}
