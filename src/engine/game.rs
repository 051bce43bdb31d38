//! Untimed Pig: first player to reach `WINNING_SCORE` wins.

use tracing::{debug, info};

use crate::core::{DiceSource, Die, PigError, Rotation, TurnAction, TurnState};
use crate::narration::{Narration, Narrator};
use crate::policy::{ActionInput, TurnPolicy};
use crate::rules::{apply_hold, apply_roll, GameSummary, Ranking, WinCondition, Winner};

/// Untimed game session.
///
/// Owns the rotation and the die. `active_turn` is true while the current
/// player may still act; `end_game` becomes true at a terminal condition.
pub struct Game<D: DiceSource = Die> {
    rotation: Rotation,
    die: D,
    active_turn: bool,
    end_game: bool,
    turns: u32,
}

impl<D: DiceSource> Game<D> {
    /// Create a session. The first player in the rotation starts.
    pub fn new(rotation: Rotation, die: D) -> Self {
        Self {
            rotation,
            die,
            active_turn: false,
            end_game: false,
            turns: 0,
        }
    }

    #[must_use]
    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    #[must_use]
    pub fn die(&self) -> &D {
        &self.die
    }

    #[must_use]
    pub fn is_turn_active(&self) -> bool {
        self.active_turn
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.end_game
    }

    /// Turns started so far.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Play turns until a player reaches the winning score, then announce
    /// the winner and the ranking.
    pub fn start(
        &mut self,
        input: &mut dyn ActionInput,
        narrator: &mut dyn Narrator,
    ) -> Result<GameSummary, PigError> {
        info!(players = self.rotation.len(), "untimed game started");

        loop {
            self.begin_turn(narrator);
            while self.active_turn && !self.end_game {
                self.play_action(input, narrator)?;
            }
            if self.end_game {
                break;
            }
            self.next_turn();
        }

        Ok(self.finish(WinCondition::ReachedTarget, narrator))
    }

    /// Open the current player's turn.
    pub fn begin_turn(&mut self, narrator: &mut dyn Narrator) {
        self.active_turn = true;
        self.turns += 1;

        let player = self.rotation.current();
        debug!(turn = self.turns, player = player.name(), "turn started");
        narrator.narrate(Narration::TurnStarted {
            name: player.name().to_string(),
            total: player.total_score(),
        });
    }

    /// Hand the turn to the next player.
    pub fn next_turn(&mut self) {
        self.rotation.advance();
    }

    /// Ask the current player for one action and resolve it.
    ///
    /// An invalid token changes nothing and leaves the turn `Rolling`.
    pub fn play_action(
        &mut self,
        input: &mut dyn ActionInput,
        narrator: &mut dyn Narrator,
    ) -> Result<TurnState, PigError> {
        let policy = TurnPolicy::of(self.rotation.current());
        let action = policy.request_action(self.rotation.current(), input)?;
        self.resolve(action, narrator)
    }

    /// Resolve an already chosen action for the current player.
    ///
    /// `None` is an invalid action.
    pub fn resolve(
        &mut self,
        action: Option<TurnAction>,
        narrator: &mut dyn Narrator,
    ) -> Result<TurnState, PigError> {
        let state = match action {
            None => {
                narrator.narrate(Narration::InvalidAction);
                TurnState::Rolling
            }
            Some(TurnAction::Roll) => {
                let face = self.die.roll()?;
                let player = self.rotation.current_mut();
                let state = apply_roll(player, face);
                match state {
                    TurnState::Rolling => narrator.narrate(Narration::Rolled {
                        name: player.name().to_string(),
                        face,
                        turn: player.turn_score(),
                        provisional: player.provisional_total(),
                    }),
                    TurnState::Forfeited => narrator.narrate(Narration::Forfeited {
                        name: player.name().to_string(),
                        face,
                        total: player.total_score(),
                    }),
                    TurnState::Banked | TurnState::GameWon => {}
                }
                debug!(player = player.name(), face, ?state, "rolled");
                state
            }
            Some(TurnAction::Hold) => {
                let player = self.rotation.current_mut();
                let banked = apply_hold(player);
                narrator.narrate(Narration::Held {
                    name: player.name().to_string(),
                    turn: banked,
                    total: player.total_score(),
                });
                debug!(player = player.name(), banked, "held");
                TurnState::Banked
            }
        };

        match state {
            TurnState::Rolling => {}
            TurnState::Forfeited | TurnState::Banked => self.active_turn = false,
            TurnState::GameWon => {
                self.active_turn = false;
                self.end_game = true;
            }
        }
        Ok(state)
    }

    /// Stop the session immediately, mid-turn if need be.
    pub fn force_end(&mut self) {
        self.active_turn = false;
        self.end_game = true;
    }

    /// Rank the players, announce the winner, print the ranking.
    pub fn finish(&self, condition: WinCondition, narrator: &mut dyn Narrator) -> GameSummary {
        let ranking = Ranking::from_rotation(&self.rotation);
        let winner = Winner::from_ranking(&ranking, condition);

        narrator.narrate(match condition {
            WinCondition::ReachedTarget => Narration::Winner {
                name: winner.name.clone(),
                last_roll: winner.last_roll,
                total: winner.total_score,
            },
            WinCondition::HighestScoreAtDeadline => Narration::WinnerAtDeadline {
                name: winner.name.clone(),
                total: winner.total_score,
            },
        });
        narrator.narrate(Narration::ResultsHeader);
        for standing in ranking.iter() {
            narrator.narrate(Narration::standing(standing));
        }

        info!(
            winner = %winner.name,
            score = winner.total_score,
            turns = self.turns,
            ?condition,
            "game over"
        );

        GameSummary {
            winner,
            ranking,
            turns: self.turns,
        }
    }
}
