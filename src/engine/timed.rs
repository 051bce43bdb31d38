//! Timed Pig: the same turns, bounded by a deadline.
//!
//! The deadline is `start + TIME_LIMIT`, fixed once when the session starts.
//! It is checked before every action and after every turn, never while a
//! human is deciding. Once it has passed, no further action is resolved and
//! the session ends mid-turn if need be.

use std::time::{Duration, Instant};

use tracing::info;

use crate::core::{DiceSource, Die, PigError, Rotation, TIME_LIMIT};
use crate::narration::{Narration, Narrator};
use crate::policy::ActionInput;
use crate::rules::{GameSummary, WinCondition};

use super::clock::{Clock, SystemClock};
use super::game::Game;

/// Whole seconds from `now` to `deadline`, rounded, never negative.
#[must_use]
pub fn seconds_left(deadline: Instant, now: Instant) -> u64 {
    deadline.saturating_duration_since(now).as_secs_f64().round() as u64
}

/// Deadline-bounded game session.
pub struct TimedGame<D: DiceSource = Die, C: Clock = SystemClock> {
    game: Game<D>,
    clock: C,
    limit: Duration,
    deadline: Option<Instant>,
}

impl<D: DiceSource> TimedGame<D, SystemClock> {
    /// Create a session timed by the wall clock.
    pub fn new(rotation: Rotation, die: D) -> Self {
        Self::with_clock(rotation, die, SystemClock)
    }
}

impl<D: DiceSource, C: Clock> TimedGame<D, C> {
    /// Create a session timed by `clock`.
    pub fn with_clock(rotation: Rotation, die: D, clock: C) -> Self {
        Self {
            game: Game::new(rotation, die),
            clock,
            limit: TIME_LIMIT,
            deadline: None,
        }
    }

    /// The underlying turn engine.
    #[must_use]
    pub fn game(&self) -> &Game<D> {
        &self.game
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Set once `start` has run.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Play until a player reaches the winning score or time runs out.
    pub fn start(
        &mut self,
        input: &mut dyn ActionInput,
        narrator: &mut dyn Narrator,
    ) -> Result<GameSummary, PigError> {
        let deadline = self.clock.now() + self.limit;
        self.deadline = Some(deadline);
        info!(
            players = self.game.rotation().len(),
            limit_secs = self.limit.as_secs(),
            "timed game started"
        );

        let condition = loop {
            self.game.begin_turn(narrator);
            while self.game.is_turn_active() && !self.game.is_over() {
                let now = self.clock.now();
                if now >= deadline {
                    break;
                }
                narrator.narrate(Narration::TimeLeft {
                    seconds: seconds_left(deadline, now),
                });
                self.game.play_action(input, narrator)?;
            }

            if self.game.is_over() {
                break WinCondition::ReachedTarget;
            }
            if self.clock.now() >= deadline {
                self.game.force_end();
                break WinCondition::HighestScoreAtDeadline;
            }
            self.game.next_turn();
        };

        Ok(self.game.finish(condition, narrator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, ScriptedDice};
    use crate::engine::clock::SteppingClock;
    use crate::narration::MemoryNarrator;
    use crate::policy::ScriptedInput;

    #[test]
    fn test_seconds_left_rounds_and_clamps() {
        let base = Instant::now();
        assert_eq!(seconds_left(base + Duration::from_millis(59_600), base), 60);
        assert_eq!(seconds_left(base + Duration::from_millis(1_400), base), 1);
        assert_eq!(seconds_left(base, base + Duration::from_secs(5)), 0);
    }

    #[test]
    fn test_deadline_set_at_start() {
        let clock = SteppingClock::new(Duration::from_secs(30));
        let rotation = Rotation::new(vec![Player::human("Ana"), Player::human("Bo")]).unwrap();
        let mut game = TimedGame::with_clock(rotation, ScriptedDice::default(), &clock);
        assert!(game.deadline().is_none());

        // Start reading at 0s, deadline 60s. Action checks at 30s then 60s.
        let mut input = ScriptedInput::new(["x"]);
        let mut narrator = MemoryNarrator::new();
        let summary = game.start(&mut input, &mut narrator).unwrap();

        assert!(game.deadline().is_some());
        assert_eq!(input.prompts(), 1);
        assert_eq!(summary.winner.condition, WinCondition::HighestScoreAtDeadline);
        assert!(narrator.events().contains(&Narration::TimeLeft { seconds: 30 }));
    }
}
