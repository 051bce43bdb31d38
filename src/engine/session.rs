//! Picks the untimed or timed engine from the `timed` flag.

use tracing::info;

use crate::core::{DiceSource, Die, GameConfig, PigError, Rotation};
use crate::narration::Narrator;
use crate::policy::ActionInput;
use crate::rules::GameSummary;

use super::clock::{Clock, SystemClock};
use super::game::Game;
use super::timed::TimedGame;

/// One of the two engines.
pub enum Session<D: DiceSource = Die, C: Clock = SystemClock> {
    Untimed(Game<D>),
    Timed(TimedGame<D, C>),
}

impl<D: DiceSource, C: Clock> Session<D, C> {
    #[must_use]
    pub fn is_timed(&self) -> bool {
        matches!(self, Session::Timed(_))
    }

    /// Run the chosen engine to completion.
    pub fn start(
        &mut self,
        input: &mut dyn ActionInput,
        narrator: &mut dyn Narrator,
    ) -> Result<GameSummary, PigError> {
        match self {
            Session::Untimed(game) => game.start(input, narrator),
            Session::Timed(game) => game.start(input, narrator),
        }
    }
}

/// Build the engine selected by `timed`, wall-clock timed.
pub fn select_engine<D: DiceSource>(timed: bool, rotation: Rotation, die: D) -> Session<D> {
    if timed {
        Session::Timed(TimedGame::new(rotation, die))
    } else {
        Session::Untimed(Game::new(rotation, die))
    }
}

/// Validate `config`, create the players and the die, and play one session.
pub fn run(
    config: &GameConfig,
    input: &mut dyn ActionInput,
    narrator: &mut dyn Narrator,
) -> Result<GameSummary, PigError> {
    let rotation = config.rotation()?;
    let die = Die::from_seed_option(config.seed)?;
    info!(
        seed = die.seed(),
        timed = config.timed,
        players = rotation.len(),
        "session configured"
    );

    select_engine(config.timed, rotation, die).start(input, narrator)
}
