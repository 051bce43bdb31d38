//! Core types: players, rotation, actions, dice, configuration, errors.
//!
//! Everything the engines operate on. None of it performs I/O.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod rotation;

pub use action::{TurnAction, TurnState};
pub use config::{computer_name, GameConfig, PlayerSpec, GREED_CEILING, TIME_LIMIT, WINNING_SCORE};
pub use error::PigError;
pub use player::{Player, PlayerId, PlayerKind};
pub use rng::{DiceSource, Die, ScriptedDice, MAX_FACE, MIN_FACE, TEST_SEED};
pub use rotation::Rotation;
