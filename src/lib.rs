//! # rust-pig
//!
//! The dice game Pig for two or more players, human or computer.
//!
//! ## Rules
//!
//! On your turn, roll a die as often as you like. Every face but 1 adds to
//! your turn score. Hold to bank the turn score into your total. Roll a 1
//! and the turn score is lost. The first player whose banked plus unbanked
//! score reaches 100 wins.
//!
//! The timed variant stops after 60 seconds; the highest total wins.
//!
//! ## Modules
//!
//! - `core`: players, rotation, actions, dice, configuration, errors
//! - `policy`: human and automated turn policies, human action input
//! - `rules`: turn resolution, ranking, winner
//! - `engine`: untimed and timed engines, clocks, engine selection
//! - `narration`: narration events and sinks
//!
//! ## Example
//!
//! ```
//! use rust_pig::core::{GameConfig, PlayerKind};
//! use rust_pig::engine::run;
//! use rust_pig::narration::MemoryNarrator;
//! use rust_pig::policy::ScriptedInput;
//!
//! let config = GameConfig::new()
//!     .with_player("Computer [Player 1]", PlayerKind::Computer)
//!     .with_player("Computer [Player 2]", PlayerKind::Computer)
//!     .with_seed(0);
//!
//! let mut narrator = MemoryNarrator::new();
//! let summary = run(&config, &mut ScriptedInput::default(), &mut narrator).unwrap();
//! assert!(summary.winner.total_score >= 100);
//! ```

pub mod core;
pub mod engine;
pub mod narration;
pub mod policy;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    DiceSource, Die, GameConfig, PigError, Player, PlayerId, PlayerKind, PlayerSpec, Rotation,
    ScriptedDice, TurnAction, TurnState,
};

pub use crate::engine::{run, select_engine, Clock, Game, Session, SteppingClock, SystemClock, TimedGame};

pub use crate::narration::{ConsoleNarrator, MemoryNarrator, Narration, Narrator};

pub use crate::policy::{ActionInput, ConsoleInput, ScriptedInput, TurnPolicy};

pub use crate::rules::{GameSummary, Ranking, Standing, WinCondition, Winner};
