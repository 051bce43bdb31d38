//! Scoring rules and game results.
//!
//! - `turn`: how a roll or a hold changes a player's scores
//! - `result`: ranking and winner of a finished game
//!
//! These are pure functions of player state. The engines own the loop,
//! the die, and the narration.

pub mod result;
pub mod turn;

pub use result::{GameSummary, Ranking, Standing, WinCondition, Winner};
pub use turn::{apply_hold, apply_roll, reaches_target};
