//! Turn policies: who decides between rolling and holding.
//!
//! Each player gets a `TurnPolicy` from its `PlayerKind` at creation:
//! - `Human`: blocks on an `ActionInput` for an action token
//! - `Automated`: pure function of the player's scores
//!
//! The engine only calls `TurnPolicy::request_action`.

pub mod input;
pub mod turn_policy;

pub use input::{ActionInput, ConsoleInput, ScriptedInput};
pub use turn_policy::{automated_action, TurnPolicy, HUMAN_PROMPT};
