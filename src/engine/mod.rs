//! Game engines.
//!
//! - `Game`: untimed race to `WINNING_SCORE`
//! - `TimedGame`: the same turns, bounded by a `TIME_LIMIT` deadline
//! - `Session`: picks one of the two from a single `timed` flag
//!
//! ## Turn loop
//!
//! ```text
//! loop {
//!     begin turn for the current player
//!     while turn active and game not over: resolve one action
//!     if game over: break
//!     advance rotation
//! }
//! announce winner, print ranking
//! ```
//!
//! Everything is single-threaded. The only blocking point is a human
//! player's `ActionInput`.

pub mod clock;
pub mod game;
pub mod session;
pub mod timed;

pub use clock::{Clock, SteppingClock, SystemClock};
pub use game::Game;
pub use session::{run, select_engine, Session};
pub use timed::TimedGame;
