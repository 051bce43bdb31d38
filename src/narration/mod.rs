//! Turn narration.
//!
//! The engines describe what happens as `Narration` events. A `Narrator`
//! decides where the lines go: stdout for the CLI, memory for tests.
//! `Display` on `Narration` is the line text.

use std::fmt;
use std::io::{self, Write};

use crate::rules::Standing;

/// One narrated event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Narration {
    /// A player's turn begins.
    TurnStarted { name: String, total: u32 },

    /// Non-1 roll that keeps the turn going.
    Rolled {
        name: String,
        face: u8,
        turn: u32,
        provisional: u32,
    },

    /// Rolled a 1.
    Forfeited { name: String, face: u8, total: u32 },

    /// Held and banked the turn score.
    Held { name: String, turn: u32, total: u32 },

    /// Unrecognized action token.
    InvalidAction,

    /// Whole seconds left in a timed session.
    TimeLeft { seconds: u64 },

    /// Winner who reached the target score.
    Winner {
        name: String,
        last_roll: u8,
        total: u32,
    },

    /// Winner of a timed session that ran out of time.
    WinnerAtDeadline { name: String, total: u32 },

    /// Ranking table header.
    ResultsHeader,

    /// One ranking row.
    Standing {
        name: String,
        total: u32,
        rolls: u32,
    },
}

impl Narration {
    pub(crate) fn standing(standing: &Standing) -> Self {
        Narration::Standing {
            name: standing.name.clone(),
            total: standing.total_score,
            rolls: standing.total_rolls,
        }
    }
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Narration::TurnStarted { name, total } => {
                write!(f, "\n{name}'s turn. Current score is {total}")
            }
            Narration::Rolled {
                name,
                face,
                turn,
                provisional,
            } => write!(
                f,
                "{name} rolled a {face}. Turn score is {turn}. Total score is {provisional}"
            ),
            Narration::Forfeited { name, face, total } => write!(
                f,
                "{name} rolled a {face}, lost all points of the turn. Turn score is 0. Total score: {total}."
            ),
            Narration::Held { name, turn, total } => write!(
                f,
                "{name}, you held. Your score for this turn is {turn}. Your total score is {total}."
            ),
            Narration::InvalidAction => f.write_str("Invalid action."),
            Narration::TimeLeft { seconds } => {
                write!(f, "Time left for the game: {seconds} seconds")
            }
            Narration::Winner {
                name,
                last_roll,
                total,
            } => write!(
                f,
                "\n{name} Won the Game! Rolled a {last_roll}. Total score is {total}"
            ),
            Narration::WinnerAtDeadline { name, total } => {
                write!(f, "\n{name} Won! with the highest score: {total}")
            }
            Narration::ResultsHeader => f.write_str("\nPig Results:\n"),
            Narration::Standing { name, total, rolls } => {
                write!(f, "{name} Scored {total} points, rolled {rolls} times")
            }
        }
    }
}

/// Consumer of narration.
pub trait Narrator {
    fn narrate(&mut self, event: Narration);
}

/// Writes one line per event.
pub struct ConsoleNarrator<W> {
    out: W,
}

impl ConsoleNarrator<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleNarrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Narrator for ConsoleNarrator<W> {
    fn narrate(&mut self, event: Narration) {
        // Write failures are logged, never propagated.
        if let Err(e) = writeln!(self.out, "{event}") {
            tracing::warn!(error = %e, "failed to write narration");
        }
    }
}

/// Keeps every event, for tests and replays.
#[derive(Clone, Debug, Default)]
pub struct MemoryNarrator {
    events: Vec<Narration>,
}

impl MemoryNarrator {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[Narration] {
        &self.events
    }

    /// Rendered lines, one per event.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

impl Narrator for MemoryNarrator {
    fn narrate(&mut self, event: Narration) {
        self.events.push(event);
    }
}
