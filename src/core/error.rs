//! Error type shared by the engine and the CLI.

use thiserror::Error;

/// Errors surfaced by a game session.
///
/// Invalid in-turn actions are not errors: the engine reports them and
/// re-prompts the same player.
#[derive(Debug, Error)]
pub enum PigError {
    /// Missing or invalid startup parameters. No game state exists yet.
    #[error("Configuration error: {detail}")]
    Config { detail: String },

    /// The die could not produce a face. Aborts the session.
    #[error("Random source failure: {detail}")]
    RandomSource { detail: String },

    /// The human action channel reached end of input.
    #[error("Input closed while waiting for {player}")]
    InputClosed { player: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PigError {
    pub fn config(detail: impl Into<String>) -> Self {
        PigError::Config { detail: detail.into() }
    }

    pub fn random_source(detail: impl Into<String>) -> Self {
        PigError::RandomSource { detail: detail.into() }
    }
}
