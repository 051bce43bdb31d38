//! Human action channel.
//!
//! `ConsoleInput` prompts on a writer and reads a line per request;
//! `ScriptedInput` replays a fixed list of tokens.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::core::{Player, PigError};

/// Source of action tokens for human players.
pub trait ActionInput {
    /// Show `prompt` to `player` and return the token they typed.
    ///
    /// End of input is `PigError::InputClosed`.
    fn read_token(&mut self, player: &Player, prompt: &str) -> Result<String, PigError>;
}

/// Line-oriented prompt/response over a reader and a writer.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout, read from stdin.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Write `prompt`, then read one line without its line ending.
    ///
    /// Returns `None` at end of input.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>, PigError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> ActionInput for ConsoleInput<R, W> {
    fn read_token(&mut self, player: &Player, prompt: &str) -> Result<String, PigError> {
        self.prompt_line(prompt)?.ok_or_else(|| PigError::InputClosed {
            player: player.name().to_string(),
        })
    }
}

/// Replays queued tokens; runs dry with `PigError::InputClosed`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    tokens: VecDeque<String>,
    prompts: usize,
}

impl ScriptedInput {
    pub fn new<S: Into<String>>(tokens: impl IntoIterator<Item = S>) -> Self {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            prompts: 0,
        }
    }

    /// Number of times a token was requested.
    #[must_use]
    pub fn prompts(&self) -> usize {
        self.prompts
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl ActionInput for ScriptedInput {
    fn read_token(&mut self, player: &Player, _prompt: &str) -> Result<String, PigError> {
        self.prompts += 1;
        self.tokens.pop_front().ok_or_else(|| PigError::InputClosed {
            player: player.name().to_string(),
        })
    }
}
