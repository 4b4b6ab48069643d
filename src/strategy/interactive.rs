//! Interactive strategy backed by an external input collaborator.
//!
//! The collaborator receives a prompt naming the player and answers with a
//! single token. [`EXPLORE_TOKEN`] (case-insensitive, surrounding whitespace
//! ignored) means explore; anything else, including an empty answer or end
//! of input, means retreat. There is no reject-and-retry path.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::core::{Decision, Result};

use super::{DecisionContext, Strategy};

/// Token that keeps a player exploring.
pub const EXPLORE_TOKEN: &str = "E";

/// Blocking request/response channel to whoever is deciding.
pub trait InputSource: Send {
    /// Show `prompt` and wait for a single token.
    fn request(&mut self, prompt: &str) -> Result<String>;
}

/// Pre-recorded answers, consumed in order. Runs out into retreats.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    tokens: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts received so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl InputSource for ScriptedInput {
    fn request(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        Ok(self.tokens.pop_front().unwrap_or_default())
    }
}

/// Line-based input over any reader/writer pair (stdin/stdout in the CLI).
pub struct ReaderInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ReaderInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead + Send, W: Write + Send> InputSource for ReaderInput<R, W> {
    fn request(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// Asks the input collaborator every step.
pub struct Interactive {
    input: Box<dyn InputSource>,
}

impl Interactive {
    pub const NAME: &'static str = "interactive";

    pub fn new(input: Box<dyn InputSource>) -> Self {
        Self { input }
    }

    /// Prompt shown to the deciding player.
    #[must_use]
    pub fn prompt(name: &str) -> String {
        format!("{name}, choose your card ('{EXPLORE_TOKEN}' or anything else): ")
    }

    /// Interpret a raw token.
    #[must_use]
    pub fn parse(token: &str) -> Decision {
        Decision::from_explore(token.trim().eq_ignore_ascii_case(EXPLORE_TOKEN))
    }
}

impl Strategy for Interactive {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn decide(&mut self, ctx: &DecisionContext<'_>) -> Result<Decision> {
        let token = self.input.request(&Self::prompt(ctx.name))?;
        let decision = Self::parse(&token);
        tracing::debug!(player = %ctx.player, token = %token, %decision, "interactive decision");
        Ok(decision)
    }
}
