//! Input prompting and normalisation.
//!
//! A choice prompt accepts one of an enumerated set of lowercase tokens.
//! Input is trimmed and lowercased, then matched exactly; anything else
//! gets a corrective message and the prompt repeats.

use std::io::{BufRead, Write};

use crate::error::{StoryError, StoryResult};

/// The yes/no option set used by most prompts.
pub const YES_NO: &[&str] = &["yes", "no"];

/// Source of player answers.
pub trait Prompter {
    /// Ask until the player gives one of `options`, returning the match.
    fn choose(&mut self, prompt: &str, options: &[&'static str]) -> StoryResult<&'static str>;

    /// Ask once and return whatever was typed, trimmed.
    fn free_text(&mut self, prompt: &str) -> StoryResult<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str) -> StoryResult<bool> {
        Ok(self.choose(prompt, YES_NO)? == "yes")
    }
}

/// Normalise raw input and match it against `options`.
pub fn match_option(input: &str, options: &[&'static str]) -> Option<&'static str> {
    let normalized = input.trim().to_lowercase();
    options.iter().copied().find(|&opt| opt == normalized)
}

/// A prompter that reads lines from `input` and writes prompts to `output`.
pub struct LinePrompter<R: BufRead, W: Write> {
    input: R,
    output: W,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    /// Create a prompter over a reader/writer pair.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: Vec::new(),
        }
    }

    /// Consume the prompter and return the underlying writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line. Bytes that are not UTF-8 are replaced, so a garbled
    /// line is just another unrecognised answer.
    fn read_line(&mut self) -> StoryResult<String> {
        self.line.clear();
        match self.input.read_until(b'\n', &mut self.line)? {
            0 => Err(StoryError::InputClosed),
            _ => Ok(String::from_utf8_lossy(&self.line).into_owned()),
        }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn choose(&mut self, prompt: &str, options: &[&'static str]) -> StoryResult<&'static str> {
        let opts = options.join("/");
        loop {
            write!(self.output, "{prompt} ({opts}): ")?;
            self.output.flush()?;

            let raw = self.read_line()?;
            if let Some(choice) = match_option(&raw, options) {
                return Ok(choice);
            }
            tracing::debug!(input = raw.trim(), "rejected input");
            writeln!(self.output, "Please type one of: {}", options.join(", "))?;
        }
    }

    fn free_text(&mut self, prompt: &str) -> StoryResult<String> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;
        Ok(self.read_line()?.trim().to_string())
    }
}
