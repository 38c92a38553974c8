//! Character-by-character text rendering.

use std::io::Write;
use std::thread;

use super::{Narrator, NarratorConfig};
use crate::error::StoryResult;

/// Writes passages one character at a time with a configurable pause.
pub struct Typewriter<W: Write> {
    out: W,
    config: NarratorConfig,
}

impl<W: Write> Typewriter<W> {
    /// Create a typewriter over any writer.
    pub fn new(out: W, config: NarratorConfig) -> Self {
        Self { out, config }
    }

    /// Consume the typewriter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Narrator for Typewriter<W> {
    fn say(&mut self, text: &str) -> StoryResult<()> {
        if self.config.is_instant() {
            writeln!(self.out, "{text}")?;
            self.out.flush()?;
            return Ok(());
        }

        let mut buf = [0u8; 4];
        for ch in text.chars() {
            self.out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            self.out.flush()?;
            thread::sleep(self.config.char_delay);
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
