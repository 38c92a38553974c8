//! Narrator system for rendering story text.

mod config;
mod typewriter;

pub use config::NarratorConfig;
pub use typewriter::Typewriter;

use crate::error::StoryResult;

/// Renders story text to the player.
pub trait Narrator {
    /// Show one passage, followed by a newline.
    fn say(&mut self, text: &str) -> StoryResult<()>;
}
