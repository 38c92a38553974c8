//! Narrative engine for Nightwood.
//!
//! A player wakes in a forest and works through a fixed graph of scenes,
//! collecting items, losing and regaining health, and earning score until
//! the gate decides which of four endings they reach. Scenes are pure
//! transition functions over the player state, a randomness source, and an
//! input source; the session controller drives them as an explicit state
//! machine and offers a replay at every ending.

/// Randomness source for probabilistic transitions.
pub mod chance;
/// Session configuration.
pub mod config;
/// Error types for the story engine.
pub mod error;
/// The fixed item catalog.
pub mod item;
/// Output rendering for narration.
pub mod narrator;
/// Ending rules evaluated at the gate.
pub mod outcome;
/// Player state and its mutation events.
pub mod player;
/// Input prompting and normalisation.
pub mod prompt;
/// The scene graph.
pub mod scene;
/// Session control: playthroughs and replay.
pub mod session;

pub use chance::{Chance, ScriptedChance, SessionRng};
pub use config::StoryConfig;
pub use error::{StoryError, StoryResult};
pub use item::Item;
pub use narrator::{Narrator, NarratorConfig, Typewriter};
pub use outcome::Ending;
pub use player::{Player, PlayerEvent};
pub use prompt::{LinePrompter, Prompter};
pub use scene::{SceneId, Transition};
pub use session::{Session, Summary};
