//! The scene graph.
//!
//! Each scene is a transition function over a [`Stage`]: it reads and
//! mutates the player, draws from the randomness source, asks the player
//! questions, and names the next scene. The session controller runs the
//! graph as a loop over [`Transition`] values, so scenes never call each
//! other directly and the graph may contain cycles.

mod forest;
mod gate;
mod wilds;

use serde::{Deserialize, Serialize};

use crate::chance::Chance;
use crate::error::StoryResult;
use crate::item::Item;
use crate::narrator::Narrator;
use crate::outcome::Ending;
use crate::player::{Player, PlayerEvent};
use crate::prompt::Prompter;

/// Chance of fording the river while holding the branch pole.
pub const FORD_WITH_POLE: f64 = 0.65;
/// Chance of fording the river empty-handed.
pub const FORD_WITHOUT_POLE: f64 = 0.35;
/// Chance of a clean canyon crossing with the rope.
pub const CROSS_WITH_ROPE: f64 = 0.9;
/// Chance of scraping across the canyon without the rope.
pub const CROSS_WITHOUT_ROPE: f64 = 0.6;

/// A node in the scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneId {
    /// Waking in the forest. The root of the graph.
    Intro,
    /// The abandoned hut to the north.
    Hut,
    /// The river to the east.
    River,
    /// The riddle clearing.
    Clearing,
    /// The beach downstream.
    Beach,
    /// The canyon crossing.
    Canyon,
    /// The gate at the forest's edge, where the ending is decided.
    Gate,
}

impl SceneId {
    /// Every scene, root first.
    pub const ALL: [Self; 7] = [
        Self::Intro,
        Self::Hut,
        Self::River,
        Self::Clearing,
        Self::Beach,
        Self::Canyon,
        Self::Gate,
    ];

    /// The scene's label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Hut => "hut",
            Self::River => "river",
            Self::Clearing => "clearing",
            Self::Beach => "beach",
            Self::Canyon => "canyon",
            Self::Gate => "gate",
        }
    }

    /// Scenes this one can hand off to. An empty list means the scene
    /// concludes the playthrough.
    pub fn successors(self) -> &'static [Self] {
        match self {
            Self::Intro => &[Self::Hut, Self::River],
            Self::Hut => &[Self::Clearing],
            Self::River => &[Self::Canyon, Self::Beach],
            Self::Clearing => &[Self::Canyon, Self::River],
            Self::Beach => &[Self::Canyon],
            Self::Canyon => &[Self::Gate],
            Self::Gate => &[],
        }
    }

    /// Play this scene and decide where the story goes next.
    pub fn run(self, stage: &mut Stage<'_>) -> StoryResult<Transition> {
        tracing::debug!(scene = %self, "entering scene");
        match self {
            Self::Intro => forest::intro(stage),
            Self::Hut => forest::hut(stage),
            Self::River => wilds::river(stage),
            Self::Clearing => forest::clearing(stage),
            Self::Beach => wilds::beach(stage),
            Self::Canyon => wilds::canyon(stage),
            Self::Gate => gate::gate(stage),
        }
    }
}

impl std::fmt::Display for SceneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// What a scene hands back to the session controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Continue with another scene.
    Goto(SceneId),
    /// The playthrough is over.
    Conclude(Ending),
}

/// Everything a scene may touch while it plays.
pub struct Stage<'a> {
    /// The player's state.
    pub player: &'a mut Player,
    /// Source of random draws.
    pub chance: &'a mut dyn Chance,
    /// Source of player answers.
    pub prompter: &'a mut dyn Prompter,
    /// Where story text goes.
    pub narrator: &'a mut dyn Narrator,
}

impl Stage<'_> {
    /// Narrate a passage.
    pub fn say(&mut self, text: &str) -> StoryResult<()> {
        self.narrator.say(text)
    }

    /// Ask the player to pick one of `options`.
    pub fn choose(&mut self, prompt: &str, options: &[&'static str]) -> StoryResult<&'static str> {
        self.prompter.choose(prompt, options)
    }

    /// Ask a yes/no question.
    pub fn confirm(&mut self, prompt: &str) -> StoryResult<bool> {
        self.prompter.confirm(prompt)
    }

    /// Ask for a free-form answer.
    pub fn free_text(&mut self, prompt: &str) -> StoryResult<String> {
        self.prompter.free_text(prompt)
    }

    /// Draw once against `threshold`.
    pub fn roll(&mut self, threshold: f64) -> bool {
        self.chance.roll(threshold)
    }

    /// Give the player an item at its catalog value.
    pub fn acquire(&mut self, item: Item) -> StoryResult<()> {
        match self.player.add(item, item.points()) {
            Some(event) => self.announce(event),
            None => Ok(()),
        }
    }

    /// Hurt the player.
    pub fn damage(&mut self, amount: i32) -> StoryResult<()> {
        let event = self.player.damage(amount);
        self.announce(event)
    }

    /// Restore health and award points.
    pub fn heal(&mut self, amount: i32, points: u32) -> StoryResult<()> {
        let event = self.player.heal(amount, points);
        self.announce(event)
    }

    fn announce(&mut self, event: PlayerEvent) -> StoryResult<()> {
        self.narrator.say(&event.to_string())
    }
}
