//! Session control: playthroughs and replay.
//!
//! A session owns the input and output collaborators. Each playthrough
//! starts a fresh [`Player`] and randomness source at the intro scene and
//! runs the scene graph until the gate concludes it. At every ending the
//! player sees a summary and may play again.

use serde::{Deserialize, Serialize};

use crate::chance::Chance;
use crate::config::StoryConfig;
use crate::error::StoryResult;
use crate::item::Item;
use crate::narrator::Narrator;
use crate::outcome::Ending;
use crate::player::Player;
use crate::prompt::Prompter;
use crate::scene::{SceneId, Stage, Transition};

/// The result of one playthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// The ending reached.
    pub ending: Ending,
    /// Final score, bonus included.
    pub score: u32,
    /// Health at the end.
    pub health: i32,
    /// Items held, in catalog order.
    pub inventory: Vec<Item>,
    /// Scenes visited, in order, starting with the intro.
    pub path: Vec<SceneId>,
}

impl Summary {
    /// Lines shown to the player at the end of a playthrough.
    pub fn lines(&self) -> Vec<String> {
        let inventory = if self.inventory.is_empty() {
            "nothing".to_string()
        } else {
            self.inventory
                .iter()
                .map(|item| item.name())
                .collect::<Vec<_>>()
                .join(", ")
        };
        vec![
            format!("Ending: {}", self.ending),
            format!("Final score: {}", self.score),
            format!("Health: {}", self.health),
            format!("Inventory: {inventory}"),
        ]
    }
}

/// An interactive session.
pub struct Session<P: Prompter, N: Narrator> {
    config: StoryConfig,
    prompter: P,
    narrator: N,
    playthroughs: u32,
}

impl<P: Prompter, N: Narrator> Session<P, N> {
    /// Create a session over the given collaborators.
    pub fn new(config: StoryConfig, prompter: P, narrator: N) -> Self {
        Self {
            config,
            prompter,
            narrator,
            playthroughs: 0,
        }
    }

    /// Number of playthroughs started so far.
    pub fn playthroughs(&self) -> u32 {
        self.playthroughs
    }

    /// Consume the session and return its collaborators.
    pub fn into_parts(self) -> (P, N) {
        (self.prompter, self.narrator)
    }

    /// Play until the player declines a replay.
    pub fn run(&mut self) -> StoryResult<Vec<Summary>> {
        let mut summaries = Vec::new();
        loop {
            let mut chance = self.config.chance_for(self.playthroughs);
            summaries.push(self.play(&mut chance)?);

            if !self.prompter.confirm("Play again?")? {
                self.narrator.say("Thanks for playing.")?;
                break;
            }
            tracing::info!("replaying");
        }
        Ok(summaries)
    }

    /// Play one playthrough from the intro to an ending.
    pub fn play(&mut self, chance: &mut dyn Chance) -> StoryResult<Summary> {
        self.playthroughs += 1;
        tracing::info!(playthrough = self.playthroughs, "playthrough started");

        let mut player = Player::new();
        let mut scene = SceneId::Intro;
        let mut path = vec![scene];

        let ending = loop {
            let mut stage = Stage {
                player: &mut player,
                chance: &mut *chance,
                prompter: &mut self.prompter,
                narrator: &mut self.narrator,
            };
            match scene.run(&mut stage)? {
                Transition::Goto(next) => {
                    scene = next;
                    path.push(next);
                }
                Transition::Conclude(ending) => break ending,
            }
        };

        let summary = Summary {
            ending,
            score: player.score(),
            health: player.health(),
            inventory: player.inventory().collect(),
            path,
        };
        for line in summary.lines() {
            self.narrator.say(&line)?;
        }
        Ok(summary)
    }
}
