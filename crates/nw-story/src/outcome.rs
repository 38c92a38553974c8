//! Ending rules evaluated at the gate.
//!
//! Rules are checked in priority order and the first match wins. The
//! True Escape item set contains the Rescued set, so it must come first.
//! The survival check reads health as it stands on arrival, after every
//! earlier hit and recovery.

use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::player::Player;

/// Minimum health on arrival to survive the night without rescue.
pub const SURVIVAL_HEALTH: i32 = 3;

const TRUE_ESCAPE_ITEMS: &[Item] = &[Item::SilverWhistle, Item::ForestMap, Item::Flint];
const RESCUE_ITEMS: &[Item] = &[Item::ForestMap, Item::SilverWhistle];

/// One of the four endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ending {
    /// Whistle, map and flint: the player finds their own way out.
    TrueEscape,
    /// Whistle and map: rangers answer the call.
    Rescued,
    /// No rescue, but enough health to last until dawn.
    SurvivedTheNight,
    /// Everything else.
    LostToTheForest,
}

impl Ending {
    /// Pick the ending for a player arriving at the gate.
    pub fn resolve(player: &Player) -> Self {
        if player.has_all(TRUE_ESCAPE_ITEMS) {
            Self::TrueEscape
        } else if player.has_all(RESCUE_ITEMS) {
            Self::Rescued
        } else if player.health() >= SURVIVAL_HEALTH {
            Self::SurvivedTheNight
        } else {
            Self::LostToTheForest
        }
    }

    /// The ending's title.
    pub fn title(self) -> &'static str {
        match self {
            Self::TrueEscape => "True Escape",
            Self::Rescued => "Rescued",
            Self::SurvivedTheNight => "Survived the Night",
            Self::LostToTheForest => "Lost to the Forest",
        }
    }

    /// Score awarded on reaching this ending.
    pub fn bonus(self) -> u32 {
        match self {
            Self::TrueEscape => 25,
            Self::Rescued => 15,
            Self::SurvivedTheNight => 8,
            Self::LostToTheForest => 0,
        }
    }

    /// Closing narration.
    pub fn description(self) -> &'static str {
        match self {
            Self::TrueEscape => {
                "You blow the silver whistle, read the map by firelight, and lead yourself home."
            }
            Self::Rescued => {
                "You blow the silver whistle. Rangers answer, and your map guides them to you."
            }
            Self::SurvivedTheNight => {
                "No rescue comes, but you huddle by the gate until dawn breaks."
            }
            Self::LostToTheForest => {
                "Weak and disoriented, you drift back among the trees. The forest keeps you."
            }
        }
    }
}

impl std::fmt::Display for Ending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
