//! The fixed item catalog.
//!
//! Eight items exist in the forest. Each carries a point value awarded the
//! first time the player picks it up.

use serde::{Deserialize, Serialize};

/// An item the player can carry.
///
/// Variants are declared in catalog order, which is also the order used
/// when listing an inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Item {
    /// Hidden under the hut's doormat.
    RustyKey,
    /// Locked in the hut's chest.
    ForestMap,
    /// On the hut's shelf.
    DriedRations,
    /// Snapped from a fallen branch at the river.
    BranchPole,
    /// Reward for answering the clearing's riddle.
    SilverWhistle,
    /// Washed up on the beach.
    GlassShard,
    /// Coiled in a canyon crevice.
    Rope,
    /// Found while building a fire on the beach.
    Flint,
}

impl Item {
    /// All items in catalog order.
    pub const ALL: [Self; 8] = [
        Self::RustyKey,
        Self::ForestMap,
        Self::DriedRations,
        Self::BranchPole,
        Self::SilverWhistle,
        Self::GlassShard,
        Self::Rope,
        Self::Flint,
    ];

    /// The item's display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::RustyKey => "rusty key",
            Self::ForestMap => "forest map",
            Self::DriedRations => "dried rations",
            Self::BranchPole => "branch pole",
            Self::SilverWhistle => "silver whistle",
            Self::GlassShard => "glass shard",
            Self::Rope => "rope",
            Self::Flint => "flint",
        }
    }

    /// Points awarded on first acquisition.
    pub fn points(self) -> u32 {
        match self {
            Self::RustyKey => 8,
            Self::ForestMap => 10,
            Self::DriedRations => 5,
            Self::BranchPole => 5,
            Self::SilverWhistle => 12,
            Self::GlassShard => 4,
            Self::Rope => 6,
            Self::Flint => 6,
        }
    }

}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
