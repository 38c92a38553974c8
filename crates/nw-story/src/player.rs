//! Player state management.
//!
//! Health and score only move through [`Player::add`], [`Player::damage`]
//! and [`Player::heal`]. Each mutation hands back a [`PlayerEvent`] for the
//! presentation layer to narrate.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Health a fresh player starts with.
pub const STARTING_HEALTH: i32 = 3;

/// Something that happened to the player and should be shown to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// An item entered the inventory for the first time.
    Acquired {
        /// The item picked up.
        item: Item,
        /// Points awarded for it.
        points: u32,
    },
    /// Health was lost.
    Damaged {
        /// Health removed.
        amount: i32,
        /// Health after the hit.
        health: i32,
    },
    /// Health and/or score were restored.
    Recovered {
        /// Health added.
        amount: i32,
        /// Points awarded.
        points: u32,
        /// Health after recovering.
        health: i32,
    },
}

impl std::fmt::Display for PlayerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Acquired { item, points } => {
                write!(f, "You obtained the {item}! (+{points} points)")
            }
            Self::Damaged { amount, health } => {
                write!(f, "You take {amount} damage. Health: {health}")
            }
            Self::Recovered {
                amount: 0, points, ..
            } => write!(f, "(+{points} points)"),
            Self::Recovered {
                amount,
                points,
                health,
            } => write!(
                f,
                "You recover {amount} health (+{points} points). Health: {health}"
            ),
        }
    }
}

/// The player's state for one playthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    health: i32,
    score: u32,
    inventory: BTreeSet<Item>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Create a fresh player: full health, no score, empty pockets.
    pub fn new() -> Self {
        Self {
            health: STARTING_HEALTH,
            score: 0,
            inventory: BTreeSet::new(),
        }
    }

    /// Current health. May be zero or negative.
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Items held, in catalog order.
    pub fn inventory(&self) -> impl Iterator<Item = Item> + '_ {
        self.inventory.iter().copied()
    }

    /// Check if the player holds an item.
    pub fn has(&self, item: Item) -> bool {
        self.inventory.contains(&item)
    }

    /// Check if the player holds every item in `items`.
    pub fn has_all(&self, items: &[Item]) -> bool {
        items.iter().all(|&item| self.has(item))
    }

    /// Add an item, awarding `points` the first time only.
    ///
    /// Returns `None` when the item was already held.
    #[must_use]
    pub fn add(&mut self, item: Item, points: u32) -> Option<PlayerEvent> {
        if !self.inventory.insert(item) {
            tracing::debug!(%item, "item already held");
            return None;
        }
        self.score += points;
        tracing::debug!(%item, points, score = self.score, "item acquired");
        Some(PlayerEvent::Acquired { item, points })
    }

    /// Remove `amount` health. There is no floor.
    #[must_use]
    pub fn damage(&mut self, amount: i32) -> PlayerEvent {
        self.health -= amount;
        tracing::debug!(amount, health = self.health, "player damaged");
        PlayerEvent::Damaged {
            amount,
            health: self.health,
        }
    }

    /// Restore `amount` health and award `points`.
    #[must_use]
    pub fn heal(&mut self, amount: i32, points: u32) -> PlayerEvent {
        self.health += amount;
        self.score += points;
        tracing::debug!(amount, points, health = self.health, "player recovered");
        PlayerEvent::Recovered {
            amount,
            points,
            health: self.health,
        }
    }
}
