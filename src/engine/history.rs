//! What each player played, gained and bought.
//!
//! A player's lists are cleared when that player's next turn starts, so
//! during a turn the previous player's lists still describe their last
//! turn.

use im::Vector;

use crate::core::{EntityId, PlayerId, PlayerMap};

/// Per-player history of the current (or most recent) turn.
#[derive(Clone, Debug)]
pub struct TurnHistory {
    played: PlayerMap<Vector<EntityId>>,
    gained: PlayerMap<Vector<EntityId>>,
    bought: PlayerMap<Vector<EntityId>>,
}

impl TurnHistory {
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            played: PlayerMap::with_default(player_count),
            gained: PlayerMap::with_default(player_count),
            bought: PlayerMap::with_default(player_count),
        }
    }

    pub fn record_played(&mut self, player: PlayerId, card: EntityId) {
        self.played[player].push_back(card);
    }

    pub fn record_gained(&mut self, player: PlayerId, card: EntityId) {
        self.gained[player].push_back(card);
    }

    pub fn record_bought(&mut self, player: PlayerId, card: EntityId) {
        self.bought[player].push_back(card);
    }

    #[must_use]
    pub fn played(&self, player: PlayerId) -> &Vector<EntityId> {
        &self.played[player]
    }

    #[must_use]
    pub fn gained(&self, player: PlayerId) -> &Vector<EntityId> {
        &self.gained[player]
    }

    #[must_use]
    pub fn bought(&self, player: PlayerId) -> &Vector<EntityId> {
        &self.bought[player]
    }

    /// Forget `player`'s previous turn.
    pub fn clear(&mut self, player: PlayerId) {
        self.played[player].clear();
        self.gained[player].clear();
        self.bought[player].clear();
    }
}
