//! Per-player turn resources and counters.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Resources and counters of one seat.
///
/// `counters` holds card-specific values that outlive a turn (the Pirate
/// Ship mat, for instance). Keys are defined by card content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    /// Disconnected players are skipped by attacks and group questions.
    pub connected: bool,

    // === Turn resources ===
    pub money: i64,
    pub potions: i64,
    pub actions: i64,
    pub buys: i64,

    // === Persistent ===
    pub score: i64,
    pub counters: FxHashMap<String, i64>,
}

impl PlayerState {
    /// A connected player with fresh turn resources.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            connected: true,
            money: 0,
            potions: 0,
            actions: 1,
            buys: 1,
            score: 0,
            counters: FxHashMap::default(),
        }
    }

    /// Reset the resources of a turn.
    pub fn reset_turn(&mut self) {
        self.money = 0;
        self.potions = 0;
        self.actions = 1;
        self.buys = 1;
    }

    /// Read a counter (0 if never set).
    #[must_use]
    pub fn counter(&self, key: &str) -> i64 {
        self.counters.get(key).copied().unwrap_or(0)
    }

    /// Add to a counter and return the new value.
    pub fn add_counter(&mut self, key: &str, delta: i64) -> i64 {
        let value = self.counters.entry(key.to_string()).or_insert(0);
        *value += delta;
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_turn_keeps_score() {
        let mut player = PlayerState::new("ada");
        player.money = 7;
        player.actions = 0;
        player.score = 4;

        player.reset_turn();
        assert_eq!(player.money, 0);
        assert_eq!(player.actions, 1);
        assert_eq!(player.score, 4);
    }

    #[test]
    fn test_counters() {
        let mut player = PlayerState::new("ada");
        assert_eq!(player.counter("pirate_ship"), 0);
        assert_eq!(player.add_counter("pirate_ship", 1), 1);
        assert_eq!(player.add_counter("pirate_ship", 1), 2);
    }
}
