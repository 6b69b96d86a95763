//! Engine configuration.
//!
//! Tables configure the engine once at startup. Everything here is plain
//! data so a scheduler can load it from whatever format it already uses.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Table-wide engine settings.
///
/// ```
/// use rust_deckbuilder::core::EngineConfig;
///
/// let config = EngineConfig::new(3)
///     .with_names(["ada", "bo", "cy"])
///     .with_seed(99);
///
/// assert_eq!(config.player_count, 3);
/// assert_eq!(config.hand_size, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of seats at the table.
    pub player_count: usize,

    /// Display names by seat. Missing entries fall back to "Player N".
    #[serde(default)]
    pub player_names: Vec<String>,

    /// Cards drawn when a turn is finished.
    pub hand_size: usize,

    /// Seed for deck reshuffles.
    pub seed: u64,

    /// Send a private message to a player whose answer was rejected.
    pub whisper_rejections: bool,

    /// Answer requests whose only legal answer is "nothing" immediately.
    pub auto_satisfy_empty: bool,
}

impl EngineConfig {
    /// Configuration with defaults for `player_count` seats.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            player_count,
            player_names: Vec::new(),
            hand_size: 5,
            seed: 0,
            whisper_rejections: true,
            auto_satisfy_empty: true,
        }
    }

    /// Set display names (builder pattern).
    #[must_use]
    pub fn with_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the reshuffle seed (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the hand size drawn at end of turn (builder pattern).
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Disable automatic answers to zero-candidate requests (builder pattern).
    #[must_use]
    pub fn without_auto_satisfy(mut self) -> Self {
        self.auto_satisfy_empty = false;
        self
    }

    /// Display name for a seat.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> String {
        self.player_names
            .get(player.index())
            .cloned()
            .unwrap_or_else(|| player.to_string())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.player_count, 2);
        assert_eq!(config.hand_size, 5);
        assert!(config.whisper_rejections);
        assert!(config.auto_satisfy_empty);
    }

    #[test]
    fn test_name_fallback() {
        let config = EngineConfig::new(3).with_names(["ada"]);
        assert_eq!(config.player_name(PlayerId::new(0)), "ada");
        assert_eq!(config.player_name(PlayerId::new(2)), "Player 2");
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = EngineConfig::new(4).with_seed(12).with_hand_size(6);
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_names_are_optional_in_json() {
        let json = r#"{"player_count":2,"hand_size":5,"seed":1,"whisper_rejections":false,"auto_satisfy_empty":true}"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert!(config.player_names.is_empty());
        assert!(!config.whisper_rejections);
    }
}
