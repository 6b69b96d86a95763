//! Card instances - one physical card.
//!
//! An instance is only an identity plus the definition it was printed from.
//! Where it is lives in the zone manager; what it is doing this turn lives in
//! the per-play effect state.

use serde::{Deserialize, Serialize};

use super::definition::CardId;
use crate::core::{EntityId, PlayerId};

/// A card instance in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique entity ID for this instance.
    pub entity_id: EntityId,

    /// Reference to the card definition.
    pub card_id: CardId,

    /// Player whose deck the card belongs to. `None` while in a supply pile
    /// or the trash.
    pub owner: Option<PlayerId>,
}

impl CardInstance {
    /// Create an unowned instance (supply piles).
    #[must_use]
    pub fn neutral(entity_id: EntityId, card_id: CardId) -> Self {
        Self {
            entity_id,
            card_id,
            owner: None,
        }
    }

    /// Create an instance owned by a player (starting decks).
    #[must_use]
    pub fn owned(entity_id: EntityId, card_id: CardId, owner: PlayerId) -> Self {
        Self {
            entity_id,
            card_id,
            owner: Some(owner),
        }
    }

    /// Check if this is an unowned card.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.owner.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_and_owned() {
        let supply = CardInstance::neutral(EntityId(10), CardId::new(1));
        assert!(supply.is_neutral());

        let deck = CardInstance::owned(EntityId(11), CardId::new(1), PlayerId::new(0));
        assert_eq!(deck.owner, Some(PlayerId::new(0)));
        assert!(!deck.is_neutral());
    }
}
