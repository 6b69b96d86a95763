//! Zone identifiers.
//!
//! Unlike a general engine where games configure arbitrary zones, a
//! deck-builder has a fixed set: per-player hand, draw pile, discard pile,
//! board and side mats, one supply pile per definition, and the trash.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::PlayerId;

/// Where a card currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneId {
    /// Cards in a player's hand (unordered for play purposes).
    Hand(PlayerId),
    /// Draw pile; the last card is the top.
    Draw(PlayerId),
    /// Discard pile; the last card is the top.
    Discard(PlayerId),
    /// Cards in play this turn, in the order they were played.
    Board(PlayerId),
    /// Cards set aside by an effect until a later turn.
    Aside(PlayerId),
    /// Island mat: set aside until the end of the game.
    Island(PlayerId),
    /// Revealed from the draw pile and awaiting a decision.
    Revealed(PlayerId),
    /// A supply pile.
    Supply(CardId),
    /// Removed from the game.
    Trash,
}

impl ZoneId {
    /// The player a zone belongs to, `None` for shared zones.
    #[must_use]
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            ZoneId::Hand(p)
            | ZoneId::Draw(p)
            | ZoneId::Discard(p)
            | ZoneId::Board(p)
            | ZoneId::Aside(p)
            | ZoneId::Island(p)
            | ZoneId::Revealed(p) => Some(p),
            ZoneId::Supply(_) | ZoneId::Trash => None,
        }
    }

    /// Every zone a player owns.
    #[must_use]
    pub fn player_zones(player: PlayerId) -> [ZoneId; 7] {
        [
            ZoneId::Hand(player),
            ZoneId::Draw(player),
            ZoneId::Discard(player),
            ZoneId::Board(player),
            ZoneId::Aside(player),
            ZoneId::Island(player),
            ZoneId::Revealed(player),
        ]
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneId::Hand(p) => write!(f, "hand of {}", p),
            ZoneId::Draw(p) => write!(f, "draw pile of {}", p),
            ZoneId::Discard(p) => write!(f, "discard pile of {}", p),
            ZoneId::Board(p) => write!(f, "board of {}", p),
            ZoneId::Aside(p) => write!(f, "set-aside zone of {}", p),
            ZoneId::Island(p) => write!(f, "island mat of {}", p),
            ZoneId::Revealed(p) => write!(f, "revealed cards of {}", p),
            ZoneId::Supply(c) => write!(f, "supply pile of {}", c),
            ZoneId::Trash => write!(f, "trash"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner() {
        let p = PlayerId::new(1);
        assert_eq!(ZoneId::Board(p).owner(), Some(p));
        assert_eq!(ZoneId::Supply(CardId::new(3)).owner(), None);
        assert_eq!(ZoneId::Trash.owner(), None);
    }

    #[test]
    fn test_player_zones_are_all_owned() {
        let p = PlayerId::new(2);
        assert!(ZoneId::player_zones(p).iter().all(|z| z.owner() == Some(p)));
    }
}
