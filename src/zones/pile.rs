//! Supply pile metadata.
//!
//! The cards of a pile live in the zone manager under
//! [`ZoneId::Supply`]; a `Pile` records what the zone cannot: how big it
//! started and whether it is a kingdom pile.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

use super::zone::ZoneId;

/// A supply pile of one definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    /// Definition every card of the pile shares.
    pub card: CardId,

    /// Number of cards the pile started with.
    pub initial_size: usize,

    /// Kingdom piles (as opposed to base treasures, victories and curses).
    pub kingdom: bool,
}

impl Pile {
    /// Create pile metadata.
    #[must_use]
    pub fn new(card: CardId, initial_size: usize, kingdom: bool) -> Self {
        Self {
            card,
            initial_size,
            kingdom,
        }
    }

    /// Zone holding the pile's cards.
    #[must_use]
    pub fn zone(&self) -> ZoneId {
        ZoneId::Supply(self.card)
    }
}
