//! Zone manager for card locations and movement.
//!
//! Every card is in exactly one zone at a time. Each zone keeps its cards in
//! order (index 0 = bottom, last = top), so draw and discard piles, supply
//! piles and the board all share one representation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{EntityId, GameRng};

use super::zone::ZoneId;

/// Position for inserting a card into a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// Add to top of zone (end of the list).
    Top,
    /// Add to bottom of zone.
    Bottom,
}

/// Manages card locations across zones.
///
/// ```
/// use rust_deckbuilder::core::{EntityId, PlayerId};
/// use rust_deckbuilder::zones::{ZoneId, ZoneManager, ZonePosition};
///
/// let mut zones = ZoneManager::new();
/// let deck = ZoneId::Draw(PlayerId::new(0));
///
/// zones.add_to_zone(EntityId(10), deck, ZonePosition::Top);
/// zones.add_to_zone(EntityId(11), deck, ZonePosition::Top);
///
/// assert_eq!(zones.top_card(deck), Some(EntityId(11)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZoneManager {
    /// Card locations: entity_id -> zone_id
    locations: FxHashMap<EntityId, ZoneId>,

    /// Ordered card lists per zone.
    zone_order: FxHashMap<ZoneId, Vec<EntityId>>,
}

impl ZoneManager {
    /// Create a new empty zone manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card that is not tracked yet.
    ///
    /// Panics if the entity is already in the manager.
    pub fn add_to_zone(&mut self, entity: EntityId, zone: ZoneId, position: ZonePosition) {
        if self.locations.contains_key(&entity) {
            panic!("Entity {:?} already exists in zone manager", entity);
        }
        self.locations.insert(entity, zone);
        Self::insert_ordered(self.zone_order.entry(zone).or_default(), entity, position);
    }

    /// Move a card from one zone to another.
    ///
    /// Returns the old zone, or `None` if the card wasn't found. Moving a card
    /// onto its own zone repositions it.
    pub fn move_to_zone(&mut self, entity: EntityId, new_zone: ZoneId, position: ZonePosition) -> Option<ZoneId> {
        let old_zone = self.locations.get(&entity).copied()?;

        if let Some(order) = self.zone_order.get_mut(&old_zone) {
            order.retain(|&e| e != entity);
        }
        self.locations.insert(entity, new_zone);
        Self::insert_ordered(self.zone_order.entry(new_zone).or_default(), entity, position);

        Some(old_zone)
    }

    fn insert_ordered(order: &mut Vec<EntityId>, entity: EntityId, position: ZonePosition) {
        match position {
            ZonePosition::Top => order.push(entity),
            ZonePosition::Bottom => order.insert(0, entity),
        }
    }

    /// Get the zone a card is in.
    #[must_use]
    pub fn get_zone(&self, entity: EntityId) -> Option<ZoneId> {
        self.locations.get(&entity).copied()
    }

    /// Check if a card is in a specific zone.
    #[must_use]
    pub fn is_in_zone(&self, entity: EntityId, zone: ZoneId) -> bool {
        self.locations.get(&entity) == Some(&zone)
    }

    /// Cards in a zone, bottom to top.
    #[must_use]
    pub fn cards_in_zone(&self, zone: ZoneId) -> &[EntityId] {
        self.zone_order.get(&zone).map_or(&[], |v| v.as_slice())
    }

    /// Get the number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: ZoneId) -> usize {
        self.cards_in_zone(zone).len()
    }

    /// Get the top card of a zone (last in the vec).
    #[must_use]
    pub fn top_card(&self, zone: ZoneId) -> Option<EntityId> {
        self.zone_order.get(&zone)?.last().copied()
    }

    /// Get the bottom card of a zone (first in the vec).
    #[must_use]
    pub fn bottom_card(&self, zone: ZoneId) -> Option<EntityId> {
        self.zone_order.get(&zone)?.first().copied()
    }

    /// Move every card of `from` onto the top of `to`, keeping their order.
    ///
    /// Returns the moved cards.
    pub fn move_all(&mut self, from: ZoneId, to: ZoneId) -> Vec<EntityId> {
        let moved = self.zone_order.remove(&from).unwrap_or_default();
        for &entity in &moved {
            self.locations.insert(entity, to);
        }
        self.zone_order.entry(to).or_default().extend(moved.iter().copied());
        moved
    }

    /// Shuffle a zone.
    pub fn shuffle_zone(&mut self, zone: ZoneId, rng: &mut GameRng) {
        if let Some(order) = self.zone_order.get_mut(&zone) {
            rng.shuffle(order);
        }
    }

    /// Get total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    /// Check if the manager contains an entity.
    #[must_use]
    pub fn contains(&self, entity: EntityId) -> bool {
        self.locations.contains_key(&entity)
    }
}
