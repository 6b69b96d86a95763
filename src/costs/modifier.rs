//! Cost modifiers and the cost pipeline.

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::cards::{CardDefinition, CardId, Cost, Play};
use crate::core::{EngineError, EngineResult, EntityId, PlayerId};
use crate::engine::Game;
use crate::zones::{ZoneId, ZoneManager};

/// What a modifier gets to look at.
pub struct CostQuery<'a> {
    pub card: &'a CardDefinition,
    /// Player the cost is computed for.
    pub player: PlayerId,
}

/// A pure cost transformation. `None` leaves the cost unchanged.
pub type CostRule = dyn Fn(&CostQuery<'_>, Cost) -> Option<Cost> + Send + Sync;

/// A modifier owned by a card in play.
#[derive(Clone)]
pub struct CostModifier {
    pub owner: EntityId,
    pub controller: PlayerId,
    rule: Arc<CostRule>,
}

impl CostModifier {
    /// Active while the owner is on its controller's board.
    #[must_use]
    pub fn is_active(&self, zones: &ZoneManager) -> bool {
        zones.is_in_zone(self.owner, ZoneId::Board(self.controller))
    }

    fn apply(&self, query: &CostQuery<'_>, cost: Cost) -> Cost {
        (self.rule)(query, cost).unwrap_or(cost)
    }
}

impl fmt::Debug for CostModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CostModifier")
            .field("owner", &self.owner)
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}

/// Registered modifiers in registration order.
#[derive(Clone, Debug, Default)]
pub struct CostPipeline {
    modifiers: Vec<CostModifier>,
}

impl CostPipeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, modifier: CostModifier) {
        self.modifiers.push(modifier);
    }

    /// Fold `base` through every active modifier, clamping at zero.
    #[must_use]
    pub fn compute(&self, zones: &ZoneManager, query: &CostQuery<'_>, base: Cost) -> Cost {
        self.modifiers
            .iter()
            .filter(|m| m.is_active(zones))
            .fold(base, |cost, m| m.apply(query, cost))
            .clamped()
    }

    /// Drop modifiers whose owner left play. Returns how many were dropped.
    pub fn prune(&mut self, zones: &ZoneManager) -> usize {
        let before = self.modifiers.len();
        self.modifiers.retain(|m| m.is_active(zones));
        before - self.modifiers.len()
    }

    /// Drop the modifiers of one card.
    pub fn remove_owner(&mut self, owner: EntityId) {
        self.modifiers.retain(|m| m.owner != owner);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }
}

impl Game {
    /// Register a cost modifier owned by `play.card` for `play.player`.
    ///
    /// It applies for as long as the card stays in play.
    pub fn add_cost_mod<F>(&mut self, play: Play, rule: F)
    where
        F: Fn(&CostQuery<'_>, Cost) -> Option<Cost> + Send + Sync + 'static,
    {
        debug!("{} adds a cost modifier", self.card_name(play.card));
        self.cost_mods.push(CostModifier {
            owner: play.card,
            controller: play.player,
            rule: Arc::new(rule),
        });
    }

    /// Current cost of a definition for the active player.
    pub fn get_cost(&self, card: CardId) -> EngineResult<Cost> {
        self.cost_for(card, self.active)
    }

    /// Current cost of a definition for `player`.
    pub fn cost_for(&self, card: CardId, player: PlayerId) -> EngineResult<Cost> {
        let definition = self.registry.get(card).ok_or(EngineError::UnknownDefinition(card))?;
        let query = CostQuery { card: definition, player };
        Ok(self.cost_mods.compute(&self.zones, &query, definition.cost))
    }

    /// Current cost of a card instance for the active player.
    pub fn card_cost(&self, card: EntityId) -> EngineResult<Cost> {
        self.get_cost(self.instance(card)?.card_id)
    }

    /// Number of registered modifiers, active or not.
    #[must_use]
    pub fn cost_mod_count(&self) -> usize {
        self.cost_mods.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardTypes;
    use crate::zones::ZonePosition;

    fn modifier(owner: u32, delta: i32) -> CostModifier {
        CostModifier {
            owner: EntityId(owner),
            controller: PlayerId::new(0),
            rule: Arc::new(move |_q: &CostQuery<'_>, cost: Cost| Some(cost.adjust_coins(delta))),
        }
    }

    #[test]
    fn test_only_modifiers_in_play_apply() {
        let mut zones = ZoneManager::new();
        zones.add_to_zone(EntityId(1), ZoneId::Board(PlayerId::new(0)), ZonePosition::Top);
        zones.add_to_zone(EntityId(2), ZoneId::Hand(PlayerId::new(0)), ZonePosition::Top);

        let mut pipeline = CostPipeline::new();
        pipeline.push(modifier(1, -2));
        pipeline.push(modifier(2, -2));

        let def = CardDefinition::new(CardId::new(1), "Village", CardTypes::ACTION).with_cost(Cost::coins(3));
        let query = CostQuery {
            card: &def,
            player: PlayerId::new(0),
        };
        assert_eq!(pipeline.compute(&zones, &query, def.cost), Cost::coins(1));

        assert_eq!(pipeline.prune(&zones), 1);
        assert_eq!(pipeline.len(), 1);
    }

    #[test]
    fn test_result_is_clamped() {
        let mut zones = ZoneManager::new();
        zones.add_to_zone(EntityId(1), ZoneId::Board(PlayerId::new(0)), ZonePosition::Top);
        zones.add_to_zone(EntityId(2), ZoneId::Board(PlayerId::new(0)), ZonePosition::Top);

        let mut pipeline = CostPipeline::new();
        pipeline.push(modifier(1, -2));
        pipeline.push(modifier(2, -2));

        let def = CardDefinition::new(CardId::new(1), "Village", CardTypes::ACTION).with_cost(Cost::coins(3));
        let query = CostQuery {
            card: &def,
            player: PlayerId::new(0),
        };
        assert_eq!(pipeline.compute(&zones, &query, def.cost), Cost::coins(0));
    }
}
