//! Moving cards between zones.
//!
//! Everything that relocates a card goes through [`Game::move_card_to_pile`]
//! so ownership, cost modifiers and effect state follow the card.

use log::debug;

use crate::cards::{CardId, CardInstance};
use crate::core::{EngineError, EngineResult, EntityId, PlayerId};
use crate::stack::Link;
use crate::triggers::{GainEvent, Trigger};
use crate::zones::{ZoneId, ZonePosition};

use super::Game;

impl Game {
    /// Create a new instance of `card_id` in `zone`.
    pub fn create_card(&mut self, card_id: CardId, zone: ZoneId, position: ZonePosition) -> EngineResult<EntityId> {
        if !self.registry.contains(card_id) {
            return Err(EngineError::UnknownDefinition(card_id));
        }
        let entity = self.entities.alloc();
        let instance = match zone.owner() {
            Some(owner) => CardInstance::owned(entity, card_id, owner),
            None => CardInstance::neutral(entity, card_id),
        };
        self.cards.insert(entity, instance);
        self.zones.add_to_zone(entity, zone, position);
        Ok(entity)
    }

    /// Move a card to `zone`. The card belongs to the zone's owner
    /// afterwards (nobody, for supply piles and the trash).
    ///
    /// Returns the zone the card came from.
    pub fn move_card_to_pile(&mut self, card: EntityId, zone: ZoneId, position: ZonePosition) -> EngineResult<ZoneId> {
        let from = self
            .zones
            .move_to_zone(card, zone, position)
            .ok_or(EngineError::UnknownCard(card))?;
        if let Some(instance) = self.cards.get_mut(&card) {
            instance.owner = zone.owner();
        }
        if matches!(from, ZoneId::Board(_)) && !matches!(zone, ZoneId::Board(_)) {
            self.left_play(card);
        }
        Ok(from)
    }

    fn left_play(&mut self, card: EntityId) {
        self.cost_mods.remove_owner(card);
        for (_, waiting) in self.durations.iter_mut() {
            waiting.retain(|&c| c != card);
        }
        if !self.pending.is_open(card) {
            self.effects.clear_card(card);
        }
    }

    /// Put a card in the trash.
    pub fn trash_card(&mut self, player: PlayerId, card: EntityId) -> EngineResult<()> {
        self.move_card_to_pile(card, ZoneId::Trash, ZonePosition::Top)?;
        self.yell(format!("{} trashes {}", self.player_name(player), self.card_name(card)));
        Ok(())
    }

    /// Put a card on top of `player`'s discard pile.
    pub fn discard_card(&mut self, player: PlayerId, card: EntityId) -> EngineResult<()> {
        self.move_card_to_pile(card, ZoneId::Discard(player), ZonePosition::Top)?;
        Ok(())
    }

    /// Discard `player`'s whole hand. Returns how many cards were discarded.
    pub fn discard_hand(&mut self, player: PlayerId) -> usize {
        self.zones.move_all(ZoneId::Hand(player), ZoneId::Discard(player)).len()
    }

    /// Gain the top card of a supply pile.
    ///
    /// With `safe` an empty pile is a no-op instead of an error. With
    /// `to_deck` the card goes on top of the draw pile instead of the
    /// discard pile. Fires GAIN for `player`.
    pub fn take_card_from_pile(
        &mut self,
        player: PlayerId,
        card: CardId,
        safe: bool,
        to_deck: bool,
    ) -> EngineResult<Option<EntityId>> {
        if self.get_pile(card).is_none() {
            return Err(EngineError::MissingPile(card));
        }
        let Some(gained) = self.zones.top_card(ZoneId::Supply(card)) else {
            if safe {
                debug!("{} cannot gain from the empty {} pile", self.player_name(player), card);
                return Ok(None);
            }
            return Err(EngineError::EmptyPile(card));
        };

        let destination = if to_deck {
            ZoneId::Draw(player)
        } else {
            ZoneId::Discard(player)
        };
        self.move_card_to_pile(gained, destination, ZonePosition::Top)?;
        self.history.record_gained(player, gained);
        self.yell(format!("{} gains {}", self.player_name(player), self.card_name(gained)));

        let source = self.executing.last().copied();
        let event = GainEvent {
            gained,
            card,
            player,
            source,
        };
        self.fire_trigger(Trigger::Gain(event), source.map(Link::Part))?;
        Ok(Some(gained))
    }

    /// Shuffle the discard pile into an empty draw pile.
    ///
    /// Returns false if there is nothing left to draw.
    pub fn ensure_draw_pile(&mut self, player: PlayerId) -> bool {
        if self.zones.zone_size(ZoneId::Draw(player)) > 0 {
            return true;
        }
        let moved = self.zones.move_all(ZoneId::Discard(player), ZoneId::Draw(player));
        if moved.is_empty() {
            return false;
        }
        self.zones.shuffle_zone(ZoneId::Draw(player), &mut self.rng);
        debug!("{} shuffles {} cards", self.player_name(player), moved.len());
        true
    }

    /// Draw up to `count` cards, reshuffling when the draw pile runs out.
    pub fn draw_card(&mut self, player: PlayerId, count: usize) -> Vec<EntityId> {
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            if !self.ensure_draw_pile(player) {
                break;
            }
            let Some(card) = self.zones.top_card(ZoneId::Draw(player)) else {
                break;
            };
            self.zones.move_to_zone(card, ZoneId::Hand(player), ZonePosition::Top);
            drawn.push(card);
        }
        drawn
    }

    /// Reveal the top card of the draw pile, moving it to the player's
    /// revealed area. `None` when draw and discard piles are both empty.
    pub fn reveal_top_card(&mut self, player: PlayerId) -> Option<EntityId> {
        if !self.ensure_draw_pile(player) {
            return None;
        }
        let card = self.zones.top_card(ZoneId::Draw(player))?;
        self.zones.move_to_zone(card, ZoneId::Revealed(player), ZonePosition::Top);
        self.yell(format!("{} reveals {}", self.player_name(player), self.card_name(card)));
        Some(card)
    }

    /// Show everyone the cards in `player`'s hand.
    pub fn reveal_player_hand(&mut self, player: PlayerId) {
        let names: Vec<String> = self.hand(player).iter().map(|&c| self.card_name(c)).collect();
        self.yell(format!("{} reveals their hand: {}", self.player_name(player), names.join(", ")));
    }
}

#[cfg(test)]
mod tests {
    use crate::cards::{CardDefinition, CardId, CardRegistry, CardTypes, Cost};
    use crate::core::{EngineConfig, PlayerId};
    use crate::engine::GameBuilder;
    use crate::zones::ZoneId;

    const COPPER: CardId = CardId::new(1);
    const ESTATE: CardId = CardId::new(2);

    fn registry() -> CardRegistry {
        let mut registry = CardRegistry::new();
        registry.register_vanilla(CardDefinition::new(COPPER, "Copper", CardTypes::TREASURE));
        registry.register_vanilla(
            CardDefinition::new(ESTATE, "Estate", CardTypes::VICTORY).with_cost(Cost::coins(2)),
        );
        registry
    }

    #[test]
    fn test_draw_reshuffles_discard() {
        let p0 = PlayerId::new(0);
        let mut game = GameBuilder::new(EngineConfig::new(2), registry())
            .with_deck(p0, [COPPER])
            .with_discard(p0, [ESTATE, ESTATE])
            .build()
            .unwrap();

        let drawn = game.draw_card(p0, 3);
        assert_eq!(drawn.len(), 3);
        assert!(game.discard_pile(p0).is_empty());
        assert_eq!(game.hand(p0).len(), 3);
    }

    #[test]
    fn test_draw_stops_when_out_of_cards() {
        let p0 = PlayerId::new(0);
        let mut game = GameBuilder::new(EngineConfig::new(2), registry())
            .with_deck(p0, [COPPER])
            .build()
            .unwrap();

        assert_eq!(game.draw_card(p0, 5).len(), 1);
    }

    #[test]
    fn test_gain_changes_owner_and_records_history() {
        let p1 = PlayerId::new(1);
        let mut game = GameBuilder::new(EngineConfig::new(2), registry())
            .with_pile(ESTATE, 2, false)
            .build()
            .unwrap();

        let gained = game.take_card_from_pile(p1, ESTATE, false, true).unwrap().unwrap();
        assert_eq!(game.zone_of(gained), Some(ZoneId::Draw(p1)));
        assert_eq!(game.instance(gained).unwrap().owner, Some(p1));
        assert_eq!(game.history().gained(p1).len(), 1);
        assert_eq!(game.pile_size(ESTATE), 1);
    }

    #[test]
    fn test_take_from_empty_pile() {
        let p0 = PlayerId::new(0);
        let mut game = GameBuilder::new(EngineConfig::new(2), registry())
            .with_pile(ESTATE, 0, false)
            .build()
            .unwrap();

        assert_eq!(game.take_card_from_pile(p0, ESTATE, true, false), Ok(None));
        assert!(game.take_card_from_pile(p0, ESTATE, false, false).is_err());
        assert!(game.take_card_from_pile(p0, COPPER, true, false).is_err());
    }

    #[test]
    fn test_trash_clears_owner() {
        let p0 = PlayerId::new(0);
        let mut game = GameBuilder::new(EngineConfig::new(2), registry())
            .with_hand(p0, [COPPER])
            .build()
            .unwrap();
        let copper = game.hand(p0)[0];

        game.trash_card(p0, copper).unwrap();
        assert_eq!(game.trash(), &[copper]);
        assert_eq!(game.instance(copper).unwrap().owner, None);
    }

    #[test]
    fn test_reveal_top_card() {
        let p0 = PlayerId::new(0);
        let mut game = GameBuilder::new(EngineConfig::new(2), registry())
            .with_deck(p0, [ESTATE, COPPER])
            .build()
            .unwrap();

        let revealed = game.reveal_top_card(p0).unwrap();
        assert_eq!(game.card_name(revealed), "Estate");
        assert_eq!(game.zone_of(revealed), Some(ZoneId::Revealed(p0)));
    }
}
