//! Seaside: durations, attacks and set-aside mats.

use log::warn;
use smallvec::SmallVec;

use crate::cards::{CardBehavior, CardRegistry, CardTypes, Play, StepResult};
use crate::core::{EngineResult, EntityId, PlayerId};
use crate::decisions::{Answer, Continuation, PickCount, Stage};
use crate::engine::Game;
use crate::triggers::{Capabilities, TriggerKind, TriggerResponse};
use crate::zones::{ZoneId, ZonePosition};

use super::add;
use super::cards::*;
use super::common::Bonus;

/// Player counter holding the Pirate Ship mat.
pub const PIRATE_SHIP_MAT: &str = "pirate_ship";

const FIRST: Continuation = Continuation::handler(Stage::FIRST);

pub struct Ghostship;

impl CardBehavior for Ghostship {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        Bonus { cards: 2, ..Bonus::NONE }.apply(game, play.player)?;
        game.attack(play, true, false)
    }

    fn attack_handler(&self, game: &mut Game, play: Play, answer: &Answer) -> EngineResult<StepResult> {
        let hand = game.hand(play.player).to_vec();
        let excess = hand.len().saturating_sub(3);
        if *answer == Answer::Nothing {
            return game.pick_cards(
                play,
                "Put cards on top of your deck until you have 3 in hand",
                hand,
                PickCount::Exactly(excess),
                Continuation::attack(),
            );
        }

        if answer.cards().len() != excess {
            game.whisper(play.player, format!("You have to choose {} cards", excess));
            return Ok(StepResult::Rejected);
        }
        for &card in answer.cards() {
            if hand.contains(&card) {
                game.move_card_to_pile(card, ZoneId::Draw(play.player), ZonePosition::Top)?;
            }
        }
        Ok(StepResult::Resolved)
    }
}

/// Wharf: +2 cards and +1 buy now and next turn.
pub struct Wharf;

impl CardBehavior for Wharf {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        Bonus { cards: 2, buys: 1, ..Bonus::NONE }.apply(game, play.player)?;
        Ok(StepResult::Resolved)
    }

    fn begin_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        self.action_step(game, play)
    }
}

pub struct SeaHag;

impl CardBehavior for SeaHag {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        game.attack(play, false, false)
    }

    fn attack_handler(&self, game: &mut Game, play: Play, _answer: &Answer) -> EngineResult<StepResult> {
        let victim = play.player;
        if let Some(card) = game.reveal_top_card(victim) {
            game.discard_card(victim, card)?;
        }
        if game.take_card_from_pile(victim, CURSE, true, true)?.is_some() {
            game.yell(format!("{} puts a Curse on top of the deck", game.player_name(victim)));
        }
        Ok(StepResult::Resolved)
    }
}

pub struct Caravan;

impl CardBehavior for Caravan {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        Bonus { cards: 1, actions: 1, ..Bonus::NONE }.apply(game, play.player)?;
        Ok(StepResult::Resolved)
    }

    fn begin_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        Bonus { cards: 1, ..Bonus::NONE }.apply(game, play.player)?;
        Ok(StepResult::Resolved)
    }
}

/// Salvager: +1 buy, trash a card and gain its cost in money.
pub struct Salvager;

impl CardBehavior for Salvager {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        game.player_mut(play.player)?.buys += 1;
        game.pick_from_hand(play, "Pick a card to salvage", PickCount::Exactly(1), |_| true, FIRST)
    }

    fn handler(&self, game: &mut Game, play: Play, _stage: Stage, answer: &Answer) -> EngineResult<StepResult> {
        let Some(&card) = answer.cards().first() else {
            return Ok(StepResult::Resolved);
        };
        if !game.hand(play.player).contains(&card) {
            warn!("salvaged card left the hand; nothing to do");
            return Ok(StepResult::Resolved);
        }
        let cost = game.card_cost(card)?;
        game.player_mut(play.player)?.money += i64::from(cost.coins);
        game.trash_card(play.player, card)?;
        Ok(StepResult::Resolved)
    }
}

pub struct Bazaar;

impl CardBehavior for Bazaar {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        Bonus { cards: 1, actions: 2, money: 1, ..Bonus::NONE }.apply(game, play.player)?;
        Ok(StepResult::Resolved)
    }
}

pub struct MerchantShip;

impl CardBehavior for MerchantShip {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        game.player_mut(play.player)?.money += 2;
        Ok(StepResult::Resolved)
    }

    fn begin_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        self.action_step(game, play)
    }
}

/// Pearl Diver: +1 card, +1 action, may move the bottom card of the deck
/// to the top.
pub struct PearlDiver;

impl CardBehavior for PearlDiver {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        Bonus { cards: 1, actions: 1, ..Bonus::NONE }.apply(game, play.player)?;
        if !game.ensure_draw_pile(play.player) {
            return Ok(StepResult::Resolved);
        }
        let Some(bottom) = game.zones().bottom_card(ZoneId::Draw(play.player)) else {
            return Ok(StepResult::Resolved);
        };
        let prompt = format!("Put {} on top of your deck?", game.card_name(bottom));
        game.ask_yes_no(play, &prompt, FIRST)
    }

    fn handler(&self, game: &mut Game, play: Play, _stage: Stage, answer: &Answer) -> EngineResult<StepResult> {
        if answer.is_yes() {
            if let Some(bottom) = game.zones().bottom_card(ZoneId::Draw(play.player)) {
                game.move_card_to_pile(bottom, ZoneId::Draw(play.player), ZonePosition::Top)?;
            }
        }
        Ok(StepResult::Resolved)
    }
}

pub struct Cutpurse;

impl CardBehavior for Cutpurse {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        game.player_mut(play.player)?.money += 2;
        game.attack(play, false, false)
    }

    fn attack_handler(&self, game: &mut Game, play: Play, _answer: &Answer) -> EngineResult<StepResult> {
        let victim = play.player;
        let copper = game
            .hand(victim)
            .iter()
            .copied()
            .find(|&card| game.instance(card).map_or(false, |i| i.card_id == COPPER));
        match copper {
            Some(card) => game.discard_card(victim, card)?,
            None => game.reveal_player_hand(victim),
        }
        Ok(StepResult::Resolved)
    }
}

/// Smugglers: gain a card costing up to 6 that the previous player gained
/// on their last turn.
pub struct Smugglers;

impl CardBehavior for Smugglers {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        let Some(previous) = game.previous_player() else {
            return Ok(StepResult::Resolved);
        };

        let mut options = Vec::new();
        for &card in game.history().gained(previous) {
            let definition = game.definition_of(card)?;
            let id = definition.id;
            if options.contains(&id) || definition.cost.potions != 0 || game.pile_size(id) == 0 {
                continue;
            }
            if game.get_cost(id)?.coins <= 6 {
                options.push(id);
            }
        }

        match options.as_slice() {
            [] => {
                game.whisper(play.player, "Can't take any card with Smugglers");
                Ok(StepResult::Resolved)
            }
            [only] => {
                game.take_card_from_pile(play.player, *only, true, false)?;
                Ok(StepResult::Resolved)
            }
            _ => {
                let names: Vec<String> = options
                    .iter()
                    .filter_map(|&id| game.registry().get(id).map(|def| def.name.clone()))
                    .collect();
                game.ask(play, "Take which card?", names, FIRST)
            }
        }
    }

    fn handler(&self, game: &mut Game, play: Play, _stage: Stage, answer: &Answer) -> EngineResult<StepResult> {
        if let Some(card) = answer.as_choice().and_then(|name| game.card_id(name)) {
            game.take_card_from_pile(play.player, card, true, false)?;
        }
        Ok(StepResult::Resolved)
    }
}

pub struct Warehouse;

impl CardBehavior for Warehouse {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        Bonus { cards: 3, actions: 1, ..Bonus::NONE }.apply(game, play.player)?;
        game.pick_from_hand(play, "Discard 3 cards", PickCount::Exactly(3), |_| true, FIRST)
    }

    fn handler(&self, game: &mut Game, play: Play, _stage: Stage, answer: &Answer) -> EngineResult<StepResult> {
        for &card in answer.cards() {
            if game.hand(play.player).contains(&card) {
                game.discard_card(play.player, card)?;
            }
        }
        Ok(StepResult::Resolved)
    }
}

/// Tactician: discard your hand; if you did, +5 cards, +1 buy and +1 action
/// next turn.
pub struct Tactician;

impl CardBehavior for Tactician {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        let discarded = game.discard_hand(play.player);
        game.effect_state(play.card, play.player).flag = discarded > 0;
        Ok(StepResult::Resolved)
    }

    fn begin_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        let any_cards = game
            .peek_effect_state(play.card, play.player)
            .map_or(false, |state| state.flag);
        if any_cards {
            Bonus { cards: 5, actions: 1, buys: 1, ..Bonus::NONE }.apply(game, play.player)?;
        }
        Ok(StepResult::Resolved)
    }
}

/// Haven: +1 card, +1 action, set a card aside until next turn.
pub struct Haven;

impl CardBehavior for Haven {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        Bonus { cards: 1, actions: 1, ..Bonus::NONE }.apply(game, play.player)?;
        game.pick_from_hand(play, "Pick a card to set aside", PickCount::Exactly(1), |_| true, FIRST)
    }

    fn handler(&self, game: &mut Game, play: Play, _stage: Stage, answer: &Answer) -> EngineResult<StepResult> {
        if let Some(&card) = answer.cards().first() {
            game.move_card_to_pile(card, ZoneId::Aside(play.player), ZonePosition::Top)?;
            game.effect_state(play.card, play.player).cards.push(card);
            game.yell(format!("{} sets aside a card", game.player_name(play.player)));
        }
        Ok(StepResult::Resolved)
    }

    fn begin_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        let aside: SmallVec<[EntityId; 4]> = game
            .peek_effect_state(play.card, play.player)
            .map(|state| state.cards.clone())
            .unwrap_or_default();
        for card in aside {
            if game.zone_of(card) == Some(ZoneId::Aside(play.player)) {
                game.move_card_to_pile(card, ZoneId::Hand(play.player), ZonePosition::Top)?;
                game.yell(format!("{} puts a card in hand from Haven", game.player_name(play.player)));
            }
        }
        Ok(StepResult::Resolved)
    }
}

/// Treasure Map: trash it and another Treasure Map to gain 4 Golds onto
/// the deck.
pub struct TreasureMap;

impl CardBehavior for TreasureMap {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        let other = game
            .hand(play.player)
            .iter()
            .copied()
            .find(|&card| game.instance(card).map_or(false, |i| i.card_id == TREASURE_MAP));
        if let Some(other) = other {
            game.trash_card(play.player, play.card)?;
            game.trash_card(play.player, other)?;
            for _ in 0..4 {
                game.take_card_from_pile(play.player, GOLD, true, true)?;
            }
        }
        Ok(StepResult::Resolved)
    }
}

/// Treasury: +1 card, +1 action, +1 money; at cleanup it may go on top of
/// the deck if no Victory card was bought.
pub struct Treasury;

impl CardBehavior for Treasury {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        Bonus { cards: 1, actions: 1, money: 1, ..Bonus::NONE }.apply(game, play.player)?;
        Ok(StepResult::Resolved)
    }

    fn cleanup_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        let bought_victory = game
            .history()
            .bought(play.player)
            .iter()
            .any(|&card| game.card_is(card, CardTypes::VICTORY));
        if bought_victory {
            return Ok(StepResult::Resolved);
        }
        game.ask_yes_no(play, "Put Treasury on top of your deck?", FIRST)
    }

    fn handler(&self, game: &mut Game, play: Play, _stage: Stage, answer: &Answer) -> EngineResult<StepResult> {
        if answer.is_yes() && game.zone_of(play.card) == Some(ZoneId::Board(play.player)) {
            game.move_card_to_pile(play.card, ZoneId::Draw(play.player), ZonePosition::Top)?;
            game.yell(format!("{} puts Treasury on top of their deck", game.player_name(play.player)));
        }
        Ok(StepResult::Resolved)
    }
}

pub struct FishingVillage;

impl CardBehavior for FishingVillage {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        Bonus { actions: 2, money: 1, ..Bonus::NONE }.apply(game, play.player)?;
        Ok(StepResult::Resolved)
    }

    fn begin_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        Bonus { actions: 1, money: 1, ..Bonus::NONE }.apply(game, play.player)?;
        Ok(StepResult::Resolved)
    }
}

/// Lighthouse: +1 action, +1 money now, +1 money next turn; its owner is
/// immune to attacks while it is in play.
pub struct Lighthouse;

impl CardBehavior for Lighthouse {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        Bonus { actions: 1, money: 1, ..Bonus::NONE }.apply(game, play.player)?;
        Ok(StepResult::Resolved)
    }

    fn begin_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        game.player_mut(play.player)?.money += 1;
        Ok(StepResult::Resolved)
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::ATTACK
    }

    fn handle_trigger(&self, kind: TriggerKind) -> TriggerResponse {
        match kind {
            TriggerKind::Attack => TriggerResponse::Override,
            TriggerKind::Gain => TriggerResponse::Ignore,
        }
    }
}

/// Ambassador: reveal a card, return up to 2 copies of it to the supply,
/// then each opponent gains a copy.
pub struct Ambassador;

impl Ambassador {
    const REVEAL: Stage = Stage(0);
    const RETURN: Stage = Stage(1);
}

impl CardBehavior for Ambassador {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        game.pick_from_hand(
            play,
            "Pick a card to reveal",
            PickCount::Exactly(1),
            |_| true,
            Continuation::handler(Self::REVEAL),
        )
    }

    fn handler(&self, game: &mut Game, play: Play, stage: Stage, answer: &Answer) -> EngineResult<StepResult> {
        match stage {
            Self::REVEAL => {
                let Some(&revealed) = answer.cards().first() else {
                    return Ok(StepResult::Resolved);
                };
                let card_id = game.instance(revealed)?.card_id;
                game.yell(format!(
                    "{} reveals {}",
                    game.player_name(play.player),
                    game.card_name(revealed)
                ));
                let copies: SmallVec<[EntityId; 4]> = game
                    .hand(play.player)
                    .iter()
                    .copied()
                    .filter(|&card| game.instance(card).map_or(false, |i| i.card_id == card_id))
                    .collect();
                let most = copies.len().min(2);

                let state = game.effect_state(play.card, play.player);
                state.cards = copies;
                state.remembered = Some(card_id);
                game.ask(
                    play,
                    "Return how many copies?",
                    (0..=most).map(|n| n.to_string()),
                    Continuation::handler(Self::RETURN),
                )
            }
            _ => {
                let count: usize = answer.as_choice().and_then(|c| c.parse().ok()).unwrap_or(0);
                let Some(state) = game.peek_effect_state(play.card, play.player) else {
                    return Ok(StepResult::Resolved);
                };
                let Some(card_id) = state.remembered else {
                    return Ok(StepResult::Resolved);
                };
                let still_in_hand: Vec<EntityId> = state
                    .cards
                    .iter()
                    .copied()
                    .filter(|card| game.hand(play.player).contains(card))
                    .take(count)
                    .collect();

                if game.get_pile(card_id).is_some() {
                    for card in still_in_hand {
                        game.move_card_to_pile(card, ZoneId::Supply(card_id), ZonePosition::Top)?;
                    }
                } else {
                    warn!("{} has no supply pile to return to", card_id);
                }
                game.attack(play, false, false)
            }
        }
    }

    fn attack_handler(&self, game: &mut Game, play: Play, _answer: &Answer) -> EngineResult<StepResult> {
        let remembered = game
            .attacker(play.card)
            .and_then(|attacker| game.peek_effect_state(play.card, attacker))
            .and_then(|state| state.remembered);
        if let Some(card_id) = remembered {
            if game.get_pile(card_id).is_some() {
                game.take_card_from_pile(play.player, card_id, true, false)?;
            }
        }
        Ok(StepResult::Resolved)
    }
}

/// Pirate Ship: either attack (reveal 2 cards from each opponent and trash
/// a revealed treasure of each) or take money from the Pirate Ship mat.
pub struct PirateShip;

impl PirateShip {
    const MODE: Stage = Stage(0);
    const PLUNDER: Stage = Stage(1);

    /// Handle the next opponent with revealed cards. Opponents without a
    /// revealed treasure are handled on the spot.
    fn next_victim(game: &mut Game, play: Play) -> EngineResult<StepResult> {
        loop {
            let next = game
                .peek_effect_state(play.card, play.player)
                .and_then(|state| state.revealed.first().cloned());
            let Some((victim, revealed)) = next else {
                if game.peek_effect_state(play.card, play.player).map_or(false, |s| s.flag) {
                    game.player_mut(play.player)?.add_counter(PIRATE_SHIP_MAT, 1);
                }
                return Ok(StepResult::Resolved);
            };

            let treasures: Vec<EntityId> = revealed
                .iter()
                .copied()
                .filter(|&card| {
                    game.zone_of(card) == Some(ZoneId::Revealed(victim)) && game.card_is(card, CardTypes::TREASURE)
                })
                .collect();
            if !treasures.is_empty() {
                let prompt = format!("Trash a treasure of {}", game.player_name(victim));
                return game.pick_cards(
                    play,
                    &prompt,
                    treasures,
                    PickCount::Exactly(1),
                    Continuation::handler(Self::PLUNDER),
                );
            }
            Self::discard_revealed(game, victim, &revealed)?;
            game.effect_state(play.card, play.player).revealed.remove(0);
        }
    }

    fn discard_revealed(game: &mut Game, victim: PlayerId, revealed: &[EntityId]) -> EngineResult<()> {
        for &card in revealed {
            if game.zone_of(card) == Some(ZoneId::Revealed(victim)) {
                game.discard_card(victim, card)?;
            }
        }
        Ok(())
    }
}

impl CardBehavior for PirateShip {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        let mat = game.player(play.player)?.counter(PIRATE_SHIP_MAT);
        let prompt = format!("Attack players or gain {} money?", mat);
        game.ask(
            play,
            &prompt,
            ["Attack".to_string(), format!("+{} money", mat)],
            Continuation::handler(Self::MODE),
        )
    }

    fn handler(&self, game: &mut Game, play: Play, stage: Stage, answer: &Answer) -> EngineResult<StepResult> {
        match stage {
            Self::MODE => {
                if answer.as_choice() == Some("Attack") {
                    let state = game.effect_state(play.card, play.player);
                    state.revealed.clear();
                    state.flag = false;
                    return game.attack(play, false, true);
                }
                let mat = game.player(play.player)?.counter(PIRATE_SHIP_MAT);
                game.player_mut(play.player)?.money += mat;
                Ok(StepResult::Resolved)
            }
            _ => {
                let state = game.effect_state(play.card, play.player);
                if state.revealed.is_empty() {
                    return Ok(StepResult::Resolved);
                }
                let (victim, revealed) = state.revealed.remove(0);
                if let Some(&chosen) = answer.cards().first() {
                    if game.zone_of(chosen) == Some(ZoneId::Revealed(victim)) {
                        game.trash_card(victim, chosen)?;
                        game.effect_state(play.card, play.player).flag = true;
                    }
                }
                Self::discard_revealed(game, victim, &revealed)?;
                Self::next_victim(game, play)
            }
        }
    }

    fn attack_handler(&self, game: &mut Game, play: Play, _answer: &Answer) -> EngineResult<StepResult> {
        let Some(attacker) = game.attacker(play.card) else {
            return Ok(StepResult::Resolved);
        };
        let revealed: SmallVec<[EntityId; 2]> = (0..2).filter_map(|_| game.reveal_top_card(play.player)).collect();
        game.effect_state(play.card, attacker).revealed.push((play.player, revealed));
        Ok(StepResult::Resolved)
    }

    fn attack_complete(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        Self::next_victim(game, play)
    }
}

/// Island: set this and a card from hand aside until the end of the game;
/// worth 2 points.
pub struct Island;

impl CardBehavior for Island {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        game.pick_from_hand(play, "Pick a card to set aside", PickCount::Exactly(1), |_| true, FIRST)
    }

    fn handler(&self, game: &mut Game, play: Play, _stage: Stage, answer: &Answer) -> EngineResult<StepResult> {
        let mat = ZoneId::Island(play.player);
        game.move_card_to_pile(play.card, mat, ZonePosition::Top)?;
        if let Some(&card) = answer.cards().first() {
            if game.hand(play.player).contains(&card) {
                game.move_card_to_pile(card, mat, ZonePosition::Top)?;
            }
        }
        Ok(StepResult::Resolved)
    }

    fn end_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        game.player_mut(play.player)?.score += 2;
        Ok(StepResult::Resolved)
    }
}

pub(super) fn register(registry: &mut CardRegistry) {
    use CardTypes as T;

    add(registry, GHOSTSHIP, "Ghostship", T::ACTION | T::ATTACK, 5, Ghostship);
    add(registry, WHARF, "Wharf", T::ACTION | T::DURATION, 5, Wharf);
    add(registry, SEA_HAG, "Sea Hag", T::ACTION | T::ATTACK, 4, SeaHag);
    add(registry, CARAVAN, "Caravan", T::ACTION | T::DURATION, 4, Caravan);
    add(registry, SALVAGER, "Salvager", T::ACTION, 4, Salvager);
    add(registry, BAZAAR, "Bazaar", T::ACTION, 5, Bazaar);
    add(registry, MERCHANT_SHIP, "Merchant Ship", T::ACTION | T::DURATION, 5, MerchantShip);
    add(registry, PEARL_DIVER, "Pearl Diver", T::ACTION, 2, PearlDiver);
    add(registry, CUTPURSE, "Cutpurse", T::ACTION | T::ATTACK, 4, Cutpurse);
    add(registry, SMUGGLERS, "Smugglers", T::ACTION, 3, Smugglers);
    add(registry, WAREHOUSE, "Warehouse", T::ACTION, 3, Warehouse);
    add(registry, TACTICIAN, "Tactician", T::ACTION | T::DURATION, 5, Tactician);
    add(registry, HAVEN, "Haven", T::ACTION | T::DURATION, 2, Haven);
    add(registry, TREASURE_MAP, "Treasure Map", T::ACTION, 4, TreasureMap);
    add(registry, TREASURY, "Treasury", T::ACTION, 5, Treasury);
    add(registry, FISHING_VILLAGE, "Fishing Village", T::ACTION | T::DURATION, 3, FishingVillage);
    add(registry, LIGHTHOUSE, "Lighthouse", T::ACTION | T::DURATION, 2, Lighthouse);
    add(registry, AMBASSADOR, "Ambassador", T::ACTION | T::ATTACK, 3, Ambassador);
    add(registry, PIRATE_SHIP, "Pirate Ship", T::ACTION | T::ATTACK, 4, PirateShip);
    add(registry, ISLAND, "Island", T::ACTION | T::VICTORY, 4, Island);
}
