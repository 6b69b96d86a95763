//! Prosperity: treasures with effects, cost reduction and reactions to
//! gains.

use log::warn;

use crate::cards::{CardBehavior, CardRegistry, CardTypes, Cost, Play, StepResult};
use crate::core::{EngineResult, EntityId};
use crate::decisions::{Answer, Continuation, PickCount, Stage};
use crate::engine::Game;
use crate::triggers::{Capabilities, GainEvent, TriggerKind, TriggerResponse};
use crate::zones::{ZoneId, ZonePosition};

use super::add;
use super::cards::*;
use super::common::Bonus;

const FIRST: Continuation = Continuation::handler(Stage::FIRST);

/// Loan: worth 1; reveal until a treasure, then trash or discard it.
pub struct Loan;

impl CardBehavior for Loan {
    fn buy_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        let player = play.player;
        game.player_mut(player)?.money += 1;

        let treasures = game
            .draw_pile(player)
            .iter()
            .chain(game.discard_pile(player))
            .filter(|&&card| game.card_is(card, CardTypes::TREASURE))
            .count();
        if treasures == 0 {
            return Ok(StepResult::Resolved);
        }

        while let Some(card) = game.reveal_top_card(player) {
            if !game.card_is(card, CardTypes::TREASURE) {
                game.discard_card(player, card)?;
                continue;
            }
            game.effect_state(play.card, player).cards.push(card);
            let prompt = format!("Trash or discard {}", game.card_name(card));
            return game.ask(play, &prompt, ["Trash", "Discard"], FIRST);
        }
        Ok(StepResult::Resolved)
    }

    fn handler(&self, game: &mut Game, play: Play, _stage: Stage, answer: &Answer) -> EngineResult<StepResult> {
        let player = play.player;
        let revealed = game
            .peek_effect_state(play.card, player)
            .and_then(|state| state.cards.first().copied());
        match revealed {
            Some(card) if game.zone_of(card) == Some(ZoneId::Revealed(player)) => {
                if answer.as_choice() == Some("Trash") {
                    game.trash_card(player, card)?;
                } else {
                    game.discard_card(player, card)?;
                }
            }
            _ => warn!("the card revealed by Loan is gone; nothing to do"),
        }
        Ok(StepResult::Resolved)
    }
}

/// Trade Route: +1 buy, +1 money per kingdom pile that has been gained
/// from, trash up to one card.
pub struct TradeRoute;

impl CardBehavior for TradeRoute {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        let touched = game
            .kingdom_piles()
            .filter(|pile| game.pile_size(pile.card) < pile.initial_size)
            .count();
        let state = game.player_mut(play.player)?;
        state.buys += 1;
        state.money += touched as i64;
        game.pick_from_hand(play, "Trash up to 1 card", PickCount::UpTo(1), |_| true, FIRST)
    }

    fn handler(&self, game: &mut Game, play: Play, _stage: Stage, answer: &Answer) -> EngineResult<StepResult> {
        for &card in answer.cards() {
            if game.hand(play.player).contains(&card) {
                game.trash_card(play.player, card)?;
            }
        }
        Ok(StepResult::Resolved)
    }
}

/// City: +1 card, +2 actions; more with empty supply piles.
pub struct City;

impl CardBehavior for City {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        let empty = game.empty_piles();
        let mut bonus = Bonus { cards: 1, actions: 2, ..Bonus::NONE };
        if empty >= 1 {
            bonus.cards += 1;
        }
        if empty >= 2 {
            bonus.money += 1;
            bonus.buys += 1;
        }
        bonus.apply(game, play.player)?;
        Ok(StepResult::Resolved)
    }
}

pub struct WorkersVillage;

impl CardBehavior for WorkersVillage {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        Bonus { cards: 1, actions: 2, buys: 1, ..Bonus::NONE }.apply(game, play.player)?;
        Ok(StepResult::Resolved)
    }
}

/// Expand: trash a card and gain one costing up to 3 more.
pub struct Expand;

impl Expand {
    const TRASH: Stage = Stage(0);
    const GAIN: Stage = Stage(1);
}

impl CardBehavior for Expand {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        game.pick_from_hand(
            play,
            "Pick a card to trash",
            PickCount::Exactly(1),
            |_| true,
            Continuation::handler(Self::TRASH),
        )
    }

    fn handler(&self, game: &mut Game, play: Play, stage: Stage, answer: &Answer) -> EngineResult<StepResult> {
        match stage {
            Self::TRASH => {
                let Some(&card) = answer.cards().first() else {
                    return Ok(StepResult::Resolved);
                };
                let cost = game.card_cost(card)?;
                let limit = Cost::new(cost.coins + 3, cost.potions);
                game.trash_card(play.player, card)?;
                game.effect_state(play.card, play.player).cost = Some(limit);

                let prompt = format!("Pick a card costing up to {}", limit);
                game.pick_from_pile(
                    play,
                    &prompt,
                    |game, pile| game.get_cost(pile.card).map_or(false, |c| c.fits_within(limit)),
                    Continuation::handler(Self::GAIN),
                )
            }
            _ => {
                let Some(card) = answer.pile() else {
                    return Ok(StepResult::Resolved);
                };
                let limit = game
                    .peek_effect_state(play.card, play.player)
                    .and_then(|state| state.cost)
                    .unwrap_or_default();
                if !game.get_cost(card)?.fits_within(limit) {
                    game.whisper(play.player, format!("You have to pick a card costing up to {}", limit));
                    return Ok(StepResult::Rejected);
                }
                game.take_card_from_pile(play.player, card, true, false)?;
                Ok(StepResult::Resolved)
            }
        }
    }
}

/// Bank: +1 money per treasure in play, itself included.
pub struct Bank;

impl CardBehavior for Bank {
    fn buy_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        let treasures = game
            .history()
            .played(play.player)
            .iter()
            .filter(|&&card| game.card_is(card, CardTypes::TREASURE))
            .count();
        game.player_mut(play.player)?.money += treasures as i64;
        Ok(StepResult::Resolved)
    }
}

/// Watchtower: draw up to 6 cards in hand. While in play, a gained card
/// may be trashed or put on the deck.
pub struct Watchtower;

impl Watchtower {
    const REVEAL: Stage = Stage(0);
    const FATE: Stage = Stage(1);
}

impl CardBehavior for Watchtower {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        let missing = 6usize.saturating_sub(game.hand(play.player).len());
        game.draw_card(play.player, missing);
        Ok(StepResult::Resolved)
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::GAIN
    }

    fn handle_trigger(&self, kind: TriggerKind) -> TriggerResponse {
        match kind {
            TriggerKind::Gain => TriggerResponse::React,
            TriggerKind::Attack => TriggerResponse::Ignore,
        }
    }

    fn on_gain(&self, game: &mut Game, play: Play, event: &GainEvent) -> EngineResult<StepResult> {
        let state = game.effect_state(play.card, play.player);
        state.cards.clear();
        state.cards.push(event.gained);
        let prompt = format!("Reveal Watchtower for {}?", game.card_name(event.gained));
        game.ask_yes_no(play, &prompt, Continuation::handler(Self::REVEAL))
    }

    fn handler(&self, game: &mut Game, play: Play, stage: Stage, answer: &Answer) -> EngineResult<StepResult> {
        match stage {
            Self::REVEAL => {
                if !answer.is_yes() {
                    return Ok(StepResult::Resolved);
                }
                game.ask(
                    play,
                    "Put on deck or trash?",
                    ["Trash", "Deck"],
                    Continuation::handler(Self::FATE),
                )
            }
            _ => {
                let gained: Option<EntityId> = game
                    .peek_effect_state(play.card, play.player)
                    .and_then(|state| state.cards.first().copied());
                let player = play.player;
                let Some(gained) = gained.filter(|&card| {
                    matches!(
                        game.zone_of(card),
                        Some(ZoneId::Discard(p) | ZoneId::Draw(p) | ZoneId::Hand(p)) if p == player
                    )
                }) else {
                    warn!("the gained card is gone; Watchtower does nothing");
                    return Ok(StepResult::Resolved);
                };
                if answer.as_choice() == Some("Trash") {
                    game.trash_card(player, gained)?;
                } else {
                    game.move_card_to_pile(gained, ZoneId::Draw(player), ZonePosition::Top)?;
                }
                Ok(StepResult::Resolved)
            }
        }
    }
}

/// Bishop: +1 money, +1 point; every player may trash a card, the player
/// of Bishop scores half its cost.
pub struct Bishop;

impl CardBehavior for Bishop {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        let state = game.player_mut(play.player)?;
        state.money += 1;
        state.score += 1;
        game.ask_all(play.card, "You may trash a card", PickCount::UpTo(1), |_| true, FIRST)
    }

    fn handler(&self, game: &mut Game, play: Play, _stage: Stage, answer: &Answer) -> EngineResult<StepResult> {
        let is_owner = game.pending_owner(play.card) == Some(play.player);
        if let Some(&card) = answer.cards().first() {
            if game.hand(play.player).contains(&card) {
                if is_owner {
                    let cost = game.card_cost(card)?;
                    game.player_mut(play.player)?.score += i64::from(cost.coins / 2);
                }
                game.trash_card(play.player, card)?;
            }
        }
        // Opponents' answers never complete Bishop on their own.
        Ok(if is_owner {
            StepResult::Resolved
        } else {
            StepResult::StillWaiting
        })
    }
}

/// Counting House: put any number of Coppers from the discard pile into
/// hand.
pub struct CountingHouse;

impl CardBehavior for CountingHouse {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        let coppers: Vec<EntityId> = game
            .discard_pile(play.player)
            .iter()
            .copied()
            .filter(|&card| game.instance(card).map_or(false, |i| i.card_id == COPPER))
            .collect();
        if coppers.is_empty() {
            return Ok(StepResult::Resolved);
        }
        game.order_cards(
            play,
            "Choose any number of Copper to put in your hand",
            coppers,
            PickCount::Any,
            FIRST,
        )
    }

    fn handler(&self, game: &mut Game, play: Play, _stage: Stage, answer: &Answer) -> EngineResult<StepResult> {
        for &card in answer.cards() {
            if game.zone_of(card) == Some(ZoneId::Discard(play.player)) {
                game.move_card_to_pile(card, ZoneId::Hand(play.player), ZonePosition::Top)?;
            }
        }
        Ok(StepResult::Resolved)
    }
}

pub struct Monument;

impl CardBehavior for Monument {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        let state = game.player_mut(play.player)?;
        state.money += 2;
        state.score += 1;
        Ok(StepResult::Resolved)
    }
}

/// Quarry: worth 2; actions cost 2 less while it is in play.
pub struct Quarry;

impl CardBehavior for Quarry {
    fn buy_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        game.player_mut(play.player)?.money += 2;
        game.add_cost_mod(play, |query, cost| {
            query.card.is(CardTypes::ACTION).then(|| cost.adjust_coins(-2))
        });
        Ok(StepResult::Resolved)
    }
}

/// Talisman: worth 1; at cleanup, gain a copy of each non-Victory card
/// costing less than 4 bought this turn.
pub struct Talisman;

impl CardBehavior for Talisman {
    fn buy_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        game.player_mut(play.player)?.money += 1;
        Ok(StepResult::Resolved)
    }

    fn cleanup_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        if game.zone_of(play.card) != Some(ZoneId::Board(play.player)) {
            return Ok(StepResult::Resolved);
        }
        let bought: Vec<EntityId> = game.history().bought(play.player).iter().copied().collect();
        for card in bought {
            let definition = game.definition_of(card)?;
            let id = definition.id;
            if definition.is(CardTypes::VICTORY) || game.cost_for(id, play.player)?.coins >= 4 {
                continue;
            }
            if game.get_pile(id).is_some() {
                game.take_card_from_pile(play.player, id, true, false)?;
            }
        }
        Ok(StepResult::Resolved)
    }
}

pub(super) fn register(registry: &mut CardRegistry) {
    use CardTypes as T;

    add(registry, LOAN, "Loan", T::TREASURE, 3, Loan);
    add(registry, TRADE_ROUTE, "Trade Route", T::ACTION, 3, TradeRoute);
    add(registry, CITY, "City", T::ACTION, 5, City);
    add(registry, WORKERS_VILLAGE, "Worker's Village", T::ACTION, 4, WorkersVillage);
    add(registry, EXPAND, "Expand", T::ACTION, 7, Expand);
    add(registry, BANK, "Bank", T::TREASURE, 7, Bank);
    add(registry, WATCHTOWER, "Watchtower", T::ACTION | T::REACTION, 3, Watchtower);
    add(registry, BISHOP, "Bishop", T::ACTION, 4, Bishop);
    add(registry, COUNTING_HOUSE, "Counting House", T::ACTION, 5, CountingHouse);
    add(registry, MONUMENT, "Monument", T::ACTION, 4, Monument);
    add(registry, QUARRY, "Quarry", T::TREASURE, 4, Quarry);
    add(registry, TALISMAN, "Talisman", T::TREASURE, 4, Talisman);
}
