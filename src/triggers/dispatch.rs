//! Firing triggers at the cards on a player's board.

use log::debug;

use crate::cards::{Play, Step};
use crate::core::{EngineResult, EntityId};
use crate::engine::Game;
use crate::stack::Link;
use crate::zones::ZoneId;

use super::event::{Trigger, TriggerOutcome, TriggerResponse};

/// A trigger occurrence that reached a card while it was still busy with
/// an earlier step. It runs once that step finalizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DeferredTrigger {
    pub trigger: Trigger,
    /// Already counted as an outstanding part of the linked record.
    pub parent: Option<Link>,
}

impl Game {
    /// Offer `trigger` to the affected player's cards in play, in board
    /// order. The first card that does not ignore it wins.
    ///
    /// A reaction that cannot finish synchronously is linked to `parent`,
    /// which then waits for it. If the reacting card is still busy, the
    /// occurrence waits in that card's queue and `parent` waits with it.
    pub fn fire_trigger(&mut self, trigger: Trigger, parent: Option<Link>) -> EngineResult<TriggerOutcome> {
        let kind = trigger.kind();
        let player = trigger.affected_player();
        let board: Vec<EntityId> = self.zones.cards_in_zone(ZoneId::Board(player)).to_vec();

        for card in board {
            let behavior = self.behavior_of(card)?;
            if !behavior.capabilities().contains(kind.capability()) {
                continue;
            }
            match behavior.handle_trigger(kind) {
                TriggerResponse::Ignore => continue,
                TriggerResponse::Override => {
                    debug!("{} overrides {:?} for {}", self.card_name(card), kind, self.player_name(player));
                    return Ok(TriggerOutcome::Overridden);
                }
                TriggerResponse::React if self.pending.is_open(card) => {
                    // A card never waits on itself
                    let parent = parent.filter(|link| link.card() != card);
                    if let Some(link) = parent {
                        self.pending.increment(link.card())?;
                    }
                    debug!("{} is busy; {:?} for {} waits", self.card_name(card), kind, self.player_name(player));
                    self.deferred
                        .entry(card)
                        .or_default()
                        .push_back(DeferredTrigger { trigger, parent });
                    return Ok(TriggerOutcome::Suspended);
                }
                TriggerResponse::React => return self.react(card, trigger, parent, false),
            }
        }
        Ok(TriggerOutcome::Passed)
    }

    /// Run `card`'s reaction to one trigger occurrence as its own step.
    ///
    /// `counted` is true when `parent` already counts this occurrence.
    fn react(&mut self, card: EntityId, trigger: Trigger, parent: Option<Link>, counted: bool) -> EngineResult<TriggerOutcome> {
        let player = trigger.affected_player();
        let behavior = self.behavior_of(card)?;
        debug!("{} reacts to {:?} for {}", self.card_name(card), trigger.kind(), self.player_name(player));

        let serial = self.pending.open(card, Step::Reaction, player)?;
        let play = Play::new(card, player);
        let result = self.with_part(card, |game| match &trigger {
            Trigger::Gain(event) => behavior.on_gain(game, play, event),
            Trigger::Attack(event) => behavior.on_attack(game, play, event),
        })?;
        self.conclude(card, result)?;

        if !self.pending.is_open_as(card, serial) {
            if counted {
                if let Some(link) = parent {
                    self.release_parent(link)?;
                }
            }
            return Ok(TriggerOutcome::Passed);
        }
        if let Some(link) = parent {
            self.pending.set_parent(card, link)?;
            if !counted {
                self.pending.increment(link.card())?;
            }
        }
        Ok(TriggerOutcome::Suspended)
    }

    /// Run occurrences that queued up while `card` was busy, oldest first,
    /// until one of them has to wait.
    pub(crate) fn run_deferred_triggers(&mut self, card: EntityId) -> EngineResult<()> {
        while !self.pending.is_open(card) {
            let Some(deferred) = self.deferred.get_mut(&card).and_then(|queue| queue.pop_front()) else {
                break;
            };
            if self.still_reacts(card, &deferred.trigger)? {
                self.react(card, deferred.trigger, deferred.parent, true)?;
            } else {
                debug!("{} left play; dropping a queued {:?}", self.card_name(card), deferred.trigger.kind());
                if let Some(link) = deferred.parent {
                    self.release_parent(link)?;
                }
            }
        }
        if self.deferred.get(&card).map_or(false, |queue| queue.is_empty()) {
            self.deferred.remove(&card);
        }
        Ok(())
    }

    fn still_reacts(&self, card: EntityId, trigger: &Trigger) -> EngineResult<bool> {
        let on_board = self.zones.is_in_zone(card, ZoneId::Board(trigger.affected_player()));
        let behavior = self.behavior_of(card)?;
        Ok(on_board && behavior.handle_trigger(trigger.kind()) == TriggerResponse::React)
    }

    /// Trigger occurrences waiting for `card` to finish its current step.
    #[must_use]
    pub fn deferred_trigger_count(&self, card: EntityId) -> usize {
        self.deferred.get(&card).map_or(0, |queue| queue.len())
    }
}
