//! Running step hooks and finalizing pending records.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::cards::{CardTypes, Play, Step, StepResult};
use crate::core::{EngineError, EngineResult, EntityId, PlayerId};
use crate::engine::Game;
use crate::zones::ZoneId;

use super::pending::Link;

/// One finalized step, in finalization order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub card: EntityId,
    pub player: PlayerId,
    pub step: Step,
}

/// Where a step stands once the engine hands control back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepStatus {
    /// Finalized.
    Resolved,
    /// Decisions or reactions are still outstanding.
    Waiting,
}

impl Game {
    /// Run one lifecycle step of a card instance for `player`.
    ///
    /// Opens a pending record, invokes the hook and finalizes the record if
    /// nothing is left outstanding.
    pub fn run_step(&mut self, card: EntityId, player: PlayerId, step: Step) -> EngineResult<StepStatus> {
        if step == Step::Reaction {
            return Err(EngineError::ProtocolViolation {
                card,
                reason: "reaction steps are opened by triggers",
            });
        }
        let behavior = self.behavior_of(card)?;
        self.pending.open(card, step, player)?;
        debug!("{} starts its {:?} step for {}", self.card_name(card), step, self.player_name(player));

        let play = Play::new(card, player);
        let result = self.with_part(card, |game| match step {
            Step::Action => behavior.action_step(game, play),
            Step::Buy => behavior.buy_step(game, play),
            Step::Begin => behavior.begin_step(game, play),
            Step::Cleanup => behavior.cleanup_step(game, play),
            Step::End => behavior.end_step(game, play),
            Step::Reaction => unreachable!("rejected above"),
        })?;
        self.conclude(card, result)?;
        Ok(self.step_status(card))
    }

    /// Declare `card` done with its own work.
    ///
    /// The record still waits for every outstanding part.
    pub fn resolved(&mut self, card: EntityId) -> EngineResult<StepResult> {
        self.pending.mark_done(card)?;
        self.settle(card)?;
        Ok(StepResult::Resolved)
    }

    /// [`StepStatus`] of a card instance.
    #[must_use]
    pub fn step_status(&self, card: EntityId) -> StepStatus {
        if self.pending.is_open(card) {
            StepStatus::Waiting
        } else {
            StepStatus::Resolved
        }
    }

    /// Finalized steps, oldest first.
    #[must_use]
    pub fn resolutions(&self) -> &[Resolution] {
        &self.resolutions
    }

    /// Number of finalizations of one card instance.
    #[must_use]
    pub fn resolution_count(&self, card: EntityId) -> usize {
        self.resolutions.iter().filter(|r| r.card == card).count()
    }

    /// Number of open pending records.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Player whose open step `card` is running.
    #[must_use]
    pub fn pending_owner(&self, card: EntityId) -> Option<PlayerId> {
        self.pending.get(card).map(|record| record.owner)
    }

    /// Run `f` as one outstanding part of `card`'s record.
    pub(crate) fn with_part<F>(&mut self, card: EntityId, f: F) -> EngineResult<StepResult>
    where
        F: FnOnce(&mut Game) -> EngineResult<StepResult>,
    {
        self.pending.increment(card)?;
        self.executing.push(card);
        let result = f(self);
        self.executing.pop();
        self.pending.decrement(card)?;
        result
    }

    /// Apply the result of a hook or continuation that just returned.
    pub(crate) fn conclude(&mut self, card: EntityId, result: StepResult) -> EngineResult<()> {
        match result {
            StepResult::Resolved => self.pending.mark_done(card)?,
            StepResult::StillWaiting => {}
            StepResult::Rejected => {
                return Err(EngineError::ProtocolViolation {
                    card,
                    reason: "only a continuation may reject",
                })
            }
        }
        self.settle(card)
    }

    /// Finalize `card` if its record is complete.
    ///
    /// A record with nothing outstanding that is not done can never
    /// complete.
    pub(crate) fn settle(&mut self, card: EntityId) -> EngineResult<()> {
        let Some(record) = self.pending.get(card) else {
            return Ok(());
        };
        if record.outstanding > 0 {
            return Ok(());
        }
        if record.done {
            self.finalize(card)
        } else {
            Err(EngineError::Stalled(card))
        }
    }

    fn finalize(&mut self, card: EntityId) -> EngineResult<()> {
        let record = self.pending.close(card)?;
        info!(
            "{} resolved its {:?} step for {}",
            self.card_name(card),
            record.step,
            self.player_name(record.owner)
        );
        self.resolutions.push(Resolution {
            card,
            player: record.owner,
            step: record.step,
        });
        if !self.keeps_effect_state(card, record.step, record.owner) {
            self.effects.clear_card(card);
        }

        if let Some(link) = record.parent {
            self.release_parent(link)?;
        }
        self.run_deferred_triggers(card)
    }

    /// A reaction `link` was waiting on is over.
    pub(crate) fn release_parent(&mut self, link: Link) -> EngineResult<()> {
        self.pending.decrement(link.card())?;
        match link {
            Link::Part(parent) => self.settle(parent),
            Link::Attack(parent) => self.resume_attack(parent),
        }
    }

    /// Duration cards keep their state from the turn they were played
    /// until their begin step.
    fn keeps_effect_state(&self, card: EntityId, step: Step, owner: PlayerId) -> bool {
        matches!(step, Step::Action | Step::Buy | Step::Cleanup)
            && self.zones.is_in_zone(card, ZoneId::Board(owner))
            && self
                .definition_of(card)
                .map(|def| def.is(CardTypes::DURATION))
                .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cards::{CardBehavior, CardDefinition, CardId, CardRegistry};
    use crate::core::EngineConfig;
    use crate::engine::GameBuilder;

    const QUICK: CardId = CardId::new(1);
    const LIAR: CardId = CardId::new(2);
    const POLITE: CardId = CardId::new(3);

    /// Resolves on the spot.
    struct Quick;

    impl CardBehavior for Quick {}

    /// Claims to wait without asking anything.
    struct Liar;

    impl CardBehavior for Liar {
        fn action_step(&self, _game: &mut Game, _play: Play) -> EngineResult<StepResult> {
            Ok(StepResult::StillWaiting)
        }
    }

    /// Declares itself done through `resolved`.
    struct Polite;

    impl CardBehavior for Polite {
        fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
            game.resolved(play.card)
        }
    }

    fn game_with(card: CardId) -> (Game, EntityId) {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::new(QUICK, "Quick", CardTypes::ACTION), Arc::new(Quick));
        registry.register(CardDefinition::new(LIAR, "Liar", CardTypes::ACTION), Arc::new(Liar));
        registry.register(CardDefinition::new(POLITE, "Polite", CardTypes::ACTION), Arc::new(Polite));
        let mut game = GameBuilder::new(EngineConfig::new(2), registry).build().unwrap();
        let entity = game
            .create_card(card, ZoneId::Board(PlayerId::new(0)), crate::zones::ZonePosition::Top)
            .unwrap();
        (game, entity)
    }

    #[test]
    fn test_run_step_finalizes_once() {
        let (mut game, card) = game_with(QUICK);
        let status = game.run_step(card, PlayerId::new(0), Step::Action).unwrap();
        assert_eq!(status, StepStatus::Resolved);
        assert_eq!(game.resolution_count(card), 1);
        assert_eq!(
            game.resolutions()[0],
            Resolution {
                card,
                player: PlayerId::new(0),
                step: Step::Action
            }
        );
        assert_eq!(game.pending_count(), 0);
    }

    #[test]
    fn test_waiting_with_nothing_outstanding_stalls() {
        let (mut game, card) = game_with(LIAR);
        let err = game.run_step(card, PlayerId::new(0), Step::Action).unwrap_err();
        assert_eq!(err, EngineError::Stalled(card));
    }

    #[test]
    fn test_resolved_marks_done() {
        let (mut game, card) = game_with(POLITE);
        let status = game.run_step(card, PlayerId::new(0), Step::Action).unwrap();
        assert_eq!(status, StepStatus::Resolved);
        assert_eq!(game.resolution_count(card), 1);
    }

    #[test]
    fn test_reaction_steps_are_not_run_directly() {
        let (mut game, card) = game_with(QUICK);
        let err = game.run_step(card, PlayerId::new(0), Step::Reaction).unwrap_err();
        assert!(matches!(err, EngineError::ProtocolViolation { .. }));
        assert_eq!(game.pending_count(), 0);
    }

    #[test]
    fn test_effect_state_cleared_for_plain_cards() {
        let (mut game, card) = game_with(QUICK);
        game.effect_state(card, PlayerId::new(0)).counter = 3;
        game.run_step(card, PlayerId::new(0), Step::Action).unwrap();
        assert!(game.peek_effect_state(card, PlayerId::new(0)).is_none());
    }
}
