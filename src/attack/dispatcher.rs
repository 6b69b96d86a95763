//! Applying an attack to each opponent in seat order.
//!
//! The dispatch is one outstanding part of the attacking card's record from
//! the moment it starts until every opponent has been handled and the
//! optional completion hook has run.

use std::collections::VecDeque;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::cards::{Play, StepResult};
use crate::core::{EngineError, EngineResult, EntityId, PlayerId};
use crate::decisions::Answer;
use crate::engine::Game;
use crate::stack::Link;
use crate::triggers::{AttackEvent, Trigger, TriggerOutcome};

/// What the dispatcher is waiting for on the current opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackWait {
    /// The opponent's reaction is unresolved.
    Reaction,
    /// The attack handler asked the opponent something.
    Answer,
}

/// An attack in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackState {
    pub attacker: PlayerId,
    /// Opponents not visited yet.
    pub queue: VecDeque<PlayerId>,
    pub current: Option<PlayerId>,
    pub waiting: Option<AttackWait>,
    /// The handler may ask the opponent a question.
    pub expect_answer: bool,
    /// Run `attack_complete` once every opponent is done.
    pub on_restore: bool,
    /// Opponents whose handler ran, in order.
    pub visited: Vec<PlayerId>,
}

impl Game {
    /// Apply `play.card`'s attack to every opponent of `play.player`.
    ///
    /// Returns [`StepResult::Resolved`] when the whole attack (including
    /// `attack_complete`) finished without waiting, otherwise
    /// [`StepResult::StillWaiting`].
    pub fn attack(&mut self, play: Play, expect_answer: bool, on_restore: bool) -> EngineResult<StepResult> {
        let card = play.card;
        if self.attacks.contains_key(&card) {
            return Err(EngineError::ProtocolViolation {
                card,
                reason: "attack already in progress",
            });
        }
        let queue = play.player.opponents_in_seat_order(self.config.player_count).collect();
        self.attacks.insert(
            card,
            AttackState {
                attacker: play.player,
                queue,
                current: None,
                waiting: None,
                expect_answer,
                on_restore,
                visited: Vec::new(),
            },
        );
        self.pending.increment(card)?;
        debug!("{} attacks for {}", self.card_name(card), self.player_name(play.player));

        Ok(self.drive_attack(card)?.unwrap_or(StepResult::StillWaiting))
    }

    /// State of an attack in progress.
    #[must_use]
    pub fn attack_state(&self, card: EntityId) -> Option<&AttackState> {
        self.attacks.get(&card)
    }

    /// Player attacking with `card`, while the attack is in progress.
    #[must_use]
    pub fn attacker(&self, card: EntityId) -> Option<PlayerId> {
        self.attacks.get(&card).map(|state| state.attacker)
    }

    /// Process opponents until one needs input or the queue is empty.
    ///
    /// Returns the completion result once the attack has finished.
    fn drive_attack(&mut self, card: EntityId) -> EngineResult<Option<StepResult>> {
        loop {
            let state = self.attack_state_mut(card)?;
            let attacker = state.attacker;
            let Some(opponent) = state.queue.pop_front() else {
                return self.finish_attack(card).map(Some);
            };
            state.current = Some(opponent);
            state.waiting = None;

            if !self.players[opponent].connected {
                warn!("{} is disconnected; skipping the attack", self.player_name(opponent));
                continue;
            }

            let event = AttackEvent {
                card,
                attacker,
                target: opponent,
            };
            match self.fire_trigger(Trigger::Attack(event), Some(Link::Attack(card)))? {
                TriggerOutcome::Overridden => {
                    debug!("{} is immune to {}", self.player_name(opponent), self.card_name(card));
                    continue;
                }
                TriggerOutcome::Suspended => {
                    self.attack_state_mut(card)?.waiting = Some(AttackWait::Reaction);
                    return Ok(None);
                }
                TriggerOutcome::Passed => {}
            }

            if !self.apply_attack(card, opponent)? {
                return Ok(None);
            }
        }
    }

    /// Call the attack handler for one opponent. False if it waits.
    fn apply_attack(&mut self, card: EntityId, opponent: PlayerId) -> EngineResult<bool> {
        let behavior = self.behavior_of(card)?;
        let state = self.attack_state_mut(card)?;
        state.visited.push(opponent);
        let expect_answer = state.expect_answer;

        self.executing.push(card);
        let result = behavior.attack_handler(self, Play::new(card, opponent), &Answer::Nothing);
        self.executing.pop();

        match result? {
            StepResult::Resolved => Ok(true),
            StepResult::StillWaiting => {
                if !expect_answer {
                    return Err(EngineError::ProtocolViolation {
                        card,
                        reason: "attack handler waited without expecting an answer",
                    });
                }
                if !self.decisions.contains(card, opponent) {
                    return Err(EngineError::Stalled(card));
                }
                self.attack_state_mut(card)?.waiting = Some(AttackWait::Answer);
                Ok(false)
            }
            StepResult::Rejected => Err(EngineError::ProtocolViolation {
                card,
                reason: "attack handler rejected its first call",
            }),
        }
    }

    /// An opponent answered the attack handler's request.
    pub(crate) fn attack_answered(&mut self, card: EntityId, player: PlayerId, result: StepResult) -> EngineResult<()> {
        match result {
            StepResult::Resolved => {
                let state = self.attack_state_mut(card)?;
                if state.current != Some(player) || state.waiting != Some(AttackWait::Answer) {
                    return Err(EngineError::ProtocolViolation {
                        card,
                        reason: "attack answer from a player the dispatcher is not waiting on",
                    });
                }
                state.waiting = None;
                self.drive_attack(card)?;
                Ok(())
            }
            StepResult::StillWaiting if self.decisions.contains(card, player) => Ok(()),
            StepResult::StillWaiting => Err(EngineError::Stalled(card)),
            StepResult::Rejected => Err(EngineError::ProtocolViolation {
                card,
                reason: "rejection reached the dispatcher",
            }),
        }
    }

    /// A reaction that held up the current opponent finalized.
    pub(crate) fn resume_attack(&mut self, card: EntityId) -> EngineResult<()> {
        let state = self.attack_state_mut(card)?;
        if state.waiting != Some(AttackWait::Reaction) {
            return Err(EngineError::ProtocolViolation {
                card,
                reason: "resumed an attack that was not waiting on a reaction",
            });
        }
        state.waiting = None;
        let Some(opponent) = state.current else {
            return Err(EngineError::ProtocolViolation {
                card,
                reason: "resumed an attack with no current opponent",
            });
        };
        if self.apply_attack(card, opponent)? {
            self.drive_attack(card)?;
        }
        Ok(())
    }

    fn finish_attack(&mut self, card: EntityId) -> EngineResult<StepResult> {
        let state = self.attacks.remove(&card).ok_or(EngineError::NoOpenStep(card))?;
        let result = if state.on_restore {
            let behavior = self.behavior_of(card)?;
            self.executing.push(card);
            let result = behavior.attack_complete(self, Play::new(card, state.attacker));
            self.executing.pop();
            result?
        } else {
            StepResult::Resolved
        };
        debug!("{} finished attacking", self.card_name(card));

        self.pending.decrement(card)?;
        self.conclude(card, result)?;
        Ok(result)
    }

    fn attack_state_mut(&mut self, card: EntityId) -> EngineResult<&mut AttackState> {
        self.attacks.get_mut(&card).ok_or(EngineError::ProtocolViolation {
            card,
            reason: "no attack in progress",
        })
    }
}
