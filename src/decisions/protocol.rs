//! Issuing requests and applying answers.
//!
//! Every request counts as one outstanding part of the issuing card's
//! pending record until it is answered. An answer is checked against the
//! option set before the card sees it; a failed check or a card-level
//! rejection re-presents the identical request without touching the game.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardDefinition, Play, StepResult};
use crate::core::{EngineError, EngineResult, EntityId, PlayerId};
use crate::engine::Game;
use crate::zones::Pile;

use super::request::{Answer, Continuation, DecisionOptions, DecisionRequest, Hook, PickCount, Prompt};

/// What happened to a submitted answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Submission {
    /// The continuation consumed the answer.
    Accepted,
    /// The answer was refused and the same request is outstanding again.
    Reprompted,
}

impl Game {
    /// Ask `play.player` to pick one label.
    pub fn ask<I, S>(&mut self, play: Play, prompt: &str, choices: I, continuation: Continuation) -> EngineResult<StepResult>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: SmallVec<[String; 4]> = choices.into_iter().map(Into::into).collect();
        self.issue(DecisionRequest::new(
            play.card,
            play.player,
            prompt,
            DecisionOptions::Choice(labels),
            continuation,
        ))
    }

    /// Ask `play.player` a yes/no question.
    pub fn ask_yes_no(&mut self, play: Play, prompt: &str, continuation: Continuation) -> EngineResult<StepResult> {
        self.issue(DecisionRequest::new(
            play.card,
            play.player,
            prompt,
            DecisionOptions::yes_no(),
            continuation,
        ))
    }

    /// Ask `play.player` to pick cards from their hand that pass `filter`.
    pub fn pick_from_hand<F>(
        &mut self,
        play: Play,
        prompt: &str,
        count: PickCount,
        filter: F,
        continuation: Continuation,
    ) -> EngineResult<StepResult>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        let candidates = self.filter_cards(self.hand(play.player), filter);
        self.pick_cards(play, prompt, candidates, count, continuation)
    }

    /// Ask `play.player` to pick among arbitrary card instances.
    pub fn pick_cards(
        &mut self,
        play: Play,
        prompt: &str,
        candidates: Vec<EntityId>,
        count: PickCount,
        continuation: Continuation,
    ) -> EngineResult<StepResult> {
        self.issue(DecisionRequest::new(
            play.card,
            play.player,
            prompt,
            DecisionOptions::cards(candidates, count),
            continuation,
        ))
    }

    /// Ask `play.player` to choose a non-empty supply pile passing `filter`.
    pub fn pick_from_pile<F>(&mut self, play: Play, prompt: &str, filter: F, continuation: Continuation) -> EngineResult<StepResult>
    where
        F: Fn(&Game, &Pile) -> bool,
    {
        let candidates = self
            .piles
            .iter()
            .filter(|pile| self.zones.zone_size(pile.zone()) > 0 && filter(self, pile))
            .map(|pile| pile.card)
            .collect();
        self.issue(DecisionRequest::new(
            play.card,
            play.player,
            prompt,
            DecisionOptions::Pile(candidates),
            continuation,
        ))
    }

    /// Ask `play.player` to pick cards in a meaningful order.
    pub fn order_cards(
        &mut self,
        play: Play,
        prompt: &str,
        candidates: Vec<EntityId>,
        count: PickCount,
        continuation: Continuation,
    ) -> EngineResult<StepResult> {
        let (min, max) = count.bounds(candidates.len());
        self.issue(DecisionRequest::new(
            play.card,
            play.player,
            prompt,
            DecisionOptions::Cards {
                candidates,
                min,
                max,
                ordered: true,
            },
            continuation,
        ))
    }

    /// Ask every connected player accepted by `include` to pick cards from
    /// their own hand, all on behalf of `card`.
    ///
    /// The card finalizes once every one of them has answered.
    pub fn ask_all<F>(
        &mut self,
        card: EntityId,
        prompt: &str,
        count: PickCount,
        include: F,
        continuation: Continuation,
    ) -> EngineResult<StepResult>
    where
        F: Fn(PlayerId) -> bool,
    {
        for player in PlayerId::all(self.config.player_count) {
            if !include(player) {
                continue;
            }
            if !self.players[player].connected {
                warn!("{} is disconnected and is not asked: {}", self.player_name(player), prompt);
                continue;
            }
            let candidates = self.hand(player).to_vec();
            self.pick_cards(Play::new(card, player), prompt, candidates, count, continuation)?;
        }
        let done = self.pending.get(card).map_or(false, |record| record.done);
        Ok(if done {
            StepResult::Resolved
        } else {
            StepResult::StillWaiting
        })
    }

    /// Deliver a player's answer to the request issued on behalf of `card`.
    pub fn submit_answer(&mut self, card: EntityId, player: PlayerId, answer: Answer) -> EngineResult<Submission> {
        let request = self
            .decisions
            .take(card, player)
            .ok_or(EngineError::NoOutstandingRequest { card, player })?;

        if let Err(reason) = request.options.validate(&answer) {
            debug!("{} gave an invalid answer to {:?}: {}", self.player_name(player), request.prompt, reason);
            self.reprompt(request, Some(&reason))?;
            return Ok(Submission::Reprompted);
        }

        debug!("{} answered {:?} with {:?}", self.player_name(player), request.prompt, answer);
        let result = self.invoke_continuation(&request, &answer)?;
        if result == StepResult::Rejected {
            if self.decisions.contains(card, player) {
                return Err(EngineError::ProtocolViolation {
                    card,
                    reason: "rejected an answer after issuing a new request",
                });
            }
            self.reprompt(request, None)?;
            return Ok(Submission::Reprompted);
        }

        self.pending.decrement(card)?;
        match request.continuation.hook {
            Hook::Handler => self.conclude(card, result)?,
            Hook::AttackHandler => self.attack_answered(card, player, result)?,
        }
        Ok(Submission::Accepted)
    }

    /// The request outstanding for (card, player), if any.
    #[must_use]
    pub fn request(&self, card: EntityId, player: PlayerId) -> Option<&DecisionRequest> {
        self.decisions.get(card, player)
    }

    /// Outstanding requests in issue order.
    pub fn outstanding_requests(&self) -> impl Iterator<Item = &DecisionRequest> {
        self.decisions.iter()
    }

    /// Requests waiting on `player`, in issue order.
    pub fn requests_for(&self, player: PlayerId) -> impl Iterator<Item = &DecisionRequest> {
        self.decisions.for_player(player)
    }

    /// Take every prompt presented since the last drain.
    pub fn drain_prompts(&mut self) -> Vec<Prompt> {
        std::mem::take(&mut self.prompts)
    }

    pub(crate) fn filter_cards<F>(&self, cards: &[EntityId], filter: F) -> Vec<EntityId>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        cards
            .iter()
            .copied()
            .filter(|&card| self.definition_of(card).map_or(false, &filter))
            .collect()
    }

    /// Present a request, or answer it on the player's behalf when the only
    /// legal answer is the empty one.
    ///
    /// Returns the continuation's result when answered on the spot.
    pub(crate) fn issue(&mut self, mut request: DecisionRequest) -> EngineResult<StepResult> {
        let (card, player) = (request.card, request.player);
        if self.decisions.contains(card, player) {
            return Err(EngineError::DuplicateRequest { card, player });
        }
        if !self.pending.is_open(card) {
            return Err(EngineError::NoOpenStep(card));
        }

        if self.config.auto_satisfy_empty && request.options.only_empty_answer() {
            debug!(
                "{} has nothing to choose for {:?}; answering for them",
                self.player_name(player),
                request.prompt
            );
            let answer = request.options.empty_answer();
            self.pending.increment(card)?;
            let result = self.invoke_continuation(&request, &answer);
            self.pending.decrement(card)?;
            let result = result?;
            if result != StepResult::Rejected {
                if request.continuation.hook == Hook::Handler {
                    self.conclude(card, result)?;
                }
                return Ok(result);
            }
        }

        debug!("{} asks {}: {}", self.card_name(card), self.player_name(player), request.prompt);
        request.presented += 1;
        self.prompts.push(Prompt::from(&request));
        self.pending.increment(card)?;
        self.decisions
            .insert(request)
            .map_err(|_| EngineError::DuplicateRequest { card, player })?;
        Ok(StepResult::StillWaiting)
    }

    fn reprompt(&mut self, mut request: DecisionRequest, reason: Option<&str>) -> EngineResult<()> {
        let (card, player) = (request.card, request.player);
        if let Some(reason) = reason {
            if self.config.whisper_rejections {
                self.whisper(player, reason);
            }
        }
        request.presented += 1;
        self.prompts.push(Prompt::from(&request));
        self.decisions
            .insert(request)
            .map_err(|_| EngineError::DuplicateRequest { card, player })
    }

    fn invoke_continuation(&mut self, request: &DecisionRequest, answer: &Answer) -> EngineResult<StepResult> {
        let behavior = self.behavior_of(request.card)?;
        let play = Play::new(request.card, request.player);
        self.executing.push(request.card);
        let result = match request.continuation.hook {
            Hook::Handler => behavior.handler(self, play, request.continuation.stage, answer),
            Hook::AttackHandler => behavior.attack_handler(self, play, answer),
        };
        self.executing.pop();
        result
    }
}

