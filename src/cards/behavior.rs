//! The card contract: lifecycle hooks a card behavior implements.
//!
//! Behaviors are stateless and shared by every copy of a definition. A hook
//! receives the engine and a [`Play`] naming the instance and the player the
//! hook runs for, and answers with a [`StepResult`]. A hook that issues a
//! decision request returns [`StepResult::StillWaiting`]; the engine calls
//! back into [`CardBehavior::handler`] or [`CardBehavior::attack_handler`]
//! once the player answers.
//!
//! Every hook has a default so a card implements only what its text needs.
//! Step hooks default to "nothing to do"; continuation hooks default to a
//! [`EngineError::MissingHook`] because a card that asks a question must
//! also take the answer.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult, EntityId, PlayerId};
use crate::decisions::{Answer, Stage};
use crate::engine::Game;
use crate::triggers::{AttackEvent, Capabilities, GainEvent, TriggerKind, TriggerResponse};

/// The turn phase a step hook belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    /// Played as an action.
    Action,
    /// Played as a treasure during the buy phase.
    Buy,
    /// Start of the owner's next turn (duration cards).
    Begin,
    /// Cleanup phase of the turn the card was in play.
    Cleanup,
    /// Final scoring.
    End,
    /// Answering a trigger fired at its owner.
    Reaction,
}

/// Outcome of a hook or continuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepResult {
    /// This part is finished and nothing else is needed from it.
    Resolved,
    /// The answer was invalid; re-present the same request.
    Rejected,
    /// Not finished; another decision (or a sibling's) is outstanding.
    StillWaiting,
}

impl StepResult {
    /// True for [`StepResult::Resolved`].
    #[must_use]
    pub fn is_resolved(self) -> bool {
        matches!(self, StepResult::Resolved)
    }
}

/// A card instance acting on behalf of a player.
///
/// For step hooks `player` is the card's controller. For attack handlers it
/// is the opponent being attacked, and for continuations it is the player
/// who answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Play {
    pub card: EntityId,
    pub player: PlayerId,
}

impl Play {
    /// Create a play.
    #[must_use]
    pub const fn new(card: EntityId, player: PlayerId) -> Self {
        Self { card, player }
    }

    /// The same card acting for another player.
    #[must_use]
    pub const fn for_player(self, player: PlayerId) -> Self {
        Self { card: self.card, player }
    }
}

/// Lifecycle hooks for a card definition.
pub trait CardBehavior: Send + Sync {
    /// Played from hand during the action phase.
    fn action_step(&self, _game: &mut Game, _play: Play) -> EngineResult<StepResult> {
        Ok(StepResult::Resolved)
    }

    /// Played during the buy phase (treasures).
    fn buy_step(&self, _game: &mut Game, _play: Play) -> EngineResult<StepResult> {
        Ok(StepResult::Resolved)
    }

    /// Start of the owner's next turn, for duration cards still in play.
    fn begin_step(&self, _game: &mut Game, _play: Play) -> EngineResult<StepResult> {
        Ok(StepResult::Resolved)
    }

    /// Cleanup phase, for cards in play.
    fn cleanup_step(&self, _game: &mut Game, _play: Play) -> EngineResult<StepResult> {
        Ok(StepResult::Resolved)
    }

    /// Final scoring, for every card a player owns.
    fn end_step(&self, _game: &mut Game, _play: Play) -> EngineResult<StepResult> {
        Ok(StepResult::Resolved)
    }

    /// Continuation for requests this card issued with [`crate::decisions::Hook::Handler`].
    fn handler(&self, _game: &mut Game, play: Play, _stage: Stage, _answer: &Answer) -> EngineResult<StepResult> {
        Err(EngineError::MissingHook { card: play.card, hook: "handler" })
    }

    /// Applies the attack to one opponent (`play.player`).
    ///
    /// Called first with [`Answer::Nothing`]. If it issues a request to the
    /// opponent it is called again with the opponent's answer.
    fn attack_handler(&self, _game: &mut Game, play: Play, _answer: &Answer) -> EngineResult<StepResult> {
        Err(EngineError::MissingHook { card: play.card, hook: "attack_handler" })
    }

    /// Runs once after every opponent has been processed by an attack
    /// started with `on_restore` set. `play.player` is the attacker.
    fn attack_complete(&self, _game: &mut Game, _play: Play) -> EngineResult<StepResult> {
        Ok(StepResult::Resolved)
    }

    /// Triggers this card can respond to while in play.
    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE
    }

    /// How this card answers a trigger of `kind`.
    fn handle_trigger(&self, _kind: TriggerKind) -> TriggerResponse {
        TriggerResponse::Ignore
    }

    /// Reaction to a card gained by the owner. `play.player` is the gainer.
    fn on_gain(&self, _game: &mut Game, play: Play, _event: &GainEvent) -> EngineResult<StepResult> {
        Err(EngineError::MissingHook { card: play.card, hook: "on_gain" })
    }

    /// Reaction to an attack on the owner. `play.player` is the attacked player.
    fn on_attack(&self, _game: &mut Game, play: Play, _event: &AttackEvent) -> EngineResult<StepResult> {
        Err(EngineError::MissingHook { card: play.card, hook: "on_attack" })
    }
}
