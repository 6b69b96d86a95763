//! Engine error type.
//!
//! Only protocol and invariant violations are errors. A player submitting a
//! bad answer is a validation failure: the request is re-issued and nothing
//! here is involved.

use thiserror::Error;

use crate::cards::{CardId, Step};
use crate::core::{EntityId, PlayerId};
use crate::zones::ZoneId;

/// Result alias used by every hook and protocol operation.
pub type EngineResult<T> = Result<T, EngineError>;

/// A programming error in the engine or in a card behavior.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unknown card instance {0}")]
    UnknownCard(EntityId),

    #[error("unknown card definition {0}")]
    UnknownDefinition(CardId),

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("no supply pile for {0}")]
    MissingPile(CardId),

    #[error("supply pile for {0} is empty")]
    EmptyPile(CardId),

    #[error("{card} is not in {expected}")]
    NotInZone { card: EntityId, expected: ZoneId },

    #[error("{card} already has an outstanding request for {player}")]
    DuplicateRequest { card: EntityId, player: PlayerId },

    #[error("no outstanding request for {card} and {player}")]
    NoOutstandingRequest { card: EntityId, player: PlayerId },

    #[error("{card} already has an open {step:?} step")]
    StepAlreadyOpen { card: EntityId, step: Step },

    #[error("{0} has no open step")]
    NoOpenStep(EntityId),

    #[error("{card} broke the resolution protocol: {reason}")]
    ProtocolViolation { card: EntityId, reason: &'static str },

    #[error("{0} is waiting but has nothing outstanding")]
    Stalled(EntityId),

    #[error("{card} does not implement {hook}")]
    MissingHook { card: EntityId, hook: &'static str },

    #[error("{player} cannot end the turn with {open} effects unresolved")]
    UnresolvedEffects { player: PlayerId, open: usize },
}
