//! # rust-deckbuilder
//!
//! The interactive effect-resolution core of a deck-building card game.
//!
//! ## Design Principles
//!
//! 1. **Cards Are Behavior**: A card is a [`CardDefinition`] plus a
//!    [`CardBehavior`] implementation. The engine never hardcodes card text.
//!
//! 2. **Questions Suspend, Answers Resume**: A card that needs input issues a
//!    [`DecisionRequest`] naming a continuation and returns
//!    [`StepResult::StillWaiting`]. The answer re-enters the same card at the
//!    named stage.
//!
//! 3. **Finalize Exactly Once**: Every step a card opens is tracked in a
//!    [`PendingTable`]; the step finalizes when the card says it is done and
//!    nothing it spawned is still outstanding.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, players, RNG, configuration, errors
//! - `zones`: Player zones, supply piles and the trash
//! - `cards`: Card definitions, instances and the behavior contract
//! - `decisions`: Decision requests, answers and continuations
//! - `stack`: Pending steps, effect state and resolution bookkeeping
//! - `triggers`: GAIN and ATTACK trigger dispatch
//! - `attack`: Attack dispatch across opponents in seat order
//! - `costs`: Cost modifiers
//! - `engine`: The [`Game`] aggregate and turn flow
//! - `games`: A reference card set

pub mod core;
pub mod zones;
pub mod cards;
pub mod decisions;
pub mod stack;
pub mod triggers;
pub mod attack;
pub mod costs;
pub mod engine;
pub mod games;

// Re-export commonly used types
pub use crate::core::{EngineConfig, EngineError, EngineResult, EntityId, GameRng, PlayerId, PlayerMap};

pub use crate::zones::{Pile, ZoneId, ZoneManager, ZonePosition};

pub use crate::cards::{
    CardBehavior, CardDefinition, CardId, CardInstance, CardRegistry, CardTypes, Cost, Play, Step, StepResult,
};

pub use crate::decisions::{Answer, Continuation, DecisionOptions, DecisionRequest, PickCount, Prompt, Stage, Submission};

pub use crate::stack::{Link, PendingRecord, PendingTable, Resolution, StepStatus};

pub use crate::triggers::{Capabilities, Trigger, TriggerKind, TriggerOutcome, TriggerResponse};

pub use crate::attack::AttackState;

pub use crate::costs::{CostModifier, CostPipeline, CostQuery};

pub use crate::engine::{Game, GameBuilder, Message, PlayerState};
