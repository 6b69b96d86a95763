//! Trigger registry for cards in play.
//!
//! Cards declare which [`TriggerKind`]s they care about through
//! [`Capabilities`]. When an event happens the engine scans the affected
//! player's board in order and asks each capable card how it responds:
//! ignore, override (immunity) or react. Reactions run as their own
//! pending step and may suspend the effect that caused the event.

mod dispatch;
mod event;

pub(crate) use dispatch::DeferredTrigger;
pub use event::{AttackEvent, Capabilities, GainEvent, Trigger, TriggerKind, TriggerOutcome, TriggerResponse};
