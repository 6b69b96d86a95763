//! The pending-effect stack.
//!
//! Every card step that cannot finish synchronously leaves a
//! [`PendingRecord`] behind. Records track what they still wait for
//! (decisions, attack dispatches, reactions) and are finalized exactly once.
//! Nested waits are links between records: a reaction suspended during a
//! gain holds up the card that caused the gain, and a reaction suspended
//! during an attack holds up the dispatcher on that opponent.

mod effect_state;
mod pending;
mod resolution;

pub use effect_state::{EffectState, EffectStates};
pub use pending::{Link, PendingRecord, PendingTable};
pub use resolution::{Resolution, StepStatus};
