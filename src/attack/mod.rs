//! The attack dispatcher.
//!
//! An attacking card calls [`crate::engine::Game::attack`] from one of its
//! steps. The dispatcher visits opponents in seat order starting left of the
//! attacker, lets their cards in play override or react, and calls the
//! card's attack handler for each opponent that is neither immune nor
//! disconnected. Handlers that ask the opponent something hold the queue
//! until the answer arrives.

mod dispatcher;

pub use dispatcher::{AttackState, AttackWait};
