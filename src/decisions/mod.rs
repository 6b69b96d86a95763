//! The decision/continuation protocol.
//!
//! A card that needs a player's input issues a [`DecisionRequest`] naming
//! the prompt, the legal answers and a typed [`Continuation`]: which of the
//! card's hooks takes the answer, and at which [`Stage`]. The engine keeps
//! the request until the player answers, validates the answer against the
//! option set, and dispatches it back to the card.
//!
//! ## Example
//!
//! ```
//! use rust_deckbuilder::decisions::{Answer, DecisionOptions, PickCount};
//! use rust_deckbuilder::core::EntityId;
//!
//! let options = DecisionOptions::cards(vec![EntityId(1), EntityId(2)], PickCount::Exactly(1));
//! assert!(options.validate(&Answer::Cards(vec![EntityId(2)])).is_ok());
//! assert!(options.validate(&Answer::Cards(vec![])).is_err());
//! ```

mod book;
mod protocol;
mod request;

pub use book::DecisionBook;
pub use protocol::Submission;
pub use request::{Answer, Continuation, DecisionOptions, DecisionRequest, Hook, PickCount, Prompt, Stage};
