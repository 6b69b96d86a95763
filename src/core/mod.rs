//! Core engine types: entity and player IDs, seat order, RNG,
//! configuration and the error type.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::{EntityAllocator, EntityId};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
