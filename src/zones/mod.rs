//! Zone system for card locations.
//!
//! ## Key Types
//!
//! - `ZoneId`: Hand, draw, discard, board, side mats, supply piles, trash
//! - `ZoneManager`: Card location tracking and movement
//! - `ZonePosition`: Top or bottom insertion
//! - `Pile`: Supply pile metadata (initial size, kingdom flag)

pub mod zone;
pub mod manager;
pub mod pile;

pub use zone::ZoneId;
pub use manager::{ZoneManager, ZonePosition};
pub use pile::Pile;
