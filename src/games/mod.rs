//! Card content built on the engine.

pub mod dominion;
