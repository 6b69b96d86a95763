//! The cost modifier pipeline.
//!
//! A card's cost is never stored as modified. Every query starts from the
//! printed cost and folds it through the modifiers registered by cards
//! currently in play, in registration order, then clamps each component at
//! zero.

mod modifier;

pub use modifier::{CostModifier, CostPipeline, CostQuery, CostRule};
