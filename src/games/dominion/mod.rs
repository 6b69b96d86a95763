//! A reference card set: the base treasures and victory cards plus the
//! Seaside and Prosperity cards whose text exercises the engine (attacks,
//! durations, reactions, cost modifiers, multi-stage questions).
//!
//! ```
//! use rust_deckbuilder::games::dominion::{self, cards};
//!
//! let registry = dominion::registry();
//! assert_eq!(registry.get(cards::GHOSTSHIP).unwrap().name, "Ghostship");
//! ```

pub mod cards;
pub mod common;
pub mod prosperity;
pub mod seaside;

use std::sync::Arc;

use crate::cards::{CardBehavior, CardDefinition, CardId, CardRegistry, CardTypes, Cost};

pub use seaside::PIRATE_SHIP_MAT;

/// Registry holding every card of the set.
#[must_use]
pub fn registry() -> CardRegistry {
    let mut registry = CardRegistry::new();
    common::register(&mut registry);
    seaside::register(&mut registry);
    prosperity::register(&mut registry);
    registry
}

fn add<B>(registry: &mut CardRegistry, id: CardId, name: &str, types: CardTypes, coins: i32, behavior: B)
where
    B: CardBehavior + 'static,
{
    registry.register(
        CardDefinition::new(id, name, types).with_cost(Cost::coins(coins)),
        Arc::new(behavior),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_card_registered_once() {
        let registry = registry();
        assert_eq!(registry.len(), 7 + 20 + 12);
        assert!(registry.by_name("Sea Hag").is_some());
        assert!(registry.by_name("Worker's Village").is_some());
    }

    #[test]
    fn test_durations_are_flagged() {
        let registry = registry();
        for id in [cards::WHARF, cards::CARAVAN, cards::HAVEN, cards::LIGHTHOUSE, cards::TACTICIAN] {
            assert!(registry.get(id).unwrap().is(CardTypes::DURATION));
        }
        assert!(!registry.get(cards::TREASURY).unwrap().is(CardTypes::DURATION));
    }
}
