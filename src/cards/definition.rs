//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties shared by every copy of
//! a card: name, types and printed cost. Anything that changes while a copy
//! is being played lives in the engine's per-play effect state instead.

use serde::{Deserialize, Serialize};

use super::types::{CardTypes, Cost};

/// Unique identifier for a card definition ("Haven", "Gold", ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ```
/// use rust_deckbuilder::cards::{CardDefinition, CardId, CardTypes, Cost};
///
/// let haven = CardDefinition::new(CardId::new(3), "Haven", CardTypes::ACTION | CardTypes::DURATION)
///     .with_cost(Cost::coins(2));
///
/// assert!(haven.is(CardTypes::DURATION));
/// assert_eq!(haven.cost, Cost::coins(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this definition.
    pub id: CardId,

    /// Card name.
    pub name: String,

    /// Type flags.
    pub types: CardTypes,

    /// Printed cost before any modifiers.
    pub cost: Cost,
}

impl CardDefinition {
    /// Create a new definition with a zero cost.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, types: CardTypes) -> Self {
        Self {
            id,
            name: name.into(),
            types,
            cost: Cost::default(),
        }
    }

    /// Set the printed cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: Cost) -> Self {
        self.cost = cost;
        self
    }

    /// True if the definition carries every flag in `types`.
    #[must_use]
    pub fn is(&self, types: CardTypes) -> bool {
        self.types.contains(types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_definition_types() {
        let card = CardDefinition::new(CardId::new(1), "Lighthouse", CardTypes::ACTION | CardTypes::DURATION);
        assert!(card.is(CardTypes::ACTION));
        assert!(!card.is(CardTypes::TREASURE));
        assert_eq!(card.cost, Cost::default());
    }

    #[test]
    fn test_definition_serialization() {
        let card = CardDefinition::new(CardId::new(1), "Loan", CardTypes::TREASURE).with_cost(Cost::coins(3));
        let json = serde_json::to_string(&card).unwrap();
        let back: CardDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
