//! Card registry: definitions and the behaviors implementing them.
//!
//! The catalog loader fills a registry at startup; the engine only looks
//! things up.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::behavior::CardBehavior;
use super::definition::{CardDefinition, CardId};

/// Behavior for cards with no text (basic treasures without a step, curses).
struct Vanilla;

impl CardBehavior for Vanilla {}

/// Registry of card definitions and behaviors.
///
/// ```
/// use rust_deckbuilder::cards::{CardDefinition, CardId, CardRegistry, CardTypes};
///
/// let mut registry = CardRegistry::new();
/// registry.register_vanilla(CardDefinition::new(CardId::new(1), "Estate", CardTypes::VICTORY));
///
/// assert_eq!(registry.by_name("Estate").unwrap().id, CardId::new(1));
/// ```
#[derive(Clone, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
    behaviors: FxHashMap<CardId, Arc<dyn CardBehavior>>,
    names: FxHashMap<String, CardId>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition together with its behavior.
    ///
    /// Panics if the ID or the name is already registered.
    pub fn register(&mut self, card: CardDefinition, behavior: Arc<dyn CardBehavior>) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        if self.names.contains_key(&card.name) {
            panic!("Card named {:?} already registered", card.name);
        }
        self.names.insert(card.name.clone(), card.id);
        self.behaviors.insert(card.id, behavior);
        self.cards.insert(card.id, card);
    }

    /// Register a definition that has no hooks.
    pub fn register_vanilla(&mut self, card: CardDefinition) {
        self.register(card, Arc::new(Vanilla));
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get the behavior for a definition.
    #[must_use]
    pub fn behavior(&self, id: CardId) -> Option<Arc<dyn CardBehavior>> {
        self.behaviors.get(&id).cloned()
    }

    /// Look a definition up by its name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&CardDefinition> {
        self.names.get(name).and_then(|id| self.cards.get(id))
    }

    /// Check if a card is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }
}

impl std::fmt::Debug for CardRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardRegistry")
            .field("cards", &self.cards.len())
            .finish()
    }
}
