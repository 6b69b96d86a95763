//! Card instance identification.
//!
//! Every physical card in a game (in a supply pile, a deck, a hand, on a
//! board or in the trash) has a unique `EntityId`. Two copies of "Haven" are
//! two entities sharing one `CardId`; anything that belongs to a single play
//! of a card is keyed by the entity, never by the definition.
//!
//! ```
//! use rust_deckbuilder::core::EntityId;
//!
//! let first = EntityId::new(7);
//! assert_eq!(first.next(), EntityId::new(8));
//! assert_eq!(format!("{}", first), "Card#7");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create an entity ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The ID allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}

/// Sequential allocator for entity IDs.
#[derive(Clone, Debug, Default)]
pub struct EntityAllocator {
    next: u32,
}

impl EntityAllocator {
    /// Create an allocator starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh entity ID.
    pub fn alloc(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// Number of IDs handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_is_sequential() {
        let mut alloc = EntityAllocator::new();
        let a = alloc.alloc();
        let b = alloc.alloc();

        assert_eq!(a, EntityId(0));
        assert_eq!(b, EntityId(1));
        assert_eq!(a.next(), b);
        assert_eq!(alloc.allocated(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", EntityId(42)), "Card#42");
    }

    #[test]
    fn test_serialization() {
        let id = EntityId(123);
        let json = serde_json::to_string(&id).unwrap();
        let back: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
