//! Card type flags and costs.

use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// Set of card types a definition carries.
///
/// ```
/// use rust_deckbuilder::cards::CardTypes;
///
/// let ghostship = CardTypes::ACTION | CardTypes::ATTACK;
/// assert!(ghostship.contains(CardTypes::ATTACK));
/// assert!(!ghostship.contains(CardTypes::TREASURE));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardTypes(u8);

impl CardTypes {
    pub const NONE: Self = Self(0);
    pub const ACTION: Self = Self(1);
    pub const TREASURE: Self = Self(1 << 1);
    pub const REACTION: Self = Self(1 << 2);
    pub const ATTACK: Self = Self(1 << 3);
    pub const DURATION: Self = Self(1 << 4);
    pub const VICTORY: Self = Self(1 << 5);
    pub const CURSE: Self = Self(1 << 6);

    /// Raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True if every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    /// True if any flag in `other` is set.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for CardTypes {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CardTypes {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// A price in coins and potions.
///
/// Costs never go below zero; modifiers that would push a component negative
/// are clamped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cost {
    pub coins: i32,
    pub potions: i32,
}

impl Cost {
    /// Create a cost.
    #[must_use]
    pub const fn new(coins: i32, potions: i32) -> Self {
        Self { coins, potions }
    }

    /// A coin-only cost.
    #[must_use]
    pub const fn coins(coins: i32) -> Self {
        Self { coins, potions: 0 }
    }

    /// This cost with `delta` added to the coins, clamped at zero.
    #[must_use]
    pub fn adjust_coins(self, delta: i32) -> Self {
        Self {
            coins: (self.coins + delta).max(0),
            potions: self.potions,
        }
    }

    /// Clamp both components at zero.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            coins: self.coins.max(0),
            potions: self.potions.max(0),
        }
    }

    /// True if this cost fits within `limit` on both components.
    #[must_use]
    pub fn fits_within(self, limit: Cost) -> bool {
        self.coins <= limit.coins && self.potions <= limit.potions
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.coins, self.potions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_requires_all_flags() {
        let t = CardTypes::ACTION | CardTypes::DURATION;
        assert!(t.contains(CardTypes::ACTION));
        assert!(t.contains(CardTypes::ACTION | CardTypes::DURATION));
        assert!(!t.contains(CardTypes::ACTION | CardTypes::ATTACK));
        assert!(t.intersects(CardTypes::ACTION | CardTypes::ATTACK));
        assert!(!t.contains(CardTypes::NONE));
    }

    #[test]
    fn test_adjust_coins_clamps() {
        assert_eq!(Cost::coins(3).adjust_coins(-2), Cost::coins(1));
        assert_eq!(Cost::coins(1).adjust_coins(-2), Cost::coins(0));
        assert_eq!(Cost::new(2, 1).adjust_coins(3), Cost::new(5, 1));
    }

    #[test]
    fn test_fits_within() {
        let limit = Cost::new(5, 0);
        assert!(Cost::coins(5).fits_within(limit));
        assert!(!Cost::coins(6).fits_within(limit));
        assert!(!Cost::new(2, 1).fits_within(limit));
    }

    #[test]
    fn test_display() {
        assert_eq!(Cost::new(7, 1).to_string(), "7/1");
    }
}
