//! Per-play scratch state.
//!
//! Cards keep what they need across continuations (set-aside cards, a
//! remembered cost, a flag) here, keyed by card instance and player. State
//! lives until the step finalizes; duration cards keep theirs until the
//! begin step of their next turn finalizes.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::{CardId, Cost};
use crate::core::{EntityId, PlayerId};

/// Scratch state of one card instance acting for one player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectState {
    /// Cards the effect is tracking (set aside, revealed, captured copies).
    pub cards: SmallVec<[EntityId; 4]>,
    pub flag: bool,
    pub cost: Option<Cost>,
    pub remembered: Option<CardId>,
    pub counter: i64,
    /// Cards revealed per player, in seat order.
    pub revealed: Vec<(PlayerId, SmallVec<[EntityId; 2]>)>,
}

/// All live effect states.
#[derive(Clone, Debug, Default)]
pub struct EffectStates {
    states: FxHashMap<(EntityId, PlayerId), EffectState>,
}

impl EffectStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State for (card, player), created on first use.
    pub fn entry(&mut self, card: EntityId, player: PlayerId) -> &mut EffectState {
        self.states.entry((card, player)).or_default()
    }

    #[must_use]
    pub fn get(&self, card: EntityId, player: PlayerId) -> Option<&EffectState> {
        self.states.get(&(card, player))
    }

    /// Drop every state belonging to `card`.
    pub fn clear_card(&mut self, card: EntityId) {
        self.states.retain(|(c, _), _| *c != card);
    }

    #[must_use]
    pub fn has_card(&self, card: EntityId) -> bool {
        self.states.keys().any(|(c, _)| *c == card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_is_per_player() {
        let mut states = EffectStates::new();
        states.entry(EntityId(1), PlayerId::new(0)).flag = true;

        assert!(states.get(EntityId(1), PlayerId::new(0)).unwrap().flag);
        assert!(states.get(EntityId(1), PlayerId::new(1)).is_none());
    }

    #[test]
    fn test_clear_card() {
        let mut states = EffectStates::new();
        states.entry(EntityId(1), PlayerId::new(0)).counter = 3;
        states.entry(EntityId(1), PlayerId::new(1)).counter = 4;
        states.entry(EntityId(2), PlayerId::new(0)).counter = 5;

        states.clear_card(EntityId(1));
        assert_eq!(states.len(), 1);
        assert!(!states.has_card(EntityId(1)));
    }
}
