//! Storage for outstanding decision requests.
//!
//! At most one request per (card instance, player). Requests are kept in
//! issue order so a transport can present them deterministically.

use rustc_hash::FxHashMap;

use crate::core::{EntityId, PlayerId};

use super::request::DecisionRequest;

type RequestKey = (EntityId, PlayerId);

/// Outstanding requests keyed by (card instance, player).
#[derive(Clone, Debug, Default)]
pub struct DecisionBook {
    requests: FxHashMap<RequestKey, DecisionRequest>,
    order: Vec<RequestKey>,
}

impl DecisionBook {
    /// Create an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a request. Returns it back if the key is already taken.
    pub fn insert(&mut self, request: DecisionRequest) -> Result<(), DecisionRequest> {
        let key = (request.card, request.player);
        if self.requests.contains_key(&key) {
            return Err(request);
        }
        self.order.push(key);
        self.requests.insert(key, request);
        Ok(())
    }

    /// Remove and return a request.
    pub fn take(&mut self, card: EntityId, player: PlayerId) -> Option<DecisionRequest> {
        let request = self.requests.remove(&(card, player))?;
        self.order.retain(|k| *k != (card, player));
        Some(request)
    }

    /// Look at a request without removing it.
    #[must_use]
    pub fn get(&self, card: EntityId, player: PlayerId) -> Option<&DecisionRequest> {
        self.requests.get(&(card, player))
    }

    /// Check whether a request is outstanding.
    #[must_use]
    pub fn contains(&self, card: EntityId, player: PlayerId) -> bool {
        self.requests.contains_key(&(card, player))
    }

    /// Number of requests outstanding for a card instance.
    #[must_use]
    pub fn count_for_card(&self, card: EntityId) -> usize {
        self.order.iter().filter(|(c, _)| *c == card).count()
    }

    /// Requests waiting on a player, in issue order.
    pub fn for_player(&self, player: PlayerId) -> impl Iterator<Item = &DecisionRequest> {
        self.order
            .iter()
            .filter(move |(_, p)| *p == player)
            .filter_map(|k| self.requests.get(k))
    }

    /// All requests in issue order.
    pub fn iter(&self) -> impl Iterator<Item = &DecisionRequest> {
        self.order.iter().filter_map(|k| self.requests.get(k))
    }

    /// Number of outstanding requests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// True if nothing is outstanding.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
