//! Pending-effect records.
//!
//! One record per card instance with an unfinished step. A record counts its
//! outstanding parts: the hook invocation currently running, each issued
//! request, an active attack dispatch and each suspended reaction it waits
//! on. It is finalized exactly once, when nothing is outstanding and the
//! card has declared itself done.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Step;
use crate::core::{EngineError, EngineResult, EntityId, PlayerId};

/// What a suspended reaction holds up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Link {
    /// A step of another card; it may finalize once the reaction does.
    Part(EntityId),
    /// An attack dispatch; it resumes with the same opponent.
    Attack(EntityId),
}

impl Link {
    /// The card being held up.
    #[must_use]
    pub fn card(self) -> EntityId {
        match self {
            Link::Part(card) | Link::Attack(card) => card,
        }
    }
}

/// An unfinished step of one card instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRecord {
    pub step: Step,
    /// Player whose step this is.
    pub owner: PlayerId,
    pub outstanding: usize,
    /// The card reported [`crate::cards::StepResult::Resolved`].
    pub done: bool,
    pub parent: Option<Link>,
    /// Distinguishes successive records of the same card.
    pub serial: u64,
}

impl PendingRecord {
    /// True once the record can be finalized.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.done && self.outstanding == 0
    }
}

/// Open records keyed by card instance.
#[derive(Clone, Debug, Default)]
pub struct PendingTable {
    records: FxHashMap<EntityId, PendingRecord>,
    opened: u64,
}

impl PendingTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a record for `card` and return its serial. A card has at most
    /// one open step.
    pub fn open(&mut self, card: EntityId, step: Step, owner: PlayerId) -> EngineResult<u64> {
        if let Some(existing) = self.records.get(&card) {
            return Err(EngineError::StepAlreadyOpen {
                card,
                step: existing.step,
            });
        }
        self.opened += 1;
        self.records.insert(
            card,
            PendingRecord {
                step,
                owner,
                outstanding: 0,
                done: false,
                parent: None,
                serial: self.opened,
            },
        );
        Ok(self.opened)
    }

    #[must_use]
    pub fn get(&self, card: EntityId) -> Option<&PendingRecord> {
        self.records.get(&card)
    }

    fn record_mut(&mut self, card: EntityId) -> EngineResult<&mut PendingRecord> {
        self.records.get_mut(&card).ok_or(EngineError::NoOpenStep(card))
    }

    /// Check whether `card` has an open record.
    #[must_use]
    pub fn is_open(&self, card: EntityId) -> bool {
        self.records.contains_key(&card)
    }

    /// Check whether the record opened as `serial` is still open.
    #[must_use]
    pub fn is_open_as(&self, card: EntityId, serial: u64) -> bool {
        self.records.get(&card).map_or(false, |r| r.serial == serial)
    }

    /// One more outstanding part.
    pub fn increment(&mut self, card: EntityId) -> EngineResult<()> {
        self.record_mut(card)?.outstanding += 1;
        Ok(())
    }

    /// One part finished.
    pub fn decrement(&mut self, card: EntityId) -> EngineResult<()> {
        let record = self.record_mut(card)?;
        record.outstanding = record.outstanding.checked_sub(1).ok_or(EngineError::ProtocolViolation {
            card,
            reason: "more parts finished than were started",
        })?;
        Ok(())
    }

    /// The card has nothing more to do on its own.
    pub fn mark_done(&mut self, card: EntityId) -> EngineResult<()> {
        self.record_mut(card)?.done = true;
        Ok(())
    }

    /// Attach a parent the record holds up.
    pub fn set_parent(&mut self, card: EntityId, link: Link) -> EngineResult<()> {
        self.record_mut(card)?.parent = Some(link);
        Ok(())
    }

    /// Remove a record.
    pub fn close(&mut self, card: EntityId) -> EngineResult<PendingRecord> {
        self.records.remove(&card).ok_or(EngineError::NoOpenStep(card))
    }

    /// Open records owned by `player`.
    pub fn owned_by(&self, player: PlayerId) -> impl Iterator<Item = (EntityId, &PendingRecord)> {
        self.records
            .iter()
            .filter(move |(_, r)| r.owner == player)
            .map(|(c, r)| (*c, r))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_open_step_per_card() {
        let mut table = PendingTable::new();
        table.open(EntityId(1), Step::Action, PlayerId::new(0)).unwrap();

        let err = table.open(EntityId(1), Step::Begin, PlayerId::new(0)).unwrap_err();
        assert_eq!(
            err,
            EngineError::StepAlreadyOpen {
                card: EntityId(1),
                step: Step::Action
            }
        );
    }

    #[test]
    fn test_complete_needs_done_and_no_parts() {
        let mut table = PendingTable::new();
        let card = EntityId(1);
        table.open(card, Step::Action, PlayerId::new(0)).unwrap();
        table.increment(card).unwrap();
        table.mark_done(card).unwrap();
        assert!(!table.get(card).unwrap().is_complete());

        table.decrement(card).unwrap();
        assert!(table.get(card).unwrap().is_complete());
    }

    #[test]
    fn test_decrement_below_zero_is_an_error() {
        let mut table = PendingTable::new();
        table.open(EntityId(1), Step::Action, PlayerId::new(0)).unwrap();
        assert!(table.decrement(EntityId(1)).is_err());
    }

    #[test]
    fn test_serial_tells_records_apart() {
        let mut table = PendingTable::new();
        let card = EntityId(1);
        let first = table.open(card, Step::Reaction, PlayerId::new(0)).unwrap();
        table.close(card).unwrap();
        let second = table.open(card, Step::Reaction, PlayerId::new(0)).unwrap();

        assert_ne!(first, second);
        assert!(!table.is_open_as(card, first));
        assert!(table.is_open_as(card, second));
    }

    #[test]
    fn test_close_unknown() {
        let mut table = PendingTable::new();
        assert_eq!(table.close(EntityId(3)), Err(EngineError::NoOpenStep(EntityId(3))));
    }
}
