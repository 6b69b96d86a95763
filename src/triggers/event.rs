//! Trigger kinds, capabilities and event payloads.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{EntityId, PlayerId};

/// Events cards in play can respond to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerKind {
    /// The owner gained a card.
    Gain,
    /// The owner is being attacked.
    Attack,
}

impl TriggerKind {
    /// Capability bit a behavior needs to be asked about this kind.
    #[must_use]
    pub const fn capability(self) -> Capabilities {
        match self {
            TriggerKind::Gain => Capabilities::GAIN,
            TriggerKind::Attack => Capabilities::ATTACK,
        }
    }
}

/// Set of trigger kinds a behavior declares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capabilities(u8);

impl Capabilities {
    pub const NONE: Capabilities = Capabilities(0);
    pub const GAIN: Capabilities = Capabilities(1);
    pub const ATTACK: Capabilities = Capabilities(1 << 1);

    #[must_use]
    pub const fn contains(self, other: Capabilities) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for Capabilities {
    type Output = Capabilities;

    fn bitor(self, rhs: Capabilities) -> Capabilities {
        Capabilities(self.0 | rhs.0)
    }
}

/// How a card answers a trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerResponse {
    /// Not interested.
    Ignore,
    /// Cancel the event's effect on the owner (immunity). Stops the scan.
    Override,
    /// Run the card's reaction hook. Stops the scan.
    React,
}

/// A card gained by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GainEvent {
    /// The gained instance.
    pub gained: EntityId,
    pub card: CardId,
    pub player: PlayerId,
    /// Card whose effect caused the gain, if any.
    pub source: Option<EntityId>,
}

/// An attack about to be applied to one opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackEvent {
    /// The attacking card instance.
    pub card: EntityId,
    pub attacker: PlayerId,
    pub target: PlayerId,
}

/// A fired trigger and its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    Gain(GainEvent),
    Attack(AttackEvent),
}

impl Trigger {
    #[must_use]
    pub fn kind(&self) -> TriggerKind {
        match self {
            Trigger::Gain(_) => TriggerKind::Gain,
            Trigger::Attack(_) => TriggerKind::Attack,
        }
    }

    /// The player whose board is scanned for responders.
    #[must_use]
    pub fn affected_player(&self) -> PlayerId {
        match self {
            Trigger::Gain(event) => event.player,
            Trigger::Attack(event) => event.target,
        }
    }
}

/// Result of firing a trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerOutcome {
    /// Nobody overrode the event and no reaction is outstanding.
    Passed,
    /// A card made its owner immune.
    Overridden,
    /// A reaction is waiting on a decision; the linked parent waits with it.
    Suspended,
}
