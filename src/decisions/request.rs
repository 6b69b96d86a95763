//! Decision requests, answers and continuations.
//!
//! A request is immutable once issued: the engine re-presents the very same
//! prompt and option set after a rejected answer. Validation that only needs
//! the option set (membership, counts) happens here; anything that needs the
//! game (cost limits, hand contents) is the continuation's job.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::{EntityId, PlayerId};

/// Position of a continuation within a card's multi-stage text.
///
/// Cards with one question only ever use [`Stage::FIRST`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stage(pub u8);

impl Stage {
    pub const FIRST: Stage = Stage(0);
}

/// Which card hook consumes the answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hook {
    /// [`crate::cards::CardBehavior::handler`]
    Handler,
    /// [`crate::cards::CardBehavior::attack_handler`]
    AttackHandler,
}

/// Typed continuation stored on a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Continuation {
    pub hook: Hook,
    pub stage: Stage,
}

impl Continuation {
    /// Answer goes to the card's `handler` at `stage`.
    #[must_use]
    pub const fn handler(stage: Stage) -> Self {
        Self { hook: Hook::Handler, stage }
    }

    /// Answer goes to the card's `attack_handler`.
    #[must_use]
    pub const fn attack() -> Self {
        Self {
            hook: Hook::AttackHandler,
            stage: Stage::FIRST,
        }
    }
}

/// How many cards a player must pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickCount {
    /// Exactly `n`, or every available card when fewer are available.
    Exactly(usize),
    /// Between zero and `n`.
    UpTo(usize),
    /// Any number, including none.
    Any,
}

impl PickCount {
    /// `(min, max)` cards for `available` candidates.
    #[must_use]
    pub fn bounds(self, available: usize) -> (usize, usize) {
        match self {
            PickCount::Exactly(n) => (n.min(available), n.min(available)),
            PickCount::UpTo(n) => (0, n.min(available)),
            PickCount::Any => (0, available),
        }
    }
}

/// The answers a request accepts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionOptions {
    /// One of a fixed list of labels.
    Choice(SmallVec<[String; 4]>),
    /// A selection of card instances.
    Cards {
        candidates: Vec<EntityId>,
        min: usize,
        max: usize,
        /// The order of the selection is meaningful.
        ordered: bool,
    },
    /// One supply pile.
    Pile(Vec<CardId>),
}

impl DecisionOptions {
    /// Options for a yes/no question.
    #[must_use]
    pub fn yes_no() -> Self {
        DecisionOptions::Choice(SmallVec::from_iter(["Yes".to_string(), "No".to_string()]))
    }

    /// A card selection bounded by `count`.
    #[must_use]
    pub fn cards(candidates: Vec<EntityId>, count: PickCount) -> Self {
        let (min, max) = count.bounds(candidates.len());
        DecisionOptions::Cards {
            candidates,
            min,
            max,
            ordered: false,
        }
    }

    /// True when the empty answer is the only legal one.
    #[must_use]
    pub fn only_empty_answer(&self) -> bool {
        match self {
            DecisionOptions::Choice(labels) => labels.is_empty(),
            DecisionOptions::Cards { max, .. } => *max == 0,
            DecisionOptions::Pile(piles) => piles.is_empty(),
        }
    }

    /// The answer given on the player's behalf when nothing can be chosen.
    #[must_use]
    pub fn empty_answer(&self) -> Answer {
        match self {
            DecisionOptions::Cards { .. } => Answer::Cards(Vec::new()),
            DecisionOptions::Choice(_) | DecisionOptions::Pile(_) => Answer::Nothing,
        }
    }

    /// Check an answer against the option set.
    ///
    /// Returns the message to whisper to the player on failure.
    pub fn validate(&self, answer: &Answer) -> Result<(), String> {
        match (self, answer) {
            (DecisionOptions::Choice(labels), Answer::Choice(choice)) => {
                if labels.iter().any(|l| l == choice) {
                    Ok(())
                } else {
                    Err(format!("Choose one of: {}", labels.join(", ")))
                }
            }
            (DecisionOptions::Cards { candidates, min, max, .. }, Answer::Cards(picked)) => {
                if picked.iter().any(|c| !candidates.contains(c)) {
                    return Err("That card can't be chosen".to_string());
                }
                let mut unique = picked.clone();
                unique.sort_unstable();
                unique.dedup();
                if unique.len() != picked.len() {
                    return Err("You chose the same card twice".to_string());
                }
                if picked.len() < *min || picked.len() > *max {
                    return Err(if min == max {
                        format!("You have to choose {} cards", min)
                    } else {
                        format!("You have to choose between {} and {} cards", min, max)
                    });
                }
                Ok(())
            }
            (DecisionOptions::Pile(piles), Answer::Pile(card)) => {
                if piles.contains(card) {
                    Ok(())
                } else {
                    Err("You can't pick that pile".to_string())
                }
            }
            _ => Err("That answer doesn't fit the question".to_string()),
        }
    }
}

/// A player's answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    Choice(String),
    Cards(Vec<EntityId>),
    Pile(CardId),
    /// No answer: the first call of an attack handler, or a question with
    /// nothing to choose.
    Nothing,
}

impl Answer {
    /// Convenience constructor for a choice label.
    #[must_use]
    pub fn choice(label: impl Into<String>) -> Self {
        Answer::Choice(label.into())
    }

    /// The chosen label, if this is a choice.
    #[must_use]
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Answer::Choice(label) => Some(label),
            _ => None,
        }
    }

    /// The picked cards; empty for non-card answers.
    #[must_use]
    pub fn cards(&self) -> &[EntityId] {
        match self {
            Answer::Cards(cards) => cards,
            _ => &[],
        }
    }

    /// The picked pile, if any.
    #[must_use]
    pub fn pile(&self) -> Option<CardId> {
        match self {
            Answer::Pile(card) => Some(*card),
            _ => None,
        }
    }

    /// True for a "Yes" choice.
    #[must_use]
    pub fn is_yes(&self) -> bool {
        self.as_choice() == Some("Yes")
    }
}

/// An outstanding question for one player on behalf of one card instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecisionRequest {
    pub card: EntityId,
    pub player: PlayerId,
    pub prompt: String,
    pub options: DecisionOptions,
    pub continuation: Continuation,
    /// How many times the request has been presented.
    pub presented: u32,
}

impl DecisionRequest {
    /// Create a request that has not been presented yet.
    #[must_use]
    pub fn new(
        card: EntityId,
        player: PlayerId,
        prompt: impl Into<String>,
        options: DecisionOptions,
        continuation: Continuation,
    ) -> Self {
        Self {
            card,
            player,
            prompt: prompt.into(),
            options,
            continuation,
            presented: 0,
        }
    }
}

/// What the transport shows a player: the player-facing part of a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub card: EntityId,
    pub player: PlayerId,
    pub prompt: String,
    pub options: DecisionOptions,
}

impl From<&DecisionRequest> for Prompt {
    fn from(request: &DecisionRequest) -> Self {
        Self {
            card: request.card,
            player: request.player,
            prompt: request.prompt.clone(),
            options: request.options.clone(),
        }
    }
}
