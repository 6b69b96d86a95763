//! Table setup.

use crate::cards::{CardId, CardRegistry};
use crate::core::{EngineConfig, EngineResult, PlayerId};
use crate::zones::{Pile, ZoneId, ZonePosition};

use super::Game;

/// Builder for a [`Game`].
///
/// Card lists for decks are given in draw order: the first card listed is
/// the first one drawn.
///
/// ```
/// use rust_deckbuilder::core::{EngineConfig, PlayerId};
/// use rust_deckbuilder::engine::GameBuilder;
/// use rust_deckbuilder::games::dominion::{self, cards};
///
/// let game = GameBuilder::new(EngineConfig::new(2), dominion::registry())
///     .with_pile(cards::GOLD, 30, false)
///     .with_deck(PlayerId::new(0), [cards::COPPER, cards::ESTATE])
///     .build()
///     .unwrap();
///
/// assert_eq!(game.pile_size(cards::GOLD), 30);
/// assert_eq!(game.draw_pile(PlayerId::new(0)).len(), 2);
/// ```
pub struct GameBuilder {
    config: EngineConfig,
    registry: CardRegistry,
    piles: Vec<Pile>,
    decks: Vec<(ZoneId, Vec<CardId>)>,
    shuffle: bool,
    deal: bool,
}

impl GameBuilder {
    #[must_use]
    pub fn new(config: EngineConfig, registry: CardRegistry) -> Self {
        Self {
            config,
            registry,
            piles: Vec::new(),
            decks: Vec::new(),
            shuffle: false,
            deal: false,
        }
    }

    /// Add a supply pile of `count` copies.
    ///
    /// Panics if the pile was already added.
    #[must_use]
    pub fn with_pile(mut self, card: CardId, count: usize, kingdom: bool) -> Self {
        if self.piles.iter().any(|pile| pile.card == card) {
            panic!("Pile for {:?} already added", card);
        }
        self.piles.push(Pile::new(card, count, kingdom));
        self
    }

    /// Put cards in a player's draw pile.
    #[must_use]
    pub fn with_deck(self, player: PlayerId, cards: impl IntoIterator<Item = CardId>) -> Self {
        self.with_cards(ZoneId::Draw(player), cards)
    }

    /// Put cards in a player's hand.
    #[must_use]
    pub fn with_hand(self, player: PlayerId, cards: impl IntoIterator<Item = CardId>) -> Self {
        self.with_cards(ZoneId::Hand(player), cards)
    }

    /// Put cards in a player's discard pile.
    #[must_use]
    pub fn with_discard(self, player: PlayerId, cards: impl IntoIterator<Item = CardId>) -> Self {
        self.with_cards(ZoneId::Discard(player), cards)
    }

    fn with_cards(mut self, zone: ZoneId, cards: impl IntoIterator<Item = CardId>) -> Self {
        self.decks.push((zone, cards.into_iter().collect()));
        self
    }

    /// Shuffle every draw pile after setup.
    #[must_use]
    pub fn shuffled(mut self) -> Self {
        self.shuffle = true;
        self
    }

    /// Draw a starting hand for every player after setup.
    #[must_use]
    pub fn dealt(mut self) -> Self {
        self.deal = true;
        self
    }

    /// Create the game.
    pub fn build(self) -> EngineResult<Game> {
        let mut game = Game::new(self.config, self.registry);

        for pile in self.piles {
            for _ in 0..pile.initial_size {
                game.create_card(pile.card, pile.zone(), ZonePosition::Top)?;
            }
            game.piles.push(pile);
        }

        for (zone, cards) in self.decks {
            for card in cards {
                game.create_card(card, zone, ZonePosition::Bottom)?;
            }
        }

        let players: Vec<PlayerId> = PlayerId::all(game.config.player_count).collect();
        if self.shuffle {
            for &player in &players {
                game.zones.shuffle_zone(ZoneId::Draw(player), &mut game.rng);
            }
        }
        if self.deal {
            for &player in &players {
                game.draw_card(player, game.config.hand_size);
            }
        }
        Ok(game)
    }
}
