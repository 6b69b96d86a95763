//! The engine facade.
//!
//! [`Game`] owns every piece of table state: zones, supply piles, player
//! resources, turn history, outstanding decisions, pending records, effect
//! state, attacks in progress and cost modifiers. Cards only ever see it
//! through `&mut Game` inside their hooks, so two answers can never be
//! applied at the same time.
//!
//! The operations are spread over the modules that own their concern:
//! decisions in [`crate::decisions`], step execution in [`crate::stack`],
//! triggers in [`crate::triggers`], attacks in [`crate::attack`], costs in
//! [`crate::costs`]. This module holds the state and the plain accessors;
//! card movement and the turn helpers live in the submodules below.

mod builder;
mod history;
mod messages;
mod movement;
mod player_state;
mod turn;

pub use builder::GameBuilder;
pub use history::TurnHistory;
pub use messages::{Audience, Message};
pub use player_state::PlayerState;

use std::collections::VecDeque;
use std::sync::Arc;

use im::Vector;
use rustc_hash::FxHashMap;

use crate::attack::AttackState;
use crate::cards::{CardBehavior, CardDefinition, CardId, CardInstance, CardRegistry, CardTypes};
use crate::core::{EngineConfig, EngineError, EngineResult, EntityAllocator, EntityId, GameRng, PlayerId, PlayerMap};
use crate::costs::CostPipeline;
use crate::decisions::{DecisionBook, Prompt};
use crate::stack::{EffectState, EffectStates, PendingTable, Resolution};
use crate::triggers::DeferredTrigger;
use crate::zones::{Pile, ZoneId, ZoneManager};

/// A table in progress.
pub struct Game {
    // === Configuration ===
    pub(crate) config: EngineConfig,
    pub(crate) registry: CardRegistry,

    // === Cards ===
    pub(crate) zones: ZoneManager,
    pub(crate) cards: FxHashMap<EntityId, CardInstance>,
    pub(crate) entities: EntityAllocator,
    pub(crate) piles: Vec<Pile>,

    // === Players and turn ===
    pub(crate) players: PlayerMap<PlayerState>,
    pub(crate) active: PlayerId,
    pub(crate) turn: u32,
    pub(crate) history: TurnHistory,
    /// Duration cards waiting for their owner's next begin step.
    pub(crate) durations: PlayerMap<Vec<EntityId>>,

    // === Resolution ===
    pub(crate) decisions: DecisionBook,
    pub(crate) pending: PendingTable,
    pub(crate) effects: EffectStates,
    pub(crate) attacks: FxHashMap<EntityId, AttackState>,
    pub(crate) cost_mods: CostPipeline,
    /// Trigger occurrences waiting for a busy reaction card.
    pub(crate) deferred: FxHashMap<EntityId, VecDeque<DeferredTrigger>>,
    /// Cards whose hook or continuation is running, innermost last.
    pub(crate) executing: Vec<EntityId>,

    // === Output ===
    pub(crate) messages: Vector<Message>,
    pub(crate) prompts: Vec<Prompt>,
    pub(crate) resolutions: Vec<Resolution>,

    pub(crate) rng: GameRng,
}

impl Game {
    pub(crate) fn new(config: EngineConfig, registry: CardRegistry) -> Self {
        let player_count = config.player_count;
        let players = PlayerMap::new(player_count, |p| PlayerState::new(config.player_name(p)));
        let rng = GameRng::new(config.seed);
        Self {
            registry,
            zones: ZoneManager::new(),
            cards: FxHashMap::default(),
            entities: EntityAllocator::new(),
            piles: Vec::new(),
            players,
            active: PlayerId::new(0),
            turn: 0,
            history: TurnHistory::new(player_count),
            durations: PlayerMap::with_default(player_count),
            decisions: DecisionBook::new(),
            pending: PendingTable::new(),
            effects: EffectStates::new(),
            attacks: FxHashMap::default(),
            cost_mods: CostPipeline::new(),
            deferred: FxHashMap::default(),
            executing: Vec::new(),
            messages: Vector::new(),
            prompts: Vec::new(),
            resolutions: Vec::new(),
            rng,
            config,
        }
    }

    // === Configuration ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.config.player_count
    }

    // === Players ===

    /// Player state by seat.
    pub fn player(&self, player: PlayerId) -> EngineResult<&PlayerState> {
        self.players.try_get(player).ok_or(EngineError::UnknownPlayer(player))
    }

    /// Mutable player state by seat.
    pub fn player_mut(&mut self, player: PlayerId) -> EngineResult<&mut PlayerState> {
        if player.index() >= self.players.player_count() {
            return Err(EngineError::UnknownPlayer(player));
        }
        Ok(&mut self.players[player])
    }

    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> String {
        self.players
            .try_get(player)
            .map_or_else(|| player.to_string(), |p| p.name.clone())
    }

    /// Mark a player as disconnected or back.
    pub fn set_connected(&mut self, player: PlayerId, connected: bool) -> EngineResult<()> {
        self.player_mut(player)?.connected = connected;
        Ok(())
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// Seat before the active player, `None` at a one-player table.
    #[must_use]
    pub fn previous_player(&self) -> Option<PlayerId> {
        (self.config.player_count > 1).then(|| self.active.previous_seat(self.config.player_count))
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn history(&self) -> &TurnHistory {
        &self.history
    }

    // === Cards ===

    /// Instance data of a card.
    pub fn instance(&self, card: EntityId) -> EngineResult<CardInstance> {
        self.cards.get(&card).copied().ok_or(EngineError::UnknownCard(card))
    }

    /// Definition a card instance was printed from.
    pub fn definition_of(&self, card: EntityId) -> EngineResult<&CardDefinition> {
        let card_id = self.instance(card)?.card_id;
        self.registry.get(card_id).ok_or(EngineError::UnknownDefinition(card_id))
    }

    /// Check a card instance's printed types.
    #[must_use]
    pub fn card_is(&self, card: EntityId, types: CardTypes) -> bool {
        self.definition_of(card).map_or(false, |def| def.is(types))
    }

    /// Display name of a card instance.
    #[must_use]
    pub fn card_name(&self, card: EntityId) -> String {
        self.definition_of(card)
            .map_or_else(|_| card.to_string(), |def| def.name.clone())
    }

    /// Definition id registered under `name`.
    pub fn card_id(&self, name: &str) -> Option<CardId> {
        self.registry.by_name(name).map(|def| def.id)
    }

    pub(crate) fn behavior_of(&self, card: EntityId) -> EngineResult<Arc<dyn CardBehavior>> {
        let card_id = self.instance(card)?.card_id;
        self.registry
            .behavior(card_id)
            .ok_or(EngineError::UnknownDefinition(card_id))
    }

    // === Zones ===

    #[must_use]
    pub fn zones(&self) -> &ZoneManager {
        &self.zones
    }

    #[must_use]
    pub fn zone_of(&self, card: EntityId) -> Option<ZoneId> {
        self.zones.get_zone(card)
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[EntityId] {
        self.zones.cards_in_zone(ZoneId::Hand(player))
    }

    /// Draw pile, bottom first.
    #[must_use]
    pub fn draw_pile(&self, player: PlayerId) -> &[EntityId] {
        self.zones.cards_in_zone(ZoneId::Draw(player))
    }

    /// Discard pile, bottom first.
    #[must_use]
    pub fn discard_pile(&self, player: PlayerId) -> &[EntityId] {
        self.zones.cards_in_zone(ZoneId::Discard(player))
    }

    #[must_use]
    pub fn board(&self, player: PlayerId) -> &[EntityId] {
        self.zones.cards_in_zone(ZoneId::Board(player))
    }

    #[must_use]
    pub fn trash(&self) -> &[EntityId] {
        self.zones.cards_in_zone(ZoneId::Trash)
    }

    // === Supply ===

    /// Pile metadata for a definition.
    #[must_use]
    pub fn get_pile(&self, card: CardId) -> Option<&Pile> {
        self.piles.iter().find(|pile| pile.card == card)
    }

    /// Cards left in a pile (0 if there is no such pile).
    #[must_use]
    pub fn pile_size(&self, card: CardId) -> usize {
        self.zones.zone_size(ZoneId::Supply(card))
    }

    /// Every supply pile in setup order.
    #[must_use]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    /// Kingdom piles in setup order.
    pub fn kingdom_piles(&self) -> impl Iterator<Item = &Pile> {
        self.piles.iter().filter(|pile| pile.kingdom)
    }

    /// Number of empty supply piles.
    #[must_use]
    pub fn empty_piles(&self) -> usize {
        self.piles.iter().filter(|pile| self.pile_size(pile.card) == 0).count()
    }

    // === Effect state ===

    /// Scratch state of `card` acting for `player`, created on first use.
    pub fn effect_state(&mut self, card: EntityId, player: PlayerId) -> &mut EffectState {
        self.effects.entry(card, player)
    }

    /// Scratch state if it exists.
    #[must_use]
    pub fn peek_effect_state(&self, card: EntityId, player: PlayerId) -> Option<&EffectState> {
        self.effects.get(card, player)
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("turn", &self.turn)
            .field("active", &self.active)
            .field("cards", &self.cards.len())
            .field("pending", &self.pending.len())
            .field("requests", &self.decisions.len())
            .finish_non_exhaustive()
    }
}
