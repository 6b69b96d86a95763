//! Playing cards and moving through a turn.
//!
//! These helpers are what a turn scheduler drives: they move cards, run the
//! matching step and report whether anything is left waiting. They do not
//! enforce phase order.

use log::{debug, info};

use crate::cards::{CardId, CardTypes, Step};
use crate::core::{EngineError, EngineResult, EntityId, PlayerId, PlayerMap};
use crate::stack::StepStatus;
use crate::zones::{ZoneId, ZonePosition};

use super::Game;

impl Game {
    /// Move a card from `player`'s hand into play and run `step`.
    pub fn play_card(&mut self, player: PlayerId, card: EntityId, step: Step) -> EngineResult<StepStatus> {
        if !self.zones.is_in_zone(card, ZoneId::Hand(player)) {
            return Err(EngineError::NotInZone {
                card,
                expected: ZoneId::Hand(player),
            });
        }
        self.move_card_to_pile(card, ZoneId::Board(player), ZonePosition::Top)?;
        self.history.record_played(player, card);
        self.yell(format!("{} plays {}", self.player_name(player), self.card_name(card)));
        self.run_step(card, player, step)
    }

    /// Play an action card, spending one action.
    pub fn play_action(&mut self, player: PlayerId, card: EntityId) -> EngineResult<StepStatus> {
        let state = self.player_mut(player)?;
        state.actions = (state.actions - 1).max(0);
        self.play_card(player, card, Step::Action)
    }

    /// Play a treasure during the buy phase.
    pub fn play_treasure(&mut self, player: PlayerId, card: EntityId) -> EngineResult<StepStatus> {
        self.play_card(player, card, Step::Buy)
    }

    /// Buy a card at its current cost.
    ///
    /// Returns `None`, with a whisper to the player, if the purchase is not
    /// possible.
    pub fn buy(&mut self, player: PlayerId, card: CardId) -> EngineResult<Option<EntityId>> {
        let cost = self.cost_for(card, player)?;
        let state = self.player(player)?;
        let affordable = state.buys > 0 && state.money >= i64::from(cost.coins) && state.potions >= i64::from(cost.potions);
        if !affordable {
            self.whisper(player, format!("You can't buy that for {}", cost));
            return Ok(None);
        }
        if self.pile_size(card) == 0 {
            self.whisper(player, "That pile is empty");
            return Ok(None);
        }

        let state = self.player_mut(player)?;
        state.money -= i64::from(cost.coins);
        state.potions -= i64::from(cost.potions);
        state.buys -= 1;
        let gained = self.take_card_from_pile(player, card, true, false)?;
        if let Some(gained) = gained {
            self.history.record_bought(player, gained);
        }
        Ok(gained)
    }

    /// Start `player`'s turn and run the begin step of every duration card
    /// they left in play.
    pub fn start_turn(&mut self, player: PlayerId) -> EngineResult<StepStatus> {
        self.player_mut(player)?.reset_turn();
        self.active = player;
        self.turn += 1;
        self.history.clear(player);
        info!("turn {} starts for {}", self.turn, self.player_name(player));

        let waiting = std::mem::take(&mut self.durations[player]);
        let mut status = StepStatus::Resolved;
        for card in waiting {
            if self.run_step(card, player, Step::Begin)? == StepStatus::Waiting {
                status = StepStatus::Waiting;
            }
        }
        Ok(status)
    }

    /// Run the cleanup step of every card `player` has in play.
    pub fn cleanup(&mut self, player: PlayerId) -> EngineResult<StepStatus> {
        let board = self.board(player).to_vec();
        let mut status = StepStatus::Resolved;
        for card in board {
            if self.run_step(card, player, Step::Cleanup)? == StepStatus::Waiting {
                status = StepStatus::Waiting;
            }
        }
        Ok(status)
    }

    /// End `player`'s turn: discard what is in play and in hand, keep
    /// duration cards played this turn, and draw a new hand.
    pub fn finish_turn(&mut self, player: PlayerId) -> EngineResult<()> {
        let open = self.pending.len();
        if open > 0 {
            return Err(EngineError::UnresolvedEffects { player, open });
        }

        let board = self.board(player).to_vec();
        for card in board {
            let played_now = self.history.played(player).contains(&card);
            if played_now && self.card_is(card, CardTypes::DURATION) {
                debug!("{} stays in play", self.card_name(card));
                self.durations[player].push(card);
            } else {
                self.discard_card(player, card)?;
            }
        }
        self.discard_hand(player);
        let revealed = self.zones.cards_in_zone(ZoneId::Revealed(player)).to_vec();
        for card in revealed {
            self.discard_card(player, card)?;
        }
        self.cost_mods.prune(&self.zones);

        self.draw_card(player, self.config.hand_size);
        self.player_mut(player)?.reset_turn();
        Ok(())
    }

    /// Run the end step of every card each player owns and return the
    /// final scores.
    pub fn final_scoring(&mut self) -> EngineResult<PlayerMap<i64>> {
        for player in PlayerId::all(self.config.player_count) {
            let owned: Vec<EntityId> = ZoneId::player_zones(player)
                .iter()
                .flat_map(|&zone| self.zones.cards_in_zone(zone).iter().copied())
                .collect();
            for card in owned {
                self.run_step(card, player, Step::End)?;
            }
        }
        let scores = PlayerMap::new(self.config.player_count, |p| self.players[p].score);
        Ok(scores)
    }
}
