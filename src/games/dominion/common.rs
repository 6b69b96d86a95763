//! Base treasures and victory cards, and the resource bonus most action
//! cards share.

use std::sync::Arc;

use crate::cards::{CardBehavior, CardDefinition, CardRegistry, CardTypes, Cost, Play, StepResult};
use crate::core::{EngineResult, PlayerId};
use crate::engine::Game;

use super::cards::*;

/// "+N cards, +N actions, +N buys, +N money".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bonus {
    pub cards: usize,
    pub actions: i64,
    pub buys: i64,
    pub money: i64,
}

impl Bonus {
    pub const NONE: Bonus = Bonus {
        cards: 0,
        actions: 0,
        buys: 0,
        money: 0,
    };

    /// Give the bonus to `player`.
    pub fn apply(self, game: &mut Game, player: PlayerId) -> EngineResult<()> {
        if self.cards > 0 {
            game.draw_card(player, self.cards);
        }
        let state = game.player_mut(player)?;
        state.actions += self.actions;
        state.buys += self.buys;
        state.money += self.money;
        Ok(())
    }
}

/// A treasure worth a fixed amount.
pub struct Treasure(pub i64);

impl CardBehavior for Treasure {
    fn buy_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        game.player_mut(play.player)?.money += self.0;
        Ok(StepResult::Resolved)
    }
}

/// A card worth a fixed number of points at the end of the game.
pub struct Victory(pub i64);

impl CardBehavior for Victory {
    fn end_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        game.player_mut(play.player)?.score += self.0;
        Ok(StepResult::Resolved)
    }
}

pub(super) fn register(registry: &mut CardRegistry) {
    let treasure = |id, name: &str, cost, worth| {
        (
            CardDefinition::new(id, name, CardTypes::TREASURE).with_cost(Cost::coins(cost)),
            Arc::new(Treasure(worth)) as Arc<dyn CardBehavior>,
        )
    };
    let victory = |id, name: &str, types, cost, points| {
        (
            CardDefinition::new(id, name, types).with_cost(Cost::coins(cost)),
            Arc::new(Victory(points)) as Arc<dyn CardBehavior>,
        )
    };

    for (definition, behavior) in [
        treasure(COPPER, "Copper", 0, 1),
        treasure(SILVER, "Silver", 3, 2),
        treasure(GOLD, "Gold", 6, 3),
        victory(ESTATE, "Estate", CardTypes::VICTORY, 2, 1),
        victory(DUCHY, "Duchy", CardTypes::VICTORY, 5, 3),
        victory(PROVINCE, "Province", CardTypes::VICTORY, 8, 6),
        victory(CURSE, "Curse", CardTypes::CURSE, 0, -1),
    ] {
        registry.register(definition, behavior);
    }
}
