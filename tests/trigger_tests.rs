//! Trigger registry integration tests.
//!
//! Watchtower reacts to gains of its owner. A reaction that has to ask a
//! question holds up whatever caused the gain until it finalizes.

use rust_deckbuilder::cards::{CardId, Step};
use rust_deckbuilder::core::{EngineConfig, EntityId, PlayerId};
use rust_deckbuilder::decisions::{Answer, DecisionOptions, Submission};
use rust_deckbuilder::engine::{Game, GameBuilder};
use rust_deckbuilder::games::dominion::{self, cards::*};
use rust_deckbuilder::stack::{Resolution, StepStatus};
use rust_deckbuilder::zones::ZoneId;

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

fn in_hand(game: &Game, player: PlayerId, card: CardId) -> EntityId {
    game.hand(player)
        .iter()
        .copied()
        .find(|&c| game.instance(c).unwrap().card_id == card)
        .expect("card in hand")
}

/// P0 has Watchtower in play and 3 money to spend.
fn watchtower_in_play() -> (Game, EntityId) {
    let mut game = GameBuilder::new(EngineConfig::new(2), dominion::registry())
        .with_pile(SILVER, 40, false)
        .with_pile(CURSE, 10, false)
        .with_hand(P0, [WATCHTOWER])
        .build()
        .unwrap();
    game.start_turn(P0).unwrap();
    let watchtower = in_hand(&game, P0, WATCHTOWER);
    assert_eq!(game.play_action(P0, watchtower).unwrap(), StepStatus::Resolved);
    game.player_mut(P0).unwrap().money = 3;
    (game, watchtower)
}

// =============================================================================
// Reactions to gains
// =============================================================================

/// Watchtower can put a bought card on top of the deck.
#[test]
fn test_watchtower_puts_gain_on_deck() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (mut game, watchtower) = watchtower_in_play();

    let silver = game.buy(P0, SILVER).unwrap().unwrap();
    assert_eq!(game.zone_of(silver), Some(ZoneId::Discard(P0)));
    assert_eq!(game.request(watchtower, P0).unwrap().options, DecisionOptions::yes_no());

    game.submit_answer(watchtower, P0, Answer::choice("Yes")).unwrap();
    assert_eq!(game.step_status(watchtower), StepStatus::Waiting);
    let submission = game.submit_answer(watchtower, P0, Answer::choice("Deck")).unwrap();
    assert_eq!(submission, Submission::Accepted);

    assert_eq!(game.zone_of(silver), Some(ZoneId::Draw(P0)));
    assert_eq!(
        game.resolutions().last(),
        Some(&Resolution {
            card: watchtower,
            player: P0,
            step: Step::Reaction,
        })
    );
    assert_eq!(game.pending_count(), 0);
}

/// Watchtower can trash the gained card instead.
#[test]
fn test_watchtower_trashes_gain() {
    let (mut game, watchtower) = watchtower_in_play();
    let silver = game.buy(P0, SILVER).unwrap().unwrap();

    game.submit_answer(watchtower, P0, Answer::choice("Yes")).unwrap();
    game.submit_answer(watchtower, P0, Answer::choice("Trash")).unwrap();
    assert_eq!(game.zone_of(silver), Some(ZoneId::Trash));
}

/// Declining the reveal leaves the gained card where it landed.
#[test]
fn test_watchtower_declined() {
    let (mut game, watchtower) = watchtower_in_play();
    let silver = game.buy(P0, SILVER).unwrap().unwrap();

    game.submit_answer(watchtower, P0, Answer::choice("No")).unwrap();
    assert_eq!(game.zone_of(silver), Some(ZoneId::Discard(P0)));
    assert_eq!(game.step_status(watchtower), StepStatus::Resolved);
    assert!(game.peek_effect_state(watchtower, P0).is_none());
}

/// Watchtower only reacts to its owner's gains.
#[test]
fn test_watchtower_ignores_other_players() {
    let (mut game, watchtower) = watchtower_in_play();
    game.take_card_from_pile(P1, SILVER, false, false).unwrap();
    assert!(game.request(watchtower, P1).is_none());
    assert!(game.request(watchtower, P0).is_none());
}

/// Gains made while Watchtower is still asking wait their turn instead of
/// being dropped.
#[test]
fn test_watchtower_reacts_to_every_gain_of_a_batch() {
    let mut game = GameBuilder::new(EngineConfig::new(2), dominion::registry())
        .with_pile(GOLD, 30, false)
        .with_hand(P0, [WATCHTOWER, TREASURE_MAP, TREASURE_MAP])
        .build()
        .unwrap();
    let watchtower = in_hand(&game, P0, WATCHTOWER);
    game.play_action(P0, watchtower).unwrap();
    let map = in_hand(&game, P0, TREASURE_MAP);
    game.drain_prompts();

    assert_eq!(game.play_action(P0, map).unwrap(), StepStatus::Waiting);
    assert_eq!(game.deferred_trigger_count(watchtower), 3);

    let mut reveals = 0;
    while game.request(watchtower, P0).is_some() {
        reveals += 1;
        assert_eq!(game.resolution_count(map), 0);
        game.submit_answer(watchtower, P0, Answer::choice("Yes")).unwrap();
        game.submit_answer(watchtower, P0, Answer::choice("Trash")).unwrap();
    }
    assert_eq!(reveals, 4);
    assert_eq!(game.drain_prompts().len(), 8);

    let golds_trashed = game
        .trash()
        .iter()
        .filter(|&&c| game.instance(c).unwrap().card_id == GOLD)
        .count();
    assert_eq!(golds_trashed, 4);
    assert!(game.draw_pile(P0).is_empty());
    assert_eq!(game.resolution_count(map), 1);
    assert_eq!(game.deferred_trigger_count(watchtower), 0);
    assert_eq!(game.pending_count(), 0);
}

/// A second buy while the first reveal is open is offered afterwards,
/// with its own gained card.
#[test]
fn test_second_buy_waits_for_the_first_reaction() {
    let (mut game, watchtower) = watchtower_in_play();
    let state = game.player_mut(P0).unwrap();
    state.money = 6;
    state.buys = 2;

    let first = game.buy(P0, SILVER).unwrap().unwrap();
    let second = game.buy(P0, SILVER).unwrap().unwrap();
    assert_eq!(game.deferred_trigger_count(watchtower), 1);

    game.submit_answer(watchtower, P0, Answer::choice("Yes")).unwrap();
    game.submit_answer(watchtower, P0, Answer::choice("Deck")).unwrap();
    assert_eq!(game.zone_of(first), Some(ZoneId::Draw(P0)));

    assert!(game.request(watchtower, P0).is_some());
    game.submit_answer(watchtower, P0, Answer::choice("Yes")).unwrap();
    game.submit_answer(watchtower, P0, Answer::choice("Trash")).unwrap();
    assert_eq!(game.zone_of(second), Some(ZoneId::Trash));
    assert_eq!(game.zone_of(first), Some(ZoneId::Draw(P0)));
    assert_eq!(game.pending_count(), 0);
}

// =============================================================================
// Suspension
// =============================================================================

/// A Curse gained from Sea Hag triggers the victim's Watchtower, and Sea
/// Hag only finalizes once the victim has answered.
#[test]
fn test_reaction_holds_up_the_attacking_card() {
    let mut game = GameBuilder::new(EngineConfig::new(2), dominion::registry())
        .with_pile(CURSE, 10, false)
        .with_hand(P0, [SEA_HAG])
        .with_hand(P1, [WATCHTOWER])
        .build()
        .unwrap();
    let watchtower = in_hand(&game, P1, WATCHTOWER);
    game.play_action(P1, watchtower).unwrap();

    let sea_hag = in_hand(&game, P0, SEA_HAG);
    assert_eq!(game.play_action(P0, sea_hag).unwrap(), StepStatus::Waiting);
    assert!(game.request(watchtower, P1).is_some());
    assert_eq!(game.resolution_count(sea_hag), 0);
    assert_eq!(game.pending_count(), 2);

    game.submit_answer(watchtower, P1, Answer::choice("Yes")).unwrap();
    assert_eq!(game.resolution_count(sea_hag), 0);
    game.submit_answer(watchtower, P1, Answer::choice("Trash")).unwrap();

    // Watchtower finalizes first, then the card it held up
    let order: Vec<EntityId> = game.resolutions().iter().map(|r| r.card).collect();
    let watch_at = order.iter().rposition(|&c| c == watchtower).unwrap();
    let hag_at = order.iter().position(|&c| c == sea_hag).unwrap();
    assert!(watch_at < hag_at);
    assert_eq!(game.resolution_count(sea_hag), 1);
    assert_eq!(game.pending_count(), 0);

    let curse_in_trash = game
        .trash()
        .iter()
        .any(|&c| game.instance(c).unwrap().card_id == CURSE);
    assert!(curse_in_trash);
}

/// A gain whose reaction resolves on the spot does not hold anything up.
#[test]
fn test_reaction_without_question_passes() {
    let mut game = GameBuilder::new(EngineConfig::new(2), dominion::registry())
        .with_pile(CURSE, 10, false)
        .with_hand(P0, [SEA_HAG])
        .with_hand(P1, [LIGHTHOUSE])
        .build()
        .unwrap();
    let lighthouse = in_hand(&game, P1, LIGHTHOUSE);
    game.play_action(P1, lighthouse).unwrap();

    // Lighthouse cares about attacks, not gains
    game.take_card_from_pile(P1, CURSE, false, false).unwrap();
    assert_eq!(game.pending_count(), 0);
    assert_eq!(game.outstanding_requests().count(), 0);
}
