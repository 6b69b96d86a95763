//! Decision protocol integration tests.
//!
//! These tests drive requests through `submit_answer` the way a client
//! would: present, reject, re-present and finally accept.

use std::sync::Arc;

use rust_deckbuilder::cards::{CardBehavior, CardDefinition, CardId, CardTypes, Cost, Play, StepResult};
use rust_deckbuilder::core::{EngineConfig, EngineError, EngineResult, EntityId, PlayerId};
use rust_deckbuilder::decisions::{Answer, Continuation, DecisionOptions, Stage, Submission};
use rust_deckbuilder::engine::{Game, GameBuilder};
use rust_deckbuilder::games::dominion::{self, cards::*};
use rust_deckbuilder::stack::StepStatus;

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

const PICKY: CardId = CardId(900);
const DOUBLE_ASK: CardId = CardId(901);

/// Accepts only "Yes"; a "No" is rejected by the continuation itself.
struct Picky;

impl CardBehavior for Picky {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        game.ask_yes_no(play, "Say yes", Continuation::handler(Stage::FIRST))
    }

    fn handler(&self, game: &mut Game, play: Play, _stage: Stage, answer: &Answer) -> EngineResult<StepResult> {
        if !answer.is_yes() {
            game.whisper(play.player, "Only yes will do");
            return Ok(StepResult::Rejected);
        }
        Ok(StepResult::Resolved)
    }
}

/// Asks the same player twice without waiting.
struct DoubleAsk;

impl CardBehavior for DoubleAsk {
    fn action_step(&self, game: &mut Game, play: Play) -> EngineResult<StepResult> {
        game.ask_yes_no(play, "First", Continuation::handler(Stage::FIRST))?;
        game.ask_yes_no(play, "Second", Continuation::handler(Stage::FIRST))
    }

    fn handler(&self, _game: &mut Game, _play: Play, _stage: Stage, _answer: &Answer) -> EngineResult<StepResult> {
        Ok(StepResult::Resolved)
    }
}

fn registry() -> rust_deckbuilder::cards::CardRegistry {
    let mut registry = dominion::registry();
    registry.register(
        CardDefinition::new(PICKY, "Picky", CardTypes::ACTION).with_cost(Cost::coins(0)),
        Arc::new(Picky),
    );
    registry.register(
        CardDefinition::new(DOUBLE_ASK, "Double Ask", CardTypes::ACTION).with_cost(Cost::coins(0)),
        Arc::new(DoubleAsk),
    );
    registry
}

fn in_hand(game: &Game, player: PlayerId, card: CardId) -> EntityId {
    game.hand(player)
        .iter()
        .copied()
        .find(|&c| game.instance(c).unwrap().card_id == card)
        .expect("card in hand")
}

fn warehouse_game(config: EngineConfig) -> (Game, EntityId) {
    let game = GameBuilder::new(config, registry())
        .with_hand(P0, [WAREHOUSE, COPPER, COPPER])
        .with_deck(P0, [ESTATE, ESTATE, ESTATE, SILVER])
        .build()
        .unwrap();
    let warehouse = in_hand(&game, P0, WAREHOUSE);
    (game, warehouse)
}

// =============================================================================
// Validation
// =============================================================================

/// An answer that fails validation re-presents the identical request.
#[test]
fn test_invalid_answer_reprompts_identical_request() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (mut game, warehouse) = warehouse_game(EngineConfig::new(2));

    assert_eq!(game.play_action(P0, warehouse).unwrap(), StepStatus::Waiting);
    let first = game.request(warehouse, P0).unwrap().clone();
    assert_eq!(first.presented, 1);
    assert_eq!(game.hand(P0).len(), 5);

    let one = game.hand(P0)[0];
    let submission = game.submit_answer(warehouse, P0, Answer::Cards(vec![one])).unwrap();
    assert_eq!(submission, Submission::Reprompted);

    let again = game.request(warehouse, P0).unwrap();
    assert_eq!(again.options, first.options);
    assert_eq!(again.prompt, first.prompt);
    assert_eq!(again.continuation, first.continuation);
    assert_eq!(again.presented, 2);
    assert!(game.whispers_for(P0).any(|w| w == "You have to choose 3 cards"));
    assert_eq!(game.drain_prompts().len(), 2);

    // Nothing moved and nothing resolved
    assert_eq!(game.hand(P0).len(), 5);
    assert_eq!(game.resolution_count(warehouse), 0);
}

/// A wrong answer shape is a validation failure, not an error.
#[test]
fn test_wrong_answer_kind_reprompts() {
    let (mut game, warehouse) = warehouse_game(EngineConfig::new(2));
    game.play_action(P0, warehouse).unwrap();

    let submission = game.submit_answer(warehouse, P0, Answer::choice("Yes")).unwrap();
    assert_eq!(submission, Submission::Reprompted);
    assert!(game.request(warehouse, P0).is_some());
}

/// Whispers on rejection can be switched off.
#[test]
fn test_rejection_whisper_is_configurable() {
    let mut config = EngineConfig::new(2);
    config.whisper_rejections = false;
    let (mut game, warehouse) = warehouse_game(config);
    game.play_action(P0, warehouse).unwrap();

    game.submit_answer(warehouse, P0, Answer::Cards(Vec::new())).unwrap();
    assert_eq!(game.whispers_for(P0).count(), 0);
    assert_eq!(game.request(warehouse, P0).unwrap().presented, 2);
}

/// A valid answer runs the continuation and finalizes the card.
#[test]
fn test_valid_answer_resolves() {
    let (mut game, warehouse) = warehouse_game(EngineConfig::new(2));
    game.play_action(P0, warehouse).unwrap();

    let picked: Vec<EntityId> = game.hand(P0)[..3].to_vec();
    let submission = game.submit_answer(warehouse, P0, Answer::Cards(picked.clone())).unwrap();
    assert_eq!(submission, Submission::Accepted);

    assert_eq!(game.step_status(warehouse), StepStatus::Resolved);
    assert_eq!(game.resolution_count(warehouse), 1);
    assert_eq!(game.hand(P0).len(), 2);
    for card in picked {
        assert!(game.discard_pile(P0).contains(&card));
    }
    assert_eq!(game.pending_count(), 0);
}

// =============================================================================
// Continuation rejection
// =============================================================================

/// A continuation that rejects gets the identical request re-presented.
#[test]
fn test_continuation_rejection_reprompts() {
    let mut game = GameBuilder::new(EngineConfig::new(2), registry())
        .with_hand(P0, [PICKY])
        .build()
        .unwrap();
    let picky = in_hand(&game, P0, PICKY);
    game.play_action(P0, picky).unwrap();

    let before = game.request(picky, P0).unwrap().options.clone();
    assert_eq!(before, DecisionOptions::yes_no());

    let submission = game.submit_answer(picky, P0, Answer::choice("No")).unwrap();
    assert_eq!(submission, Submission::Reprompted);
    assert_eq!(game.request(picky, P0).unwrap().options, before);
    assert_eq!(game.request(picky, P0).unwrap().presented, 2);
    assert!(game.whispers_for(P0).any(|w| w == "Only yes will do"));

    let submission = game.submit_answer(picky, P0, Answer::choice("Yes")).unwrap();
    assert_eq!(submission, Submission::Accepted);
    assert_eq!(game.resolution_count(picky), 1);
}

// =============================================================================
// Protocol errors
// =============================================================================

/// Answering twice is an error the second time.
#[test]
fn test_double_answer_is_an_error() {
    let mut game = GameBuilder::new(EngineConfig::new(2), registry())
        .with_hand(P0, [PICKY])
        .build()
        .unwrap();
    let picky = in_hand(&game, P0, PICKY);
    game.play_action(P0, picky).unwrap();

    game.submit_answer(picky, P0, Answer::choice("Yes")).unwrap();
    let err = game.submit_answer(picky, P0, Answer::choice("Yes")).unwrap_err();
    assert_eq!(err, EngineError::NoOutstandingRequest { card: picky, player: P0 });
    assert_eq!(game.resolution_count(picky), 1);
}

/// Answering for a player who was never asked is an error.
#[test]
fn test_answer_from_wrong_player() {
    let mut game = GameBuilder::new(EngineConfig::new(2), registry())
        .with_hand(P0, [PICKY])
        .build()
        .unwrap();
    let picky = in_hand(&game, P0, PICKY);
    game.play_action(P0, picky).unwrap();

    let err = game.submit_answer(picky, P1, Answer::choice("Yes")).unwrap_err();
    assert_eq!(err, EngineError::NoOutstandingRequest { card: picky, player: P1 });
    assert!(game.request(picky, P0).is_some());
}

/// A second request for the same (card, player) is refused.
#[test]
fn test_duplicate_request_is_an_error() {
    let mut game = GameBuilder::new(EngineConfig::new(2), registry())
        .with_hand(P0, [DOUBLE_ASK])
        .build()
        .unwrap();
    let card = in_hand(&game, P0, DOUBLE_ASK);

    let err = game.play_action(P0, card).unwrap_err();
    assert_eq!(err, EngineError::DuplicateRequest { card, player: P0 });
    assert_eq!(game.request(card, P0).unwrap().prompt, "First");
}

// =============================================================================
// Auto-satisfied requests
// =============================================================================

/// A request with nothing to choose is answered immediately.
#[test]
fn test_empty_selection_is_auto_satisfied() {
    let mut game = GameBuilder::new(EngineConfig::new(2), registry())
        .with_hand(P0, [SALVAGER])
        .build()
        .unwrap();
    let salvager = in_hand(&game, P0, SALVAGER);

    assert_eq!(game.play_action(P0, salvager).unwrap(), StepStatus::Resolved);
    assert!(game.drain_prompts().is_empty());
    assert_eq!(game.player(P0).unwrap().buys, 2);
    assert_eq!(game.resolution_count(salvager), 1);
}

/// With auto-satisfy off the empty request is presented like any other.
#[test]
fn test_auto_satisfy_can_be_disabled() {
    let mut game = GameBuilder::new(EngineConfig::new(2).without_auto_satisfy(), registry())
        .with_hand(P0, [SALVAGER])
        .build()
        .unwrap();
    let salvager = in_hand(&game, P0, SALVAGER);

    assert_eq!(game.play_action(P0, salvager).unwrap(), StepStatus::Waiting);
    let prompts = game.drain_prompts();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].player, P0);

    let submission = game.submit_answer(salvager, P0, Answer::Cards(Vec::new())).unwrap();
    assert_eq!(submission, Submission::Accepted);
    assert_eq!(game.resolution_count(salvager), 1);
}
