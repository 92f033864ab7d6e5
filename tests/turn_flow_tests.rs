//! Turn-flow integration tests.
//!
//! These tests drive games through `apply_action` only and check:
//! - Setup shape
//! - Both turn orderings (develop first, emissary first)
//! - Phase enforcement and turn ownership

use naishi_engine::cards::{Board, Card};
use naishi_engine::core::{Action, ActionError, ActionKind, GameState, PlayerId, PlayerMap, TurnPhase};
use naishi_engine::rules::create_initial_state;
use naishi_engine::zones::River;

const M: Card = Card::Mountain;
const P1: PlayerId = PlayerId::P1;
const P2: PlayerId = PlayerId::P2;

fn position(decks: [Vec<Card>; 5]) -> GameState {
    let p1 = Board::from_rows([M; 5], [Card::Naishi, Card::Fort, Card::Monk, M, M]);
    let p2 = Board::from_rows([M; 5], [Card::Ronin, Card::Torii, M, M, M]);
    GameState::from_position(
        PlayerMap::new(|p| if p == P1 { p1 } else { p2 }),
        River::from_decks(decks),
    )
}

fn deep() -> GameState {
    position(std::array::from_fn(|deck| vec![Card::ALL[deck]; 6]))
}

// =============================================================================
// Setup
// =============================================================================

#[test]
fn test_initial_state_seed_one() {
    let state = create_initial_state(1);

    assert_eq!(state.river().counts(), [6; 5]);
    for player in PlayerId::all() {
        let board = state.board(player);
        assert_eq!(board.line(), [M; 5]);

        let hand = board.hand();
        assert_eq!(hand.iter().filter(|&&c| c == M).count(), 3);
        assert_eq!(hand.iter().filter(|&&c| c != M).count(), 2);
    }
    assert_eq!(state.current_player(), P1);
    assert_eq!(state.phase(), TurnPhase::Start);
    assert!(!state.is_game_over());
}

#[test]
fn test_initial_state_is_reproducible() {
    let a = create_initial_state(1);
    let b = create_initial_state(1);
    assert_eq!(a.snapshot().unwrap(), b.snapshot().unwrap());
}

// =============================================================================
// Develop first
// =============================================================================

#[test]
fn test_develop_then_optional_emissary() {
    let mut state = deep();

    let outcome = state.apply_action(P1, Action::Develop(5)).unwrap();
    assert!(!outcome.turn_ended);
    assert_eq!(state.phase(), TurnPhase::OptionalEmissary);
    assert_eq!(state.board(P1).get(5), Some(Card::Naishi));

    let outcome = state.apply_action(P1, Action::SwapHand(2, 0)).unwrap();
    assert!(outcome.turn_ended);
    assert_eq!(state.current_player(), P2);
    assert_eq!(state.board(P1).get(5), Some(Card::Monk));
    assert_eq!(state.board(P1).get(7), Some(Card::Naishi));
}

#[test]
fn test_develop_then_pass() {
    let mut state = deep();
    state.apply_action(P1, Action::Develop(0)).unwrap();
    state.apply_action(P1, Action::Pass).unwrap();

    assert_eq!(state.current_player(), P2);
    assert_eq!(state.emissaries().available(P1), 2);
}

#[test]
fn test_no_second_develop() {
    let mut state = deep();
    state.apply_action(P1, Action::Develop(0)).unwrap();

    assert_eq!(
        state.apply_action(P1, Action::Develop(1)),
        Err(ActionError::WrongTurnPhase {
            phase: TurnPhase::OptionalEmissary,
            action: ActionKind::Develop
        })
    );
    assert_eq!(
        state.apply_action(P1, Action::Recall),
        Err(ActionError::WrongTurnPhase {
            phase: TurnPhase::OptionalEmissary,
            action: ActionKind::Recall
        })
    );
}

#[test]
fn test_develop_without_emissaries_ends_turn() {
    let mut state = deep();
    // Spend both of Player 1's emissaries over two turns
    for _ in 0..2 {
        state.apply_action(P1, Action::SwapLine(0, 1)).unwrap();
        state.apply_action(P1, Action::Develop(1)).unwrap();
        state.apply_action(P2, Action::Develop(2)).unwrap();
        state.apply_action(P2, Action::Pass).unwrap();
    }
    assert_eq!(state.emissaries().available(P1), 0);

    let outcome = state.apply_action(P1, Action::Develop(3)).unwrap();
    assert!(outcome.turn_ended);
    assert_eq!(state.current_player(), P2);
}

// =============================================================================
// Emissary first
// =============================================================================

#[test]
fn test_emissary_then_must_develop() {
    let mut state = deep();

    let outcome = state.apply_action(P1, Action::DiscardRiver(0, 1)).unwrap();
    assert!(!outcome.turn_ended);
    assert_eq!(outcome.phase, TurnPhase::MustDevelop);

    assert_eq!(
        state.apply_action(P1, Action::SwapHandLine(0)),
        Err(ActionError::WrongTurnPhase {
            phase: TurnPhase::MustDevelop,
            action: ActionKind::Swap
        })
    );
    assert_eq!(
        state.apply_action(P1, Action::Pass),
        Err(ActionError::WrongTurnPhase {
            phase: TurnPhase::MustDevelop,
            action: ActionKind::Pass
        })
    );

    let outcome = state.apply_action(P1, Action::Develop(9)).unwrap();
    assert!(outcome.turn_ended);
    assert_eq!(state.emissaries().available(P1), 1);
}

#[test]
fn test_emissary_leaving_no_cards_ends_turn() {
    let mut state = position([vec![Card::Knight], vec![Card::Banner], vec![], vec![], vec![]]);

    let outcome = state.apply_action(P1, Action::DiscardRiver(0, 1)).unwrap();

    assert!(outcome.turn_ended);
    assert!(!state.river().any_cards());
    // Player 1 moved with two or more decks empty
    assert_eq!(state.final_turn_pending(), Some(P2));
}

// =============================================================================
// Turn ownership and payloads
// =============================================================================

#[test]
fn test_wrong_player() {
    let mut state = deep();
    assert_eq!(
        state.apply_action(P2, Action::Develop(0)),
        Err(ActionError::NotCurrentPlayersTurn {
            expected: P1,
            actual: P2
        })
    );
}

#[test]
fn test_pairs_in_either_order() {
    let mut a = deep();
    let mut b = deep();
    a.apply_action(P1, Action::SwapLine(3, 1)).unwrap();
    b.apply_action(P1, Action::SwapLine(1, 3)).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.history()[0].action, Action::SwapLine(1, 3));
}

#[test]
fn test_develop_from_empty_deck() {
    let mut state = position([vec![Card::Knight], vec![], vec![Card::Fort], vec![Card::Fort], vec![Card::Fort]]);
    assert_eq!(state.apply_action(P1, Action::Develop(6)), Err(ActionError::EmptyDeck(1)));
    assert!(state.apply_action(P1, Action::Develop(5)).is_ok());
}

#[test]
fn test_history_and_turns() {
    let mut state = deep();
    state.apply_action(P1, Action::Develop(0)).unwrap();
    state.apply_action(P1, Action::Pass).unwrap();
    state.apply_action(P2, Action::SwapRiver(0, 4)).unwrap();
    state.apply_action(P2, Action::Develop(4)).unwrap();

    let history = state.history();
    assert_eq!(history.len(), 4);
    assert_eq!((history[1].turn, history[1].sequence), (1, 1));
    assert_eq!((history[2].player, history[2].turn), (P2, 2));
    assert_eq!(state.turn_number(), 3);
    // Deck 0's Naishi went to deck 4's top and was drawn
    assert_eq!(state.board(P2).get(4), Some(Card::Naishi));
}
