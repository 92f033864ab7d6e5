//! Precondition checks.
//!
//! `check_action` is the single source of legality: application runs it
//! before touching anything, and the legal-action query is defined as the set
//! of actions it accepts.

use crate::cards::{deck_for, BOARD_SIZE, ROW_SIZE};
use crate::core::{Action, ActionError, ActionKind, GameState, PlayerId, TurnPhase};
use crate::zones::NUM_DECKS;

/// Whether an action kind may be taken in a phase.
#[must_use]
pub fn phase_allows(phase: TurnPhase, kind: ActionKind) -> bool {
    match phase {
        TurnPhase::Start => kind != ActionKind::Pass,
        TurnPhase::MustDevelop => kind == ActionKind::Develop,
        TurnPhase::OptionalEmissary => {
            matches!(kind, ActionKind::Swap | ActionKind::Discard | ActionKind::Pass)
        }
    }
}

fn check_position(position: usize, bound: usize) -> Result<(), ActionError> {
    if position < bound {
        Ok(())
    } else {
        Err(ActionError::InvalidPosition(position))
    }
}

fn check_row_pair(a: usize, b: usize) -> Result<(), ActionError> {
    check_position(a, ROW_SIZE)?;
    check_position(b, ROW_SIZE)?;
    if a == b {
        return Err(ActionError::DuplicateTarget);
    }
    Ok(())
}

fn check_deck_pair(a: usize, b: usize) -> Result<(), ActionError> {
    for deck in [a, b] {
        if deck >= NUM_DECKS {
            return Err(ActionError::InvalidDeck(deck));
        }
    }
    if a == b {
        return Err(ActionError::DuplicateTarget);
    }
    Ok(())
}

impl GameState {
    /// Check every precondition of `action` for `player` without changing
    /// anything.
    ///
    /// Checks run in a fixed order: game over, turn owner, turn phase,
    /// payload, then resources. The first failure is reported.
    pub fn check_action(&self, player: PlayerId, action: Action) -> Result<(), ActionError> {
        if self.game_over {
            return Err(ActionError::GameAlreadyEnded);
        }
        if player != self.current_player {
            return Err(ActionError::NotCurrentPlayersTurn {
                expected: self.current_player,
                actual: player,
            });
        }

        let kind = action.kind();
        if !phase_allows(self.phase, kind) {
            return Err(ActionError::WrongTurnPhase {
                phase: self.phase,
                action: kind,
            });
        }

        match action {
            Action::Develop(position) => {
                check_position(position, BOARD_SIZE)?;
                let deck = deck_for(position);
                if self.river.is_empty(deck) {
                    return Err(ActionError::EmptyDeck(deck));
                }
            }
            Action::SwapHand(a, b) | Action::SwapLine(a, b) => check_row_pair(a, b)?,
            Action::SwapHandLine(column) => check_position(column, ROW_SIZE)?,
            Action::SwapRiver(a, b) => {
                check_deck_pair(a, b)?;
                for deck in [a, b] {
                    if self.river.is_empty(deck) {
                        return Err(ActionError::EmptyDeck(deck));
                    }
                }
            }
            Action::DiscardRiver(a, b) => check_deck_pair(a, b)?,
            Action::Recall => self.emissaries.check_recall(player)?,
            Action::Decree(position) => {
                check_position(position, BOARD_SIZE)?;
                self.emissaries.check_decree(player)?;
            }
            Action::DeclareEnd => {
                if !self.ending_available() || self.final_turn.is_some() {
                    return Err(ActionError::DeclareEndNotEligible);
                }
            }
            Action::Pass => {}
        }

        if let Some(spot) = action.spot_kind() {
            self.emissaries.check_acquire(spot, player)?;
        }

        Ok(())
    }

    /// Whether the current player may take `action` now.
    #[must_use]
    pub fn is_legal(&self, action: Action) -> bool {
        self.check_action(self.current_player, action).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Board, Card};
    use crate::core::PlayerMap;
    use crate::zones::River;

    fn state() -> GameState {
        let river = River::from_decks([
            vec![Card::Naishi],
            vec![Card::Fort],
            vec![],
            vec![Card::Monk],
            vec![Card::Ronin],
        ]);
        GameState::from_position(PlayerMap::with_value(Board::mountains()), river)
    }

    #[test]
    fn test_phase_table() {
        assert!(phase_allows(TurnPhase::Start, ActionKind::Decree));
        assert!(!phase_allows(TurnPhase::Start, ActionKind::Pass));
        assert!(phase_allows(TurnPhase::MustDevelop, ActionKind::Develop));
        assert!(!phase_allows(TurnPhase::MustDevelop, ActionKind::Swap));
        assert!(phase_allows(TurnPhase::OptionalEmissary, ActionKind::Pass));
        assert!(!phase_allows(TurnPhase::OptionalEmissary, ActionKind::Develop));
        assert!(!phase_allows(TurnPhase::OptionalEmissary, ActionKind::Recall));
    }

    #[test]
    fn test_payload_errors() {
        let state = state();
        let p1 = PlayerId::P1;

        assert_eq!(state.check_action(p1, Action::Develop(10)), Err(ActionError::InvalidPosition(10)));
        assert_eq!(state.check_action(p1, Action::Develop(7)), Err(ActionError::EmptyDeck(2)));
        assert_eq!(state.check_action(p1, Action::SwapHand(1, 1)), Err(ActionError::DuplicateTarget));
        assert_eq!(state.check_action(p1, Action::SwapLine(0, 5)), Err(ActionError::InvalidPosition(5)));
        assert_eq!(state.check_action(p1, Action::SwapRiver(0, 7)), Err(ActionError::InvalidDeck(7)));
        assert_eq!(state.check_action(p1, Action::SwapRiver(2, 0)), Err(ActionError::EmptyDeck(2)));
        assert_eq!(state.check_action(p1, Action::DiscardRiver(3, 3)), Err(ActionError::DuplicateTarget));
        assert_eq!(state.check_action(p1, Action::Decree(11)), Err(ActionError::InvalidPosition(11)));
    }

    #[test]
    fn test_discard_with_an_empty_deck_is_legal() {
        assert!(state().is_legal(Action::DiscardRiver(2, 0)));
    }

    #[test]
    fn test_turn_owner_checked_before_phase() {
        let state = state();
        assert_eq!(
            state.check_action(PlayerId::P2, Action::Pass),
            Err(ActionError::NotCurrentPlayersTurn {
                expected: PlayerId::P1,
                actual: PlayerId::P2
            })
        );
        assert_eq!(
            state.check_action(PlayerId::P1, Action::Pass),
            Err(ActionError::WrongTurnPhase {
                phase: TurnPhase::Start,
                action: ActionKind::Pass
            })
        );
    }

    #[test]
    fn test_declare_end_needs_empty_deck() {
        let mut state = state();
        assert!(state.is_legal(Action::DeclareEnd));

        state.final_turn = Some(PlayerId::P1);
        assert_eq!(
            state.check_action(PlayerId::P1, Action::DeclareEnd),
            Err(ActionError::DeclareEndNotEligible)
        );

        let full = GameState::from_position(
            PlayerMap::with_value(Board::mountains()),
            River::from_decks(std::array::from_fn(|_| vec![Card::Torii])),
        );
        assert!(!full.is_legal(Action::DeclareEnd));
    }

    #[test]
    fn test_game_over_rejects_everything() {
        let mut state = state();
        state.game_over = true;
        assert_eq!(
            state.check_action(PlayerId::P1, Action::Develop(0)),
            Err(ActionError::GameAlreadyEnded)
        );
    }
}
