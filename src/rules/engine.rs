//! Action application.
//!
//! `apply_action` checks every precondition first and only then mutates, so
//! an `Err` leaves the state exactly as it was. On success the board, River,
//! emissary and turn changes are all applied before it returns.

use log::{debug, trace};

use super::end::TurnEnd;
use crate::cards::{deck_for, HAND_START};
use crate::core::{Action, ActionError, ActionOutcome, GameState, PlayerId, TurnPhase};

/// What the turn does after an action's effect.
enum Next {
    Phase(TurnPhase),
    EndTurn(TurnEnd),
}

impl GameState {
    /// Apply `action` for `player`.
    ///
    /// Unordered pairs are accepted in either order and recorded in canonical
    /// form.
    pub fn apply_action(
        &mut self,
        player: PlayerId,
        action: Action,
    ) -> Result<ActionOutcome, ActionError> {
        let action = action.canonical();
        if let Err(err) = self.check_action(player, action) {
            trace!("{player} rejected {action}: {err}");
            return Err(err);
        }

        self.record(player, action);
        let next = self.execute(player, action);

        let turn_ended = match next {
            Next::Phase(phase) => {
                self.phase = phase;
                false
            }
            Next::EndTurn(how) => {
                self.close_turn(how);
                true
            }
        };

        debug!(
            "{player} applied {action} (turn {}, phase {}, over: {})",
            self.turn_number, self.phase, self.game_over
        );

        Ok(ActionOutcome {
            player,
            action,
            turn_ended,
            game_over: self.game_over,
            next_player: self.current_player,
            phase: self.phase,
        })
    }

    /// Apply `action` for whoever is to move.
    pub fn apply(&mut self, action: Action) -> Result<ActionOutcome, ActionError> {
        self.apply_action(self.current_player, action)
    }

    /// Perform a validated action's effect and pick the follow-up.
    fn execute(&mut self, player: PlayerId, action: Action) -> Next {
        match action {
            Action::Develop(position) => {
                self.develop(player, position);
                self.after_develop(player)
            }
            Action::SwapHand(a, b) => {
                self.boards[player].swap(HAND_START + a, HAND_START + b);
                self.after_emissary(player, action)
            }
            Action::SwapLine(a, b) => {
                self.boards[player].swap(a, b);
                self.after_emissary(player, action)
            }
            Action::SwapHandLine(column) => {
                self.boards[player].swap(column, HAND_START + column);
                self.after_emissary(player, action)
            }
            Action::SwapRiver(a, b) => {
                let swapped = self.river.swap_tops(a, b);
                debug_assert!(swapped);
                self.after_emissary(player, action)
            }
            Action::DiscardRiver(a, b) => {
                let removed = self.river.discard_tops(a, b);
                trace!("{player} discarded {removed:?} from the river");
                self.after_emissary(player, action)
            }
            Action::Recall => {
                // Checked by `check_action`; a failure here changes nothing.
                if let Ok(freed) = self.emissaries.recall(player) {
                    trace!("{player} recalled, {freed} spots freed");
                }
                Next::EndTurn(TurnEnd::Normal)
            }
            Action::Decree(position) => {
                self.decree(position);
                let locked = self.emissaries.lock_one_permanently(player);
                debug_assert!(locked.is_ok());
                Next::EndTurn(TurnEnd::Normal)
            }
            Action::DeclareEnd => Next::EndTurn(TurnEnd::Declared),
            Action::Pass => Next::EndTurn(TurnEnd::Normal),
        }
    }

    /// Replace the card at `position` with the top of its River deck. The old
    /// card leaves play.
    fn develop(&mut self, player: PlayerId, position: usize) {
        let Some(drawn) = self.river.pop_top(deck_for(position)) else {
            return;
        };
        if let Some(old) = self.boards[player].set(position, drawn) {
            self.river.push_discard(old);
        }
    }

    /// Exchange the cards at `position` on both boards.
    fn decree(&mut self, position: usize) {
        let (p1, p2) = self.boards.both_mut();
        if let (Some(a), Some(b)) = (p1.slot_mut(position), p2.slot_mut(position)) {
            std::mem::swap(a, b);
        }
    }

    fn after_develop(&self, player: PlayerId) -> Next {
        match self.phase {
            TurnPhase::Start if self.emissaries.can_send_any(player) => {
                Next::Phase(TurnPhase::OptionalEmissary)
            }
            _ => Next::EndTurn(TurnEnd::Normal),
        }
    }

    fn after_emissary(&mut self, player: PlayerId, action: Action) -> Next {
        if let Some(kind) = action.spot_kind() {
            let spot = self.emissaries.try_acquire(kind, player);
            debug_assert!(spot.is_ok());
        }
        match self.phase {
            TurnPhase::Start if self.river.any_cards() => Next::Phase(TurnPhase::MustDevelop),
            _ => Next::EndTurn(TurnEnd::Normal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Board, Card};
    use crate::core::PlayerMap;
    use crate::emissary::SpotKind;
    use crate::zones::River;

    const P1: PlayerId = PlayerId::P1;
    const P2: PlayerId = PlayerId::P2;

    fn state() -> GameState {
        let p1 = Board::from_rows(
            [Card::Mountain; 5],
            [Card::Naishi, Card::Fort, Card::Mountain, Card::Mountain, Card::Mountain],
        );
        let p2 = Board::from_rows(
            [Card::Mountain; 5],
            [Card::Monk, Card::Mountain, Card::Ronin, Card::Mountain, Card::Mountain],
        );
        let river = River::from_decks([
            vec![Card::Torii, Card::Banner],
            vec![Card::Knight],
            vec![Card::Sentinel, Card::Councellor],
            vec![Card::RiceFields],
            vec![Card::Ninja],
        ]);
        GameState::from_position(PlayerMap::new(|p| if p == P1 { p1 } else { p2 }), river)
    }

    #[test]
    fn test_develop_draws_from_matching_deck() {
        let mut state = state();
        let outcome = state.apply_action(P1, Action::Develop(7)).unwrap();

        assert_eq!(state.board(P1).get(7), Some(Card::Sentinel));
        assert_eq!(state.river().top(2), Some(Card::Councellor));
        assert_eq!(state.river().removed().len(), 1);
        assert!(!outcome.turn_ended);
        assert_eq!(outcome.phase, TurnPhase::OptionalEmissary);
    }

    #[test]
    fn test_swap_hand_uses_row_indices() {
        let mut state = state();
        state.apply_action(P1, Action::SwapHand(1, 0)).unwrap();

        assert_eq!(state.board(P1).get(5), Some(Card::Fort));
        assert_eq!(state.board(P1).get(6), Some(Card::Naishi));
        assert_eq!(state.phase(), TurnPhase::MustDevelop);
        assert_eq!(state.history().back().map(|r| r.action), Some(Action::SwapHand(0, 1)));
    }

    #[test]
    fn test_swap_hand_line_column() {
        let mut state = state();
        state.apply_action(P1, Action::SwapHandLine(1)).unwrap();
        assert_eq!(state.board(P1).get(1), Some(Card::Fort));
        assert_eq!(state.board(P1).get(6), Some(Card::Mountain));
    }

    #[test]
    fn test_swap_river_tops() {
        let mut state = state();
        state.apply_action(P1, Action::SwapRiver(4, 0)).unwrap();
        assert_eq!(state.river().top(0), Some(Card::Ninja));
        assert_eq!(state.river().top(4), Some(Card::Torii));
        assert_eq!(state.emissaries().held_by(SpotKind::Swap, P1), 1);
    }

    #[test]
    fn test_discard_river_then_develop_ends_turn() {
        let mut state = state();
        state.apply_action(P1, Action::DiscardRiver(1, 3)).unwrap();
        assert_eq!(state.river().counts(), [2, 0, 2, 0, 1]);

        let outcome = state.apply_action(P1, Action::Develop(0)).unwrap();
        assert!(outcome.turn_ended);
        // Two empty decks after Player 1's turn
        assert_eq!(outcome.next_player, P2);
        assert_eq!(state.final_turn_pending(), Some(P2));
    }

    #[test]
    fn test_decree_swaps_between_boards() {
        let mut state = state();
        let outcome = state.apply_action(P1, Action::Decree(5)).unwrap();

        assert!(outcome.turn_ended);
        assert_eq!(state.board(P1).get(5), Some(Card::Monk));
        assert_eq!(state.board(P2).get(5), Some(Card::Naishi));
        assert_eq!(state.emissaries().max_emissaries(P1), 1);
    }

    #[test]
    fn test_pass_ends_turn() {
        let mut state = state();
        state.apply_action(P1, Action::Develop(0)).unwrap();
        let outcome = state.apply_action(P1, Action::Pass).unwrap();

        assert!(outcome.turn_ended);
        assert_eq!(state.current_player(), P2);
        assert_eq!(state.phase(), TurnPhase::Start);
    }

    #[test]
    fn test_rejection_leaves_state_untouched() {
        let mut state = state();
        let before = state.clone();

        assert!(state.apply_action(P2, Action::Develop(0)).is_err());
        assert!(state.apply_action(P1, Action::Recall).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_apply_uses_current_player() {
        let mut state = state();
        let outcome = state.apply(Action::Develop(3)).unwrap();
        assert_eq!(outcome.player, P1);
    }
}
