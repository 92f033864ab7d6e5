//! End sequencer.
//!
//! Runs once at the close of every turn and decides whether the game goes on,
//! whether someone is owed a final turn, or whether it is over. Two triggers
//! lead to the same terminal transition:
//!
//! - Declare-End: the opponent of the declaring player gets one final turn.
//! - Two or more empty River decks: after Player 1's turn Player 2 gets one
//!   final turn; after Player 2's turn the game ends at once.
//!
//! A final turn is granted at most once because Declare-End is rejected while
//! one is pending, and the owed player's turn always ends the game.

use log::debug;

use crate::core::{GameState, PlayerId};

/// Empty decks that end the game.
pub const AUTO_END_EMPTY_DECKS: usize = 2;

/// How a turn closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TurnEnd {
    Normal,
    Declared,
}

/// What the sequencer decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EndTransition {
    /// Play passes to the opponent.
    Continue,
    /// Play passes to the opponent, who is owed the last turn.
    FinalTurn(PlayerId),
    GameOver,
}

impl GameState {
    /// Close the current player's turn.
    pub(crate) fn close_turn(&mut self, how: TurnEnd) -> EndTransition {
        let player = self.current_player;
        let transition = self.end_transition(player, how);

        match transition {
            EndTransition::GameOver => {
                self.game_over = true;
                self.final_turn = None;
                debug!(
                    "game over after {} turns ({} empty decks)",
                    self.turn_number,
                    self.river.empty_decks()
                );
            }
            EndTransition::FinalTurn(owed) => {
                self.final_turn = Some(owed);
                debug!("{owed} is owed a final turn");
                self.advance_turn();
            }
            EndTransition::Continue => self.advance_turn(),
        }
        transition
    }

    fn end_transition(&self, player: PlayerId, how: TurnEnd) -> EndTransition {
        if self.final_turn == Some(player) {
            return EndTransition::GameOver;
        }
        if how == TurnEnd::Declared {
            return EndTransition::FinalTurn(player.opponent());
        }
        if self.river.empty_decks() >= AUTO_END_EMPTY_DECKS {
            return if player == PlayerId::P1 {
                EndTransition::FinalTurn(PlayerId::P2)
            } else {
                EndTransition::GameOver
            };
        }
        EndTransition::Continue
    }
}
