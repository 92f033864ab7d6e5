//! Legal-action query.
//!
//! Defined as the canonical actions that pass [`GameState::check_action`] for
//! the player to move, so the query and application can never disagree.

use smallvec::SmallVec;

use crate::core::{Action, GameState};

/// Buffer for a legal-action list; most positions have well under 64.
pub type ActionList = SmallVec<[Action; 64]>;

impl GameState {
    /// Every legal action for the player to move, in action-space order.
    ///
    /// Empty once the game is over.
    #[must_use]
    pub fn legal_actions(&self) -> ActionList {
        if self.game_over {
            return ActionList::new();
        }
        Action::all().filter(|&action| self.is_legal(action)).collect()
    }

    /// Indicator over the flat action space: `mask[i]` is true exactly when
    /// `Action::from_index(i)` is legal.
    #[must_use]
    pub fn action_mask(&self) -> Vec<bool> {
        let mut mask = vec![false; Action::SPACE_SIZE];
        for action in self.legal_actions() {
            if let Some(index) = action.index() {
                mask[index] = true;
            }
        }
        mask
    }
}
