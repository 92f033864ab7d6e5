//! Ninja resolution.
//!
//! Before scoring, each Ninja copies one character card on its owner's board
//! (never a building, a Mountain or another Ninja) and from then on scores as
//! that kind at its own position. A Ninja with nothing to copy stays a Ninja
//! and earns nothing.

use smallvec::SmallVec;

use super::result::ScoreSheet;
use super::rules::score_resolved;
use crate::cards::{Board, Card, BOARD_SIZE};
use crate::core::{PlayerId, PlayerMap};

/// Why a Ninja assignment was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("{player} has no Ninja at position {position}")]
    NotANinja { player: PlayerId, position: usize },

    #[error("{player}'s card at position {target} is not a character a Ninja can copy")]
    InvalidTarget { player: PlayerId, target: usize },
}

/// `(ninja position, copied position)` pairs for one board.
pub type Assignments = SmallVec<[(usize, usize); 2]>;

/// Explicit Ninja choices for both players.
///
/// Ninjas without an entry are resolved to their owner's best option.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NinjaChoices {
    choices: PlayerMap<Assignments>,
}

impl NinjaChoices {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Have `player`'s Ninja at `ninja` copy the card at `target`.
    #[must_use]
    pub fn assign(mut self, player: PlayerId, ninja: usize, target: usize) -> Self {
        let entries = &mut self.choices[player];
        entries.retain(|&mut (pos, _)| pos != ninja);
        entries.push((ninja, target));
        self
    }

    #[must_use]
    pub fn for_player(&self, player: PlayerId) -> &[(usize, usize)] {
        &self.choices[player]
    }
}

/// Positions a Ninja on `board` may copy.
#[must_use]
pub fn copy_targets(board: &Board) -> SmallVec<[usize; BOARD_SIZE]> {
    board
        .cards()
        .iter()
        .enumerate()
        .filter(|(_, card)| card.is_character())
        .map(|(position, _)| position)
        .collect()
}

/// Check `player`'s explicit assignments against their board.
pub fn validate(
    player: PlayerId,
    board: &Board,
    assignments: &[(usize, usize)],
) -> Result<(), ScoringError> {
    for &(position, target) in assignments {
        if board.get(position) != Some(Card::Ninja) {
            return Err(ScoringError::NotANinja { player, position });
        }
        if !board.get(target).is_some_and(Card::is_character) {
            return Err(ScoringError::InvalidTarget { player, target });
        }
    }
    Ok(())
}

/// Resolve every Ninja on `board` and score the result.
///
/// Fixed assignments are honoured; every other Ninja tries each copy target
/// and the highest total wins (earliest target on ties). Assignments must
/// already be validated.
#[must_use]
pub fn resolve_best(board: &Board, fixed: &[(usize, usize)]) -> (Board, ScoreSheet) {
    let targets = copy_targets(board);
    let options: SmallVec<[SmallVec<[usize; BOARD_SIZE]>; 2]> = board
        .positions_of(Card::Ninja)
        .map(|ninja| match fixed.iter().find(|&&(pos, _)| pos == ninja) {
            Some(&(_, target)) => SmallVec::from_slice(&[target]),
            None => targets.clone(),
        })
        .collect();
    let ninjas: SmallVec<[usize; 2]> = board.positions_of(Card::Ninja).collect();

    let mut best: Option<(Board, ScoreSheet)> = None;
    let mut consider = |resolved: Board| {
        let sheet = score_resolved(board, &resolved);
        if best.as_ref().map_or(true, |(_, b)| sheet.total() > b.total()) {
            best = Some((resolved, sheet));
        }
    };
    enumerate(board, &ninjas, &options, *board, &mut consider);

    best.unwrap_or_else(|| (*board, score_resolved(board, board)))
}

/// Walk every combination of copy targets, one Ninja at a time.
fn enumerate(
    original: &Board,
    ninjas: &[usize],
    options: &[SmallVec<[usize; BOARD_SIZE]>],
    resolved: Board,
    visit: &mut impl FnMut(Board),
) {
    let (Some(&ninja), Some(targets)) = (ninjas.first(), options.first()) else {
        visit(resolved);
        return;
    };
    if targets.is_empty() {
        // Nothing to copy: this Ninja stays as it is.
        enumerate(original, &ninjas[1..], &options[1..], resolved, visit);
        return;
    }
    for &target in targets {
        let mut next = resolved;
        if let Some(card) = original.get(target) {
            next.set(ninja, card);
        }
        enumerate(original, &ninjas[1..], &options[1..], next, visit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const M: Card = Card::Mountain;
    const P1: PlayerId = PlayerId::P1;

    #[test]
    fn test_ninja_without_characters_scores_nothing() {
        let board = Board::from_rows([Card::Ninja, Card::Fort, M, M, M], [M; 5]);
        let (resolved, sheet) = resolve_best(&board, &[]);

        assert_eq!(resolved, board);
        assert_eq!(sheet.get(Card::Ninja), 0);
    }

    #[test]
    fn test_best_copy_is_chosen() {
        // Copying the Naishi at 7 puts a second Naishi at 2 worth 12
        let board = Board::from_rows(
            [M, Card::Monk, Card::Ninja, M, M],
            [M, M, Card::Naishi, M, M],
        );
        let (resolved, sheet) = resolve_best(&board, &[]);

        assert_eq!(resolved.get(2), Some(Card::Naishi));
        assert_eq!(sheet.get(Card::Ninja), 12);
        assert_eq!(sheet.get(Card::Naishi), 8);
    }

    #[test]
    fn test_fixed_choice_is_honoured() {
        let board = Board::from_rows(
            [M, Card::Monk, Card::Ninja, M, M],
            [M, M, Card::Naishi, M, M],
        );
        let (resolved, sheet) = resolve_best(&board, &[(2, 1)]);

        assert_eq!(resolved.get(2), Some(Card::Monk));
        // Monk in the Line, no Torii
        assert_eq!(sheet.get(Card::Ninja), 0);
    }

    #[test]
    fn test_two_ninjas() {
        let board = Board::from_rows(
            [M, Card::Ninja, Card::Naishi, Card::Ninja, M],
            [Card::Councellor, M, M, M, M],
        );
        let (resolved, sheet) = resolve_best(&board, &[]);

        // Both become Councellors next to the Naishi: 4 + 4 each
        assert_eq!(resolved.get(1), Some(Card::Councellor));
        assert_eq!(resolved.get(3), Some(Card::Councellor));
        assert_eq!(sheet.get(Card::Ninja), 16);
    }

    #[test]
    fn test_validation() {
        let board = Board::from_rows([Card::Ninja, Card::Fort, Card::Ronin, M, M], [M; 5]);

        assert!(validate(P1, &board, &[(0, 2)]).is_ok());
        assert_eq!(
            validate(P1, &board, &[(1, 2)]),
            Err(ScoringError::NotANinja { player: P1, position: 1 })
        );
        assert_eq!(
            validate(P1, &board, &[(0, 1)]),
            Err(ScoringError::InvalidTarget { player: P1, target: 1 })
        );
        assert_eq!(
            validate(P1, &board, &[(0, 0)]),
            Err(ScoringError::InvalidTarget { player: P1, target: 0 })
        );
    }

    #[test]
    fn test_assign_replaces_previous_choice() {
        let choices = NinjaChoices::new().assign(P1, 3, 4).assign(P1, 3, 6);
        assert_eq!(choices.for_player(P1), &[(3, 6)]);
        assert!(choices.for_player(PlayerId::P2).is_empty());
    }
}
