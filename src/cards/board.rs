//! Board geometry: one player's ten slots.
//!
//! ```text
//!   Line:  0  1  2  3  4
//!   Hand:  5  6  7  8  9
//! ```
//!
//! Slots 0-4 are public, 5-9 are seen only by the owner. Adjacency is
//! left/right within a row plus the vertical pair `(i, i + 5)`; there are no
//! diagonals. Replacement draws for slot `p` come from river deck `p % 5`.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;

/// Slots per row.
pub const ROW_SIZE: usize = 5;

/// Slots per player (Line + Hand).
pub const BOARD_SIZE: usize = 2 * ROW_SIZE;

/// First Hand slot.
pub const HAND_START: usize = ROW_SIZE;

/// Neighbouring slots of a position (at most three).
pub type Neighbors = SmallVec<[usize; 3]>;

/// Which row a slot sits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Row {
    Line,
    Hand,
}

/// One player's Line and Hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    slots: [Card; BOARD_SIZE],
}

impl Board {
    /// Build a board from ten cards, Line first.
    #[must_use]
    pub const fn new(slots: [Card; BOARD_SIZE]) -> Self {
        Self { slots }
    }

    /// Build a board from a Line and a Hand.
    #[must_use]
    pub fn from_rows(line: [Card; ROW_SIZE], hand: [Card; ROW_SIZE]) -> Self {
        let mut slots = [Card::Mountain; BOARD_SIZE];
        slots[..ROW_SIZE].copy_from_slice(&line);
        slots[HAND_START..].copy_from_slice(&hand);
        Self { slots }
    }

    /// A board of ten Mountains.
    #[must_use]
    pub const fn mountains() -> Self {
        Self::new([Card::Mountain; BOARD_SIZE])
    }

    /// Card at `position`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Card> {
        self.slots.get(position).copied()
    }

    /// Replace the card at `position`, returning the previous card.
    ///
    /// Returns `None` (and changes nothing) when out of range.
    pub fn set(&mut self, position: usize, card: Card) -> Option<Card> {
        self.slots
            .get_mut(position)
            .map(|slot| std::mem::replace(slot, card))
    }

    /// Exchange two slots. Out-of-range positions are ignored.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a < BOARD_SIZE && b < BOARD_SIZE {
            self.slots.swap(a, b);
        }
    }

    /// Mutable access to a slot, used when exchanging cards across boards.
    pub(crate) fn slot_mut(&mut self, position: usize) -> Option<&mut Card> {
        self.slots.get_mut(position)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card; BOARD_SIZE] {
        &self.slots
    }

    #[must_use]
    pub fn line(&self) -> [Card; ROW_SIZE] {
        let mut line = [Card::Mountain; ROW_SIZE];
        line.copy_from_slice(&self.slots[..ROW_SIZE]);
        line
    }

    #[must_use]
    pub fn hand(&self) -> [Card; ROW_SIZE] {
        let mut hand = [Card::Mountain; ROW_SIZE];
        hand.copy_from_slice(&self.slots[HAND_START..]);
        hand
    }

    /// Number of copies of `card` on the board.
    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        self.slots.iter().filter(|&&c| c == card).count()
    }

    /// Number of distinct kinds present, ignoring the kinds in `excluded`.
    #[must_use]
    pub fn unique_kinds(&self, excluded: &[Card]) -> usize {
        self.slots
            .iter()
            .filter(|card| !excluded.contains(*card))
            .collect::<FxHashSet<_>>()
            .len()
    }

    /// Positions holding `card`.
    pub fn positions_of(&self, card: Card) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(move |(_, &c)| c == card)
            .map(|(i, _)| i)
    }
}

/// Row of a valid position.
#[must_use]
pub const fn row_of(position: usize) -> Row {
    if position < HAND_START {
        Row::Line
    } else {
        Row::Hand
    }
}

/// Whether `position` is in the Hand row.
#[must_use]
pub const fn in_hand(position: usize) -> bool {
    position >= HAND_START && position < BOARD_SIZE
}

/// River deck that refills `position`.
#[must_use]
pub const fn deck_for(position: usize) -> usize {
    position % ROW_SIZE
}

/// Orthogonal neighbours of `position` (0-3 entries; empty when out of range).
#[must_use]
pub fn neighbors(position: usize) -> Neighbors {
    let mut out = Neighbors::new();
    if position >= BOARD_SIZE {
        return out;
    }

    let column = position % ROW_SIZE;
    if column > 0 {
        out.push(position - 1);
    }
    if column < ROW_SIZE - 1 {
        out.push(position + 1);
    }
    match row_of(position) {
        Row::Line => out.push(position + ROW_SIZE),
        Row::Hand => out.push(position - ROW_SIZE),
    }
    out
}

/// The Line slot directly above a Hand slot.
#[must_use]
pub const fn above(position: usize) -> Option<usize> {
    if in_hand(position) {
        Some(position - ROW_SIZE)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_corners() {
        assert_eq!(neighbors(0).as_slice(), &[1, 5]);
        assert_eq!(neighbors(4).as_slice(), &[3, 9]);
        assert_eq!(neighbors(5).as_slice(), &[6, 0]);
        assert_eq!(neighbors(9).as_slice(), &[8, 4]);
    }

    #[test]
    fn test_neighbors_middle() {
        assert_eq!(neighbors(2).as_slice(), &[1, 3, 7]);
        assert_eq!(neighbors(7).as_slice(), &[6, 8, 2]);
    }

    #[test]
    fn test_neighbors_out_of_range() {
        assert!(neighbors(10).is_empty());
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        for a in 0..BOARD_SIZE {
            for b in neighbors(a) {
                assert!(neighbors(b).contains(&a), "{a} -> {b} not symmetric");
            }
        }
    }

    #[test]
    fn test_row_boundaries_do_not_wrap() {
        assert!(!neighbors(4).contains(&5));
        assert!(!neighbors(5).contains(&4));
    }

    #[test]
    fn test_deck_mapping() {
        assert_eq!(deck_for(0), 0);
        assert_eq!(deck_for(4), 4);
        assert_eq!(deck_for(5), 0);
        assert_eq!(deck_for(9), 4);
    }

    #[test]
    fn test_above() {
        assert_eq!(above(7), Some(2));
        assert_eq!(above(2), None);
        assert_eq!(above(10), None);
    }

    #[test]
    fn test_board_access() {
        let mut board = Board::mountains();
        assert_eq!(board.set(7, Card::Naishi), Some(Card::Mountain));
        assert_eq!(board.get(7), Some(Card::Naishi));
        assert_eq!(board.hand()[2], Card::Naishi);
        assert_eq!(board.set(10, Card::Naishi), None);
        assert_eq!(board.get(10), None);

        board.swap(7, 0);
        assert_eq!(board.line()[0], Card::Naishi);
        assert_eq!(board.positions_of(Card::Naishi).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_unique_kinds() {
        let board = Board::from_rows(
            [Card::Naishi, Card::Ninja, Card::Mountain, Card::Fort, Card::Fort],
            [Card::Mountain; ROW_SIZE],
        );
        assert_eq!(board.unique_kinds(&[]), 4);
        assert_eq!(board.unique_kinds(&[Card::Mountain]), 3);
        assert_eq!(board.unique_kinds(&[Card::Mountain, Card::Ninja]), 2);
    }
}
