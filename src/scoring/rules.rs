//! Per-kind scoring rules.
//!
//! Every rule reads one player's ten slots and the fixed adjacency graph.
//! Slot rules (Naishi, Councellor, Sentinel, Fort, Monk, Knight, Ronin) score
//! each card where it stands; count rules (Mountain, Torii, Banner) score the
//! kind once; Rice fields score per connected group.

use smallvec::SmallVec;

use super::result::ScoreSheet;
use crate::cards::{above, in_hand, neighbors, Board, Card, BOARD_SIZE};

const CORNERS: [usize; 4] = [0, 4, 5, 9];

fn adjacent_count(board: &Board, position: usize, kind: Card) -> i32 {
    neighbors(position)
        .iter()
        .filter(|&&n| board.get(n) == Some(kind))
        .count() as i32
}

/// Points a Ronin earns given the number of distinct non-Mountain kinds.
#[must_use]
pub fn ronin_points(unique_kinds: usize) -> i32 {
    match unique_kinds {
        8 => 8,
        9 => 15,
        10 => 45,
        _ => 0,
    }
}

/// Points for the card of kind `card` standing at `position`.
///
/// Count and group kinds return 0 here.
#[must_use]
pub fn slot_points(board: &Board, position: usize, card: Card, unique_kinds: usize) -> i32 {
    match card {
        Card::Naishi => match position {
            2 => 12,
            7 => 8,
            _ => 0,
        },
        Card::Councellor => {
            let base = match position {
                1 | 3 | 6 | 8 => 4,
                2 | 7 => 3,
                _ => 2,
            };
            base + 4 * adjacent_count(board, position, Card::Naishi)
        }
        Card::Sentinel => {
            let alone = if adjacent_count(board, position, Card::Sentinel) == 0 {
                3
            } else {
                0
            };
            alone + 4 * adjacent_count(board, position, Card::Fort)
        }
        Card::Fort => {
            if CORNERS.contains(&position) {
                6
            } else {
                0
            }
        }
        Card::Monk => {
            let hand = if in_hand(position) { 5 } else { 0 };
            hand + 2 * adjacent_count(board, position, Card::Torii)
        }
        Card::Knight => {
            let hand = if in_hand(position) { 3 } else { 0 };
            let banner = match above(position).and_then(|p| board.get(p)) {
                Some(Card::Banner) => 10,
                _ => 0,
            };
            hand + banner
        }
        Card::Ronin => ronin_points(unique_kinds),
        Card::Torii | Card::Banner | Card::RiceFields | Card::Ninja | Card::Mountain => 0,
    }
}

#[must_use]
pub fn mountain_points(count: usize) -> i32 {
    match count {
        0 => 0,
        1 => 5,
        _ => -5,
    }
}

#[must_use]
pub fn torii_points(count: usize) -> i32 {
    match count {
        1 => -5,
        0 | 2 => 0,
        _ => 30,
    }
}

#[must_use]
pub fn banner_points(count: usize) -> i32 {
    match count {
        0 => 0,
        1 => 3,
        _ => 8,
    }
}

/// Sizes of the connected Rice field groups on a board.
#[must_use]
pub fn rice_field_groups(board: &Board) -> SmallVec<[usize; 5]> {
    let mut seen = [false; BOARD_SIZE];
    let mut groups = SmallVec::new();

    for start in board.positions_of(Card::RiceFields) {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut stack: SmallVec<[usize; BOARD_SIZE]> = SmallVec::new();
        stack.push(start);
        let mut size = 0;

        while let Some(position) = stack.pop() {
            size += 1;
            for next in neighbors(position) {
                if !seen[next] && board.get(next) == Some(Card::RiceFields) {
                    seen[next] = true;
                    stack.push(next);
                }
            }
        }
        groups.push(size);
    }
    groups
}

/// Points for one Rice field group.
#[must_use]
pub fn rice_group_points(size: usize) -> i32 {
    match size {
        0 | 1 => 0,
        2 => 10,
        3 => 20,
        _ => 30,
    }
}

/// Score `resolved`, a board whose Ninjas have been replaced by the kinds
/// they copy. `original` is the board as played; it decides the Ronin
/// tally and which slots book their points under Ninja.
#[must_use]
pub fn score_resolved(original: &Board, resolved: &Board) -> ScoreSheet {
    let unique_kinds = original.unique_kinds(&[Card::Mountain]);
    let mut sheet = ScoreSheet::default();

    for (position, &card) in resolved.cards().iter().enumerate() {
        let points = slot_points(resolved, position, card, unique_kinds);
        let booked = if original.get(position) == Some(Card::Ninja) {
            Card::Ninja
        } else {
            card
        };
        sheet.add(booked, points);
    }

    sheet.add(Card::Mountain, mountain_points(resolved.count(Card::Mountain)));
    sheet.add(Card::Torii, torii_points(resolved.count(Card::Torii)));
    sheet.add(Card::Banner, banner_points(resolved.count(Card::Banner)));
    let rice: i32 = rice_field_groups(resolved)
        .iter()
        .map(|&size| rice_group_points(size))
        .sum();
    sheet.add(Card::RiceFields, rice);

    sheet
}

/// Score a board as it stands; unresolved Ninjas earn nothing.
#[must_use]
pub fn score_board(board: &Board) -> ScoreSheet {
    score_resolved(board, board)
}

#[cfg(test)]
mod tests {
    use super::*;

    const M: Card = Card::Mountain;

    #[test]
    fn test_lone_naishi_on_mountains() {
        let board = Board::from_rows([M, M, Card::Naishi, M, M], [M; 5]);
        let sheet = score_board(&board);

        assert_eq!(sheet.get(Card::Naishi), 12);
        assert_eq!(sheet.get(Card::Mountain), -5);
        assert_eq!(sheet.total(), 7);
    }

    #[test]
    fn test_single_mountain_bonus() {
        assert_eq!(mountain_points(1), 5);
        assert_eq!(mountain_points(4), -5);
        assert_eq!(mountain_points(0), 0);
    }

    #[test]
    fn test_councellor_positions_and_naishi() {
        let board = Board::from_rows(
            [Card::Councellor, Card::Naishi, Card::Councellor, M, M],
            [Card::Councellor, M, M, M, M],
        );
        let sheet = score_board(&board);
        // 0: corner 2 + Naishi 4, 2: centre 3 + Naishi 4, 5: corner 2
        assert_eq!(sheet.get(Card::Councellor), 15);
    }

    #[test]
    fn test_sentinels() {
        let board = Board::from_rows(
            [Card::Sentinel, Card::Sentinel, M, Card::Fort, Card::Sentinel],
            [Card::Fort, M, M, M, M],
        );
        let sheet = score_board(&board);
        // 0: neighbour Sentinel, Fort below +4. 1: neighbour Sentinel. 4: alone +3, Fort at 3 +4
        assert_eq!(sheet.get(Card::Sentinel), 11);
        // Fort at 5 is a corner, 3 is not
        assert_eq!(sheet.get(Card::Fort), 6);
    }

    #[test]
    fn test_monk_and_torii() {
        let board = Board::from_rows(
            [M, Card::Torii, M, M, M],
            [Card::Torii, Card::Monk, Card::Torii, M, M],
        );
        let sheet = score_board(&board);
        // Hand +5, three adjacent Torii +6
        assert_eq!(sheet.get(Card::Monk), 11);
        assert_eq!(sheet.get(Card::Torii), 30);
    }

    #[test]
    fn test_torii_counts() {
        assert_eq!(torii_points(1), -5);
        assert_eq!(torii_points(2), 0);
        assert_eq!(torii_points(3), 30);
        assert_eq!(torii_points(4), 30);
    }

    #[test]
    fn test_knight_below_banner() {
        let board = Board::from_rows(
            [M, Card::Banner, M, M, Card::Knight],
            [M, Card::Knight, M, M, M],
        );
        let sheet = score_board(&board);
        // Hand knight under a Banner: 3 + 10; Line knight: 0
        assert_eq!(sheet.get(Card::Knight), 13);
        assert_eq!(sheet.get(Card::Banner), 3);
    }

    #[test]
    fn test_rice_field_groups() {
        let board = Board::from_rows(
            [Card::RiceFields, Card::RiceFields, M, Card::RiceFields, M],
            [Card::RiceFields, M, M, Card::RiceFields, Card::RiceFields],
        );
        let mut groups = rice_field_groups(&board);
        groups.sort_unstable();
        assert_eq!(groups.as_slice(), &[3, 3]);
        assert_eq!(score_board(&board).get(Card::RiceFields), 40);
    }

    #[test]
    fn test_rice_field_cap() {
        let board = Board::from_rows([Card::RiceFields; 5], [M; 5]);
        assert_eq!(score_board(&board).get(Card::RiceFields), 30);
    }

    #[test]
    fn test_ronin_unique_tally() {
        let board = Board::from_rows(
            [Card::Naishi, Card::Councellor, Card::Sentinel, Card::Fort, Card::Monk],
            [Card::Torii, Card::Knight, Card::Banner, Card::Ronin, M],
        );
        // Nine kinds besides Mountain
        assert_eq!(score_board(&board).get(Card::Ronin), 15);
        assert_eq!(ronin_points(7), 0);
        assert_eq!(ronin_points(10), 45);
    }
}
