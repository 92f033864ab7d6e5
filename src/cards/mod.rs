//! Card vocabulary and board geometry.
//!
//! ## Key Types
//!
//! - `Card`: the twelve card kinds and their deck counts
//! - `Board`: one player's five Line and five Hand slots
//! - adjacency helpers (`neighbors`, `above`, `deck_for`)

pub mod board;
pub mod card;

pub use board::{above, deck_for, in_hand, neighbors, row_of, Board, Neighbors, Row};
pub use board::{BOARD_SIZE, HAND_START, ROW_SIZE};
pub use card::{Card, DECK_SIZE, EMPTY_CARD_CODE, MOUNTAINS_PER_PLAYER};
