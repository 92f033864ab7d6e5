//! End-of-game scoring.
//!
//! Pure functions of the two boards: Ninjas are resolved first, then every
//! card kind is scored on its owner's board. Higher total wins; equal totals
//! go to the player with more distinct kinds (Mountain and Ninja excluded);
//! if that is equal too the game is a draw.
//!
//! ```
//! use naishi_engine::cards::{Board, Card};
//! use naishi_engine::scoring::score_board;
//!
//! let m = Card::Mountain;
//! let board = Board::from_rows([m, m, Card::Naishi, m, m], [m; 5]);
//! assert_eq!(score_board(&board).total(), 12 - 5);
//! ```

pub mod ninja;
pub mod result;
pub mod rules;

pub use ninja::{NinjaChoices, ScoringError};
pub use result::{GameResult, ScoreResult, ScoreSheet};
pub use rules::score_board;

use log::trace;

use crate::cards::{Board, Card};
use crate::core::{GameState, PlayerId, PlayerMap};

/// Distinct kinds on a board for the tie-break.
#[must_use]
pub fn tie_break_kinds(board: &Board) -> usize {
    board.unique_kinds(&[Card::Mountain, Card::Ninja])
}

/// Compare two totals, falling back to the tie-break.
#[must_use]
pub fn decide_winner(boards: &PlayerMap<Board>, totals: PlayerMap<i32>) -> GameResult {
    let (p1, p2) = (PlayerId::P1, PlayerId::P2);
    let key = |p: PlayerId| (totals[p], tie_break_kinds(&boards[p]));
    match key(p1).cmp(&key(p2)) {
        std::cmp::Ordering::Greater => GameResult::Winner(p1),
        std::cmp::Ordering::Less => GameResult::Winner(p2),
        std::cmp::Ordering::Equal => GameResult::Draw,
    }
}

/// Score two boards with the given Ninja choices.
pub fn score_boards(
    boards: &PlayerMap<Board>,
    choices: &NinjaChoices,
) -> Result<ScoreResult, ScoringError> {
    for (player, board) in boards.iter() {
        ninja::validate(player, board, choices.for_player(player))?;
    }
    Ok(tally(boards, choices))
}

fn tally(boards: &PlayerMap<Board>, choices: &NinjaChoices) -> ScoreResult {
    let sheets = boards.map(|player, board| {
        let (_, sheet) = ninja::resolve_best(board, choices.for_player(player));
        trace!("{player} score: {sheet}");
        sheet
    });
    let winner = decide_winner(boards, sheets.map(|_, sheet| sheet.total()));
    ScoreResult { sheets, winner }
}

/// Score a game, resolving every Ninja to its owner's best copy.
///
/// May be called on any state; normally called once the game is over.
#[must_use]
pub fn score(state: &GameState) -> ScoreResult {
    tally(state.boards(), &NinjaChoices::default())
}

/// Score a game with explicit Ninja choices.
pub fn score_with(state: &GameState, choices: &NinjaChoices) -> Result<ScoreResult, ScoringError> {
    score_boards(state.boards(), choices)
}
