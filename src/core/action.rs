//! Action representation.
//!
//! An `Action` is a tagged variant with typed payloads: positions are board
//! slots (0-9, or 0-4 within one row) and deck indices are river decks (0-4).
//! Unordered pairs (two slots, two decks) are accepted in either order; the
//! canonical form puts the smaller index first.
//!
//! For automated players every canonical action also has a fixed index in a
//! flat action space of [`Action::SPACE_SIZE`] entries.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{BOARD_SIZE, ROW_SIZE};
use crate::emissary::SpotKind;
use crate::zones::NUM_DECKS;

/// Unordered index pairs over five elements, in action-space order.
const PAIRS: [(usize, usize); 10] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (0, 4),
    (1, 2),
    (1, 3),
    (1, 4),
    (2, 3),
    (2, 4),
    (3, 4),
];

const DEVELOP_BASE: usize = 0;
const SWAP_HAND_BASE: usize = DEVELOP_BASE + BOARD_SIZE;
const SWAP_LINE_BASE: usize = SWAP_HAND_BASE + PAIRS.len();
const SWAP_HAND_LINE_BASE: usize = SWAP_LINE_BASE + PAIRS.len();
const SWAP_RIVER_BASE: usize = SWAP_HAND_LINE_BASE + ROW_SIZE;
const DISCARD_RIVER_BASE: usize = SWAP_RIVER_BASE + PAIRS.len();
const RECALL_INDEX: usize = DISCARD_RIVER_BASE + PAIRS.len();
const DECREE_BASE: usize = RECALL_INDEX + 1;
const DECLARE_END_INDEX: usize = DECREE_BASE + BOARD_SIZE;
const PASS_INDEX: usize = DECLARE_END_INDEX + 1;

fn pair_index(a: usize, b: usize) -> Option<usize> {
    let key = (a.min(b), a.max(b));
    PAIRS.iter().position(|&pair| pair == key)
}

/// A move submitted by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    /// Replace the card at a board position (0-9) with the top of deck `position % 5`.
    Develop(usize),
    /// Emissary: swap two Hand cards (row indices 0-4).
    SwapHand(usize, usize),
    /// Emissary: swap two Line cards (row indices 0-4).
    SwapLine(usize, usize),
    /// Emissary: swap the Line and Hand cards of one column (0-4).
    SwapHandLine(usize),
    /// Emissary: swap the top cards of two river decks.
    SwapRiver(usize, usize),
    /// Emissary: remove the top cards of two river decks from play.
    DiscardRiver(usize, usize),
    /// Bring emissaries home and free their spots.
    Recall,
    /// Exchange the card at a board position (0-9) with the opponent's.
    Decree(usize),
    /// End the game after the opponent's final turn.
    DeclareEnd,
    /// Decline the optional emissary after a Develop.
    Pass,
}

/// Action type without payload, used in errors and phase checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Develop,
    Swap,
    Discard,
    Recall,
    Decree,
    DeclareEnd,
    Pass,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActionKind::Develop => "Develop",
            ActionKind::Swap => "Swap",
            ActionKind::Discard => "Discard",
            ActionKind::Recall => "Recall",
            ActionKind::Decree => "Decree",
            ActionKind::DeclareEnd => "Declare end",
            ActionKind::Pass => "Pass",
        };
        f.write_str(name)
    }
}

impl Action {
    /// Size of the flat action space.
    pub const SPACE_SIZE: usize = PASS_INDEX + 1;

    #[must_use]
    pub const fn kind(self) -> ActionKind {
        match self {
            Action::Develop(_) => ActionKind::Develop,
            Action::SwapHand(..)
            | Action::SwapLine(..)
            | Action::SwapHandLine(_)
            | Action::SwapRiver(..) => ActionKind::Swap,
            Action::DiscardRiver(..) => ActionKind::Discard,
            Action::Recall => ActionKind::Recall,
            Action::Decree(_) => ActionKind::Decree,
            Action::DeclareEnd => ActionKind::DeclareEnd,
            Action::Pass => ActionKind::Pass,
        }
    }

    /// The emissary spot this action occupies, if it is an emissary action.
    #[must_use]
    pub const fn spot_kind(self) -> Option<SpotKind> {
        match self.kind() {
            ActionKind::Swap => Some(SpotKind::Swap),
            ActionKind::Discard => Some(SpotKind::Discard),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_emissary(self) -> bool {
        self.spot_kind().is_some()
    }

    /// Same action with unordered pairs sorted ascending.
    #[must_use]
    pub fn canonical(self) -> Self {
        let sorted = |a: usize, b: usize| (a.min(b), a.max(b));
        match self {
            Action::SwapHand(a, b) => {
                let (a, b) = sorted(a, b);
                Action::SwapHand(a, b)
            }
            Action::SwapLine(a, b) => {
                let (a, b) = sorted(a, b);
                Action::SwapLine(a, b)
            }
            Action::SwapRiver(a, b) => {
                let (a, b) = sorted(a, b);
                Action::SwapRiver(a, b)
            }
            Action::DiscardRiver(a, b) => {
                let (a, b) = sorted(a, b);
                Action::DiscardRiver(a, b)
            }
            other => other,
        }
    }

    /// Position in the flat action space.
    ///
    /// Returns `None` for actions whose payload is out of range or names the
    /// same slot or deck twice.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        let pair = |base: usize, a: usize, b: usize| pair_index(a, b).map(|i| base + i);
        match self {
            Action::Develop(p) if p < BOARD_SIZE => Some(DEVELOP_BASE + p),
            Action::SwapHand(a, b) => pair(SWAP_HAND_BASE, a, b),
            Action::SwapLine(a, b) => pair(SWAP_LINE_BASE, a, b),
            Action::SwapHandLine(c) if c < ROW_SIZE => Some(SWAP_HAND_LINE_BASE + c),
            Action::SwapRiver(a, b) => pair(SWAP_RIVER_BASE, a, b),
            Action::DiscardRiver(a, b) => pair(DISCARD_RIVER_BASE, a, b),
            Action::Recall => Some(RECALL_INDEX),
            Action::Decree(p) if p < BOARD_SIZE => Some(DECREE_BASE + p),
            Action::DeclareEnd => Some(DECLARE_END_INDEX),
            Action::Pass => Some(PASS_INDEX),
            _ => None,
        }
    }

    /// Inverse of [`Action::index`]; always yields the canonical form.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        let action = match index {
            i if i < SWAP_HAND_BASE => Action::Develop(i - DEVELOP_BASE),
            i if i < SWAP_LINE_BASE => {
                let (a, b) = PAIRS[i - SWAP_HAND_BASE];
                Action::SwapHand(a, b)
            }
            i if i < SWAP_HAND_LINE_BASE => {
                let (a, b) = PAIRS[i - SWAP_LINE_BASE];
                Action::SwapLine(a, b)
            }
            i if i < SWAP_RIVER_BASE => Action::SwapHandLine(i - SWAP_HAND_LINE_BASE),
            i if i < DISCARD_RIVER_BASE => {
                let (a, b) = PAIRS[i - SWAP_RIVER_BASE];
                Action::SwapRiver(a, b)
            }
            i if i < RECALL_INDEX => {
                let (a, b) = PAIRS[i - DISCARD_RIVER_BASE];
                Action::DiscardRiver(a, b)
            }
            RECALL_INDEX => Action::Recall,
            i if i < DECLARE_END_INDEX => Action::Decree(i - DECREE_BASE),
            DECLARE_END_INDEX => Action::DeclareEnd,
            PASS_INDEX => Action::Pass,
            _ => return None,
        };
        Some(action)
    }

    /// Every canonical action, in action-space order.
    pub fn all() -> impl Iterator<Item = Action> {
        (0..Self::SPACE_SIZE).filter_map(Self::from_index)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Develop(p) => write!(f, "develop slot {p}"),
            Action::SwapHand(a, b) => write!(f, "swap hand {a}<->{b}"),
            Action::SwapLine(a, b) => write!(f, "swap line {a}<->{b}"),
            Action::SwapHandLine(c) => write!(f, "swap line/hand column {c}"),
            Action::SwapRiver(a, b) => write!(f, "swap river tops {a}<->{b}"),
            Action::DiscardRiver(a, b) => write!(f, "discard river tops {a}, {b}"),
            Action::Recall => f.write_str("recall"),
            Action::Decree(p) => write!(f, "decree slot {p}"),
            Action::DeclareEnd => f.write_str("declare end"),
            Action::Pass => f.write_str("pass"),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay, debugging and training data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

const _: () = assert!(NUM_DECKS == ROW_SIZE, "pair tables assume five decks and five columns");
