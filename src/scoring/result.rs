//! Score breakdowns and the final verdict.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal scores and equal tie-break.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Terminal reward for `player`: +1 win, -1 loss, 0 draw.
    #[must_use]
    pub fn reward(&self, player: PlayerId) -> f32 {
        match self {
            GameResult::Winner(p) if *p == player => 1.0,
            GameResult::Winner(_) => -1.0,
            GameResult::Draw => 0.0,
        }
    }
}

/// One player's points, broken down by card kind.
///
/// Points earned by a Ninja through the kind it copies are booked under
/// `Ninja`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreSheet {
    points: [i32; Card::ALL.len()],
}

impl ScoreSheet {
    /// Points booked under `card`.
    #[must_use]
    pub fn get(&self, card: Card) -> i32 {
        self.points[card as usize]
    }

    pub(crate) fn add(&mut self, card: Card, points: i32) {
        self.points[card as usize] += points;
    }

    #[must_use]
    pub fn total(&self) -> i32 {
        self.points.iter().sum()
    }

    /// `(kind, points)` for every kind, in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (Card, i32)> + '_ {
        Card::ALL.iter().map(move |&card| (card, self.get(card)))
    }
}

impl std::fmt::Display for ScoreSheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (card, points) in self.iter().filter(|&(_, p)| p != 0) {
            write!(f, "{card}: {points}, ")?;
        }
        write!(f, "total: {}", self.total())
    }
}

/// Both players' sheets and the verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub sheets: PlayerMap<ScoreSheet>,
    pub winner: GameResult,
}

impl ScoreResult {
    /// Total points of `player`.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> i32 {
        self.sheets[player].total()
    }

    #[must_use]
    pub fn p1(&self) -> i32 {
        self.score(PlayerId::P1)
    }

    #[must_use]
    pub fn p2(&self) -> i32 {
        self.score(PlayerId::P2)
    }
}
