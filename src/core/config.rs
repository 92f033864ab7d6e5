//! Game configuration.
//!
//! The rules themselves are fixed constants. Configuration only covers what a
//! caller legitimately varies between episodes: how the opening draft is
//! decided and when an episode counts as truncated.

use serde::{Deserialize, Serialize};

/// Default turn count after which an episode is reported as truncated.
pub const DEFAULT_TURN_LIMIT: u32 = 100;

/// How each player's draft gift is chosen during setup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftMode {
    /// Both choices drawn from the seeded RNG.
    #[default]
    Random,
    /// Explicit indices (0 or 1) into each player's two drafted cards.
    Fixed { p1: usize, p2: usize },
}

/// Per-game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Completed turns beyond which `GameState::is_truncated` reports true.
    /// Truncation never ends or alters the game.
    pub turn_limit: u32,

    /// How the opening draft is resolved.
    pub draft: DraftMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            turn_limit: DEFAULT_TURN_LIMIT,
            draft: DraftMode::Random,
        }
    }
}

impl GameConfig {
    /// Set the truncation turn limit.
    #[must_use]
    pub fn with_turn_limit(mut self, turns: u32) -> Self {
        self.turn_limit = turns;
        self
    }

    /// Fix both draft choices.
    #[must_use]
    pub fn with_draft_choices(mut self, p1: usize, p2: usize) -> Self {
        self.draft = DraftMode::Fixed { p1, p2 };
        self
    }
}
