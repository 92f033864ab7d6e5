//! Game state.
//!
//! `GameState` owns every mutable part of a game: both boards, the River, the
//! emissary tracker and the turn context. Its fields are private to the crate;
//! collaborators read through accessors or take an [`Observation`] and change
//! the game only through `apply_action`.
//!
//! [`Observation`]: super::observation::Observation

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::config::GameConfig;
use super::player::{PlayerId, PlayerMap};
use crate::cards::{Board, BOARD_SIZE};
use crate::emissary::EmissaryTracker;
use crate::zones::River;

/// Where the current player is within their turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Nothing done yet: Develop, an emissary action, Recall, Decree or
    /// Declare-End are all candidates.
    #[default]
    Start,
    /// An emissary went first; only Develop may follow.
    MustDevelop,
    /// Develop went first; one emissary action may follow, or Pass.
    OptionalEmissary,
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnPhase::Start => f.write_str("start"),
            TurnPhase::MustDevelop => f.write_str("must-develop"),
            TurnPhase::OptionalEmissary => f.write_str("optional-emissary"),
        }
    }
}

/// What a successful action did to the game flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    /// The player who acted.
    pub player: PlayerId,
    /// The action as applied (canonical form).
    pub action: Action,
    /// Whether the action closed the player's turn.
    pub turn_ended: bool,
    /// Whether the game is now over.
    pub game_over: bool,
    /// Player to act next (unchanged when the game is over).
    pub next_player: PlayerId,
    /// Phase the next player is in.
    pub phase: TurnPhase,
}

/// Full game state including private information.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) seed: u64,

    pub(crate) boards: PlayerMap<Board>,
    pub(crate) river: River,
    pub(crate) emissaries: EmissaryTracker,

    // === Turn context ===
    pub(crate) current_player: PlayerId,
    pub(crate) phase: TurnPhase,
    /// Turn number (starts at 1, increments on every hand-over).
    pub(crate) turn_number: u32,
    /// Action sequence within the turn.
    pub(crate) action_sequence: u32,
    /// Player owed one last turn before scoring.
    pub(crate) final_turn: Option<PlayerId>,
    pub(crate) game_over: bool,

    /// Every applied action, oldest first.
    pub(crate) history: Vector<ActionRecord>,
}

impl GameState {
    /// Create a state from explicit boards and river, Player 1 to move.
    ///
    /// Useful for analysis of hand-built positions; normal games come from
    /// [`create_initial_state`](crate::rules::create_initial_state).
    #[must_use]
    pub fn from_position(boards: PlayerMap<Board>, river: River) -> Self {
        Self::with_config(GameConfig::default(), 0, boards, river)
    }

    pub(crate) fn with_config(
        config: GameConfig,
        seed: u64,
        boards: PlayerMap<Board>,
        river: River,
    ) -> Self {
        Self {
            config,
            seed,
            boards,
            river,
            emissaries: EmissaryTracker::new(),
            current_player: PlayerId::P1,
            phase: TurnPhase::Start,
            turn_number: 1,
            action_sequence: 0,
            final_turn: None,
            game_over: false,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Seed the game was dealt from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A player's full board. Includes the hidden Hand; hand it only to its owner.
    #[must_use]
    pub fn board(&self, player: PlayerId) -> &Board {
        &self.boards[player]
    }

    #[must_use]
    pub fn boards(&self) -> &PlayerMap<Board> {
        &self.boards
    }

    #[must_use]
    pub fn river(&self) -> &River {
        &self.river
    }

    #[must_use]
    pub fn emissaries(&self) -> &EmissaryTracker {
        &self.emissaries
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// The turn being played, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Hand-overs so far; 0 during the first turn.
    #[must_use]
    pub fn turns_completed(&self) -> u32 {
        self.turn_number.saturating_sub(1)
    }

    /// Player owed a final turn, if the end has been triggered.
    #[must_use]
    pub fn final_turn_pending(&self) -> Option<PlayerId> {
        self.final_turn
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Declare-End is possible once a river deck is empty.
    #[must_use]
    pub fn ending_available(&self) -> bool {
        self.river.empty_decks() >= 1
    }

    /// Whether more than the configured turn limit of turns have been
    /// completed.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        !self.game_over && self.turns_completed() > self.config.turn_limit
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Cards currently accounted for: both boards, the River decks and the
    /// removed pile.
    #[must_use]
    pub fn card_count(&self) -> usize {
        2 * BOARD_SIZE + self.river.total_cards()
    }

    /// Compact binary encoding of the whole state.
    pub fn snapshot(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Rebuild a state from [`GameState::snapshot`] bytes.
    pub fn restore(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }

    // === Mutation helpers used by the rules module ===

    pub(crate) fn record(&mut self, player: PlayerId, action: Action) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.history
            .push_back(ActionRecord::new(player, action, self.turn_number, sequence));
    }

    /// Hand the move to the other player.
    pub(crate) fn advance_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        self.phase = TurnPhase::Start;
        self.turn_number += 1;
        self.action_sequence = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn position() -> GameState {
        let boards = PlayerMap::with_value(Board::mountains());
        let river = River::from_decks([
            vec![Card::Naishi],
            vec![Card::Fort],
            vec![],
            vec![Card::Monk],
            vec![Card::Ronin],
        ]);
        GameState::from_position(boards, river)
    }

    #[test]
    fn test_from_position() {
        let state = position();

        assert_eq!(state.current_player(), PlayerId::P1);
        assert_eq!(state.phase(), TurnPhase::Start);
        assert_eq!(state.turn_number(), 1);
        assert!(state.ending_available());
        assert!(!state.is_game_over());
        assert_eq!(state.card_count(), 24);
    }

    #[test]
    fn test_advance_turn() {
        let mut state = position();
        state.phase = TurnPhase::OptionalEmissary;
        state.record(PlayerId::P1, Action::Develop(0));

        state.advance_turn();

        assert_eq!(state.current_player(), PlayerId::P2);
        assert_eq!(state.phase(), TurnPhase::Start);
        assert_eq!(state.turn_number(), 2);
        assert_eq!(state.action_sequence, 0);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_truncation() {
        let mut state = position();
        state.config = state.config.with_turn_limit(1);
        assert_eq!(state.turns_completed(), 0);
        assert!(!state.is_truncated());

        // One completed turn is still within the limit
        state.advance_turn();
        assert_eq!(state.turns_completed(), 1);
        assert!(!state.is_truncated());

        state.advance_turn();
        assert!(state.is_truncated());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let state = position();
        let bytes = state.snapshot().unwrap();
        let restored = GameState::restore(&bytes).unwrap();
        assert_eq!(state, restored);
    }
}
