//! # naishi-engine
//!
//! Deterministic rules and scoring engine for Naishi, a two-player
//! territory-building card game, built for self-play and RL training.
//!
//! ## Design Principles
//!
//! 1. **Single owner of mutation**: `GameState` fields are private to the
//!    crate. Callers read through accessors or an `Observation` and change the
//!    game only through `apply_action`.
//!
//! 2. **Atomic actions**: every precondition is checked before anything is
//!    touched, so a rejected action leaves the state bit-identical.
//!
//! 3. **Deterministic**: the same seed and the same actions give the same
//!    state, history and score on every platform.
//!
//! ## Architecture
//!
//! - **Explicit turn phases**: `Start`, `MustDevelop` and `OptionalEmissary`
//!   make a second emissary action in one turn unrepresentable.
//!
//! - **Persistent data structures**: River decks and the action history use
//!   `im`, so cloning a state for a rollout is cheap.
//!
//! ## Modules
//!
//! - `core`: players, state, actions, errors, observations, RNG, configuration
//! - `cards`: card vocabulary and board geometry
//! - `zones`: the River
//! - `emissary`: emissary tokens, shared spots and the decree
//! - `rules`: setup, validation, application, legal actions, end of game
//! - `scoring`: per-card rules, Ninja resolution, tie-break
//! - `playout`: policies and a full-game driver
//!
//! ## Example
//!
//! ```
//! use naishi_engine::{create_initial_state, score};
//!
//! let mut state = create_initial_state(1);
//! while !state.is_game_over() {
//!     let action = state.legal_actions()[0];
//!     state.apply(action).unwrap();
//! }
//! let result = score(&state);
//! println!("{} - {}: {:?}", result.p1(), result.p2(), result.winner);
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod emissary;
pub mod rules;
pub mod scoring;
pub mod playout;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionError, ActionKind, ActionOutcome, ActionRecord, DraftMode, GameConfig, GameRng,
    GameState, Observation, PlayerId, PlayerMap, SetupError, TurnPhase,
};

pub use crate::cards::{Board, Card};

pub use crate::zones::River;

pub use crate::emissary::{EmissaryTracker, SpotKind};

pub use crate::rules::{create_initial_state, Draft, GameBuilder};

pub use crate::scoring::{
    score, score_with, GameResult, NinjaChoices, ScoreResult, ScoreSheet, ScoringError,
};

pub use crate::playout::{play_episode, Episode, Policy, UniformRandom};
