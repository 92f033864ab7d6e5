//! Core engine types: players, state, actions, errors, RNG, configuration.
//!
//! Everything else in the crate is built on these. `GameState` is the single
//! owner of mutable game data; the `rules` module is the only code that
//! mutates it.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod state;
pub mod observation;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::{DraftMode, GameConfig, DEFAULT_TURN_LIMIT};
pub use action::{Action, ActionKind, ActionRecord};
pub use error::{ActionError, SetupError};
pub use state::{ActionOutcome, GameState, TurnPhase};
pub use observation::{Observation, ENCODED_LEN};
