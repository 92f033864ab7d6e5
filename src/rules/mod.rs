//! The rules: setup, validation, application, legal actions and the end of
//! the game.
//!
//! All of these are exposed as methods on [`GameState`](crate::core::GameState)
//! or as setup entry points. Nothing outside this module mutates a state.

pub mod end;
pub mod engine;
pub mod legal;
pub mod setup;
pub mod validate;

pub use end::AUTO_END_EMPTY_DECKS;
pub use legal::ActionList;
pub use setup::{create_initial_state, Draft, DraftPick, GameBuilder, DRAFT_CARDS};
pub use validate::phase_allows;
