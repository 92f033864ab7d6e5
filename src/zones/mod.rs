//! Shared card zones.
//!
//! ## Key Types
//!
//! - `River`: the five shared decks and the removed-from-play pile

pub mod river;

pub use river::{River, CARDS_PER_DECK, NUM_DECKS};
