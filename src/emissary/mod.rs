//! Emissary tokens and the shared spots they occupy.

pub mod tracker;

pub use tracker::{EmissaryTracker, SpotId, SpotKind, DISCARD_SPOTS, INITIAL_EMISSARIES, SWAP_SPOTS};
