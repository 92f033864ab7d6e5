//! Automated play through the public contracts.
//!
//! Self-play and evaluation harnesses drive games with a [`Policy`] per seat.
//! The driver never reaches into `GameState`; it observes, asks for legal
//! actions, applies and scores like any other caller.

pub mod episode;
pub mod policy;

pub use episode::{play_episode, Episode, PlayoutError};
pub use policy::{FirstLegal, Policy, UniformRandom};
