//! Policies for automated players.
//!
//! A policy sees only what its seat may see (an [`Observation`]) and the
//! legal actions, and picks one of them.

use crate::core::{Action, GameRng, Observation};

/// Chooses an action for the player to move.
pub trait Policy {
    /// Pick one of `legal`, or `None` if `legal` is empty.
    fn choose(&mut self, observation: &Observation, legal: &[Action]) -> Option<Action>;
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn choose(&mut self, observation: &Observation, legal: &[Action]) -> Option<Action> {
        (**self).choose(observation, legal)
    }
}

/// Uniformly random legal actions from a seeded stream.
#[derive(Clone, Debug)]
pub struct UniformRandom {
    rng: GameRng,
}

impl UniformRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("policy"),
        }
    }
}

impl Policy for UniformRandom {
    fn choose(&mut self, _observation: &Observation, legal: &[Action]) -> Option<Action> {
        self.rng.choose(legal).copied()
    }
}

/// Always the first legal action in action-space order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegal;

impl Policy for FirstLegal {
    fn choose(&mut self, _observation: &Observation, legal: &[Action]) -> Option<Action> {
        legal.first().copied()
    }
}
