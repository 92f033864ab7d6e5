//! Full-game driver.
//!
//! Plays a game to the end using only the public contracts: observe, query
//! legal actions, apply, score.

use log::debug;
use thiserror::Error;

use super::policy::Policy;
use crate::core::{ActionError, GameState, PlayerId, PlayerMap};
use crate::scoring::{score, ScoreResult};

/// Why an episode stopped early.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlayoutError {
    #[error("{player}'s policy chose an illegal action")]
    IllegalAction {
        player: PlayerId,
        #[source]
        source: ActionError,
    },

    #[error("{player}'s policy returned no action")]
    NoAction { player: PlayerId },
}

/// A finished (or cut-off) episode.
#[derive(Clone, Debug)]
pub struct Episode {
    pub final_state: GameState,
    /// Scores, present when the game reached its end.
    pub result: Option<ScoreResult>,
    /// Actions applied.
    pub actions: usize,
    /// Stopped by the action cap or the configured turn limit.
    pub truncated: bool,
    /// +1 win, -1 loss, 0 draw or truncation.
    pub rewards: PlayerMap<f32>,
}

/// Play `state` until the game ends, the turn limit passes, or
/// `max_actions` actions have been applied.
pub fn play_episode<P: Policy>(
    mut state: GameState,
    policies: &mut PlayerMap<P>,
    max_actions: usize,
) -> Result<Episode, PlayoutError> {
    let mut actions = 0;

    while !state.is_game_over() && !state.is_truncated() && actions < max_actions {
        let player = state.current_player();
        let legal = state.legal_actions();
        let observation = state.observe(player);

        let action = policies[player]
            .choose(&observation, &legal)
            .ok_or(PlayoutError::NoAction { player })?;
        state
            .apply_action(player, action)
            .map_err(|source| PlayoutError::IllegalAction { player, source })?;
        actions += 1;
    }

    let result = state.is_game_over().then(|| score(&state));
    let rewards = match &result {
        Some(result) => PlayerMap::new(|p| result.winner.reward(p)),
        None => PlayerMap::with_value(0.0),
    };
    debug!(
        "episode finished after {actions} actions, {} turns: {:?}",
        state.turn_number(),
        result.map(|r| r.winner)
    );

    Ok(Episode {
        truncated: result.is_none(),
        final_state: state,
        result,
        actions,
        rewards,
    })
}
