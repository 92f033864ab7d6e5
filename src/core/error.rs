//! Rule-violation errors.
//!
//! Every variant names exactly one failed precondition. Errors are returned
//! before any mutation, so the state a caller holds after an `Err` is the
//! state it held before the call.

use thiserror::Error;

use super::action::ActionKind;
use super::player::PlayerId;
use super::state::TurnPhase;
use crate::emissary::SpotKind;

/// Why an action was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("board position {0} is out of range (0-9, or 0-4 within a row)")]
    InvalidPosition(usize),

    #[error("river deck {0} does not exist (0-4)")]
    InvalidDeck(usize),

    #[error("the same slot or deck was named twice")]
    DuplicateTarget,

    #[error("river deck {0} is empty")]
    EmptyDeck(usize),

    #[error("no emissary available")]
    NoEmissaryAvailable,

    #[error("all {0} spots are occupied")]
    SpotsFull(SpotKind),

    #[error("the decree has already been used this game")]
    DecreeAlreadyUsed,

    #[error("all emissaries are already home")]
    RecallNotAllowed,

    #[error("it is {expected}'s turn, not {actual}'s")]
    NotCurrentPlayersTurn { expected: PlayerId, actual: PlayerId },

    #[error("{action} is not allowed during the {phase} phase")]
    WrongTurnPhase { phase: TurnPhase, action: ActionKind },

    #[error("the end can only be declared while a river deck is empty and no final turn is pending")]
    DeclareEndNotEligible,

    #[error("the game has already ended")]
    GameAlreadyEnded,
}

/// Why a game could not be set up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("{player} chose draft card {choice}, expected 0 or 1")]
    InvalidDraftChoice { player: PlayerId, choice: usize },
}
