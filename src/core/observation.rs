//! Player-facing views of the game.
//!
//! An [`Observation`] is an owned snapshot of what one seat may see: its own
//! Line and Hand, the opponent's Line, the River tops and counts, and the
//! shared emissary board. The opponent's Hand and the order of cards below
//! each River top are never included.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};
use super::state::{GameState, TurnPhase};
use crate::cards::{Card, EMPTY_CARD_CODE, ROW_SIZE};
use crate::emissary::{SpotKind, DISCARD_SPOTS, SWAP_SPOTS};
use crate::zones::NUM_DECKS;

/// Length of [`Observation::encode`].
pub const ENCODED_LEN: usize = 36;

/// Completed turns at which the encoded turn feature saturates at 1.0.
const TURN_SCALE: f32 = 50.0;

/// What one player can see.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Seat this view belongs to.
    pub player: PlayerId,
    pub own_line: [Card; ROW_SIZE],
    pub own_hand: [Card; ROW_SIZE],
    pub opponent_line: [Card; ROW_SIZE],
    pub river_tops: [Option<Card>; NUM_DECKS],
    pub river_counts: [usize; NUM_DECKS],
    /// Emissaries at home, per player.
    pub emissaries: PlayerMap<u8>,
    /// Emissary maximum, per player (1 after the decree).
    pub max_emissaries: PlayerMap<u8>,
    pub swap_spots: [Option<PlayerId>; SWAP_SPOTS],
    pub discard_spots: [Option<PlayerId>; DISCARD_SPOTS],
    /// Who used the decree, if anyone.
    pub decree_user: Option<PlayerId>,
    pub current_player: PlayerId,
    pub phase: TurnPhase,
    pub turn_number: u32,
    pub ending_available: bool,
    pub final_turn_pending: Option<PlayerId>,
    pub game_over: bool,
}

impl Observation {
    #[must_use]
    pub fn is_my_turn(&self) -> bool {
        !self.game_over && self.current_player == self.player
    }

    /// Flat feature vector of [`ENCODED_LEN`] values for learning agents.
    ///
    /// Layout: own line (5), own hand (5), opponent line (5), river tops (5),
    /// river counts (5), own and opponent emissaries (2), own and opponent
    /// decree flags (2), normalised turn, must-develop, ending available,
    /// swap spot free, discard spot free, draft flag (always 0) and
    /// optional emissary. Cards use [`Card::code`], empty river decks use
    /// [`EMPTY_CARD_CODE`].
    #[must_use]
    pub fn encode(&self) -> Vec<f32> {
        let me = self.player;
        let them = me.opponent();
        let flag = |b: bool| if b { 1.0 } else { 0.0 };
        let card = |c: Card| f32::from(c.code());

        let mut out = Vec::with_capacity(ENCODED_LEN);
        out.extend(self.own_line.iter().copied().map(card));
        out.extend(self.own_hand.iter().copied().map(card));
        out.extend(self.opponent_line.iter().copied().map(card));
        out.extend(
            self.river_tops
                .iter()
                .map(|top| f32::from(top.map_or(EMPTY_CARD_CODE, Card::code))),
        );
        out.extend(self.river_counts.iter().map(|&n| n as f32));
        out.push(f32::from(self.emissaries[me]));
        out.push(f32::from(self.emissaries[them]));
        out.push(flag(self.decree_user == Some(me)));
        out.push(flag(self.decree_user == Some(them)));
        out.push((self.turn_number.saturating_sub(1) as f32 / TURN_SCALE).min(1.0));
        out.push(flag(self.phase == TurnPhase::MustDevelop));
        out.push(flag(self.ending_available));
        out.push(flag(self.swap_spots.iter().any(Option::is_none)));
        out.push(flag(self.discard_spots.iter().any(Option::is_none)));
        out.push(0.0);
        out.push(flag(self.phase == TurnPhase::OptionalEmissary));

        debug_assert_eq!(out.len(), ENCODED_LEN);
        out
    }
}

impl GameState {
    /// The view `player` is entitled to.
    #[must_use]
    pub fn observe(&self, player: PlayerId) -> Observation {
        let own = self.board(player);
        let emissaries = self.emissaries();

        let mut swap_spots = [None; SWAP_SPOTS];
        swap_spots.copy_from_slice(emissaries.spots(SpotKind::Swap));
        let mut discard_spots = [None; DISCARD_SPOTS];
        discard_spots.copy_from_slice(emissaries.spots(SpotKind::Discard));

        Observation {
            player,
            own_line: own.line(),
            own_hand: own.hand(),
            opponent_line: self.board(player.opponent()).line(),
            river_tops: self.river().tops(),
            river_counts: self.river().counts(),
            emissaries: PlayerMap::new(|p| emissaries.available(p)),
            max_emissaries: PlayerMap::new(|p| emissaries.max_emissaries(p)),
            swap_spots,
            discard_spots,
            decree_user: emissaries.decree_user(),
            current_player: self.current_player(),
            phase: self.phase(),
            turn_number: self.turn_number(),
            ending_available: self.ending_available(),
            final_turn_pending: self.final_turn_pending(),
            game_over: self.is_game_over(),
        }
    }
}
