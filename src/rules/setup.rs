//! Game setup: shuffle, deal, draft exchange and Mountain injection.
//!
//! ## Example
//!
//! ```
//! use naishi_engine::rules::GameBuilder;
//!
//! let state = GameBuilder::new()
//!     .turn_limit(60)
//!     .draft_choices(0, 1)
//!     .build(7)
//!     .unwrap();
//!
//! assert_eq!(state.river().counts(), [6; 5]);
//! assert_eq!(state.config().turn_limit, 60);
//! ```

use log::debug;

use crate::cards::{Board, Card, ROW_SIZE};
use crate::core::{DraftMode, GameConfig, GameRng, GameState, PlayerId, PlayerMap, SetupError};
use crate::zones::River;

/// Cards each player is dealt for the draft.
pub const DRAFT_CARDS: usize = 2;

/// The dealt game before the draft exchange.
///
/// Each player sees their own two offered cards and the River tops, then
/// picks one card to give away. Both gifts are exchanged at once.
#[derive(Clone, Debug)]
pub struct Draft {
    seed: u64,
    river: River,
    offers: PlayerMap<[Card; DRAFT_CARDS]>,
}

impl Draft {
    /// Shuffle the deck and deal the River and both draft hands.
    #[must_use]
    pub fn deal(seed: u64) -> Self {
        let mut rng = GameRng::new(seed).for_context("deal");
        let mut deck = Card::play_deck();
        rng.shuffle(&mut deck);

        let (river, rest) = River::deal(&deck);
        let card = |i: usize| rest.get(i).copied().unwrap_or(Card::Mountain);
        debug_assert_eq!(rest.len(), 2 * DRAFT_CARDS);
        let offers = PlayerMap::new(|p| {
            let base = p.index() * DRAFT_CARDS;
            [card(base), card(base + 1)]
        });

        Self { seed, river, offers }
    }

    /// The two cards offered to `player`.
    #[must_use]
    pub fn offers(&self, player: PlayerId) -> [Card; DRAFT_CARDS] {
        self.offers[player]
    }

    #[must_use]
    pub fn river(&self) -> &River {
        &self.river
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Exchange the chosen cards and build the opening position.
    ///
    /// `p1_give` and `p2_give` index each player's offers (0 or 1).
    pub fn resolve(self, p1_give: usize, p2_give: usize) -> Result<GameState, SetupError> {
        self.resolve_with(GameConfig::default(), p1_give, p2_give)
    }

    fn resolve_with(
        self,
        config: GameConfig,
        p1_give: usize,
        p2_give: usize,
    ) -> Result<GameState, SetupError> {
        let gifts = PlayerMap::new(|p| if p == PlayerId::P1 { p1_give } else { p2_give });
        let mut picks = PlayerMap::with_value(DraftPick::First);
        for (player, &choice) in gifts.iter() {
            picks[player] = DraftPick::from_index(player, choice)?;
        }
        Ok(self.open(config, picks))
    }

    fn open(self, config: GameConfig, gifts: PlayerMap<DraftPick>) -> GameState {
        let mut kept = self.offers;
        let (p1, p2) = kept.both_mut();
        std::mem::swap(
            &mut p1[gifts[PlayerId::P1].index()],
            &mut p2[gifts[PlayerId::P2].index()],
        );

        let mut rng = GameRng::new(self.seed).for_context("draft");
        let boards = kept.map(|_, cards| {
            let mut hand = [Card::Mountain; ROW_SIZE];
            hand[..DRAFT_CARDS].copy_from_slice(cards);
            rng.shuffle(&mut hand);
            Board::from_rows([Card::Mountain; ROW_SIZE], hand)
        });

        debug!(
            "dealt seed {}: river tops {:?}, draft gifts {:?}",
            self.seed,
            self.river.tops(),
            gifts
        );
        GameState::with_config(config, self.seed, boards, self.river)
    }
}

/// Which of the two offered cards a player gives away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftPick {
    First,
    Second,
}

impl DraftPick {
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            DraftPick::First => 0,
            DraftPick::Second => 1,
        }
    }

    /// Validate a raw choice index.
    pub fn from_index(player: PlayerId, choice: usize) -> Result<Self, SetupError> {
        match choice {
            0 => Ok(DraftPick::First),
            1 => Ok(DraftPick::Second),
            _ => Err(SetupError::InvalidDraftChoice { player, choice }),
        }
    }

    fn random(rng: &mut GameRng) -> Self {
        if rng.gen_range_usize(0..DRAFT_CARDS) == 0 {
            DraftPick::First
        } else {
            DraftPick::Second
        }
    }
}

fn random_picks(seed: u64) -> PlayerMap<DraftPick> {
    let mut rng = GameRng::new(seed).for_context("draft-choice");
    PlayerMap::new(|_| DraftPick::random(&mut rng))
}

/// Builder for a fresh game.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn turn_limit(mut self, turns: u32) -> Self {
        self.config = self.config.with_turn_limit(turns);
        self
    }

    /// Fix both players' draft gifts instead of drawing them.
    #[must_use]
    pub fn draft_choices(mut self, p1: usize, p2: usize) -> Self {
        self.config = self.config.with_draft_choices(p1, p2);
        self
    }

    /// Deal and resolve the draft.
    pub fn build(self, seed: u64) -> Result<GameState, SetupError> {
        let draft = Draft::deal(seed);
        match self.config.draft {
            DraftMode::Fixed { p1, p2 } => draft.resolve_with(self.config, p1, p2),
            DraftMode::Random => Ok(draft.open(self.config, random_picks(seed))),
        }
    }
}

/// A new game from `seed` with both draft gifts drawn at random.
#[must_use]
pub fn create_initial_state(seed: u64) -> GameState {
    Draft::deal(seed).open(GameConfig::default(), random_picks(seed))
}
