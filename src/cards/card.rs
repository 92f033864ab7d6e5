//! The card vocabulary.
//!
//! Eleven playable kinds make up the 34-card deck. `Mountain` is filler that
//! only enters the game at setup.

use serde::{Deserialize, Serialize};

/// Number of cards in the shuffled play deck.
pub const DECK_SIZE: usize = 34;

/// Mountains injected into each player's hand at setup.
pub const MOUNTAINS_PER_PLAYER: usize = 3;

/// Feature value used for an absent card (empty river deck).
pub const EMPTY_CARD_CODE: u8 = 12;

/// A card kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    Naishi,
    Councellor,
    Sentinel,
    Fort,
    Monk,
    Torii,
    Knight,
    Banner,
    RiceFields,
    Ronin,
    Ninja,
    Mountain,
}

impl Card {
    /// Every kind, in encoding order.
    pub const ALL: [Card; 12] = [
        Card::Naishi,
        Card::Councellor,
        Card::Sentinel,
        Card::Fort,
        Card::Monk,
        Card::Torii,
        Card::Knight,
        Card::Banner,
        Card::RiceFields,
        Card::Ronin,
        Card::Ninja,
        Card::Mountain,
    ];

    /// Kinds a Ninja may copy.
    pub const CHARACTERS: [Card; 6] = [
        Card::Naishi,
        Card::Councellor,
        Card::Sentinel,
        Card::Monk,
        Card::Knight,
        Card::Ronin,
    ];

    /// Copies of this kind in the play deck.
    #[must_use]
    pub const fn deck_count(self) -> usize {
        match self {
            Card::Naishi => 2,
            Card::Councellor => 4,
            Card::Sentinel => 4,
            Card::Fort => 4,
            Card::Monk => 3,
            Card::Torii => 4,
            Card::Knight => 2,
            Card::Banner => 2,
            Card::RiceFields => 5,
            Card::Ronin => 2,
            Card::Ninja => 2,
            Card::Mountain => 0,
        }
    }

    /// The unshuffled 34-card play deck.
    #[must_use]
    pub fn play_deck() -> Vec<Card> {
        let deck: Vec<Card> = Card::ALL
            .iter()
            .flat_map(|&card| std::iter::repeat(card).take(card.deck_count()))
            .collect();
        debug_assert_eq!(deck.len(), DECK_SIZE);
        deck
    }

    /// Character kinds are the ones a Ninja can copy.
    #[must_use]
    pub const fn is_character(self) -> bool {
        matches!(
            self,
            Card::Naishi | Card::Councellor | Card::Sentinel | Card::Monk | Card::Knight | Card::Ronin
        )
    }

    #[must_use]
    pub const fn is_building(self) -> bool {
        matches!(self, Card::Fort | Card::Torii | Card::Banner | Card::RiceFields)
    }

    /// Integer code used in feature vectors.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Card::code`].
    #[must_use]
    pub fn from_code(code: u8) -> Option<Card> {
        Card::ALL.get(code as usize).copied()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Card::Naishi => "Naishi",
            Card::Councellor => "Councellor",
            Card::Sentinel => "Sentinel",
            Card::Fort => "Fort",
            Card::Monk => "Monk",
            Card::Torii => "Torii",
            Card::Knight => "Knight",
            Card::Banner => "Banner",
            Card::RiceFields => "Rice fields",
            Card::Ronin => "Ronin",
            Card::Ninja => "Ninja",
            Card::Mountain => "Mountain",
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
