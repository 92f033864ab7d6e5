//! The River: five shared decks that feed Develop draws.
//!
//! Each deck is consumed from the top; only the top card is observable.
//! Cards leaving play (developed-over slots, discarded river tops) are pushed
//! onto the removed pile so every card stays accounted for.
//!
//! Decks use `im::Vector` so cloning a game state for a rollout is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Number of river decks.
pub const NUM_DECKS: usize = 5;

/// Cards dealt to each deck at setup.
pub const CARDS_PER_DECK: usize = 6;

/// Five ordered decks plus the pile of cards removed from play.
///
/// ## Usage
///
/// ```
/// use naishi_engine::cards::Card;
/// use naishi_engine::zones::River;
///
/// let mut river = River::from_decks([
///     vec![Card::Naishi, Card::Fort],
///     vec![Card::Monk],
///     vec![],
///     vec![Card::Torii],
///     vec![Card::Ronin],
/// ]);
///
/// assert_eq!(river.top(0), Some(Card::Naishi));
/// assert_eq!(river.pop_top(0), Some(Card::Naishi));
/// assert_eq!(river.top(0), Some(Card::Fort));
/// assert_eq!(river.empty_decks(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct River {
    /// Front of each vector is the top of the deck.
    decks: [Vector<Card>; NUM_DECKS],
    removed: Vector<Card>,
}

impl River {
    /// Build a river from explicit decks, first element on top.
    #[must_use]
    pub fn from_decks(decks: [Vec<Card>; NUM_DECKS]) -> Self {
        Self {
            decks: decks.map(|deck| deck.into_iter().collect()),
            removed: Vector::new(),
        }
    }

    /// Deal `CARDS_PER_DECK` cards per deck from the front of `cards`.
    ///
    /// Returns the river and whatever was left undealt.
    #[must_use]
    pub fn deal(cards: &[Card]) -> (Self, Vec<Card>) {
        let mut chunks = cards.chunks(CARDS_PER_DECK);
        let decks = std::array::from_fn(|_| {
            chunks
                .next()
                .map(|chunk| chunk.iter().copied().collect::<Vector<Card>>())
                .unwrap_or_default()
        });
        let dealt = (NUM_DECKS * CARDS_PER_DECK).min(cards.len());
        (
            Self {
                decks,
                removed: Vector::new(),
            },
            cards[dealt..].to_vec(),
        )
    }

    /// Top card of a deck without removing it.
    #[must_use]
    pub fn top(&self, deck: usize) -> Option<Card> {
        self.decks.get(deck)?.front().copied()
    }

    /// Remove and return the top card of a deck.
    pub fn pop_top(&mut self, deck: usize) -> Option<Card> {
        self.decks.get_mut(deck)?.pop_front()
    }

    /// Put a card into the removed-from-play pile.
    pub fn push_discard(&mut self, card: Card) {
        self.removed.push_back(card);
    }

    /// Cards remaining in a deck (0 for an unknown index).
    #[must_use]
    pub fn len(&self, deck: usize) -> usize {
        self.decks.get(deck).map_or(0, Vector::len)
    }

    #[must_use]
    pub fn is_empty(&self, deck: usize) -> bool {
        self.len(deck) == 0
    }

    /// Remaining cards per deck.
    #[must_use]
    pub fn counts(&self) -> [usize; NUM_DECKS] {
        std::array::from_fn(|deck| self.decks[deck].len())
    }

    /// Top card of every deck.
    #[must_use]
    pub fn tops(&self) -> [Option<Card>; NUM_DECKS] {
        std::array::from_fn(|deck| self.top(deck))
    }

    /// Number of fully depleted decks.
    #[must_use]
    pub fn empty_decks(&self) -> usize {
        self.decks.iter().filter(|deck| deck.is_empty()).count()
    }

    /// Whether at least one deck still has cards.
    #[must_use]
    pub fn any_cards(&self) -> bool {
        self.empty_decks() < NUM_DECKS
    }

    /// Cards removed from play so far, oldest first.
    #[must_use]
    pub fn removed(&self) -> &Vector<Card> {
        &self.removed
    }

    /// Total cards held by the river, decks and removed pile together.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.decks.iter().map(Vector::len).sum::<usize>() + self.removed.len()
    }

    /// Every card the river holds: each deck top to bottom, then the removed
    /// pile.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.decks
            .iter()
            .flat_map(|deck| deck.iter().copied())
            .chain(self.removed.iter().copied())
    }

    /// Exchange the top cards of two decks.
    ///
    /// Returns `false` (and changes nothing) if either deck is empty or the
    /// indices are equal or out of range.
    pub fn swap_tops(&mut self, a: usize, b: usize) -> bool {
        if a == b || self.is_empty(a) || self.is_empty(b) {
            return false;
        }
        let top_a = self.decks[a][0];
        let top_b = self.decks[b][0];
        self.decks[a].set(0, top_b);
        self.decks[b].set(0, top_a);
        true
    }

    /// Remove the top cards of two decks into the removed pile.
    ///
    /// Empty decks are skipped. Returns the removed cards.
    pub fn discard_tops(&mut self, a: usize, b: usize) -> SmallVec<[Card; 2]> {
        let mut discarded = SmallVec::new();
        for deck in [a, b] {
            if let Some(card) = self.pop_top(deck) {
                self.push_discard(card);
                discarded.push(card);
            }
        }
        discarded
    }
}
