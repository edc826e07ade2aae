//! Deck construction and shuffling.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// Builds the 52 rank and suit combinations in suit-major order.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in 1..=13 {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

/// Builds a full deck in uniformly random order.
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = full_deck();
    cards.shuffle(rng);
    cards
}

/// Supplies the draw pile for a fresh round.
///
/// The request handler asks for a new deck only when no round is in
/// progress. Tests implement this to rig the draw order.
pub trait DeckSource {
    /// Returns a new draw pile. Cards are dealt from the end.
    fn new_deck(&mut self) -> Vec<Card>;
}

/// A [`DeckSource`] producing shuffled 52-card decks.
#[derive(Debug, Clone)]
pub struct ShuffledDeck {
    rng: ChaCha8Rng,
}

impl ShuffledDeck {
    /// Creates a deck source with the given seed.
    ///
    /// The same seed yields the same sequence of decks.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a deck source seeded from the operating system.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }
}

impl DeckSource for ShuffledDeck {
    fn new_deck(&mut self) -> Vec<Card> {
        shuffled_deck(&mut self.rng)
    }
}
