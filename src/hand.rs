//! Dealer and player hand representation.

use core::fmt;

use crate::card::Card;

/// Hand total above which a hand is bust.
pub const BLACKJACK: u8 = 21;

/// Running total at or below which an ace still counts as 11.
const ACE_HIGH_LIMIT: u8 = 10;

const fn card_value(rank: u8, running: u8) -> u8 {
    match rank {
        1 if running <= ACE_HIGH_LIMIT => 11,
        1 => 1,
        2..=10 => rank,
        _ => 10,
    }
}

/// Scores cards strictly in order.
///
/// Each ace counts 11 when the total of the cards before it is at most 10,
/// otherwise 1. Earlier aces are never revalued, so `[A, A]` is 12 and
/// `[A, 10, 10]` is 31.
fn evaluate_cards(cards: &[Card]) -> u8 {
    cards.iter().fold(0u8, |total, card| {
        total.saturating_add(card_value(card.rank, total))
    })
}

/// An ordered, append-only hand of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the score of the hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        evaluate_cards(&self.cards)
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Consumes the hand, returning its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
