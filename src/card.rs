//! Card types.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Card suit.
///
/// Suits travel over the wire as their numeric code (1 through 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts = 1,
    /// Spades.
    Spades = 2,
    /// Clubs.
    Clubs = 3,
    /// Diamonds.
    Diamonds = 4,
}

impl Suit {
    /// All suits in code order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Spades, Self::Clubs, Self::Diamonds];

    /// Looks up a suit by its numeric code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Hearts),
            2 => Some(Self::Spades),
            3 => Some(Self::Clubs),
            4 => Some(Self::Diamonds),
            _ => None,
        }
    }

    /// Returns the numeric code of the suit.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the display symbol of the suit.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Hearts => "💕",
            Self::Spades => "♠️",
            Self::Clubs => "♣️",
            Self::Diamonds => "♦️",
        }
    }
}

/// A playing card.
///
/// The rank serializes under the `value` key: `{"value": 1, "suit": 2}` is
/// the ace of spades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[serde(rename = "value")]
    pub rank: u8,
    /// The numeric suit code (see [`Suit`]).
    pub suit: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted and score like face cards.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            rank,
            suit: suit.code(),
        }
    }

    /// Returns the suit, or `None` for an unknown suit code.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        Suit::from_code(self.suit)
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }
}

fn rank_label(rank: u8) -> Option<&'static str> {
    match rank {
        1 => Some("A"),
        11 => Some("J"),
        12 => Some("Q"),
        13 => Some("K"),
        _ => None,
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match rank_label(self.rank) {
            Some(label) => f.write_str(label)?,
            None => write!(f, "{}", self.rank)?,
        }
        f.write_str(" ")?;
        match self.suit() {
            Some(suit) => f.write_str(suit.symbol()),
            None => write!(f, "{}", self.suit),
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
