//! Game engine and round state.

use core::fmt;

use tracing::debug;

use crate::card::Card;
use crate::error::DrawError;
use crate::hand::Hand;
use crate::verdict::Verdict;

mod actions;
mod dealer;
pub mod snapshot;

pub use snapshot::Snapshot;

/// Dealer's hand total at which the dealer stops drawing voluntarily.
pub const DEALER_STANDS_AT: u8 = 17;

/// Which hand a card goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The dealer's hand.
    Dealer,
    /// The player's hand.
    Player,
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dealer => "dealer",
            Self::Player => "player",
        })
    }
}

/// A single round of blackjack between one dealer and one player.
///
/// The game owns the draw pile and both hands. Every card of the deck is in
/// exactly one of the three at all times. The game holds nothing between
/// requests; it is rebuilt from a [`Snapshot`] each time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Draw pile. Cards are dealt from the end.
    pub queue: Vec<Card>,
    /// Dealer's hand.
    dealer: Hand,
    /// Player's hand.
    player: Hand,
}

impl Game {
    /// Starts a round with the given draw pile and empty hands.
    #[must_use]
    pub const fn new(queue: Vec<Card>) -> Self {
        Self {
            queue,
            dealer: Hand::new(),
            player: Hand::new(),
        }
    }

    /// Restores a round from its parts.
    #[must_use]
    pub const fn from_parts(queue: Vec<Card>, dealer: Hand, player: Hand) -> Self {
        Self {
            queue,
            dealer,
            player,
        }
    }

    /// Draws a card from the pile into the given seat's hand.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if the draw pile is empty. The
    /// game is left unchanged in that case.
    pub fn draw(&mut self, seat: Seat) -> Result<Card, DrawError> {
        let card = self.queue.pop().ok_or(DrawError::DeckExhausted)?;
        debug!(%seat, %card, remaining = self.queue.len(), "card drawn");
        self.hand_mut(seat).add_card(card);
        Ok(card)
    }

    fn hand_mut(&mut self, seat: Seat) -> &mut Hand {
        match seat {
            Seat::Dealer => &mut self.dealer,
            Seat::Player => &mut self.player,
        }
    }

    /// Returns the given seat's hand.
    #[must_use]
    pub const fn hand(&self, seat: Seat) -> &Hand {
        match seat {
            Seat::Dealer => &self.dealer,
            Seat::Player => &self.player,
        }
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's score.
    #[must_use]
    pub fn dealer_score(&self) -> u8 {
        self.dealer.score()
    }

    /// Returns the player's score.
    #[must_use]
    pub fn player_score(&self) -> u8 {
        self.player.score()
    }

    /// Returns the number of cards left in the draw pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.queue.len()
    }

    /// Returns the current verdict.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        Verdict::decide(self.dealer_score(), self.player_score())
    }
}

/// Renders both hands with their scores and the verdict, one per line.
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dealer: {} ({})", self.dealer, self.dealer_score())?;
        writeln!(f, "Player: {} ({})", self.player, self.player_score())?;
        write!(f, "Verdict: {}", self.verdict())
    }
}
