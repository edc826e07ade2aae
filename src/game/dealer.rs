use crate::card::Card;
use crate::error::DrawError;

use super::{DEALER_STANDS_AT, Game, Seat};

impl Game {
    /// Returns whether the dealer's policy allows another card.
    ///
    /// The dealer draws below 17 and stands on 17 or more.
    #[must_use]
    pub fn dealer_may_draw(&self) -> bool {
        self.dealer_score() < DEALER_STANDS_AT
    }

    /// Dealer draws one card if the policy allows it.
    ///
    /// Returns the card drawn, if any.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if the dealer must draw and the
    /// pile is empty.
    pub fn dealer_turn(&mut self) -> Result<Option<Card>, DrawError> {
        if self.dealer_may_draw() {
            self.draw(Seat::Dealer).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Forces the dealer to draw until the round is decided.
    ///
    /// This ignores the dealer's 17 threshold. Returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if the pile runs out before a
    /// verdict is reached.
    pub fn resolve_dealer(&mut self) -> Result<Vec<Card>, DrawError> {
        let mut drawn_cards = Vec::new();
        while !self.verdict().is_final() {
            drawn_cards.push(self.draw(Seat::Dealer)?);
        }
        Ok(drawn_cards)
    }
}
