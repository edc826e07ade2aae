use crate::error::DrawError;

use super::{Game, Seat};

impl Game {
    /// Deals the opening cards: one to the dealer, then two to the player.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if the pile runs out. Cards drawn
    /// before that stay dealt.
    pub fn deal_initial(&mut self) -> Result<(), DrawError> {
        self.draw(Seat::Dealer)?;
        self.draw(Seat::Player)?;
        self.draw(Seat::Player)?;
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if the pile is empty.
    pub fn hit(&mut self) -> Result<(), DrawError> {
        self.draw(Seat::Player)?;
        Ok(())
    }
}
