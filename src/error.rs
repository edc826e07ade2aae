//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while drawing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the draw pile.
    #[error("no cards left in the draw pile")]
    DeckExhausted,
}

/// Errors that can occur while handling a webhook request.
#[derive(Debug, Error)]
pub enum SkillError {
    /// The round needed a card that was not there.
    #[error("round could not continue: {0}")]
    Draw(#[from] DrawError),
    /// The round could not be written back into session state.
    #[error("failed to encode round state: {0}")]
    Encode(#[from] serde_json::Error),
}
