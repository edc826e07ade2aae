//! Persisted round state.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::hand::Hand;

use super::Game;

/// The serialized form of a round in progress.
///
/// This is the `{queue, dealer, player}` object stored in the caller's
/// session state between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Draw pile, dealt from the end.
    #[serde(default)]
    pub queue: Vec<Card>,
    /// Dealer's cards in the order drawn.
    #[serde(default)]
    pub dealer: Vec<Card>,
    /// Player's cards in the order drawn.
    #[serde(default)]
    pub player: Vec<Card>,
}

impl Game {
    /// Captures the round as a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            queue: self.queue.clone(),
            dealer: self.dealer.cards().to_vec(),
            player: self.player.cards().to_vec(),
        }
    }
}

impl From<Snapshot> for Game {
    fn from(snapshot: Snapshot) -> Self {
        Self::from_parts(
            snapshot.queue,
            Hand::from(snapshot.dealer),
            Hand::from(snapshot.player),
        )
    }
}

impl From<Game> for Snapshot {
    fn from(game: Game) -> Self {
        Self {
            queue: game.queue,
            dealer: game.dealer.into_cards(),
            player: game.player.into_cards(),
        }
    }
}
