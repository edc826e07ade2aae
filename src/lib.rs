//! A single-round blackjack game for stateless voice-assistant webhooks.
//!
//! The platform posts a request for every user utterance and keeps the
//! skill's state for it. [`handle_request`] rebuilds the [`Game`] from that
//! state, plays one step, and returns the rendered table together with the
//! state to send back next time.
//!
//! # Example
//!
//! ```
//! use alice_blackjack::{ShuffledDeck, SkillOptions, SkillRequest, handle_request};
//!
//! let request: SkillRequest = serde_json::from_str(
//!     r#"{"request": {"original_utterance": "Ещё"}, "version": "1.0"}"#,
//! )
//! .unwrap();
//! let mut decks = ShuffledDeck::new(42);
//! let response = handle_request(request, &SkillOptions::default(), &mut decks).unwrap();
//! assert!(response.response.text.starts_with("Dealer:"));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod protocol;
pub mod skill;
pub mod verdict;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::{DeckSource, ShuffledDeck};
pub use error::{DrawError, SkillError};
pub use game::{DEALER_STANDS_AT, Game, Seat, Snapshot};
pub use hand::{BLACKJACK, Hand};
pub use options::SkillOptions;
pub use protocol::{Reply, SkillRequest, SkillResponse};
pub use skill::{Action, handle_request};
pub use verdict::Verdict;
