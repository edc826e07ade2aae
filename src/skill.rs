//! One webhook call, one step of the round.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::deck::DeckSource;
use crate::error::{DrawError, SkillError};
use crate::game::{Game, Snapshot};
use crate::options::SkillOptions;
use crate::protocol::{Reply, SkillRequest, SkillResponse, echo_session};

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw one more card.
    Hit,
    /// Stop drawing and let the dealer finish.
    Stand,
    /// Anything else.
    Other,
}

impl Action {
    /// Classifies an utterance by exact match against the configured keywords.
    #[must_use]
    pub fn classify(utterance: &str, options: &SkillOptions) -> Self {
        if utterance == options.hit_keyword {
            Self::Hit
        } else if utterance == options.stand_keyword {
            Self::Stand
        } else {
            Self::Other
        }
    }
}

/// Reads the round in progress from session state.
///
/// Returns `None` when there is no round, which is also how a malformed
/// snapshot is treated.
#[must_use]
pub fn restore_game(session_state: &Map<String, Value>, key: &str) -> Option<Game> {
    let stored = session_state.get(key)?;
    if !stored.as_object()?.contains_key("queue") {
        return None;
    }

    match Snapshot::deserialize(stored) {
        Ok(snapshot) => Some(Game::from(snapshot)),
        Err(err) => {
            warn!(%err, "discarding malformed round snapshot");
            None
        }
    }
}

fn new_round<D>(options: &SkillOptions, decks: &mut D) -> Result<Game, DrawError>
where
    D: DeckSource + ?Sized,
{
    let mut game = Game::new(decks.new_deck());
    info!(cards = game.cards_remaining(), "starting a new round");
    if options.deal_on_new_round {
        game.deal_initial()?;
    }
    Ok(game)
}

/// Handles one webhook call.
///
/// Restores the round from `state.session` (or starts one with a deck from
/// `decks`), applies the utterance, lets the dealer draw below 17, and
/// returns the rendered table. A finished round clears its session state so
/// the next call deals a new one.
///
/// # Errors
///
/// Returns [`SkillError::Draw`] if the draw pile runs out mid-round, and
/// [`SkillError::Encode`] if the round cannot be written back.
pub fn handle_request<D>(
    request: SkillRequest,
    options: &SkillOptions,
    decks: &mut D,
) -> Result<SkillResponse, SkillError>
where
    D: DeckSource + ?Sized,
{
    let SkillRequest {
        request,
        session,
        state,
        version,
    } = request;
    let mut session_state = state.session;

    let mut game = match restore_game(&session_state, &options.state_key) {
        Some(game) => game,
        None => new_round(options, decks)?,
    };

    let action = Action::classify(&request.original_utterance, options);
    debug!(?action, utterance = %request.original_utterance, "utterance classified");

    if action == Action::Hit {
        game.hit()?;
    }
    game.dealer_turn()?;

    let mut answer = game.to_string();

    if action == Action::Stand {
        game.resolve_dealer()?;
    }

    let verdict = game.verdict();
    if verdict.is_final() {
        info!(
            %verdict,
            dealer = game.dealer_score(),
            player = game.player_score(),
            "round over"
        );
        session_state.insert(options.state_key.clone(), Value::Object(Map::new()));
        answer = game.to_string();
    } else {
        let snapshot = serde_json::to_value(game.snapshot())?;
        session_state.insert(options.state_key.clone(), snapshot);
    }

    Ok(SkillResponse {
        response: Reply::say(answer),
        session: echo_session(&session, &options.state_key),
        session_state,
        version,
    })
}
