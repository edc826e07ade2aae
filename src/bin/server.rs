//! HTTP transport for the blackjack skill.
//!
//! Accepts the platform's webhook calls on a single route and answers each
//! with the response produced by [`handle_request`]. No round state is kept
//! here; it travels in the request and response bodies.

use std::sync::{Mutex, PoisonError};

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::header::{self, ContentType};
use actix_web::http::{Method, StatusCode};
use actix_web::middleware::DefaultHeaders;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, ResponseError, web};
use alice_blackjack::{ShuffledDeck, SkillError, SkillOptions, SkillRequest, handle_request};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Serves the blackjack skill webhook.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Address to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,
    /// Path the platform posts to.
    #[arg(long, default_value = "/webhook10")]
    route: String,
    /// Utterance that makes the player draw.
    #[arg(long)]
    hit_keyword: Option<String>,
    /// Utterance that ends the player's turn.
    #[arg(long)]
    stand_keyword: Option<String>,
    /// Seed for reproducible decks.
    #[arg(long)]
    seed: Option<u64>,
    /// Log JSON lines instead of compact text.
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn options(&self) -> SkillOptions {
        let mut options = SkillOptions::default();
        if let Some(keyword) = &self.hit_keyword {
            options = options.with_hit_keyword(keyword.as_str());
        }
        if let Some(keyword) = &self.stand_keyword {
            options = options.with_stand_keyword(keyword.as_str());
        }
        options
    }
}

/// Shared, per-process server state.
struct AppState {
    options: SkillOptions,
    decks: Mutex<ShuffledDeck>,
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
struct WebhookError(#[from] SkillError);

impl ResponseError for WebhookError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}

async fn webhook(
    body: web::Json<SkillRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, WebhookError> {
    let result = {
        let mut decks = state.decks.lock().unwrap_or_else(PoisonError::into_inner);
        handle_request(body.into_inner(), &state.options, &mut *decks)
    };

    match result {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(err) => {
            error!(%err, "webhook request failed");
            Err(err.into())
        }
    }
}

async fn preflight() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

fn reject_body(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(%err, "rejecting malformed request body");
    let response = HttpResponse::BadRequest()
        .content_type(ContentType::plaintext())
        .body(err.to_string());
    InternalError::from_response(err, response).into()
}

fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, "*"))
}

fn routes(cfg: &mut web::ServiceConfig, route: &str) {
    cfg.app_data(web::JsonConfig::default().error_handler(reject_body))
        .service(
            web::resource(route)
                .route(web::post().to(webhook))
                .route(web::method(Method::OPTIONS).to(preflight)),
        );
}

fn init_logger(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("alice_blackjack=info,server=info"));

    let registry = tracing_subscriber::registry().with(filter);
    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer.compact()).init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.json_logs);

    let decks = cli
        .seed
        .map_or_else(ShuffledDeck::from_os_rng, ShuffledDeck::new);
    let state = web::Data::new(AppState {
        options: cli.options(),
        decks: Mutex::new(decks),
    });

    info!(host = %cli.host, port = cli.port, route = %cli.route, "listening");

    let route = cli.route.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors_headers())
            .configure(|cfg| routes(cfg, &route))
    })
    .bind((cli.host.as_str(), cli.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use actix_web::http::header;
    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    use super::{AppState, ShuffledDeck, SkillOptions, cors_headers, routes};

    fn state(seed: u64) -> web::Data<AppState> {
        web::Data::new(AppState {
            options: SkillOptions::default(),
            decks: std::sync::Mutex::new(ShuffledDeck::new(seed)),
        })
    }

    fn fresh_request(utterance: &str) -> Value {
        json!({
            "request": {"original_utterance": utterance},
            "session": {"session_id": "s-1", "message_id": 0, "user_id": "u-1", "skill_id": "x"},
            "state": {"session": {}},
            "version": "1.0",
        })
    }

    #[actix_web::test]
    async fn webhook_echoes_session_and_version() {
        let app = test::init_service(
            App::new()
                .app_data(state(7))
                .wrap(cors_headers())
                .configure(|cfg| routes(cfg, "/webhook10")),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/webhook10")
            .set_json(fresh_request("Привет"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["version"], "1.0");
        assert_eq!(body["session"]["session_id"], "s-1");
        assert_eq!(body["session"]["user_id"], "u-1");
        assert!(body["session"].get("skill_id").is_none());
        assert_eq!(body["response"]["end_session"], false);
        assert_eq!(body["response"]["text"], body["response"]["tts"]);
        assert!(body["session_state"].get("blackjack").is_some());
    }

    #[actix_web::test]
    async fn same_seed_deals_same_round() {
        let mut texts = Vec::new();
        for _ in 0..2 {
            let app = test::init_service(
                App::new()
                    .app_data(state(42))
                    .configure(|cfg| routes(cfg, "/webhook10")),
            )
            .await;
            let req = test::TestRequest::post()
                .uri("/webhook10")
                .set_json(fresh_request("Привет"))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            texts.push(body["response"]["text"].clone());
        }
        assert_eq!(texts[0], texts[1]);
    }

    #[actix_web::test]
    async fn responses_carry_cors_headers() {
        let app = test::init_service(
            App::new()
                .app_data(state(1))
                .wrap(cors_headers())
                .configure(|cfg| routes(cfg, "/webhook10")),
        )
        .await;

        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/webhook10")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NO_CONTENT);
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some("*")
        );
    }

    #[actix_web::test]
    async fn malformed_body_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(state(1))
                .configure(|cfg| routes(cfg, "/webhook10")),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/webhook10")
            .insert_header(header::ContentType::json())
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
