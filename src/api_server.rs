// Axum server for the portfolio
//
// Purpose: serve rendered pages (full documents, partials, JSON views) and the quiz
// Content is immutable after startup, so rendered HTML is cached per (kind, lang, page)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Redirect},
    routing::{get, post},
    Form, Router,
};

use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use moka::future::Cache;
use rand::Rng;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{ServerConfig, MAX_CACHE_TTL_SECS};
use crate::content::{ContentStore, Language};
use crate::game::{self, QuizBank, QuizSession};
use crate::render::{self, build_page_section, Page};
use crate::web::{render_document, LinkStyle};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContentStore>,
    pub quiz: Arc<QuizBank>,
    pub cache: Cache<String, String>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> anyhow::Result<Self> {
        tracing::info!("Loading content store...");
        let store = match &config.content_path {
            Some(path) => ContentStore::load(path)?,
            None => {
                tracing::info!("CONTENT_PATH not set, using embedded portfolio");
                ContentStore::embedded()?
            }
        };

        tracing::info!("Loading quiz bank...");
        let quiz = QuizBank::shared()
            .map_err(|e| anyhow::anyhow!("quiz bank: {}", e))?
            .clone();
        tracing::info!("Quiz bank has {} questions", quiz.len());

        Ok(Self::from_parts(store, quiz, config))
    }

    pub fn from_parts(store: ContentStore, quiz: QuizBank, config: ServerConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1_000)
            .time_to_live(Duration::from_secs(
                config.cache_ttl_secs.min(MAX_CACHE_TTL_SECS),
            ))
            .build();

        Self {
            store: Arc::new(store),
            quiz: Arc::new(quiz),
            cache,
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        .route("/", get(home))

        // Quiz (POST-only; state travels in the form)
        .route("/game/:lang", post(play_game))

        // Dispatcher output without the document shell
        .route("/partials/:lang/:page", get(get_partial))

        // Projected view models (JSON)
        .route("/api/:lang/:page", get(get_page_json))

        // Full documents
        .route("/:lang/:page", get(get_page))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn home(State(state): State<AppState>) -> Redirect {
    Redirect::temporary(&format!("/{}/{}", state.config.default_lang, Page::About))
}

async fn get_page(
    State(state): State<AppState>,
    Path((lang, page)): Path<(String, String)>,
) -> Result<(StatusCode, Html<String>), AppError> {
    let lang = parse_lang(&lang)?;

    let Ok(known) = page.parse::<Page>() else {
        tracing::debug!("Unknown page '{}', serving placeholder", page);
        let content = render::render_not_found();
        let html = render_document(&page, lang, &state.store, &content, LinkStyle::Server)?;
        return Ok((StatusCode::NOT_FOUND, Html(html)));
    };

    let cache_key = format!("page:{}:{}", lang, known);
    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for {}", cache_key);
        return Ok((StatusCode::OK, Html(cached)));
    }

    let content = render::render_page(known, lang, &state.store);
    let html = render_document(known.slug(), lang, &state.store, &content, LinkStyle::Server)?;
    state.cache.insert(cache_key, html.clone()).await;

    Ok((StatusCode::OK, Html(html)))
}

async fn get_partial(
    State(state): State<AppState>,
    Path((lang, page)): Path<(String, String)>,
) -> Result<(StatusCode, Html<String>), AppError> {
    let lang = parse_lang(&lang)?;

    let Ok(known) = page.parse::<Page>() else {
        return Ok((StatusCode::NOT_FOUND, Html(render::render_not_found().into_string())));
    };

    let cache_key = format!("partial:{}:{}", lang, known);
    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for {}", cache_key);
        return Ok((StatusCode::OK, Html(cached)));
    }

    let html = render::render_page(known, lang, &state.store).into_string();
    state.cache.insert(cache_key, html.clone()).await;

    Ok((StatusCode::OK, Html(html)))
}

async fn get_page_json(
    State(state): State<AppState>,
    Path((lang, page)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let lang = parse_lang(&lang)?;
    let page = page
        .parse::<Page>()
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    let section = build_page_section(page, lang, &state.store);
    let value = serde_json::to_value(&section)
        .map_err(|e| AppError::Internal(format!("JSON serialization error: {}", e)))?;

    Ok(Json(value))
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum GameAction {
    Guess,
    Next,
    Restart,
}

#[derive(Debug, Deserialize)]
struct GameForm {
    seed: u64,
    index: usize,
    score: usize,
    #[serde(default)]
    answered: bool,
    action: GameAction,
    choice: Option<usize>,
}

async fn play_game(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    Form(form): Form<GameForm>,
) -> Result<Html<String>, AppError> {
    let lang = parse_lang(&lang)?;
    let bank = &state.quiz;

    let mut session = QuizSession {
        seed: form.seed,
        index: form.index,
        score: form.score,
        answered: form.answered,
    };

    if !session.is_consistent(bank) {
        return Err(AppError::BadRequest(format!(
            "inconsistent quiz state: question {}, score {}",
            form.index, form.score
        )));
    }

    let outcome = match form.action {
        GameAction::Guess => match form.choice {
            Some(choice) => Some(session.guess(bank, choice)),
            None => Some(game::GuessOutcome::Invalid),
        },
        GameAction::Next => {
            session.advance(bank);
            None
        }
        GameAction::Restart => {
            session.restart(rand::thread_rng().gen_range(1..u64::MAX));
            None
        }
    };
    tracing::debug!("Quiz {:?} -> {:?} ({:?})", form.action, session, outcome);

    let game_html = game::render(&session, bank, lang, outcome);
    let content = render::render_game_page(lang, &state.store, &game_html);

    let html = render_document(Page::Game.slug(), lang, &state.store, &content, LinkStyle::Server)?;
    Ok(Html(html))
}

fn parse_lang(code: &str) -> Result<Language, AppError> {
    code.parse::<Language>()
        .map_err(|e| AppError::NotFound(e.to_string()))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Internal(format!("Template error: {}", e))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(serde_json::json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
