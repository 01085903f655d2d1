use anyhow::{Context, Result};
use std::{convert::Infallible, time::Duration};

use tracing::{error, info};

use crate::assistant::{
    event_lines, stream_answer, HealthCategory, PersonalityMode, ResponseEnvelope, Source,
    CATEGORIES,
};

use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::header,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use futures::StreamExt;
use serde::{Deserialize, Serialize};

use super::{cors_layer, http_cache, log_requests, state::*, ApiError, ServerConfig};

pub const SERVICE_NAME: &str = "AskHerCare API";
pub const CHAT_FALLBACK_MESSAGE: &str =
    "I'm having some trouble right now, but I'm here to help! Could you try asking your question again?";
pub const CHAT_FALLBACK_CONFIDENCE: f64 = 0.5;

const MAX_MESSAGE_CHARS: usize = 1000;
const MAX_SIMPLIFY_CHARS: usize = 5000;
const ENDPOINTS: [&str; 7] = [
    "GET /",
    "GET /health",
    "GET /categories",
    "POST /chat",
    "POST /chat/stream",
    "POST /simplify",
    "POST /explain-term",
];

#[derive(Serialize)]
struct ServiceBanner {
    pub service: &'static str,
    pub version: &'static str,
    pub uptime: String,
    pub docs: &'static [&'static str],
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Serialize)]
struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub environment: String,
    pub ai_service: &'static str,
}

#[derive(Serialize)]
struct CategoriesResponse {
    pub categories: &'static [HealthCategory],
}

#[derive(Deserialize, Debug)]
struct ChatBody {
    pub message: String,
    #[serde(default)]
    pub personality_mode: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

/// A chat body that passed validation.
#[derive(Debug)]
struct ChatRequest {
    pub message: String,
    pub mode: PersonalityMode,
    pub category: Option<String>,
}

impl ChatBody {
    fn validate(self) -> Result<ChatRequest, ApiError> {
        let length = self.message.chars().count();
        if length == 0 || length > MAX_MESSAGE_CHARS {
            return Err(ApiError::Validation(format!(
                "message must be between 1 and {} characters",
                MAX_MESSAGE_CHARS
            )));
        }
        let mode = match self.personality_mode.as_deref() {
            Some(mode) => mode.parse::<PersonalityMode>()?,
            None => PersonalityMode::default(),
        };
        info!(
            mode = %mode,
            category = ?self.category,
            conversation_id = ?self.conversation_id,
            "Chat request"
        );
        Ok(ChatRequest {
            message: self.message,
            mode,
            category: self.category,
        })
    }
}

#[derive(Serialize, Debug)]
struct ChatResponse {
    pub message: String,
    pub sources: Vec<Source>,
    pub confidence: f64,
    pub personality_mode: PersonalityMode,
    pub timestamp: String,
}

impl ChatResponse {
    fn new(message: String, sources: Vec<Source>, confidence: f64, mode: PersonalityMode) -> Self {
        ChatResponse {
            message,
            sources,
            confidence,
            personality_mode: mode,
            timestamp: chrono::Local::now().to_rfc3339(),
        }
    }

    fn from_envelope(envelope: ResponseEnvelope, mode: PersonalityMode) -> Self {
        Self::new(envelope.answer, envelope.sources, envelope.confidence, mode)
    }

    fn fallback(mode: PersonalityMode) -> Self {
        Self::new(
            CHAT_FALLBACK_MESSAGE.to_string(),
            Vec::new(),
            CHAT_FALLBACK_CONFIDENCE,
            mode,
        )
    }
}

#[derive(Deserialize, Debug)]
struct SimplifyBody {
    pub text: String,
}

#[derive(Serialize)]
struct SimplifyResponse {
    pub simplified_text: String,
}

#[derive(Deserialize, Debug)]
struct ExplainTermBody {
    #[serde(default)]
    pub term: Option<String>,
}

#[derive(Serialize)]
struct ExplainTermResponse {
    pub term: String,
    pub explanation: String,
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    Json(ServiceBanner {
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        uptime: format_uptime(state.start_time.elapsed()),
        docs: &ENDPOINTS,
    })
}

async fn health(State(state): State<ServerState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        environment: state.config.environment.clone(),
        ai_service: state.composer.gate().status(),
    })
}

async fn get_categories() -> impl IntoResponse {
    Json(CategoriesResponse {
        categories: &CATEGORIES,
    })
}

async fn chat(
    State(composer): State<GuardedComposer>,
    payload: Result<Json<ChatBody>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(body) = payload?;
    let request = body.validate()?;
    let mode = request.mode;

    // A panic inside composition surfaces as a JoinError here.
    let composed = tokio::spawn(async move {
        composer
            .compose(&request.message, request.mode, request.category.as_deref())
            .await
    })
    .await;

    let response = match composed {
        Ok(envelope) => ChatResponse::from_envelope(envelope, mode),
        Err(err) => {
            error!("Error in chat endpoint: {}", err);
            ChatResponse::fallback(mode)
        }
    };
    Ok(Json(response))
}

async fn chat_stream(
    State(state): State<ServerState>,
    payload: Result<Json<ChatBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload?;
    let request = body.validate()?;

    let composer = state.composer.clone();
    let chunks = stream_answer(
        async move {
            composer
                .compose(&request.message, request.mode, request.category.as_deref())
                .await
        },
        state.config.stream_pacing,
    );
    let body = Body::from_stream(event_lines(chunks).map(Ok::<_, Infallible>));

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
            (header::CONNECTION, "keep-alive"),
        ],
        body,
    )
        .into_response())
}

async fn simplify(
    State(rewriter): State<GuardedRewriter>,
    payload: Result<Json<SimplifyBody>, JsonRejection>,
) -> Result<Json<SimplifyResponse>, ApiError> {
    let Json(body) = payload?;
    let length = body.text.chars().count();
    if length == 0 || length > MAX_SIMPLIFY_CHARS {
        return Err(ApiError::Validation(format!(
            "text must be between 1 and {} characters",
            MAX_SIMPLIFY_CHARS
        )));
    }

    Ok(Json(SimplifyResponse {
        simplified_text: rewriter.simplify(&body.text).await,
    }))
}

async fn explain_term(
    State(rewriter): State<GuardedRewriter>,
    payload: Result<Json<ExplainTermBody>, JsonRejection>,
) -> Result<Json<ExplainTermResponse>, ApiError> {
    let Json(body) = payload?;
    let term = match body.term {
        Some(term) if !term.trim().is_empty() => term,
        _ => return Err(ApiError::Validation("Term is required".to_string())),
    };

    let explanation = rewriter.explain(&term).await;
    Ok(Json(ExplainTermResponse { term, explanation }))
}

pub fn make_app(
    config: ServerConfig,
    composer: GuardedComposer,
    rewriter: GuardedRewriter,
) -> Result<Router> {
    let state = ServerState::new(config.clone(), composer, rewriter);

    let static_routes: Router = Router::new()
        .route("/categories", get(get_categories))
        .layer(middleware::from_fn_with_state(
            config.categories_cache_age_sec,
            http_cache,
        ));

    let app: Router = Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/chat", post(chat))
        .route("/chat/stream", post(chat_stream))
        .route("/simplify", post(simplify))
        .route("/explain-term", post(explain_term))
        .with_state(state.clone())
        .merge(static_routes)
        .layer(middleware::from_fn_with_state(state, log_requests))
        .layer(cors_layer(&config.allowed_origins));

    Ok(app)
}

pub async fn run_server(
    config: ServerConfig,
    composer: GuardedComposer,
    rewriter: GuardedRewriter,
) -> Result<()> {
    let address = config.bind_address();
    let app = make_app(config, composer, rewriter)?;

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to {}", address))?;
    info!("Listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
