//! Axum route handlers for the portfolio backend.
//!
//! # Routes
//!
//! - `GET  /api/health`       — Liveness probe
//! - `GET  /api/portfolio`    — Owner bio, skills, and social links
//! - `GET  /api/projects`     — Project list
//! - `GET  /api/contact-info` — Contact details
//! - `POST /api/contact`      — Contact form intake (JSON or form-encoded)
//! - `POST /api/chat`         — Scripted chat assistant
//!
//! Unmatched paths get a JSON 404; when a static site directory is
//! configured, unmatched paths are served from it instead and only then
//! fall back to the JSON 404.

use std::path::Path;
use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, State};
use axum::handler::HandlerWithoutStateExt;
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::chatbot::selector::{self, Category};
use crate::chatbot::ResponseTable;
use crate::contact::ContactSubmission;
use crate::error::ApiError;
use crate::portfolio;
use crate::server::extract::JsonOrForm;

/// Request body cap, matching the original deployment's 50mb JSON limit.
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Reply table backing the chat endpoint.
    pub responses: Arc<ResponseTable>,
}

impl AppState {
    /// State with the embedded default reply table.
    pub fn new() -> Self {
        Self::with_response_table(ResponseTable::default())
    }

    /// State with a custom reply table (e.g. loaded from `CHAT_RESPONSES`).
    pub fn with_response_table(table: ResponseTable) -> Self {
        Self {
            responses: Arc::new(table),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the axum router with all API routes and a JSON 404 fallback.
pub fn app_router(state: AppState) -> Router {
    finish(api_routes().fallback(fallback_handler), state)
}

/// Like [`app_router`], but unmatched paths are served from `static_dir`
/// first, with the JSON 404 as the final fallback.
pub fn app_router_with_static(state: AppState, static_dir: &Path) -> Router {
    let static_files =
        ServeDir::new(static_dir).not_found_service(fallback_handler.into_service());
    finish(api_routes().fallback_service(static_files), state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/portfolio", get(portfolio_handler))
        .route("/api/projects", get(projects_handler))
        .route("/api/contact-info", get(contact_info_handler))
        .route("/api/contact", post(contact_handler))
        .route("/api/chat", post(chat_handler))
}

fn finish(router: Router<AppState>, state: AppState) -> Router {
    router
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Current time in RFC 3339 with milliseconds, the API's timestamp format.
fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// GET /api/health — liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "success",
        "message": "Backend server is running",
        "version": crate::VERSION,
        "timestamp": now_rfc3339(),
    }))
}

/// GET /api/portfolio — owner bio, skills, and social links.
async fn portfolio_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "success",
        "data": portfolio::profile(),
    }))
}

/// GET /api/projects — project list in display order.
async fn projects_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "success",
        "data": portfolio::projects(),
    }))
}

/// GET /api/contact-info — contact details.
async fn contact_info_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "success",
        "data": portfolio::contact_details(),
    }))
}

/// POST /api/contact — validate a contact form submission.
///
/// Invalid submissions get a 400 with the full ordered field-error list.
/// Accepted submissions are logged and acknowledged; nothing is persisted.
async fn contact_handler(
    JsonOrForm(submission): JsonOrForm<ContactSubmission>,
) -> Result<Json<Value>, ApiError> {
    submission.validate().map_err(ApiError::Validation)?;

    tracing::info!(
        name = submission.name.trim(),
        email = submission.email.as_str(),
        subject = submission.subject.trim(),
        message = submission.message.trim(),
        "new contact message"
    );

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Your message has been received! We will get back to you soon.",
        "timestamp": now_rfc3339(),
    })))
}

/// A message for the chat assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Raw text the visitor typed. Empty resolves to the default topic.
    #[serde(default)]
    pub message: String,
}

/// The assistant's reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub status: String,
    /// One of the resolved category's canned variants.
    pub reply: String,
    /// The topic the message resolved to.
    pub category: Category,
}

/// POST /api/chat — resolve a visitor message to a canned reply.
async fn chat_handler(
    State(state): State<AppState>,
    JsonOrForm(request): JsonOrForm<ChatRequest>,
) -> Json<ChatResponse> {
    let (category, reply) = selector::select_from(&state.responses, &request.message);
    tracing::debug!(category = category.as_str(), "chat message classified");

    Json(ChatResponse {
        status: "success".to_string(),
        reply,
        category,
    })
}

/// Fallback for unmatched paths — the JSON 404.
async fn fallback_handler(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "status": "error",
            "message": "Endpoint not found",
            "path": uri.path(),
        })),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
