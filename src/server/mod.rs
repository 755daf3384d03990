//! HTTP server for the portfolio backend.
//!
//! Exposes the portfolio data, contact intake, and chat assistant as a JSON
//! API, optionally serving the static site alongside it.
//!
//! # Endpoints
//!
//! - `GET  /api/health`       — Liveness probe
//! - `GET  /api/portfolio`    — Owner bio, skills, and social links
//! - `GET  /api/projects`     — Project list
//! - `GET  /api/contact-info` — Contact details
//! - `POST /api/contact`      — Contact form intake
//! - `POST /api/chat`         — Scripted chat assistant

pub mod extract;
pub mod routes;

pub use routes::{app_router, app_router_with_static, AppState, ChatRequest, ChatResponse};
