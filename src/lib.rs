//! # Portfolio Backend
//!
//! Backend service for a personal portfolio site. Serves the site's
//! read-only data (bio, projects, contact details) as JSON, validates
//! contact form submissions, and answers chat widget messages with a
//! scripted keyword-matching assistant.
//!
//! The interesting logic lives in two places: [`chatbot`], the ordered
//! keyword cascade that resolves a free-text message to a canned reply, and
//! [`contact`], the field-level validation behind the contact endpoint.
//! Everything else is routing.

pub mod chatbot;
pub mod config;
pub mod contact;
pub mod error;
pub mod portfolio;
pub mod server;

pub use chatbot::{classify, select_response, Category};
pub use contact::{ContactSubmission, FieldError};
pub use error::ApiError;
pub use server::{app_router, AppState};

/// Crate version, reported by the health endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
