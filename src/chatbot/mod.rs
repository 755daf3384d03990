//! Scripted chat assistant for the portfolio site.
//!
//! The assistant is deliberately not an LLM: it resolves each message to one
//! of nine fixed topics via an ordered keyword table, then answers with one
//! of that topic's canned reply variants, chosen at random.
//!
//! ```text
//! User message
//!   → normalize (trim + lowercase)
//!   → ordered keyword match (first hit wins, else `default`)
//!   → uniform random draw from the topic's reply variants
//! ```

pub mod responses;
pub mod selector;

pub use responses::{get_responses, ResponseTable};
pub use selector::{classify, select_from, select_response, Category};
