//! Keyword-based reply selection for the chat assistant.
//!
//! Incoming messages are matched against a fixed, ordered table of keyword
//! patterns. The first pattern that matches anywhere in the normalized
//! message decides the topic; messages that match nothing fall through to
//! [`Category::Default`]. Patterns overlap on purpose (a message containing
//! both "reach" and "question" is a contact inquiry, not a help request) —
//! the table order is the tie-breaker and must not be reshuffled.

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::chatbot::responses::{get_responses, ResponseTable};

/// The fixed set of topics the assistant can answer about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Greeting,
    About,
    Projects,
    Contact,
    Skills,
    Experience,
    Navigate,
    Help,
    Default,
}

impl Category {
    /// All categories, in match-priority order (`Default` last).
    pub const ALL: [Category; 9] = [
        Category::Greeting,
        Category::About,
        Category::Projects,
        Category::Contact,
        Category::Skills,
        Category::Experience,
        Category::Navigate,
        Category::Help,
        Category::Default,
    ];

    /// Lowercase name, matching the keys of the embedded response table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Greeting => "greeting",
            Category::About => "about",
            Category::Projects => "projects",
            Category::Contact => "contact",
            Category::Skills => "skills",
            Category::Experience => "experience",
            Category::Navigate => "navigate",
            Category::Help => "help",
            Category::Default => "default",
        }
    }
}

/// Ordered keyword table. Evaluated top to bottom, first match wins.
/// `Category::Default` carries no pattern and is the fallthrough.
static MATCH_RULES: Lazy<Vec<(Category, Regex)>> = Lazy::new(|| {
    vec![
        (Category::Greeting, Regex::new(r"hello|hi|hey|greet").unwrap()),
        (
            Category::About,
            Regex::new(r"about|who|kelvin|biography|background").unwrap(),
        ),
        (
            Category::Projects,
            Regex::new(r"project|work|portfolio|built|create").unwrap(),
        ),
        (
            Category::Contact,
            Regex::new(r"contact|reach|email|phone|call|message").unwrap(),
        ),
        (
            Category::Skills,
            Regex::new(r"skill|know|expertise|technology|tech|language").unwrap(),
        ),
        (
            Category::Experience,
            Regex::new(r"experience|career|worked|job|role").unwrap(),
        ),
        (
            Category::Navigate,
            Regex::new(r"navigate|where|how|site|page|menu").unwrap(),
        ),
        (Category::Help, Regex::new(r"help|assist|support|question").unwrap()),
    ]
});

/// Resolve a raw user message to a [`Category`].
///
/// The message is trimmed and lowercased, then tested against the keyword
/// table in priority order. Total: every input resolves to some category,
/// the empty string included (it matches nothing and yields
/// [`Category::Default`]).
pub fn classify(utterance: &str) -> Category {
    let normalized = utterance.trim().to_lowercase();
    MATCH_RULES
        .iter()
        .find(|(_, pattern)| pattern.is_match(&normalized))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Default)
}

/// Classify `utterance` against `table` and draw one reply variant uniformly
/// at random from the resolved category.
pub fn select_from(table: &ResponseTable, utterance: &str) -> (Category, String) {
    let category = classify(utterance);
    let variants = table.variants(category);
    let reply = variants
        .choose(&mut rand::thread_rng())
        .expect("response table has at least one variant per category")
        .clone();
    (category, reply)
}

/// Pick a reply for `utterance` from the default embedded response table.
pub fn select_response(utterance: &str) -> String {
    select_from(get_responses(), utterance).1
}
