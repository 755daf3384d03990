//! Canned reply variants for the chat assistant.
//!
//! Replies are stored per [`Category`] as a list of interchangeable variants.
//! The default table is embedded at compile time from `responses.json` and
//! parsed once into a process-wide read-only instance; a custom table can be
//! loaded from a JSON file with the same shape (an object keyed by lowercase
//! category name, each value an array of strings).

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::chatbot::selector::Category;

/// Default reply table JSON, embedded at compile time.
pub const EMBEDDED_RESPONSES_JSON: &str = include_str!("responses.json");

/// Immutable table of reply variants, keyed by category.
#[derive(Debug, Clone)]
pub struct ResponseTable {
    /// Reply variants per category. Every category has at least one entry.
    responses: HashMap<Category, Vec<String>>,
    /// Optional path of the JSON file this table was loaded from.
    pub response_file: Option<String>,
}

impl Default for ResponseTable {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ResponseTable {
    /// Create a table from the given JSON file, or from the embedded
    /// defaults when no file is given.
    ///
    /// # Panics
    /// Panics if the file cannot be read or either source fails validation.
    /// The embedded table is checked at startup the same way a custom one is.
    pub fn new(response_file: Option<String>) -> Self {
        let mut table = match &response_file {
            Some(path) => Self::from_file(path)
                .unwrap_or_else(|err| panic!("Response file '{}': {}", path, err)),
            None => Self::from_json(EMBEDDED_RESPONSES_JSON)
                .expect("Error decoding embedded responses.json."),
        };
        table.response_file = response_file;
        table
    }

    /// Parse a table from a JSON string, validating that every category is
    /// present with at least one variant.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let responses: HashMap<Category, Vec<String>> = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse response table JSON: {}", e))?;

        for category in Category::ALL {
            match responses.get(&category) {
                Some(variants) if !variants.is_empty() => {}
                Some(_) => {
                    return Err(format!(
                        "Category '{}' has an empty variant list",
                        category.as_str()
                    ))
                }
                None => {
                    return Err(format!("Category '{}' is missing", category.as_str()))
                }
            }
        }

        Ok(Self {
            responses,
            response_file: None,
        })
    }

    /// Read and parse a table from a JSON file on disk.
    pub fn from_file(path: &str) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read response file: {}", e))?;
        Self::from_json(&content)
    }

    /// The reply variants for `category`. Never empty.
    pub fn variants(&self, category: Category) -> &[String] {
        self.responses
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Global cached table built from the embedded defaults.
static DEFAULT_TABLE: OnceLock<ResponseTable> = OnceLock::new();

/// Get the process-wide default response table.
pub fn get_responses() -> &'static ResponseTable {
    DEFAULT_TABLE.get_or_init(|| ResponseTable::new(None))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_embedded_table_covers_every_category() {
        let table = get_responses();
        for category in Category::ALL {
            assert!(
                !table.variants(category).is_empty(),
                "category '{}' has no variants",
                category.as_str()
            );
        }
    }

    #[test]
    fn test_embedded_greeting_variants() {
        let table = ResponseTable::default();
        let greetings = table.variants(Category::Greeting);
        assert_eq!(greetings.len(), 2);
        assert!(greetings[0].contains("Kelvin"));
    }

    #[test]
    fn test_from_json_rejects_missing_category() {
        let result = ResponseTable::from_json(r#"{"greeting": ["hi"]}"#);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("missing"));
    }

    #[test]
    fn test_from_json_rejects_empty_variant_list() {
        let mut raw: serde_json::Value =
            serde_json::from_str(EMBEDDED_RESPONSES_JSON).unwrap();
        raw["help"] = serde_json::json!([]);
        let result = ResponseTable::from_json(&raw.to_string());
        assert!(result.unwrap_err().contains("empty variant list"));
    }

    #[test]
    fn test_from_json_rejects_invalid_json() {
        assert!(ResponseTable::from_json("not json").is_err());
    }

    #[test]
    fn test_from_file_loads_custom_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut raw: serde_json::Value =
            serde_json::from_str(EMBEDDED_RESPONSES_JSON).unwrap();
        raw["greeting"] = serde_json::json!(["Welcome!"]);
        file.write_all(raw.to_string().as_bytes()).unwrap();

        let table = ResponseTable::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(table.variants(Category::Greeting), ["Welcome!".to_string()]);
    }

    #[test]
    fn test_from_file_missing_path_errors() {
        assert!(ResponseTable::from_file("/nonexistent/replies.json").is_err());
    }
}
