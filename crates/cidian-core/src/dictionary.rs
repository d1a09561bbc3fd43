use std::collections::HashMap;

use crate::language::LookupResult;

/// Dictionary lookup operations
pub trait Dictionary: Send + Sync {
    /// Search dictionary by exact key match
    fn lookup_exact(&self, query: &str) -> Vec<&dyn DictionaryEntry>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

/// Individual dictionary entry
pub trait DictionaryEntry: Send + Sync {
    /// Main headword/term
    fn headword(&self) -> String;

    /// All possible readings/pronunciations
    fn readings(&self) -> Vec<String>;

    /// All definitions
    fn definitions(&self) -> Vec<String>;

    /// Language-specific data as JSON
    fn metadata(&self) -> serde_json::Value;

    /// Convert to generic lookup result
    fn to_lookup_result(&self) -> LookupResult {
        let mut metadata = HashMap::new();
        if let serde_json::Value::Object(map) = self.metadata() {
            for (key, value) in map {
                let value = match value {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                metadata.insert(key, value);
            }
        }

        LookupResult {
            term: self.headword(),
            readings: self.readings(),
            definitions: self.definitions(),
            metadata,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryMetadata {
    pub name: String,
    pub language: String,
    pub entry_count: usize,
    pub reading_keys: usize,
    pub definition_keys: usize,
}

/// Reasons a dictionary load attempt is abandoned. Both are terminal for the
/// attempt; the previously published dictionary stays in place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("Dictionary source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Dictionary source is empty")]
    EmptySource,
}
