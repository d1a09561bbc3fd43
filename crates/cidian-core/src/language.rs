use std::collections::HashMap;

use cidian_config::output::DirectionSetting;
use serde::Serialize;

/// Text processing and lookup interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "zh", "ja", ...)
    fn language_code(&self) -> &str;

    /// Normalize text (Unicode normalization, case folding)
    fn normalize(&self, text: &str) -> String;

    /// Break text into processable tokens
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Look up a token in the dictionary
    fn lookup(&self, token: &Token) -> Vec<LookupResult>;

    /// Resolve a whole query and render it for display
    fn translate(&self, text: &str, direction: Direction) -> String;

    /// Per-token lookups for the whole text, tagged with the language
    fn lookup_report(&self, text: &str) -> LookupReport {
        let tokens = self
            .tokenize(text)
            .into_iter()
            .map(|token| {
                let results = self.lookup(&token);
                TokenReport {
                    surface: token.surface,
                    normalized: token.normalized,
                    position: token.position,
                    results,
                }
            })
            .collect();

        LookupReport {
            language: self.language_code().to_string(),
            tokens,
        }
    }
}

/// Translation direction of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    /// Romanized pronunciation in, headwords with glosses out
    PronunciationToGloss,
    /// Gloss in, headwords with pronunciation out
    GlossToPronunciation,
}

impl From<DirectionSetting> for Direction {
    fn from(setting: DirectionSetting) -> Self {
        match setting {
            DirectionSetting::PronunciationToGloss => Direction::PronunciationToGloss,
            DirectionSetting::GlossToPronunciation => Direction::GlossToPronunciation,
        }
    }
}

impl From<Direction> for DirectionSetting {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::PronunciationToGloss => DirectionSetting::PronunciationToGloss,
            Direction::GlossToPronunciation => DirectionSetting::GlossToPronunciation,
        }
    }
}

impl Direction {
    /// Parse the short names used on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "pinyin" | "pronunciation" | "p2g" => Some(Direction::PronunciationToGloss),
            "english" | "gloss" | "g2p" => Some(Direction::GlossToPronunciation),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::PronunciationToGloss => "Pinyin to English",
            Direction::GlossToPronunciation => "English to Chinese and Pinyin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub normalized: String,
    pub position: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct LookupResult {
    pub term: String,
    pub readings: Vec<String>,
    pub definitions: Vec<String>,
    pub metadata: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenReport {
    pub surface: String,
    pub normalized: String,
    pub position: usize,
    pub results: Vec<LookupResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    pub language: String,
    pub tokens: Vec<TokenReport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_names() {
        assert_eq!(Direction::from_name("Pinyin"), Some(Direction::PronunciationToGloss));
        assert_eq!(Direction::from_name("english"), Some(Direction::GlossToPronunciation));
        assert_eq!(Direction::from_name("klingon"), None);
    }

    #[test]
    fn direction_from_setting() {
        assert_eq!(
            Direction::from(DirectionSetting::GlossToPronunciation),
            Direction::GlossToPronunciation
        );
    }
}
