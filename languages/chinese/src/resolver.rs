//! Query resolution against a built [`CedictIndex`].
//!
//! Pinyin queries try, in order: the whole query as one compound, then at
//! each position the current token joined with the next, then the token
//! alone, then the token with its tone marks stripped. Gloss queries look up
//! each token on its own. Unmatched tokens are echoed back verbatim.

use std::sync::Arc;

use cidian_config::output::StyleSetting;
use cidian_core::language::Direction;

use crate::dictionary::{CedictEntry, CedictIndex};
use crate::tone::strip_tone_marks;

/// Separators used when rendering a [`Resolution`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputStyle {
    /// Between homophones within one result
    pub line_break: &'static str,
    /// Between results
    pub paragraph_break: &'static str,
    pub escape_html: bool,
}

impl OutputStyle {
    pub const PLAIN: OutputStyle = OutputStyle {
        line_break: "\n",
        paragraph_break: "\n\n",
        escape_html: false,
    };

    pub const HTML: OutputStyle = OutputStyle {
        line_break: "<br>",
        paragraph_break: "<br><br>",
        escape_html: true,
    };
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self::PLAIN
    }
}

impl From<StyleSetting> for OutputStyle {
    fn from(setting: StyleSetting) -> Self {
        match setting {
            StyleSetting::Plain => Self::PLAIN,
            StyleSetting::Html => Self::HTML,
        }
    }
}

/// One result position of a query
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    /// Every entry stored under the matched key
    Matched(&'a [Arc<CedictEntry>]),
    /// Token with no match, echoed back
    Untranslated(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<'a> {
    pub direction: Direction,
    pub segments: Vec<Segment<'a>>,
}

impl Resolution<'_> {
    pub fn render(&self, style: OutputStyle) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Matched(entries) => entries
                    .iter()
                    .map(|entry| format_entry(entry, self.direction, style))
                    .collect::<Vec<_>>()
                    .join(style.line_break),
                Segment::Untranslated(word) => escape(word, style),
            })
            .collect::<Vec<_>>()
            .join(style.paragraph_break)
    }

    pub fn is_fully_matched(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Matched(_)))
    }
}

pub fn resolve<'a>(index: &'a CedictIndex, input: &str, direction: Direction) -> Resolution<'a> {
    match direction {
        Direction::PronunciationToGloss => resolve_pronunciation_query(index, input),
        Direction::GlossToPronunciation => resolve_definition_query(index, input),
    }
}

/// Pinyin in, headwords with glosses out
pub fn resolve_pronunciation_query<'a>(index: &'a CedictIndex, input: &str) -> Resolution<'a> {
    let words = split_words(input);
    let mut segments = Vec::new();

    if words.is_empty() {
        return Resolution {
            direction: Direction::PronunciationToGloss,
            segments,
        };
    }

    // Whole phrase wins over any per-token match
    if let Some(entries) = index.lookup_by_pronunciation(&words.concat()) {
        segments.push(Segment::Matched(entries));
        return Resolution {
            direction: Direction::PronunciationToGloss,
            segments,
        };
    }

    let mut i = 0;
    while i < words.len() {
        if let Some(next) = words.get(i + 1) {
            let pair = format!("{}{}", words[i], next);
            if let Some(entries) = index.lookup_by_pronunciation(&pair) {
                segments.push(Segment::Matched(entries));
                i += 2;
                continue;
            }
        }

        let word = &words[i];
        let entries = index
            .lookup_by_pronunciation(word)
            .or_else(|| index.lookup_by_pronunciation(&strip_tone_marks(word)));

        segments.push(match entries {
            Some(entries) => Segment::Matched(entries),
            None => Segment::Untranslated(word.clone()),
        });
        i += 1;
    }

    Resolution {
        direction: Direction::PronunciationToGloss,
        segments,
    }
}

/// Gloss in, headwords with pinyin out. Tokens are never combined.
pub fn resolve_definition_query<'a>(index: &'a CedictIndex, input: &str) -> Resolution<'a> {
    let segments = split_words(input)
        .into_iter()
        .map(|word| match index.lookup_by_definition(&word) {
            Some(entries) => Segment::Matched(entries),
            None => Segment::Untranslated(word),
        })
        .collect();

    Resolution {
        direction: Direction::GlossToPronunciation,
        segments,
    }
}

fn split_words(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn format_entry(entry: &CedictEntry, direction: Direction, style: OutputStyle) -> String {
    let line = match direction {
        Direction::PronunciationToGloss => format!(
            "{} ({}): {}",
            entry.simplified,
            entry.pronunciation,
            entry.definitions.join(", ")
        ),
        Direction::GlossToPronunciation => {
            format!("{} {}", entry.simplified, entry.pronunciation)
        }
    };
    escape(&line, style)
}

fn escape(text: &str, style: OutputStyle) -> String {
    if !style.escape_html {
        return text.to_string();
    }
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
