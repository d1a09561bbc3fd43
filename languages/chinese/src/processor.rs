use std::sync::Arc;

use cidian_core::dictionary::{Dictionary, DictionaryEntry};
use cidian_core::language::{Direction, LanguageProcessor, LookupResult, Token};
use cidian_core::preprocess::{DefaultPreprocessor, Preprocessor};

use crate::dictionary::CedictIndex;
use crate::resolver::{self, OutputStyle};
use crate::tone::strip_tone_marks;

/// Chinese language processor over a loaded CC-CEDICT index
pub struct ChineseProcessor {
    dictionary: Arc<CedictIndex>,
    style: OutputStyle,
}

impl ChineseProcessor {
    pub fn new(dictionary: Arc<CedictIndex>) -> Self {
        Self {
            dictionary,
            style: OutputStyle::default(),
        }
    }

    /// Processor with no entries: every token comes back untranslated
    pub fn empty() -> Self {
        Self::new(Arc::new(CedictIndex::new()))
    }

    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }
}

impl LanguageProcessor for ChineseProcessor {
    fn language_code(&self) -> &str {
        "zh"
    }

    fn normalize(&self, text: &str) -> String {
        DefaultPreprocessor.process(text)
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .enumerate()
            .map(|(position, word)| Token {
                surface: word.to_string(),
                normalized: self.normalize(word),
                position,
            })
            .collect()
    }

    fn lookup(&self, token: &Token) -> Vec<LookupResult> {
        let key = &token.normalized;

        let mut entries = self.dictionary.lookup_exact(key);
        if entries.is_empty() {
            entries = self.dictionary.lookup_exact(&strip_tone_marks(key));
        }

        entries.iter().map(|e| e.to_lookup_result()).collect()
    }

    fn translate(&self, text: &str, direction: Direction) -> String {
        let input = self.normalize(text);
        let resolution = resolver::resolve(&self.dictionary, &input, direction);
        tracing::debug!(
            "Resolved {} segment(s), fully matched: {}",
            resolution.segments.len(),
            resolution.is_fully_matched()
        );
        resolution.render(self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_dictionary;

    fn processor() -> ChineseProcessor {
        let index = load_dictionary(
            "中國 中国 [Zhong1 guo2] /China/\n馬 马 [ma3] /horse/\n媽 妈 [ma1] /mother/\n",
        )
        .unwrap();
        ChineseProcessor::new(Arc::new(index))
    }

    #[test]
    fn tokenizes_normalized_words() {
        let tokens = processor().tokenize("  Zhong  ＧＵＯ ");
        let words: Vec<&str> = tokens.iter().map(|t| t.normalized.as_str()).collect();
        assert_eq!(words, vec!["zhong", "guo"]);
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn tokens_keep_their_surface_form() {
        let tokens = processor().tokenize("Zhong ＧＵＯ");
        assert_eq!(tokens[0].surface, "Zhong");
        assert_eq!(tokens[1].surface, "ＧＵＯ");
        assert_eq!(tokens[1].normalized, "guo");
    }

    #[test]
    fn lookup_report_covers_every_token() {
        let report = processor().lookup_report("Horse xyz");
        assert_eq!(report.language, "zh");
        assert_eq!(report.tokens.len(), 2);
        assert_eq!(report.tokens[0].surface, "Horse");
        assert_eq!(report.tokens[0].results[0].term, "马");
        assert!(report.tokens[1].results.is_empty());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["tokens"][0]["normalized"], "horse");
        assert_eq!(json["tokens"][1]["position"], 1);
    }

    #[test]
    fn lookup_falls_back_to_glosses() {
        let processor = processor();
        let token = processor.tokenize("horse").remove(0);

        let results = processor.lookup(&token);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].term, "马");
        assert_eq!(results[0].readings, vec!["mǎ"]);
        assert_eq!(results[0].metadata.get("traditional").map(String::as_str), Some("馬"));
    }

    #[test]
    fn lookup_strips_tone_marks() {
        let processor = processor();
        let token = processor.tokenize("mà").remove(0);
        assert_eq!(processor.lookup(&token).len(), 2);
    }

    #[test]
    fn translate_normalizes_first() {
        let processor = processor();
        // decomposed o + combining acute
        assert_eq!(
            processor.translate("zhōnggu\u{006F}\u{0301}", Direction::PronunciationToGloss),
            "中国 (Zhōngguó): China"
        );
        assert_eq!(
            processor.translate("Horse", Direction::GlossToPronunciation),
            "马 mǎ"
        );
    }

    #[test]
    fn empty_processor_echoes() {
        let processor = ChineseProcessor::empty().with_style(OutputStyle::HTML);
        assert_eq!(
            processor.translate("ni hao", Direction::PronunciationToGloss),
            "ni<br><br>hao"
        );
    }
}
