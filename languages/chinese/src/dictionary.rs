use std::collections::HashMap;
use std::sync::Arc;

use cidian_core::dictionary::{Dictionary, DictionaryEntry, DictionaryMetadata};
use serde::Serialize;

use crate::parser::Record;

/// CC-CEDICT dictionary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CedictEntry {
    pub traditional: String,
    pub simplified: String,
    /// Tone-marked pinyin, e.g. `Zhōngguó`
    pub pronunciation: String,
    pub definitions: Vec<String>,
}

impl DictionaryEntry for CedictEntry {
    fn headword(&self) -> String {
        self.simplified.clone()
    }

    fn readings(&self) -> Vec<String> {
        vec![self.pronunciation.clone()]
    }

    fn definitions(&self) -> Vec<String> {
        self.definitions.clone()
    }

    fn metadata(&self) -> serde_json::Value {
        serde_json::json!({
            "traditional": self.traditional,
            "simplified": self.simplified,
        })
    }
}

/// Reverse indices over CC-CEDICT entries.
///
/// Built once by the loader and read-only afterwards. Every key maps to a
/// non-empty list in insertion order; homophones and shared glosses all stay
/// retrievable under the same key.
#[derive(Debug, Default)]
pub struct CedictIndex {
    entries: Vec<Arc<CedictEntry>>,
    by_pronunciation: HashMap<String, Vec<Arc<CedictEntry>>>,
    by_definition: HashMap<String, Vec<Arc<CedictEntry>>>,
}

impl CedictIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut index = Self::new();
        for record in records {
            index.add(record);
        }
        index
    }

    /// Index one record under both pronunciation keys and each of its glosses
    pub fn add(&mut self, record: Record) {
        let Record {
            entry,
            bare_key,
            diacritic_key,
        } = record;

        self.entries.push(Arc::clone(&entry));

        // Both keys are spellings of the same pronunciation
        self.insert_pronunciation_once(bare_key, &entry);
        self.insert_pronunciation_once(diacritic_key, &entry);

        for def in &entry.definitions {
            let key = def.to_lowercase().trim().to_string();
            push_once(&mut self.by_definition, key, &entry);
        }
    }

    pub fn insert_pronunciation(&mut self, key: impl Into<String>, entry: Arc<CedictEntry>) {
        self.by_pronunciation.entry(key.into()).or_default().push(entry);
    }

    pub fn insert_definition(&mut self, key: impl Into<String>, entry: Arc<CedictEntry>) {
        self.by_definition.entry(key.into()).or_default().push(entry);
    }

    pub fn lookup_by_pronunciation(&self, key: &str) -> Option<&[Arc<CedictEntry>]> {
        self.by_pronunciation.get(key).map(Vec::as_slice)
    }

    pub fn lookup_by_definition(&self, key: &str) -> Option<&[Arc<CedictEntry>]> {
        self.by_definition.get(key).map(Vec::as_slice)
    }

    /// Number of parsed entries
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert_pronunciation_once(&mut self, key: String, entry: &Arc<CedictEntry>) {
        push_once(&mut self.by_pronunciation, key, entry);
    }
}

/// Append unless the same entry was just added under this key, which happens
/// when both pronunciation keys coincide or a gloss repeats within one entry
fn push_once(
    map: &mut HashMap<String, Vec<Arc<CedictEntry>>>,
    key: String,
    entry: &Arc<CedictEntry>,
) {
    let list = map.entry(key).or_default();
    if list.last().is_some_and(|last| Arc::ptr_eq(last, entry)) {
        return;
    }
    list.push(Arc::clone(entry));
}

impl Dictionary for CedictIndex {
    fn lookup_exact(&self, query: &str) -> Vec<&dyn DictionaryEntry> {
        let mut results: Vec<&Arc<CedictEntry>> = Vec::new();

        let by_reading = self.lookup_by_pronunciation(query).unwrap_or_default();
        let by_gloss = self.lookup_by_definition(query).unwrap_or_default();

        for entry in by_reading.iter().chain(by_gloss) {
            if !results.iter().any(|seen| Arc::ptr_eq(seen, entry)) {
                results.push(entry);
            }
        }

        results
            .into_iter()
            .map(|e| &**e as &dyn DictionaryEntry)
            .collect()
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "CC-CEDICT".to_string(),
            language: "zh".to_string(),
            entry_count: self.entries.len(),
            reading_keys: self.by_pronunciation.len(),
            definition_keys: self.by_definition.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn index(text: &str) -> CedictIndex {
        CedictIndex::from_records(parse(text))
    }

    #[test]
    fn both_pronunciation_keys_and_gloss_resolve() {
        let index = index("中國 中国 [Zhong1 guo2] /China/");

        let bare = index.lookup_by_pronunciation("zhongguo").unwrap();
        let marked = index.lookup_by_pronunciation("zhōngguó").unwrap();
        let gloss = index.lookup_by_definition("china").unwrap();

        assert_eq!(bare.len(), 1);
        assert_eq!(marked.len(), 1);
        assert_eq!(gloss.len(), 1);
        assert!(Arc::ptr_eq(&bare[0], &marked[0]));
        assert!(Arc::ptr_eq(&bare[0], &gloss[0]));
        assert_eq!(bare[0].simplified, "中国");
    }

    #[test]
    fn homophones_keep_insertion_order() {
        let index = index("媽 妈 [ma1] /mother/\n麻 麻 [ma2] /hemp/\n馬 马 [ma3] /horse/");

        let all: Vec<&str> = index
            .lookup_by_pronunciation("ma")
            .unwrap()
            .iter()
            .map(|e| e.simplified.as_str())
            .collect();
        assert_eq!(all, vec!["妈", "麻", "马"]);

        assert_eq!(index.lookup_by_pronunciation("mǎ").unwrap()[0].simplified, "马");
    }

    #[test]
    fn shared_gloss_lists_every_entry() {
        let index = index("看 看 [kan4] /to see/to look at/\n見 见 [jian4] /To see/");

        let entries = index.lookup_by_definition("to see").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].simplified, "看");
        assert_eq!(entries[1].simplified, "见");
    }

    #[test]
    fn neutral_tone_entry_indexed_once() {
        let index = index("嗎 吗 [ma5] /question particle/");
        assert_eq!(index.lookup_by_pronunciation("ma").unwrap().len(), 1);
    }

    #[test]
    fn gloss_keys_are_trimmed_and_lowercased() {
        let index = index("好 好 [hao3] / Good /well/");
        assert!(index.lookup_by_definition("good").is_some());
        assert!(index.lookup_by_definition(" Good ").is_none());
    }

    #[test]
    fn insert_appends() {
        let mut index = CedictIndex::new();
        let a = Arc::new(CedictEntry {
            traditional: "甲".into(),
            simplified: "甲".into(),
            pronunciation: "jiǎ".into(),
            definitions: vec!["first".into()],
        });
        let b = Arc::new(CedictEntry {
            simplified: "假".into(),
            ..(*a).clone()
        });

        index.insert_pronunciation("jia", Arc::clone(&a));
        index.insert_pronunciation("jia", Arc::clone(&b));
        index.insert_definition("first", a);

        let list = index.lookup_by_pronunciation("jia").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].simplified, "假");
        assert!(index.lookup_by_definition("first").is_some());
        assert!(index.lookup_by_pronunciation("yi").is_none());
    }

    #[test]
    fn noise_adds_nothing() {
        let index = index("# comment\nnot an entry\n\n");
        assert!(index.is_empty());
        let meta = index.metadata();
        assert_eq!(meta.reading_keys, 0);
        assert_eq!(meta.definition_keys, 0);
    }

    #[test]
    fn exact_lookup_spans_both_indices() {
        let index = index("中國 中国 [Zhong1 guo2] /China/");

        let results = index.lookup_exact("zhongguo");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].headword(), "中国");
        assert_eq!(index.lookup_exact("china").len(), 1);

        let meta = index.metadata();
        assert_eq!(meta.entry_count, 1);
        assert_eq!(meta.reading_keys, 2);
        assert_eq!(meta.definition_keys, 1);
    }
}
