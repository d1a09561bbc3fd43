use cidian_core::dictionary::{Dictionary, LoadError};
use cidian_source::DictionarySource;

use crate::dictionary::CedictIndex;
use crate::parser;

/// Parse CC-CEDICT text into a fully built index.
///
/// Only blank input is an error; malformed lines are skipped.
pub fn load_dictionary(text: &str) -> Result<CedictIndex, LoadError> {
    if text.trim().is_empty() {
        return Err(LoadError::EmptySource);
    }

    let index = CedictIndex::from_records(parser::parse(text));
    let meta = index.metadata();
    tracing::info!(
        "Loaded {} {} entries ({} pinyin keys, {} english keys)",
        meta.entry_count,
        meta.name,
        meta.reading_keys,
        meta.definition_keys
    );
    Ok(index)
}

pub struct CedictLoader;

impl CedictLoader {
    /// Fetch the whole text from `source`, then parse it
    pub async fn load_from_source(source: &dyn DictionarySource) -> Result<CedictIndex, LoadError> {
        tracing::info!("Loading CC-CEDICT from {}", source.describe());
        let text = source.fetch().await?;
        load_dictionary(&text)
    }
}
