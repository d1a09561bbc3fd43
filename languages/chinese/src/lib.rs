pub mod dictionary;
pub mod loader;
pub mod parser;
pub mod processor;
pub mod resolver;
pub mod tone;

use cidian_core::language::Direction;
use cidian_core::preprocess::{DefaultPreprocessor, Preprocessor};

pub use dictionary::{CedictEntry, CedictIndex};
pub use loader::{CedictLoader, load_dictionary};
pub use processor::ChineseProcessor;
pub use resolver::{OutputStyle, Resolution, Segment};

/// Resolve `input` against `index` and render it as plain text
pub fn translate(index: &CedictIndex, input: &str, direction: Direction) -> String {
    let input = DefaultPreprocessor.process(input);
    resolver::resolve(index, &input, direction).render(OutputStyle::PLAIN)
}
