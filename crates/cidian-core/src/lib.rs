pub mod dictionary;
pub mod language;
pub mod preprocess;
pub mod state;
pub mod types;
