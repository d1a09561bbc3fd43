use crate::language::Direction;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A query line to resolve
    TextInput(String),
    /// Switch the direction used for subsequent queries
    SetDirection(Direction),
    /// Re-fetch the source and replace the dictionary
    Reload,
    /// Dictionary finished loading
    DictionaryReady { entries: usize },
    /// Rendered output for the user
    ShowResult(String),
    /// Non-result message for the user (load failures, notices)
    Status(String),
    Quit,
}
