use serde::{Deserialize, Serialize};

/// Which index a query is resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectionSetting {
    #[default]
    PronunciationToGloss,
    GlossToPronunciation,
}

/// Separator flavour used when rendering results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleSetting {
    #[default]
    Plain,
    Html,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    pub direction: DirectionSetting,
    pub style: StyleSetting,
}
