use std::env;

use serde::{Deserialize, Serialize};

/// Hosted CC-CEDICT export (MDBG, UTF-8, traditional + simplified)
pub const DEFAULT_SOURCE: &str =
    "https://chinese-test-test.oss-ap-southeast-6.aliyuncs.com/cedict_1_0_ts_utf-8_mdbg.txt";

fn default_enabled() -> bool {
    true
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// URL (http/https) or local path of the dictionary text
    #[serde(default = "default_source")]
    pub source: String,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let source = env::var("CIDIAN_SOURCE").unwrap_or_else(|_| default_source());

        Self {
            enabled: default_enabled(),
            source,
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            source: default_source(),
        }
    }
}
