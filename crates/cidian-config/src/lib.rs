use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::network::NetworkConfig;
use self::output::OutputConfig;

pub mod dictionary;
pub mod network;
pub mod output;

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub network: NetworkConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::new(),
            network: NetworkConfig::new(),
            output: OutputConfig::default(),
        }
    }
}
