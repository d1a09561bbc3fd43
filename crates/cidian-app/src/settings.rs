use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use cidian_config::Config;

const DEFAULT_CONFIG_FILE: &str = "cidian.json";

/// Load config from `path`, or `./cidian.json`, or defaults with env overrides
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => read_config(path),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            read_config(Path::new(DEFAULT_CONFIG_FILE))
        }
        None => {
            tracing::debug!("No config file, using defaults");
            Ok(Config::new())
        }
    }
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(config)
}
