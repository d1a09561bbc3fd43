use std::path::PathBuf;

use cidian_config::Config;
use cidian_config::output::StyleSetting;
use cidian_core::language::Direction;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "cidian", version, about = "Pinyin / English lookup over CC-CEDICT")]
pub struct Cli {
    /// JSON config file (defaults to ./cidian.json when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Dictionary URL or file path, overrides the config
    #[arg(long)]
    pub source: Option<String>,

    /// Query direction: pinyin or english
    #[arg(long, value_parser = parse_direction)]
    pub direction: Option<Direction>,

    /// Render results with <br> separators
    #[arg(long)]
    pub html: bool,

    /// Print per-token lookup results as JSON (one-shot mode only)
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Query to answer once; starts an interactive session when omitted
    pub query: Vec<String>,
}

impl Cli {
    /// Layer command-line overrides onto `config`
    pub fn apply(&self, config: &mut Config) {
        if let Some(source) = &self.source {
            config.dictionary.source = source.clone();
            config.dictionary.enabled = true;
        }
        if let Some(direction) = self.direction {
            config.output.direction = direction.into();
        }
        if self.html {
            config.output.style = StyleSetting::Html;
        }
    }
}

fn parse_direction(name: &str) -> Result<Direction, String> {
    Direction::from_name(name).ok_or_else(|| format!("unknown direction '{name}', expected pinyin or english"))
}
