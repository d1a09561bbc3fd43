use std::sync::Arc;

use cidian_core::language::{Direction, LanguageProcessor};
use cidian_lang_chinese::{CedictIndex, ChineseProcessor, OutputStyle};
use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod cli;
mod controller;
mod events;
mod io;
mod settings;
mod ui;


use self::cli::Cli;
use self::controller::AppController;

pub type AppState = cidian_core::state::AppState<CedictIndex>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let mut config = settings::load_config(cli.config.as_deref())?;
    cli.apply(&mut config);
    let state = Arc::new(AppState::new(config));

    if !cli.query.is_empty() {
        return one_shot(state, &cli.query.join(" "), cli.json).await;
    }

    let interactive = atty::is(atty::Stream::Stdin);
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(interactive);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
            // The stdin reader holds a blocking thread that never yields;
            // waiting for the runtime to drain it would hang.
            std::process::exit(0);
        }
        _ = async {
            while let Some(result) = tasks.join_next().await {
                match result {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => tracing::error!("task exited with error: {e}"),
                    Err(e) => tracing::error!("task panicked: {e}"),
                }
            }
        } => {
            tracing::debug!("All tasks finished");
        }
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Load, answer a single query on stdout, exit
async fn one_shot(state: Arc<AppState>, query: &str, json: bool) -> anyhow::Result<()> {
    let (enabled, direction, style) = {
        let config = state.config.read().await;
        (
            config.dictionary.enabled,
            Direction::from(config.output.direction),
            OutputStyle::from(config.output.style),
        )
    };

    let processor = if enabled {
        let dictionary = events::reload_dictionary(&state).await?;
        ChineseProcessor::new(dictionary)
    } else {
        tracing::warn!("Dictionary disabled, using empty processor");
        ChineseProcessor::empty()
    };
    let processor = processor.with_style(style);

    if json {
        let report = processor.lookup_report(query);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", processor.translate(query, direction));
    }

    Ok(())
}
