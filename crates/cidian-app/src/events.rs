use std::sync::Arc;

use cidian_core::dictionary::LoadError;
use cidian_core::language::{Direction, LanguageProcessor};
use cidian_core::types::AppEvent;
use cidian_lang_chinese::{CedictIndex, CedictLoader, ChineseProcessor, OutputStyle};
use kanal::{AsyncReceiver, AsyncSender};

use crate::AppState;

const NOT_LOADED: &str =
    "Dictionary failed to load. Check the log for details and run :reload to retry.";

/// Fetch the configured source and publish a fresh index
pub async fn reload_dictionary(state: &AppState) -> Result<Arc<CedictIndex>, LoadError> {
    let (location, network) = {
        let config = state.config.read().await;
        (config.dictionary.source.clone(), config.network.clone())
    };

    state
        .reload(|| async move {
            let source =
                cidian_source::from_location(&location, &network).map_err(LoadError::from)?;
            CedictLoader::load_from_source(source.as_ref()).await
        })
        .await
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    input_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (mut direction, style) = {
        let config = state.config.read().await;
        (
            Direction::from(config.output.direction),
            OutputStyle::from(config.output.style),
        )
    };

    // Queries queue up in the channel until the first load settles
    handle_reload(state.clone(), app_to_ui_tx.clone()).await?;

    tracing::info!("Starting event loop, waiting for input");
    loop {
        let event = input_rx.recv().await?;
        tracing::debug!("Event received: {:?}", std::mem::discriminant(&event));

        match event {
            AppEvent::TextInput(text) => {
                let output = handle_text_input(&state, &text, direction, style).await;
                app_to_ui_tx.send(output).await?;
            }
            AppEvent::SetDirection(new_direction) => {
                direction = new_direction;
                tracing::info!("Direction set to {}", direction.label());
                app_to_ui_tx.send(AppEvent::SetDirection(direction)).await?;
            }
            AppEvent::Reload => {
                // Queries keep using the current index while the new one loads
                let state = state.clone();
                let tx = app_to_ui_tx.clone();
                tokio::spawn(async move {
                    if let Err(e) = handle_reload(state, tx).await {
                        tracing::error!("Reload task failed: {e}");
                    }
                });
            }
            AppEvent::Status(message) => {
                app_to_ui_tx.send(AppEvent::Status(message)).await?;
            }
            AppEvent::Quit => {
                tracing::info!("Quit requested");
                app_to_ui_tx.send(AppEvent::Quit).await?;
                return Ok(());
            }
            AppEvent::ShowResult(_) | AppEvent::DictionaryReady { .. } => {
                // UI-only events, ignore in backend
            }
        }
    }
}

async fn handle_text_input(
    state: &AppState,
    text: &str,
    direction: Direction,
    style: OutputStyle,
) -> AppEvent {
    tracing::debug!("Processing query: {text}");

    let processor = match state.dictionary().await {
        Some(dictionary) => ChineseProcessor::new(dictionary),
        None => {
            let enabled = state.config.read().await.dictionary.enabled;
            if enabled {
                return AppEvent::Status(NOT_LOADED.to_string());
            }
            ChineseProcessor::empty()
        }
    };

    AppEvent::ShowResult(processor.with_style(style).translate(text, direction))
}

async fn handle_reload(
    state: Arc<AppState>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if !state.config.read().await.dictionary.enabled {
        tracing::warn!("Dictionary disabled, queries will be echoed");
        app_to_ui_tx
            .send(AppEvent::Status("Dictionary disabled".to_string()))
            .await?;
        return Ok(());
    }

    let event = match reload_dictionary(&state).await {
        Ok(dictionary) => AppEvent::DictionaryReady {
            entries: dictionary.entry_count(),
        },
        Err(e) => {
            tracing::error!("Failed to load dictionary: {e}");
            AppEvent::Status(format!("Failed to load dictionary: {e}"))
        }
    };
    app_to_ui_tx.send(event).await?;

    Ok(())
}
