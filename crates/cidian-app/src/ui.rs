use cidian_core::types::AppEvent;
use kanal::AsyncReceiver;
use tokio::io::AsyncWriteExt;

const PROMPT: &str = "> ";

/// Writes results and notices to stdout until `Quit`
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<AppEvent>, interactive: bool) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();

    while let Ok(event) = app_to_ui_rx.recv().await {
        let text = match event {
            AppEvent::ShowResult(text) => text,
            AppEvent::Status(message) => message,
            AppEvent::DictionaryReady { entries } => {
                format!("Dictionary loaded: {entries} entries")
            }
            AppEvent::SetDirection(direction) => format!("Mode: {}", direction.label()),
            AppEvent::Quit => break,
            AppEvent::TextInput(_) | AppEvent::Reload => continue,
        };

        stdout.write_all(text.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        if interactive {
            stdout.write_all(PROMPT.as_bytes()).await?;
        }
        stdout.flush().await?;
    }

    Ok(())
}
