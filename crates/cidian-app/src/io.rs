use cidian_core::language::Direction;
use cidian_core::types::AppEvent;
use kanal::AsyncSender;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

pub async fn stdin_reader(
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    read_commands(BufReader::new(tokio::io::stdin()), cancel, event_tx).await
}

/// Forward each input line as an event until EOF, `:quit` or cancellation
pub async fn read_commands<R>(
    reader: R,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = cancel.cancelled() => {
                tracing::info!("Input reader stopping");
                return Ok(());
            }
        };

        let Some(line) = line else {
            tracing::debug!("End of input");
            event_tx.send(AppEvent::Quit).await?;
            return Ok(());
        };

        let Some(event) = parse_command(&line) else {
            continue;
        };
        let quit = matches!(event, AppEvent::Quit);
        event_tx.send(event).await?;
        if quit {
            return Ok(());
        }
    }
}

/// Map an input line to an event; blank lines map to nothing
pub fn parse_command(line: &str) -> Option<AppEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let Some(command) = line.strip_prefix(':') else {
        return Some(AppEvent::TextInput(line.to_string()));
    };

    let mut parts = command.split_whitespace();
    let event = match (parts.next(), parts.next()) {
        (Some("q" | "quit" | "exit"), _) => AppEvent::Quit,
        (Some("reload"), _) => AppEvent::Reload,
        (Some("mode"), Some(name)) => match Direction::from_name(name) {
            Some(direction) => AppEvent::SetDirection(direction),
            None => AppEvent::Status(format!("Unknown mode '{name}', expected pinyin or english")),
        },
        _ => AppEvent::Status(format!(
            "Unknown command ':{command}'. Commands: :mode pinyin|english, :reload, :quit"
        )),
    };
    Some(event)
}
