use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

use super::handler::HookHandler;

/// Feeds newline-delimited events through the handler, one result line per event.
/// Per-turn failures are written as error envelopes; only I/O errors stop the loop.
/// Returns the number of events handled.
pub async fn run<R, W>(handler: &mut HookHandler, reader: R, mut writer: W) -> Result<u64>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut handled = 0u64;

    while let Some(line) = lines.next_line().await.context("reading event stream")? {
        if line.trim().is_empty() {
            continue;
        }

        let mut body = handler.respond_line(&line);
        body.push('\n');
        writer
            .write_all(body.as_bytes())
            .await
            .context("writing directive")?;
        writer.flush().await.context("flushing directive")?;
        handled += 1;
    }

    let snap = handler.telemetry().snapshot();
    info!(
        handled,
        elicit = snap.directive_stats.elicitations,
        delegate = snap.directive_stats.delegations,
        close = snap.directive_stats.closes,
        rejected = snap.total_rejected(),
        "event stream closed"
    );

    Ok(handled)
}
