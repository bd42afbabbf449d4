use anyhow::Result;
use futures::{Stream, StreamExt};
use std::io::Write;
use tracing::debug;

use crate::gemini::StreamChunk;

/// Drain the chunk stream into `out`, writing each text fragment the moment
/// it arrives, in order, with no separators. Frames without usable content
/// are skipped; transport errors abort the drain.
pub async fn emit_text<W: Write>(
    mut chunks: impl Stream<Item = Result<StreamChunk>> + Unpin,
    out: &mut W,
) -> Result<()> {
    while let Some(chunk) = chunks.next().await {
        let chunk = chunk?;
        let Some(text) = chunk.text() else {
            debug!("skipping frame without usable content");
            continue;
        };
        out.write_all(text.as_bytes())?;
        out.flush()?;
    }
    Ok(())
}
