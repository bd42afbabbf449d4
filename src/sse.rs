use anyhow::Result;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use tracing::debug;

use crate::gemini::StreamChunk;

/// Decode an `alt=sse` response body into stream chunks.
///
/// Bytes are accumulated across network reads so `data: ` lines split at
/// chunk boundaries are reassembled. Payloads that fail to parse as a
/// chunk (heartbeat or metadata frames) are skipped. A trailing newline is
/// appended at end of stream so an unterminated final line still flushes.
pub fn decode_chunks<S, E>(
    byte_stream: S,
) -> impl Stream<Item = Result<StreamChunk>> + Send + 'static
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: Into<anyhow::Error> + Send + 'static,
{
    let mut pending_bytes: Vec<u8> = Vec::new();

    byte_stream
        .chain(futures::stream::once(async {
            Ok::<Bytes, E>(Bytes::from_static(b"\n"))
        }))
        .map(move |result| match result {
            Ok(bytes) => {
                pending_bytes.extend_from_slice(&bytes);

                let mut out: Vec<Result<StreamChunk>> = Vec::new();

                // Process complete lines terminated by '\n'
                while let Some(pos) = pending_bytes.iter().position(|&b| b == b'\n') {
                    let line: Vec<u8> = pending_bytes.drain(..=pos).collect();
                    let Ok(mut line_str) = std::str::from_utf8(&line[..line.len() - 1]) else {
                        // A complete line that is not UTF-8 can never recover
                        continue;
                    };
                    if let Some(stripped) = line_str.strip_suffix('\r') {
                        line_str = stripped;
                    }

                    debug!("raw streaming line: {:?}", line_str);

                    if let Some(data) = line_str.strip_prefix("data: ") {
                        match serde_json::from_str::<StreamChunk>(data) {
                            Ok(chunk) => out.push(Ok(chunk)),
                            Err(e) => debug!("skipping unparseable stream frame: {}", e),
                        }
                    }
                }

                out
            }
            Err(e) => vec![Err(e.into())],
        })
        .flat_map(futures::stream::iter)
}
