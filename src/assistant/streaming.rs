//! Word-grouped incremental delivery of a finished answer.
//!
//! A producer task composes the answer, cuts it into chunks of four words
//! and pushes them through a bounded channel with a fixed pause between
//! chunks. When the consumer goes away the channel closes and the producer
//! stops at the next send.

use super::envelope::{ResponseEnvelope, Source};
use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, error};

pub const WORDS_PER_CHUNK: usize = 4;
pub const DEFAULT_PACING: Duration = Duration::from_millis(50);
pub const STREAM_APOLOGY: &str = "Sorry, I encountered an error processing your request.";

const CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamChunk {
    /// Words of this chunk, each followed by a single space.
    pub chunk: String,
    pub is_complete: bool,
    /// Only populated on the final chunk.
    pub sources: Vec<Source>,
}

impl StreamChunk {
    pub fn apology() -> Self {
        Self {
            chunk: STREAM_APOLOGY.to_string(),
            is_complete: true,
            sources: Vec::new(),
        }
    }
}

/// Splits the answer into chunks of [`WORDS_PER_CHUNK`] words; the last
/// chunk may be shorter, is marked complete and carries the sources.
pub fn segment(envelope: &ResponseEnvelope) -> Vec<StreamChunk> {
    let words: Vec<&str> = envelope.answer.split_whitespace().collect();
    let last = words.len().saturating_sub(1);
    let mut chunks = Vec::with_capacity(words.len().div_ceil(WORDS_PER_CHUNK));
    let mut buffer = String::new();

    for (i, word) in words.iter().enumerate() {
        buffer.push_str(word);
        buffer.push(' ');

        if i % WORDS_PER_CHUNK == WORDS_PER_CHUNK - 1 || i == last {
            let is_complete = i == last;
            chunks.push(StreamChunk {
                chunk: std::mem::take(&mut buffer),
                is_complete,
                sources: if is_complete {
                    envelope.sources.clone()
                } else {
                    Vec::new()
                },
            });
        }
    }

    chunks
}

/// Spawns a producer that awaits `answer`, then emits its chunks with
/// `pacing` between them.
///
/// If producing the answer panics, a single apology chunk is emitted
/// instead.
pub fn stream_answer<F>(answer: F, pacing: Duration) -> ReceiverStream<StreamChunk>
where
    F: Future<Output = ResponseEnvelope> + Send + 'static,
{
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);

    tokio::spawn(async move {
        let envelope = match tokio::spawn(answer).await {
            Ok(envelope) => envelope,
            Err(err) => {
                error!("Error in streaming: {}", err);
                let _ = tx.send(StreamChunk::apology()).await;
                return;
            }
        };

        for chunk in segment(&envelope) {
            let done = chunk.is_complete;
            if tx.send(chunk).await.is_err() {
                debug!("Stream consumer went away, stopping");
                return;
            }
            if !done {
                tokio::time::sleep(pacing).await;
            }
        }
    });

    ReceiverStream::new(rx)
}

/// `data: <json>\n\n` framing for one chunk.
pub fn encode_event(chunk: &StreamChunk) -> Result<String, serde_json::Error> {
    Ok(format!("data: {}\n\n", serde_json::to_string(chunk)?))
}

fn apology_event() -> String {
    encode_event(&StreamChunk::apology()).unwrap_or_else(|_| {
        format!(
            "data: {{\"chunk\":\"{}\",\"is_complete\":true,\"sources\":[]}}\n\n",
            STREAM_APOLOGY
        )
    })
}

/// Frames chunks as event lines. An encoding failure ends the stream with
/// one apology event; lines already sent stay sent.
pub fn event_lines<S>(chunks: S) -> impl Stream<Item = String>
where
    S: Stream<Item = StreamChunk> + Unpin,
{
    futures::stream::unfold(Some(chunks), |state| async move {
        let mut chunks = state?;
        let chunk = chunks.next().await?;
        match encode_event(&chunk) {
            Ok(line) => Some((line, Some(chunks))),
            Err(err) => {
                error!("Error in streaming: {}", err);
                Some((apology_event(), None))
            }
        }
    })
}
