//! Decoder for OpenAI-style streamed chat completions.
//!
//! Each event is a `data: {json}` line carrying `choices[0].delta.content`;
//! `data: [DONE]` ends the stream. Chunks may split lines (and UTF-8
//! sequences) anywhere, so bytes are buffered until a full line arrives.

use std::collections::VecDeque;

use bytes::Bytes;
use futures_util::stream::{self, BoxStream, Stream, StreamExt};
use serde::Deserialize;

use super::LlmError;

const DATA_PREFIX: &str = "data:";
const DONE_MARKER: &str = "[DONE]";

#[derive(Debug, Deserialize)]
struct StreamChunk {
    #[serde(default)]
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: Delta,
}

#[derive(Debug, Default, Deserialize)]
struct Delta {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
    done: bool,
}

impl SseDecoder {
    /// Feeds raw bytes and returns the text deltas from every complete line.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<Result<String, LlmError>> {
        self.buffer.extend_from_slice(chunk);
        let mut out = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            if let Some(item) = self.decode_line(&line) {
                out.push(item);
            }
        }
        out
    }

    /// Flushes a trailing line that arrived without a newline.
    pub fn finish(&mut self) -> Vec<Result<String, LlmError>> {
        let line = std::mem::take(&mut self.buffer);
        self.decode_line(&line).into_iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    fn decode_line(&mut self, raw: &[u8]) -> Option<Result<String, LlmError>> {
        if self.done {
            return None;
        }
        let line = String::from_utf8_lossy(raw);
        let payload = line.trim().strip_prefix(DATA_PREFIX)?.trim();
        if payload == DONE_MARKER {
            self.done = true;
            return None;
        }
        match serde_json::from_str::<StreamChunk>(payload) {
            Ok(chunk) => chunk
                .choices
                .into_iter()
                .next()
                .and_then(|c| c.delta.content)
                .filter(|text| !text.is_empty())
                .map(Ok),
            Err(e) => Some(Err(LlmError::Parse(e))),
        }
    }
}

struct DeltaState<E> {
    bytes: BoxStream<'static, Result<Bytes, E>>,
    decoder: SseDecoder,
    pending: VecDeque<Result<String, LlmError>>,
    exhausted: bool,
}

/// Turns a streamed response body into a stream of generated text pieces.
pub fn text_deltas<S, E>(bytes: S) -> impl Stream<Item = Result<String, LlmError>> + Send + 'static
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: Into<LlmError> + Send + 'static,
{
    let state = DeltaState {
        bytes: bytes.boxed(),
        decoder: SseDecoder::default(),
        pending: VecDeque::new(),
        exhausted: false,
    };

    stream::unfold(state, |mut state| async move {
        loop {
            if let Some(item) = state.pending.pop_front() {
                return Some((item, state));
            }
            if state.exhausted || state.decoder.is_done() {
                return None;
            }
            match state.bytes.next().await {
                Some(Ok(chunk)) => {
                    let decoded = state.decoder.push(&chunk);
                    state.pending.extend(decoded);
                }
                Some(Err(e)) => {
                    state.exhausted = true;
                    state.pending.push_back(Err(e.into()));
                }
                None => {
                    state.exhausted = true;
                    let decoded = state.decoder.finish();
                    state.pending.extend(decoded);
                }
            }
        }
    })
}
