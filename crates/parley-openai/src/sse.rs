// SPDX-FileCopyrightText: 2026 Parley Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SSE stream parser for OpenAI chat-completion streaming responses.
//!
//! Converts a reqwest response byte stream into typed [`StreamEvent`]s using
//! the `eventsource-stream` crate. OpenAI streams carry no event names: each
//! `data:` line is either a `chat.completion.chunk` JSON payload or the
//! literal `[DONE]` end-of-stream sentinel.

use std::pin::Pin;

use eventsource_stream::Eventsource;
use futures::stream::{Stream, StreamExt};
use parley_core::ParleyError;

use crate::types::ChatCompletionChunk;

/// End-of-stream sentinel sent as the final `data:` payload.
const DONE_SENTINEL: &str = "[DONE]";

/// Typed events from the OpenAI streaming protocol.
#[derive(Debug, Clone)]
pub enum StreamEvent {
    /// One incremental chunk of the completion.
    Delta(ChatCompletionChunk),
    /// The stream has finished (`data: [DONE]`).
    Done,
}

/// Parses a reqwest streaming response into a stream of typed [`StreamEvent`]s.
///
/// Payloads that fail to deserialize surface as provider errors; consumers
/// treat those as stream-terminal.
pub fn parse_sse_stream(
    response: reqwest::Response,
) -> Pin<Box<dyn Stream<Item = Result<StreamEvent, ParleyError>> + Send>> {
    let event_stream = response.bytes_stream().eventsource();

    let mapped = event_stream.map(|result| match result {
        Ok(event) => {
            if event.data.trim() == DONE_SENTINEL {
                return Ok(StreamEvent::Done);
            }
            serde_json::from_str::<ChatCompletionChunk>(&event.data)
                .map(StreamEvent::Delta)
                .map_err(|e| ParleyError::Provider {
                    message: format!("failed to parse completion chunk: {e}"),
                    source: Some(Box::new(e)),
                })
        }
        Err(e) => Err(ParleyError::Provider {
            message: format!("SSE stream error: {e}"),
            source: None,
        }),
    });

    Box::pin(mapped)
}
