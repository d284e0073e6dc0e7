// SPDX-FileCopyrightText: 2026 Parley Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI chat-completion provider adapter.
//!
//! This crate implements [`LlmProvider`] for the OpenAI chat-completions API,
//! providing single-shot completion, channel-based streaming completion, and
//! model capability discovery.

pub mod client;
pub mod sse;
pub mod types;

use async_trait::async_trait;
use futures::stream::{Stream, StreamExt};
use parley_core::provider::CHUNK_CHANNEL_CAPACITY;
use parley_core::{
    Chunk, CompletionOptions, HealthStatus, LlmAbility, LlmOptions, LlmProvider, Message,
    OpenAiAbility, ParleyError, Quota,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::client::OpenAiClient;
use crate::sse::StreamEvent;
use crate::types::{ChatMessage, ChatRequest};

/// System instruction prepended to every completion request.
const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant!";

/// Probe message sent by the startup health check.
const HEALTH_PROBE: &str = "Hello!";

/// Substring identifying this provider's model family in listing results.
/// A simple heuristic, kept as-is: changing it silently changes which
/// models are advertised.
const MODEL_FAMILY: &str = "gpt";

/// OpenAI provider implementing [`LlmProvider`].
///
/// Stateless between calls; each streaming invocation owns its own pump
/// task and bounded channel exclusively.
pub struct OpenAiProvider {
    client: OpenAiClient,
}

impl OpenAiProvider {
    /// Creates a new OpenAI provider authenticated with `api_key`.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ParleyError> {
        let client = OpenAiClient::new(api_key)?;
        info!("OpenAI provider initialized");
        Ok(Self { client })
    }

    /// Creates a provider from the `OPENAI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, ParleyError> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            ParleyError::Config(
                "OpenAI API key not found. Set the OPENAI_API_KEY environment variable.".into(),
            )
        })?;
        Self::new(api_key)
    }

    /// Creates a provider with an existing client (for testing).
    #[cfg(test)]
    fn with_client(client: OpenAiClient) -> Self {
        Self { client }
    }

    /// Builds the wire request: fixed system instruction first, then the
    /// caller's messages in their original order.
    fn to_chat_request(messages: &[Message], options: &CompletionOptions) -> ChatRequest {
        let mut wire = Vec::with_capacity(messages.len() + 1);
        wire.push(ChatMessage {
            role: "system".into(),
            content: SYSTEM_INSTRUCTION.into(),
        });
        wire.extend(messages.iter().map(|m| ChatMessage {
            role: m.role.to_string(),
            content: m.content.clone(),
        }));

        ChatRequest {
            model: options.model.clone(),
            messages: wire,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
            presence_penalty: options.presence_penalty,
            frequency_penalty: options.frequency_penalty,
            stream: false,
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn health_check(&self) -> HealthStatus {
        let probe = [Message::user(HEALTH_PROBE)];
        let options = LlmOptions {
            openai: Some(CompletionOptions::default()),
        };
        match self.completion(&probe, &options).await {
            Err(e) => {
                error!(error = %e, "health check failed");
                HealthStatus::Unhealthy(e.to_string())
            }
            Ok(content) if content.is_empty() => {
                warn!("health check got empty content from completion probe");
                HealthStatus::Degraded("empty content from completion probe".into())
            }
            Ok(_) => {
                info!("OpenAI provider is healthy");
                HealthStatus::Healthy
            }
        }
    }

    async fn quota(&self) -> Result<Option<Quota>, ParleyError> {
        // The OpenAI API has no billing/usage query. Capability gap, not a failure.
        Ok(None)
    }

    async fn completion(
        &self,
        messages: &[Message],
        options: &LlmOptions,
    ) -> Result<String, ParleyError> {
        info!("completion");
        let opts = options.openai.as_ref().ok_or_else(|| {
            ParleyError::Config("caller did not provide an OpenAI option block".into())
        })?;

        let request = Self::to_chat_request(messages, opts);
        let response =
            self.client
                .complete_chat(&request)
                .await
                .map_err(|e| ParleyError::Provider {
                    message: format!("chat completion with options {opts:?}: {e}"),
                    source: Some(Box::new(e)),
                })?;
        debug!(id = %response.id, model = %response.model, "completion response");

        let content = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ParleyError::Provider {
                message: "completion response contained no choices".into(),
                source: None,
            })?;
        Ok(content)
    }

    async fn completion_stream(
        &self,
        messages: Vec<Message>,
        options: LlmOptions,
    ) -> mpsc::Receiver<Chunk> {
        info!("completion stream");
        let (tx, rx) = mpsc::channel(CHUNK_CHANNEL_CAPACITY);

        let Some(opts) = options.openai else {
            // Config error: one terminal chunk, no task spawned.
            let _ = tx
                .send(Chunk::error(ParleyError::Config(
                    "caller did not provide an OpenAI option block".into(),
                )))
                .await;
            return rx;
        };

        let request = Self::to_chat_request(&messages, &opts);
        let client = self.client.clone();

        tokio::spawn(async move {
            let events = match client.stream_chat(&request).await {
                Ok(events) => events,
                Err(e) => {
                    let _ = tx
                        .send(Chunk::error(ParleyError::Provider {
                            message: format!("chat completion stream with options {opts:?}: {e}"),
                            source: Some(Box::new(e)),
                        }))
                        .await;
                    return;
                }
            };
            pump_events(events, tx).await;
        });

        rx
    }

    async fn set_ability(&self, ability: &mut LlmAbility) -> Result<(), ParleyError> {
        let models = self.get_models().await?;
        ability.available = true;
        ability.openai = OpenAiAbility {
            available: true,
            models,
        };
        Ok(())
    }

    async fn get_models(&self) -> Result<Vec<String>, ParleyError> {
        info!("listing models");
        let list = self.client.list_models().await?;
        let mut models: Vec<String> = list
            .data
            .into_iter()
            .map(|m| m.id)
            .filter(|id| id.contains(MODEL_FAMILY))
            .collect();
        models.sort();
        Ok(models)
    }
}

/// Pumps provider stream events into the chunk channel.
///
/// Delivery order matches provider emission order. Terminates on the done
/// sentinel (channel closes with no error chunk), on the first stream error
/// (one terminal error chunk), or when the receiver is dropped. Takes the
/// event stream by value so it is released on every exit path.
async fn pump_events<S>(mut events: S, tx: mpsc::Sender<Chunk>)
where
    S: Stream<Item = Result<StreamEvent, ParleyError>> + Unpin,
{
    while let Some(item) = events.next().await {
        match item {
            Ok(StreamEvent::Done) => break,
            Ok(StreamEvent::Delta(chunk)) => {
                let text = chunk
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|choice| choice.delta.content)
                    .unwrap_or_default();
                // A full channel blocks here: backpressure, not data loss.
                // A send error means the consumer dropped the receiver.
                if tx.send(Chunk::text(text)).await.is_err() {
                    debug!("stream consumer gone, stopping pump");
                    break;
                }
            }
            Err(e) => {
                let _ = tx.send(Chunk::error(e)).await;
                break;
            }
        }
    }
}
