// SPDX-FileCopyrightText: 2026 Parley Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider adapter trait for LLM integrations.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::ParleyError;
use crate::types::{Chunk, HealthStatus, LlmAbility, LlmOptions, Message, Quota};

/// Bounded capacity of the chunk channel returned by
/// [`LlmProvider::completion_stream`]. A stalled consumer blocks the
/// producing task rather than dropping data.
pub const CHUNK_CHANNEL_CAPACITY: usize = 64;

/// Adapter for a chat-completion LLM provider.
///
/// Every call is stateless and independent; the only concurrency state is
/// the per-call pump task and channel behind [`completion_stream`].
///
/// [`completion_stream`]: LlmProvider::completion_stream
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name, used for logging and registry keys.
    fn name(&self) -> &str;

    /// Startup self-test: sends a fixed probe message with default options.
    ///
    /// Not intended for production traffic gating. Failures are returned as
    /// [`HealthStatus::Unhealthy`] so the caller decides whether to halt.
    async fn health_check(&self) -> HealthStatus;

    /// Billing usage, if the provider can report it.
    ///
    /// `Ok(None)` means the provider has no usage query capability -- a
    /// capability gap, not a failure. `Err` is reserved for lookup failures
    /// on providers that do support the query.
    async fn quota(&self) -> Result<Option<Quota>, ParleyError>;

    /// Sends a single completion request and returns the generated text.
    ///
    /// Fails with [`ParleyError::Config`] if the provider option block is
    /// absent. Exactly one round trip; no retry, no pagination.
    async fn completion(
        &self,
        messages: &[Message],
        options: &LlmOptions,
    ) -> Result<String, ParleyError>;

    /// Sends a streaming completion request and returns a bounded channel
    /// of [`Chunk`]s, delivered in provider emission order.
    ///
    /// The sequence terminates either by channel closure (success) or by a
    /// chunk carrying an error (failure). Callers must keep receiving until
    /// one of the two is observed.
    async fn completion_stream(
        &self,
        messages: Vec<Message>,
        options: LlmOptions,
    ) -> mpsc::Receiver<Chunk>;

    /// Queries available models and records them in the capability registry.
    ///
    /// On failure the error propagates and `ability` is left untouched.
    async fn set_ability(&self, ability: &mut LlmAbility) -> Result<(), ParleyError>;

    /// Lists the model identifiers this provider exposes, filtered to the
    /// provider's model family and sorted lexicographically.
    async fn get_models(&self) -> Result<Vec<String>, ParleyError>;
}
