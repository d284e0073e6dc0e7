// SPDX-FileCopyrightText: 2026 Parley Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider-agnostic value types for chat-completion calls.
//!
//! Everything here is a transient, call-scoped value: messages and options
//! flow in, text or [`Chunk`]s flow out. Nothing is persisted.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::ParleyError;

/// The role of a message sender.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single message in a conversation, constructed by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Per-call tuning parameters for an OpenAI-style completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionOptions {
    /// Model identifier (e.g., "gpt-4o").
    pub model: String,
    /// Maximum tokens to generate. `None` leaves the provider default.
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub presence_penalty: Option<f32>,
    pub frequency_penalty: Option<f32>,
}

impl Default for CompletionOptions {
    /// Defaults used by the startup health probe.
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: None,
            temperature: None,
            presence_penalty: None,
            frequency_penalty: None,
        }
    }
}

/// Per-provider option block supplied with each completion call.
///
/// A call routed to the OpenAI adapter with `openai: None` is a
/// configuration error, surfaced before any network call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LlmOptions {
    pub openai: Option<CompletionOptions>,
}

/// One unit of a streamed completion response.
///
/// A stream terminates either by channel closure (success) or by a chunk
/// carrying a non-`None` error. Callers must keep receiving until one of
/// those two terminal conditions is observed.
#[derive(Debug)]
pub struct Chunk {
    pub text: String,
    pub error: Option<ParleyError>,
}

impl Chunk {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: None,
        }
    }

    pub fn error(error: ParleyError) -> Self {
        Self {
            text: String::new(),
            error: Some(error),
        }
    }
}

/// Billing usage reported by a provider that supports quota queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quota {
    pub used: u64,
    pub total: u64,
}

/// Health status reported by a provider health check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Provider is reachable and responding with content.
    Healthy,
    /// Provider is reachable but responded suspiciously (e.g., empty content).
    Degraded(String),
    /// Provider is not operational.
    Unhealthy(String),
}

/// Capability registry record for the LLM subsystem.
///
/// Owned by the caller; adapters only ever set fields via
/// [`LlmProvider::set_ability`](crate::provider::LlmProvider::set_ability),
/// never read prior state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LlmAbility {
    pub available: bool,
    pub openai: OpenAiAbility,
}

/// Per-provider capability record: reachability plus advertised models.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenAiAbility {
    pub available: bool,
    pub models: Vec<String>,
}
