// SPDX-FileCopyrightText: 2026 Parley Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core contract for Parley LLM provider adapters.
//!
//! This crate defines the provider-agnostic value types, the error type, and
//! the [`LlmProvider`] trait that every provider adapter implements. It
//! contains no HTTP or provider-specific code.

pub mod error;
pub mod provider;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ParleyError;
pub use provider::{CHUNK_CHANNEL_CAPACITY, LlmProvider};
pub use types::{
    Chunk, CompletionOptions, HealthStatus, LlmAbility, LlmOptions, Message, OpenAiAbility,
    Quota, Role,
};
