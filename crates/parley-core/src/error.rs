// SPDX-FileCopyrightText: 2026 Parley Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared across Parley provider adapters.

use thiserror::Error;

/// The primary error type used across the provider contract.
#[derive(Debug, Error)]
pub enum ParleyError {
    /// Configuration errors (missing option block, invalid construction input).
    /// Raised synchronously, before any network call is attempted.
    #[error("configuration error: {0}")]
    Config(String),

    /// LLM provider errors (auth failure, network, malformed response, rate limit).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
