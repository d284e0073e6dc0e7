// SPDX-FileCopyrightText: 2026 Parley Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the OpenAI API.
//!
//! Provides [`OpenAiClient`] which handles request construction,
//! authentication, streaming SSE responses, model listing, and transient
//! error retry. The adapter layer on top of this client adds no retry or
//! caching of its own.

use std::pin::Pin;
use std::time::Duration;

use futures::Stream;
use parley_core::ParleyError;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::sse::{self, StreamEvent};
use crate::types::{ApiErrorResponse, ChatRequest, ChatResponse, ModelList};

/// Base URL for the OpenAI API.
const API_BASE_URL: &str = "https://api.openai.com/v1";

/// HTTP client for OpenAI API communication.
///
/// Manages the bearer authentication header, connection pooling, and retry
/// for transient errors (429, 500, 503).
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    max_retries: u32,
    base_url: String,
}

impl OpenAiClient {
    /// Creates a new OpenAI API client authenticated with `api_key`.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ParleyError> {
        let api_key = api_key.into();

        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
            ParleyError::Config(format!("invalid API key header value: {e}"))
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("authorization", auth);
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(|e| ParleyError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            max_retries: 1,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub(crate) fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn models_url(&self) -> String {
        format!("{}/models", self.base_url)
    }

    /// Sends a non-streaming chat completion and returns the full response.
    ///
    /// On transient errors (429, 500, 503), retries once after a 1-second delay.
    pub async fn complete_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ParleyError> {
        let mut req = request.clone();
        req.stream = false;

        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, "retrying completion request after transient error");
                tokio::time::sleep(Duration::from_secs(1)).await;
            }

            let response = self
                .client
                .post(self.completions_url())
                .json(&req)
                .send()
                .await
                .map_err(|e| ParleyError::Provider {
                    message: format!("HTTP request failed: {e}"),
                    source: Some(Box::new(e)),
                })?;

            let status = response.status();
            debug!(status = %status, attempt, "completion response received");

            if status.is_success() {
                let body = response.text().await.map_err(|e| ParleyError::Provider {
                    message: format!("failed to read response body: {e}"),
                    source: Some(Box::new(e)),
                })?;
                let chat_response: ChatResponse =
                    serde_json::from_str(&body).map_err(|e| ParleyError::Provider {
                        message: format!("failed to parse API response: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                return Ok(chat_response);
            }

            if is_transient_error(status) && attempt < self.max_retries {
                let body = response.text().await.unwrap_or_default();
                warn!(status = %status, body = %body, "transient error, will retry");
                last_error = Some(api_error(status, body));
                continue;
            }

            // Non-transient error or exhausted retries.
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, body));
        }

        Err(last_error.unwrap_or_else(|| ParleyError::Provider {
            message: "completion request failed after retries".into(),
            source: None,
        }))
    }

    /// Sends a streaming chat completion and returns a stream of SSE events.
    ///
    /// On transient errors while opening the stream, retries once after a
    /// 1-second delay. Errors after the stream has opened are yielded as
    /// stream items.
    pub async fn stream_chat(
        &self,
        request: &ChatRequest,
    ) -> Result<Pin<Box<dyn Stream<Item = Result<StreamEvent, ParleyError>> + Send>>, ParleyError>
    {
        let mut req = request.clone();
        req.stream = true;

        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, "retrying streaming request after transient error");
                tokio::time::sleep(Duration::from_secs(1)).await;
            }

            let response = self
                .client
                .post(self.completions_url())
                .json(&req)
                .send()
                .await
                .map_err(|e| ParleyError::Provider {
                    message: format!("HTTP request failed: {e}"),
                    source: Some(Box::new(e)),
                })?;

            let status = response.status();
            debug!(status = %status, attempt, "streaming response received");

            if status.is_success() {
                return Ok(sse::parse_sse_stream(response));
            }

            if is_transient_error(status) && attempt < self.max_retries {
                let body = response.text().await.unwrap_or_default();
                warn!(status = %status, body = %body, "transient error, will retry");
                last_error = Some(api_error(status, body));
                continue;
            }

            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, body));
        }

        Err(last_error.unwrap_or_else(|| ParleyError::Provider {
            message: "streaming request failed after retries".into(),
            source: None,
        }))
    }

    /// Lists all models the API key has access to.
    pub async fn list_models(&self) -> Result<ModelList, ParleyError> {
        let response = self
            .client
            .get(self.models_url())
            .send()
            .await
            .map_err(|e| ParleyError::Provider {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "model list response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, body));
        }

        response.json::<ModelList>().await.map_err(|e| ParleyError::Provider {
            message: format!("failed to parse model list: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

/// Builds a provider error from a non-success status and response body,
/// preferring the structured OpenAI error payload when it parses.
fn api_error(status: reqwest::StatusCode, body: String) -> ParleyError {
    let message = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
        format!(
            "OpenAI API error ({}): {}",
            api_err.error.type_, api_err.error.message
        )
    } else {
        format!("API returned {status}: {body}")
    };
    ParleyError::Provider {
        message,
        source: None,
    }
}

/// Returns true for HTTP status codes that indicate transient errors worth retrying.
fn is_transient_error(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503)
}
