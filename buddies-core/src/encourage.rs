//! Short encouragement phrases from a text-generation service.
//!
//! Fetching is best-effort. [`fetch_encouragement`] never fails: any error,
//! timeout or empty reply is replaced by a fixed fallback phrase.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use claude::{Claude, Request};
use thiserror::Error;

use crate::config::GameConfig;

/// Shown when the service cannot produce a phrase for a correct answer.
pub const FALLBACK_CORRECT: &str = "Great job!";

/// Shown when the service cannot produce a phrase for a wrong answer.
pub const FALLBACK_INCORRECT: &str = "Keep trying!";

const SYSTEM_PROMPT: &str = "You cheer on young children who are learning to add and subtract. Reply with the encouragement only, no quotes or emoji.";
const CORRECT_PROMPT: &str = "Give a short, super enthusiastic 3-5 word encouragement for a child who just got a math problem right.";
const INCORRECT_PROMPT: &str =
    "Give a short, gentle 3-5 word encouragement for a child to try a math problem again.";

/// Errors from an encouragement source. Never reach the game.
#[derive(Debug, Error)]
pub enum EncourageError {
    #[error("Client error: {0}")]
    Client(#[from] claude::Error),

    #[error("Service returned no text")]
    EmptyResponse,

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

/// Fixed phrase used whenever the service does not deliver.
pub fn fallback_phrase(correct: bool) -> &'static str {
    if correct {
        FALLBACK_CORRECT
    } else {
        FALLBACK_INCORRECT
    }
}

/// Prompt for the given outcome: enthusiastic after a correct answer,
/// gentle after a wrong one.
pub fn prompt(correct: bool) -> &'static str {
    if correct {
        CORRECT_PROMPT
    } else {
        INCORRECT_PROMPT
    }
}

/// Completion request for the given outcome.
pub fn encouragement_request(correct: bool) -> Request {
    Request::new(prompt(correct))
        .with_system(SYSTEM_PROMPT)
        .with_max_tokens(32)
        .with_temperature(1.0)
}

/// Source of encouragement phrases.
#[async_trait]
pub trait Encourager: Send + Sync {
    /// Produce a phrase for an answer that was (or was not) correct.
    async fn encourage(&self, correct: bool) -> Result<String, EncourageError>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

/// Encourager backed by the Claude Messages API.
pub struct ClaudeEncourager {
    client: Claude,
}

impl ClaudeEncourager {
    pub fn new(client: Claude) -> Self {
        Self { client }
    }

    /// Build from configuration. Fails if no API key is configured.
    pub fn from_config(config: &GameConfig) -> Result<Self, EncourageError> {
        let api_key = config.api_key.as_deref().ok_or(claude::Error::NoApiKey)?;
        let client = Claude::new(api_key)?
            .with_model(config.model.clone())
            .with_timeout(config.encouragement_timeout);
        Ok(Self::new(client))
    }
}

#[async_trait]
impl Encourager for ClaudeEncourager {
    async fn encourage(&self, correct: bool) -> Result<String, EncourageError> {
        let response = self
            .client
            .complete(encouragement_request(correct))
            .await?;
        let text = response.text().trim().to_string();
        if text.is_empty() {
            return Err(EncourageError::EmptyResponse);
        }
        Ok(text)
    }

    fn name(&self) -> &str {
        "claude"
    }
}

/// Encourager used when no service is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackEncourager;

#[async_trait]
impl Encourager for FallbackEncourager {
    async fn encourage(&self, correct: bool) -> Result<String, EncourageError> {
        Ok(fallback_phrase(correct).to_string())
    }

    fn name(&self) -> &str {
        "fallback"
    }
}

/// Pick the encourager for a configuration.
///
/// Without an API key, or if the client cannot be built, phrases come from
/// [`FallbackEncourager`].
pub fn encourager_from_config(config: &GameConfig) -> Arc<dyn Encourager> {
    if config.api_key.is_none() {
        tracing::info!("No API key configured, using fallback encouragement");
        return Arc::new(FallbackEncourager);
    }

    match ClaudeEncourager::from_config(config) {
        Ok(encourager) => Arc::new(encourager),
        Err(e) => {
            tracing::warn!(error = %e, "Encouragement client unavailable, using fallback");
            Arc::new(FallbackEncourager)
        }
    }
}

/// Fetch a phrase, substituting the fallback on any failure.
pub async fn fetch_encouragement(
    encourager: &dyn Encourager,
    correct: bool,
    timeout: Duration,
) -> String {
    let result = match tokio::time::timeout(timeout, encourager.encourage(correct)).await {
        Ok(result) => result,
        Err(_) => Err(EncourageError::Timeout(timeout)),
    };

    match result {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            tracing::warn!(source = encourager.name(), "Empty encouragement, using fallback");
            fallback_phrase(correct).to_string()
        }
        Err(e) => {
            tracing::warn!(
                source = encourager.name(),
                error = %e,
                "Encouragement failed, using fallback"
            );
            fallback_phrase(correct).to_string()
        }
    }
}
