//! Mock providers for testing.

use super::{ProviderError, TextProvider};
use crate::models::GenerationResponse;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Deterministic text provider that records every prompt it receives.
pub struct MockTextProvider {
    reply: String,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockTextProvider {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Prompts received so far, in call order.
    pub fn recorded_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<serde_json::Value, ProviderError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        serde_json::to_value(GenerationResponse::single_text(&self.reply))
            .map_err(|e| ProviderError::ApiError(e.to_string()))
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}

/// Text provider whose every call fails, for exercising the fallback path.
pub struct FailingTextProvider;

#[async_trait]
impl TextProvider for FailingTextProvider {
    async fn generate(&self, _prompt: &str) -> Result<serde_json::Value, ProviderError> {
        Err(ProviderError::NetworkError(
            "connection refused".to_string(),
        ))
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Err(ProviderError::NetworkError(
            "connection refused".to_string(),
        ))
    }
}
