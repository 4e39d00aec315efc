//! Text generation provider abstraction.
//!
//! A trait seam between the handlers and the upstream AI backend, so the
//! real Gemini client and the test mocks are interchangeable.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for text generation backends.
///
/// The response body is deliberately untyped: the gateway relays whatever the
/// upstream service returned without reshaping it.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate one complete (non-streamed) response for a composed prompt.
    async fn generate(&self, prompt: &str) -> Result<serde_json::Value, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
