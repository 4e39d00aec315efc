//! Canned fallback for failed generation calls.

use crate::models::GenerationResponse;
use crate::services::providers::ProviderError;

/// Text of the single fallback candidate.
const FALLBACK_TEXT: &str = "Thank you for sharing your thoughts. I'm here to \
listen and help you explore your feelings. What else would you like to talk \
about today?";

/// Returns the fixed supportive payload used when the upstream call fails on
/// a conversational endpoint. The original error is logged for operators;
/// the caller sees a structurally valid response.
pub fn supportive_fallback(error: &ProviderError) -> GenerationResponse {
    tracing::error!(error = %error, "Text generation failed; returning fallback response");
    GenerationResponse::single_text(FALLBACK_TEXT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_matches_the_candidates_shape() {
        let body =
            serde_json::to_value(supportive_fallback(&ProviderError::RateLimited)).unwrap();
        let text = body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .unwrap();
        assert!(text.starts_with("Thank you for sharing your thoughts."));
        assert_eq!(body["candidates"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn fallback_is_deterministic() {
        let a = serde_json::to_value(supportive_fallback(&ProviderError::RateLimited)).unwrap();
        let b = serde_json::to_value(supportive_fallback(&ProviderError::NetworkError(
            "connection reset".to_string(),
        )))
        .unwrap();
        assert_eq!(a, b);
    }
}
