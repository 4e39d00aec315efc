//! The candidates-shaped response body.
//!
//! Successful upstream responses are relayed verbatim as raw JSON; these
//! types exist so the fallback payload is guaranteed to have the same shape
//! the upstream service produces.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateContent {
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidatePart {
    pub text: String,
}

impl GenerationResponse {
    /// A response carrying a single text candidate.
    pub fn single_text(text: impl Into<String>) -> Self {
        GenerationResponse {
            candidates: vec![Candidate {
                content: CandidateContent {
                    parts: vec![CandidatePart { text: text.into() }],
                },
            }],
        }
    }
}
