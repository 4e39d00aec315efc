//! Domain models for the journal service.

pub mod request;
pub mod response;

pub use request::{ConversationTurn, EntryType, GenerateRequest};
pub use response::{Candidate, CandidateContent, CandidatePart, GenerationResponse};
