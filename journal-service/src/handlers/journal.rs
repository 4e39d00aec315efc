//! Generation endpoints.
//!
//! The two POST routes share one parameterized handler: the request's entry
//! type picks the prompt framing, and upstream failures are absorbed into a
//! fixed fallback payload so the conversational flow never sees an error.
//! The GET routes issue canned prompts and surface upstream failures as a
//! uniform 500.

use crate::models::{EntryType, GenerateRequest};
use crate::services::{fallback, prompt};
use crate::startup::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use service_core::error::AppError;

/// Canned prompt behind `GET /Journal`.
const GETTING_STARTED_PROMPT: &str = "Getting started with Journaling";

/// Canned prompt behind `GET /prompt`.
const DAILY_PROMPT: &str =
    "Write a short, encouraging prompt to help someone begin today's journal entry.";

/// POST `/api` and `/Journal/api`.
///
/// The body is deserialized leniently: a malformed body becomes a structured
/// 400 like any other validation failure, never axum's plain-text rejection.
pub async fn generate(
    State(state): State<AppState>,
    request: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = request
        .map_err(|rejection| AppError::BadRequest(anyhow::anyhow!(rejection.body_text())))?;

    let prompt_text = match request.prompt {
        Some(p) if !p.trim().is_empty() => p,
        _ => return Err(AppError::BadRequest(anyhow::anyhow!("Prompt is required"))),
    };

    if let Some(journal_id) = &request.journal_id {
        // Accepted but not persisted; logged so requests can be correlated.
        tracing::debug!(journal_id = %journal_id, "Generation request for a journal");
    }

    let history = request.context.unwrap_or_default();
    let composed = match EntryType::from(request.entry_type.as_deref()) {
        EntryType::NewEntry => prompt::entry_reflection(&prompt_text),
        EntryType::Continuation => prompt::conversation(&prompt_text, &history),
    };

    match state.text_provider.generate(&composed).await {
        Ok(body) => Ok(Json(body).into_response()),
        // Absorbed: the caller gets a structurally valid response with 200.
        Err(err) => Ok(Json(fallback::supportive_fallback(&err)).into_response()),
    }
}

/// GET `/Journal`.
pub async fn journal_start(State(state): State<AppState>) -> Result<Response, AppError> {
    canned(&state, GETTING_STARTED_PROMPT).await
}

/// GET `/prompt`.
pub async fn daily_prompt(State(state): State<AppState>) -> Result<Response, AppError> {
    canned(&state, DAILY_PROMPT).await
}

async fn canned(state: &AppState, text: &str) -> Result<Response, AppError> {
    let body = state.text_provider.generate(text).await.map_err(|err| {
        tracing::error!(error = %err, "Canned prompt generation failed");
        AppError::UpstreamError("Failed to connect to AI service".to_string())
    })?;

    Ok(Json(body).into_response())
}
