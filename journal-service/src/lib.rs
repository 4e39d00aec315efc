//! Journaling assistant gateway.
//!
//! A small HTTP service that composes journaling prompts, forwards them to a
//! generative AI backend, and relays the response. Upstream failures on the
//! conversational endpoints are masked with a fixed supportive fallback so
//! the user-facing flow never breaks.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
