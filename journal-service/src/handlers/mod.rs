//! HTTP handlers for the journal service.

pub mod health;
pub mod journal;
