//! Error types for the input boundary and catalog loading.
//!
//! State transitions never fail; these errors only surface where untrusted
//! input is turned into typed values.

use thiserror::Error;

/// Unknown enum value arriving from the input layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown condition: {0}")]
    UnknownCondition(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}

/// Errors raised while loading a custom card catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate card id {id}")]
    DuplicateId { id: String },

    #[error("card at index {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },
}

/// Errors raised while decoding a [`GameEvent`](crate::triage_engine::events::GameEvent).
#[derive(Debug, Error)]
pub enum EventError {
    #[error("invalid event: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
