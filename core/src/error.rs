//! Error types for the pokemon API client.
//!
//! # Design
//! The facade collapses every variant into the same fallback-and-log recovery,
//! so the distinctions here exist for diagnostics and for callers of the raw
//! `PokemonClient` layer. `NotFound` keeps its own variant because "the record
//! does not exist" reads differently in a log line than "the server blew up."

use thiserror::Error;

/// Errors produced while building, executing, or parsing an API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the requested pokemon does not exist.
    #[error("pokemon not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never completed — connection refused, DNS failure, etc.
    #[error("transport error: {0}")]
    Transport(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}
