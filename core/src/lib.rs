//! Async client core for the pokemon API.
//!
//! # Overview
//! `PokemonService` is the single access layer between calling code and the
//! remote pokemon collection: seven CRUD-shaped operations, each one HTTP
//! round-trip, each reporting its outcome to an injected `MessageSink` and
//! swallowing failures into fallback values.
//!
//! # Design
//! - `PokemonClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network; the `Transport` trait executes the
//!   round-trip in between, so the build/parse layer stays deterministic.
//! - `PokemonService` layers the recovery policy on top: one log message per
//!   call, errors converted to fallbacks, never surfaced to the caller.
//! - Collaborators (`Transport`, `MessageSink`) are injected `Arc`s owned by
//!   the composing application, not globals.

pub mod client;
pub mod error;
pub mod http;
pub mod message;
pub mod service;
pub mod transport;
pub mod types;

pub use client::PokemonClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use message::{MessageLog, MessageSink};
pub use service::{PokemonService, RemoveTarget};
pub use transport::{ReqwestTransport, Transport};
pub use types::{CreatePokemon, Pokemon};
