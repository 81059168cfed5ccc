//! The resource-access facade over the remote pokemon collection.
//!
//! # Design
//! `PokemonService` wires the sans-I/O `PokemonClient` to an injected
//! `Transport` and applies one uniform recovery policy to every operation:
//! on any failure — transport, non-2xx status, bad JSON — emit a `tracing`
//! diagnostic, push one `"<op> failed: <detail>"` message to the injected
//! `MessageSink`, and resolve with the operation's fallback value. Callers
//! never see an error; "no data" and "it broke" are indistinguishable through
//! the result channel. That collapse is intentional, inherited behavior that
//! calling code relies on — do not "fix" it here.
//!
//! Every method completes exactly once, issues at most one request, and
//! retries nothing.

use std::sync::Arc;

use crate::client::PokemonClient;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::message::MessageSink;
use crate::transport::Transport;
use crate::types::{CreatePokemon, Pokemon};

/// What `remove` was asked to delete: a bare id or a full record.
///
/// Resolved to a plain id before the request is built, so both forms produce
/// an identical DELETE.
#[derive(Debug, Clone)]
pub enum RemoveTarget {
    Id(u64),
    Record(Pokemon),
}

impl RemoveTarget {
    fn id(&self) -> u64 {
        match self {
            RemoveTarget::Id(id) => *id,
            RemoveTarget::Record(pokemon) => pokemon.id,
        }
    }
}

impl From<u64> for RemoveTarget {
    fn from(id: u64) -> Self {
        RemoveTarget::Id(id)
    }
}

impl From<Pokemon> for RemoveTarget {
    fn from(pokemon: Pokemon) -> Self {
        RemoveTarget::Record(pokemon)
    }
}

/// Facade over the remote pokemon collection.
///
/// Holds only static configuration (base URL via `PokemonClient`) and the two
/// injected collaborators; no state is retained across calls.
pub struct PokemonService {
    client: PokemonClient,
    transport: Arc<dyn Transport>,
    messages: Arc<dyn MessageSink>,
}

impl PokemonService {
    pub fn new(
        base_url: &str,
        transport: Arc<dyn Transport>,
        messages: Arc<dyn MessageSink>,
    ) -> Self {
        Self {
            client: PokemonClient::new(base_url),
            transport,
            messages,
        }
    }

    /// Fetch every pokemon. Falls back to an empty vec.
    pub async fn list(&self) -> Vec<Pokemon> {
        let request = self.client.build_list();
        match self.round_trip(request).await.and_then(|r| self.client.parse_list(r)) {
            Ok(pokemons) => {
                self.log("fetched pokemons");
                pokemons
            }
            Err(error) => self.recover("getPokemons", error, Vec::new()),
        }
    }

    /// Fetch one pokemon through the id query filter. A transport success
    /// with no match is still a success: logs "did not find" and yields
    /// `None` without triggering the recovery path.
    pub async fn get_by_id(&self, id: u64) -> Option<Pokemon> {
        let request = self.client.build_get_by_id(id);
        match self.round_trip(request).await.and_then(|r| self.client.parse_list(r)) {
            Ok(pokemons) => {
                let first = pokemons.into_iter().next();
                let outcome = if first.is_some() { "fetched" } else { "did not find" };
                self.log(format!("{outcome} pokemon id={id}"));
                first
            }
            Err(error) => self.recover(&format!("getPokemon id={id}"), error, None),
        }
    }

    /// Fetch one pokemon by its id path segment. A 404 lands on the recovery
    /// path, unlike `get_by_id`'s empty-filter case.
    pub async fn get(&self, id: u64) -> Option<Pokemon> {
        let request = self.client.build_get(id);
        match self.round_trip(request).await.and_then(|r| self.client.parse_get(r)) {
            Ok(pokemon) => {
                self.log(format!("fetched pokemon id={id}"));
                Some(pokemon)
            }
            Err(error) => self.recover(&format!("getPokemon id={id}"), error, None),
        }
    }

    /// Fetch pokemons whose name contains `term`. A blank or whitespace-only
    /// term resolves to an empty vec before any request or log message.
    pub async fn search(&self, term: &str) -> Vec<Pokemon> {
        if term.trim().is_empty() {
            return Vec::new();
        }
        let request = self.client.build_search(term);
        match self.round_trip(request).await.and_then(|r| self.client.parse_list(r)) {
            Ok(pokemons) => {
                self.log(format!("found pokemons matching \"{term}\""));
                pokemons
            }
            Err(error) => self.recover("searchPokemons", error, Vec::new()),
        }
    }

    /// Create a new pokemon; the server assigns the id echoed back in the
    /// created record.
    pub async fn create(&self, input: &CreatePokemon) -> Option<Pokemon> {
        let outcome = match self.client.build_create(input) {
            Ok(request) => self.round_trip(request).await.and_then(|r| self.client.parse_create(r)),
            Err(error) => Err(error),
        };
        match outcome {
            Ok(pokemon) => {
                self.log(format!("added pokemon w/ id={}", pokemon.id));
                Some(pokemon)
            }
            Err(error) => self.recover("addPokemon", error, None),
        }
    }

    /// Delete by id or by record; both forms resolve to the same request.
    pub async fn remove(&self, target: impl Into<RemoveTarget>) -> Option<Pokemon> {
        let id = target.into().id();
        let request = self.client.build_delete(id);
        match self.round_trip(request).await.and_then(|r| self.client.parse_delete(r)) {
            Ok(pokemon) => {
                self.log(format!("deleted pokemon id={id}"));
                Some(pokemon)
            }
            Err(error) => self.recover("deletePokemon", error, None),
        }
    }

    /// Replace a pokemon on the server. The acknowledgement has no specified
    /// shape, so it comes back as raw JSON.
    pub async fn update(&self, pokemon: &Pokemon) -> Option<serde_json::Value> {
        let id = pokemon.id;
        let outcome = match self.client.build_update(pokemon) {
            Ok(request) => self.round_trip(request).await.and_then(|r| self.client.parse_update(r)),
            Err(error) => Err(error),
        };
        match outcome {
            Ok(ack) => {
                self.log(format!("updated pokemon id={id}"));
                Some(ack)
            }
            Err(error) => self.recover("updatePokemon", error, None),
        }
    }

    async fn round_trip(&self, request: HttpRequest) -> Result<crate::http::HttpResponse, ApiError> {
        self.transport.execute(request).await
    }

    /// The uniform recovery policy: one diagnostic, one collaborator message,
    /// then the fallback value instead of an error.
    fn recover<T>(&self, operation: &str, error: ApiError, fallback: T) -> T {
        tracing::error!(operation, %error, "remote call failed");
        self.log(format!("{operation} failed: {error}"));
        fallback
    }

    fn log(&self, message: impl AsRef<str>) {
        self.messages.add(format!("PokemonService: {}", message.as_ref()));
    }
}
