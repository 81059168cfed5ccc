//! Domain DTOs for the pokemon API.
//!
//! # Design
//! `Pokemon` pins down only the two fields the facade actually reads (`id`,
//! `name`); everything else the remote system sends (sprites, stats, whatever)
//! rides along in `extra` via `#[serde(flatten)]` and round-trips unchanged.
//! These types are defined independently from the mock-server crate;
//! integration tests catch schema drift.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single pokemon record exchanged with the remote system.
///
/// `id` is assigned by the remote system and never generated or mutated on
/// this side. Fields beyond `id` and `name` are passed through opaquely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pokemon {
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Pokemon {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// Request payload for creating a new pokemon. Carries no `id` — the server
/// assigns one and echoes it back in the created record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePokemon {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreatePokemon {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}
