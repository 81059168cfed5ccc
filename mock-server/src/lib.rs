use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
pub struct CreatePokemon {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Query filters on the collection root: `?id=` exact match, `?name=`
/// substring match.
#[derive(Deserialize, Default)]
pub struct ListFilter {
    pub id: Option<u64>,
    pub name: Option<String>,
}

pub type Db = Arc<RwLock<HashMap<u64, Pokemon>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router pre-seeded with records, for tests that need existing data.
pub fn app_with(seed: Vec<Pokemon>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        seed.into_iter().map(|p| (p.id, p)).collect(),
    ));
    Router::new()
        // The client addresses filtered reads as `<base>/?id=..`, so the
        // slashed collection path must route to the same handler.
        .route("/pokemon", get(list_pokemon).post(create_pokemon).put(update_pokemon))
        .route("/pokemon/", get(list_pokemon))
        .route("/pokemon/{id}", get(get_pokemon).delete(delete_pokemon))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_pokemon(
    State(db): State<Db>,
    Query(filter): Query<ListFilter>,
) -> Json<Vec<Pokemon>> {
    let db = db.read().await;
    let mut pokemons: Vec<Pokemon> = db
        .values()
        .filter(|p| filter.id.is_none_or(|id| p.id == id))
        .filter(|p| filter.name.as_deref().is_none_or(|term| p.name.contains(term)))
        .cloned()
        .collect();
    pokemons.sort_by_key(|p| p.id);
    Json(pokemons)
}

async fn create_pokemon(
    State(db): State<Db>,
    Json(input): Json<CreatePokemon>,
) -> (StatusCode, Json<Pokemon>) {
    let mut db = db.write().await;
    let id = db.keys().max().copied().unwrap_or(0) + 1;
    let pokemon = Pokemon {
        id,
        name: input.name,
        extra: input.extra,
    };
    db.insert(id, pokemon.clone());
    (StatusCode::CREATED, Json(pokemon))
}

async fn get_pokemon(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Pokemon>, StatusCode> {
    let db = db.read().await;
    db.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Full-record replacement keyed by the id in the body, PUT on the
/// collection root. Echoes the updated record.
async fn update_pokemon(
    State(db): State<Db>,
    Json(input): Json<Pokemon>,
) -> Result<Json<Pokemon>, StatusCode> {
    let mut db = db.write().await;
    if !db.contains_key(&input.id) {
        return Err(StatusCode::NOT_FOUND);
    }
    db.insert(input.id, input.clone());
    Ok(Json(input))
}

/// Echoes the deleted record so the client can report what went away.
async fn delete_pokemon(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Pokemon>, StatusCode> {
    let mut db = db.write().await;
    db.remove(&id).map(Json).ok_or(StatusCode::NOT_FOUND)
}
