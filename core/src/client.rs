//! Stateless HTTP request builder and response parser for the pokemon API.
//!
//! # Design
//! `PokemonClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`, keeping this layer deterministic and free of I/O. The
//! facade in `service` owns the round-trip and the recovery policy.
//!
//! URL shapes match the remote contract exactly: filtered reads go through
//! the query string on the collection root (`<base>/?id=`, `<base>/?name=`),
//! strict reads and deletes address `<base>/<id>`, and update PUTs to the
//! collection root with the id in the body.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreatePokemon, Pokemon};

const JSON_CONTENT_TYPE: (&str, &str) = ("content-type", "application/json");

/// Stateless build/parse layer for the pokemon API.
#[derive(Debug, Clone)]
pub struct PokemonClient {
    base_url: String,
}

impl PokemonClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.base_url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Id-filtered list fetch; the response is a zero-or-one element array.
    pub fn build_get_by_id(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/?id={id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Name-filtered list fetch. Blank-term short-circuiting happens in the
    /// facade, before any request is built.
    pub fn build_search(&self, term: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/?name={term}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, input: &CreatePokemon) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.base_url.clone(),
            headers: vec![json_header()],
            body: Some(body),
        })
    }

    pub fn build_delete(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/{id}", self.base_url),
            headers: vec![json_header()],
            body: None,
        }
    }

    pub fn build_update(&self, pokemon: &Pokemon) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(pokemon).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: self.base_url.clone(),
            headers: vec![json_header()],
            body: Some(body),
        })
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Pokemon>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<Pokemon, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Pokemon, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<Pokemon, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// The update acknowledgement has no specified shape, so it is surfaced
    /// as raw JSON rather than forced into a DTO.
    pub fn parse_update(&self, response: HttpResponse) -> Result<serde_json::Value, ApiError> {
        check_status(&response, 200)?;
        if response.body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

fn json_header() -> (String, String) {
    (JSON_CONTENT_TYPE.0.to_string(), JSON_CONTENT_TYPE.1.to_string())
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PokemonClient {
        PokemonClient::new("http://localhost:3000/pokemon")
    }

    #[test]
    fn build_list_produces_bare_collection_url() {
        let req = client().build_list();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/pokemon");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_by_id_uses_query_filter() {
        let req = client().build_get_by_id(7);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/pokemon/?id=7");
    }

    #[test]
    fn build_get_uses_path_segment() {
        let req = client().build_get(7);
        assert_eq!(req.url, "http://localhost:3000/pokemon/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_search_uses_name_filter() {
        let req = client().build_search("char");
        assert_eq!(req.url, "http://localhost:3000/pokemon/?name=char");
    }

    #[test]
    fn build_create_sets_json_header_and_body() {
        let input = CreatePokemon::named("mew");
        let req = client().build_create(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/pokemon");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "mew");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_delete_targets_id_path_with_json_header() {
        let req = client().build_delete(3);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:3000/pokemon/3");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn build_update_puts_to_collection_root() {
        let pokemon = Pokemon::new(4, "charmander");
        let req = client().build_update(&pokemon).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://localhost:3000/pokemon");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], 4);
        assert_eq!(body["name"], "charmander");
    }

    #[test]
    fn parse_list_success() {
        let response = HttpResponse::ok(r#"[{"id":1,"name":"bulbasaur"}]"#);
        let pokemons = client().parse_list(response).unwrap();
        assert_eq!(pokemons.len(), 1);
        assert_eq!(pokemons[0].name, "bulbasaur");
    }

    #[test]
    fn parse_get_not_found() {
        let response = HttpResponse {
            status: 404,
            body: String::new(),
        };
        let err = client().parse_get(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_create_wrong_status() {
        let response = HttpResponse {
            status: 500,
            body: "internal error".to_string(),
        };
        let err = client().parse_create(response).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_update_empty_body_is_null_ack() {
        let ack = client().parse_update(HttpResponse::ok("")).unwrap();
        assert!(ack.is_null());
    }

    #[test]
    fn parse_update_passes_body_through_untyped() {
        let ack = client().parse_update(HttpResponse::ok(r#"{"id":4,"name":"charmeleon"}"#)).unwrap();
        assert_eq!(ack["name"], "charmeleon");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = PokemonClient::new("http://localhost:3000/pokemon/");
        let req = client.build_list();
        assert_eq!(req.url, "http://localhost:3000/pokemon");
    }

    #[test]
    fn parse_list_bad_json() {
        let err = client().parse_list(HttpResponse::ok("not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
