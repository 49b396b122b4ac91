//! People Routes
//!
//! Routes:
//! - GET /api/:version/persons/ - List people
//! - GET /api/:version/persons/:id/ - Get a person

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use tracing::debug;

use crate::serializers::{PersonRepresentation, Represent};
use crate::{AppState, Error, Result};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/:version/persons/", get(list_people))
        .route("/api/:version/persons/:id/", get(get_person))
}

/// GET /api/:version/persons/
async fn list_people(
    State(state): State<AppState>,
    Path(version): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Vec<PersonRepresentation>>> {
    let request = state.request_context(&version, &headers)?;
    let ctx = state.serializer_context(&request);

    Ok(Json(PersonRepresentation::represent_many(
        state.store.people(),
        &ctx,
    )?))
}

/// GET /api/:version/persons/:id/
async fn get_person(
    State(state): State<AppState>,
    Path((version, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<PersonRepresentation>> {
    let request = state.request_context(&version, &headers)?;
    let id = super::parse_id(&id, "person")?;
    let person = state
        .store
        .person(id)
        .ok_or_else(|| Error::NotFound(format!("person {}", id)))?;

    debug!(person_id = id, "Serializing person");

    let ctx = state.serializer_context(&request);
    Ok(Json(PersonRepresentation::represent(person, &ctx)?))
}
