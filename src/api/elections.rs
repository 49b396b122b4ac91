//! Elections Routes
//!
//! Routes:
//! - GET /api/:version/elections/ - List elections
//! - GET /api/:version/elections/:slug/ - Get an election

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};

use crate::serializers::{ElectionRepresentation, Represent};
use crate::{AppState, Error, Result};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/:version/elections/", get(list_elections))
        .route("/api/:version/elections/:slug/", get(get_election))
}

/// GET /api/:version/elections/
async fn list_elections(
    State(state): State<AppState>,
    Path(version): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Vec<ElectionRepresentation>>> {
    let request = state.request_context(&version, &headers)?;
    let ctx = state.serializer_context(&request);

    Ok(Json(ElectionRepresentation::represent_many(
        state.store.elections(),
        &ctx,
    )?))
}

/// GET /api/:version/elections/:slug/
async fn get_election(
    State(state): State<AppState>,
    Path((version, slug)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<ElectionRepresentation>> {
    let request = state.request_context(&version, &headers)?;
    let election = state
        .store
        .election(&slug)
        .ok_or_else(|| Error::NotFound(format!("election {}", slug)))?;

    let ctx = state.serializer_context(&request);
    Ok(Json(ElectionRepresentation::represent(election, &ctx)?))
}
