//! Areas Routes
//!
//! Routes:
//! - GET /api/:version/areas/ - List areas
//! - GET /api/:version/areas/:id/ - Get an area

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};

use crate::serializers::{AreaRepresentation, Represent};
use crate::{AppState, Error, Result};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/:version/areas/", get(list_areas))
        .route("/api/:version/areas/:id/", get(get_area))
}

/// GET /api/:version/areas/
async fn list_areas(
    State(state): State<AppState>,
    Path(version): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Vec<AreaRepresentation>>> {
    let request = state.request_context(&version, &headers)?;
    let ctx = state.serializer_context(&request);

    Ok(Json(AreaRepresentation::represent_many(
        state.store.areas(),
        &ctx,
    )?))
}

/// GET /api/:version/areas/:id/
async fn get_area(
    State(state): State<AppState>,
    Path((version, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<AreaRepresentation>> {
    let request = state.request_context(&version, &headers)?;
    let id = super::parse_id(&id, "area")?;
    let area = state
        .store
        .area(id)
        .ok_or_else(|| Error::NotFound(format!("area {}", id)))?;

    let ctx = state.serializer_context(&request);
    Ok(Json(AreaRepresentation::represent(area, &ctx)?))
}
