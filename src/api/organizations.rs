//! Organizations Routes
//!
//! Organizations are addressed by the slug on their extra record; those
//! without one are not exposed as resources.
//!
//! Routes:
//! - GET /api/:version/organizations/ - List organizations
//! - GET /api/:version/organizations/:slug/ - Get an organization

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use tracing::debug;

use crate::serializers::{OrganizationRepresentation, Represent};
use crate::{AppState, Error, Result};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/:version/organizations/", get(list_organizations))
        .route("/api/:version/organizations/:slug/", get(get_organization))
}

/// GET /api/:version/organizations/
async fn list_organizations(
    State(state): State<AppState>,
    Path(version): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Vec<OrganizationRepresentation>>> {
    let request = state.request_context(&version, &headers)?;
    let ctx = state.serializer_context(&request);

    Ok(Json(OrganizationRepresentation::represent_many(
        state.store.slugged_organizations(),
        &ctx,
    )?))
}

/// GET /api/:version/organizations/:slug/
async fn get_organization(
    State(state): State<AppState>,
    Path((version, slug)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<OrganizationRepresentation>> {
    let request = state.request_context(&version, &headers)?;
    let organization = state
        .store
        .organization_by_slug(&slug)
        .ok_or_else(|| Error::NotFound(format!("organization {}", slug)))?;

    debug!(slug = %slug, "Serializing organization");

    let ctx = state.serializer_context(&request);
    Ok(Json(OrganizationRepresentation::represent(organization, &ctx)?))
}
