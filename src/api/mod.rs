//! API Routes for ynr
//!
//! This module combines all API routes into a single router.
//! Resource routes live under `/api/:version/` and mirror the names in
//! [`crate::urls`], so every hyperlink a serializer emits resolves here.

mod areas;
mod elections;
mod organizations;
mod people;
mod posts;
mod root;
pub mod status;

use axum::Router;

use crate::{AppState, Error, Result};

/// Build the complete API router.
///
/// Route structure:
/// - /health - Health check (public)
/// - /api/:version/ - API root listing resource URLs
/// - /api/:version/persons/ - People
/// - /api/:version/organizations/ - Organizations (by slug)
/// - /api/:version/elections/ - Elections (by slug)
/// - /api/:version/posts/ - Posts
/// - /api/:version/areas/ - Areas
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(status::routes())
        .merge(root::routes())
        .merge(people::routes())
        .merge(organizations::routes())
        .merge(elections::routes())
        .merge(posts::routes())
        .merge(areas::routes())
}

/// Parse a numeric record id from the path. Anything that is not an id
/// cannot name a record, so it is reported as not found.
fn parse_id(raw: &str, resource: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| Error::NotFound(format!("{} {}", resource, raw)))
}
