//! Posts Routes
//!
//! Routes:
//! - GET /api/:version/posts/ - List posts
//! - GET /api/:version/posts/:id/ - Get a post

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use tracing::debug;

use crate::serializers::{PostRepresentation, Represent};
use crate::{AppState, Error, Result};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/:version/posts/", get(list_posts))
        .route("/api/:version/posts/:id/", get(get_post))
}

/// GET /api/:version/posts/
async fn list_posts(
    State(state): State<AppState>,
    Path(version): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Vec<PostRepresentation>>> {
    let request = state.request_context(&version, &headers)?;
    let ctx = state.serializer_context(&request);

    Ok(Json(PostRepresentation::represent_many(
        state.store.posts(),
        &ctx,
    )?))
}

/// GET /api/:version/posts/:id/
async fn get_post(
    State(state): State<AppState>,
    Path((version, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<PostRepresentation>> {
    let request = state.request_context(&version, &headers)?;
    let id = super::parse_id(&id, "post")?;
    let post = state
        .store
        .post(id)
        .ok_or_else(|| Error::NotFound(format!("post {}", id)))?;

    debug!(post_id = id, "Serializing post");

    let ctx = state.serializer_context(&request);
    Ok(Json(PostRepresentation::represent(post, &ctx)?))
}
