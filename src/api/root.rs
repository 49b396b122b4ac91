//! API root: absolute URLs of every resource list at the requested version.
//!
//! Routes:
//! - GET /api/:version/ - Resource index

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};

use crate::urls::{AREA_LIST, ELECTION_LIST, ORGANIZATION_LIST, PERSON_LIST, POST_LIST};
use crate::{AppState, Result};

const RESOURCES: &[(&str, &str)] = &[
    ("areas", AREA_LIST),
    ("elections", ELECTION_LIST),
    ("organizations", ORGANIZATION_LIST),
    ("persons", PERSON_LIST),
    ("posts", POST_LIST),
];

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/:version/", get(api_root))
}

/// GET /api/:version/
async fn api_root(
    State(state): State<AppState>,
    Path(version): Path<String>,
    headers: HeaderMap,
) -> Result<Json<BTreeMap<&'static str, String>>> {
    let request = state.request_context(&version, &headers)?;
    let ctx = state.serializer_context(&request);

    let index = RESOURCES
        .iter()
        .map(|&(name, route)| ctx.hyperlink(route, &[]).map(|url| (name, url)))
        .collect::<Result<BTreeMap<_, _>>>()?;

    Ok(Json(index))
}
