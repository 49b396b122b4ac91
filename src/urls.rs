//! Named API routes and URL reversal.
//!
//! Hyperlinks are never formatted ad hoc: serializers reverse a route name
//! with its keyword arguments (always including the API version) and the
//! request context turns the resulting path into an absolute URI.

use std::collections::HashMap;

use axum::http::{header, HeaderMap};
use url::Url;

use crate::{Error, Result};

pub const API_ROOT: &str = "api-root";
pub const AREA_LIST: &str = "area-list";
pub const AREA_DETAIL: &str = "area-detail";
pub const ELECTION_LIST: &str = "election-list";
pub const ELECTION_DETAIL: &str = "election-detail";
pub const ORGANIZATION_LIST: &str = "organizationextra-list";
pub const ORGANIZATION_DETAIL: &str = "organizationextra-detail";
pub const PERSON_LIST: &str = "person-list";
pub const PERSON_DETAIL: &str = "person-detail";
pub const POST_LIST: &str = "post-list";
pub const POST_DETAIL: &str = "post-detail";

/// Route name → path pattern. Patterns use `{param}` placeholders.
const ROUTES: &[(&str, &str)] = &[
    (API_ROOT, "/api/{version}/"),
    (AREA_LIST, "/api/{version}/areas/"),
    (AREA_DETAIL, "/api/{version}/areas/{pk}/"),
    (ELECTION_LIST, "/api/{version}/elections/"),
    (ELECTION_DETAIL, "/api/{version}/elections/{slug}/"),
    (ORGANIZATION_LIST, "/api/{version}/organizations/"),
    (ORGANIZATION_DETAIL, "/api/{version}/organizations/{slug}/"),
    (PERSON_LIST, "/api/{version}/persons/"),
    (PERSON_DETAIL, "/api/{version}/persons/{pk}/"),
    (POST_LIST, "/api/{version}/posts/"),
    (POST_DETAIL, "/api/{version}/posts/{pk}/"),
];

/// The route table plus the media URL prefix.
#[derive(Debug, Clone)]
pub struct Urls {
    routes: HashMap<&'static str, &'static str>,
    media_url: String,
}

impl Urls {
    pub fn new(media_url: impl Into<String>) -> Self {
        Self {
            routes: ROUTES.iter().copied().collect(),
            media_url: media_url.into(),
        }
    }

    /// Reverse a named route to a path.
    ///
    /// Every placeholder in the pattern must be supplied; values are
    /// percent-encoded as single path segments.
    pub fn reverse(&self, name: &str, kwargs: &[(&str, &str)]) -> Result<String> {
        let pattern = self
            .routes
            .get(name)
            .ok_or_else(|| Error::NoReverseMatch(format!("unknown route '{}'", name)))?;

        let mut path = String::with_capacity(pattern.len());
        let mut rest = *pattern;
        while let Some(open) = rest.find('{') {
            path.push_str(&rest[..open]);
            let close = rest[open..]
                .find('}')
                .map(|offset| open + offset)
                .ok_or_else(|| Error::Internal(format!("unterminated placeholder in {}", pattern)))?;
            let param = &rest[open + 1..close];
            let value = kwargs
                .iter()
                .find(|(key, _)| *key == param)
                .map(|(_, value)| *value)
                .ok_or_else(|| {
                    Error::NoReverseMatch(format!("route '{}' requires '{}'", name, param))
                })?;
            if value.is_empty() {
                return Err(Error::NoReverseMatch(format!(
                    "route '{}' got an empty '{}'",
                    name, param
                )));
            }
            path.push_str(&urlencoding::encode(value));
            rest = &rest[close + 1..];
        }
        path.push_str(rest);

        Ok(path)
    }

    /// Public URL of a stored media file. Relative to the site root.
    pub fn media(&self, name: &str) -> String {
        format!(
            "{}/{}",
            self.media_url.trim_end_matches('/'),
            name.trim_start_matches('/')
        )
    }
}

impl Default for Urls {
    fn default() -> Self {
        Self::new("/media/")
    }
}

// ============================================================================
// Request Context
// ============================================================================

/// Per-request data needed to build hyperlinks: the absolute base of the
/// request and the API version it was made against.
#[derive(Debug, Clone)]
pub struct RequestContext {
    base: Url,
    version: String,
}

impl RequestContext {
    pub fn new(base: Url, version: impl Into<String>) -> Self {
        Self {
            base,
            version: version.into(),
        }
    }

    /// Derive the request base from the configured public URL, replacing
    /// its host (and port) with the request's `Host` header when present.
    pub fn from_headers(public_url: &Url, headers: &HeaderMap, version: impl Into<String>) -> Self {
        let base = headers
            .get(header::HOST)
            .and_then(|host| host.to_str().ok())
            .and_then(|host| Url::parse(&format!("{}://{}/", public_url.scheme(), host)).ok())
            .unwrap_or_else(|| public_url.clone());

        Self::new(base, version)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn build_absolute_uri(&self, path: &str) -> Result<String> {
        Ok(self.base.join(path)?.to_string())
    }
}
