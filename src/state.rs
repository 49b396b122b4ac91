//! Application state for ynr.
//!
//! Contains the shared state that is passed to all handlers.

use std::sync::Arc;

use axum::http::HeaderMap;
use url::Url;

use crate::config::{self, ApiConfig};
use crate::serializers::SerializerContext;
use crate::store::Store;
use crate::urls::{RequestContext, Urls};
use crate::{Error, Result};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only record store.
    pub store: Arc<Store>,
    /// Named route table used for hyperlinks.
    pub urls: Arc<Urls>,
    /// Versioning and media settings.
    pub api: Arc<ApiConfig>,
    /// Fallback base for absolute URLs.
    pub public_url: Url,
}

impl AppState {
    /// Create the application state from the global configuration,
    /// loading the dataset from disk.
    pub fn new() -> Result<Self> {
        let config = config::config();
        let store = Store::load(&config.data.path)?;

        Ok(Self::with_store(
            store,
            config.api.clone(),
            config.server.public_url.clone(),
        ))
    }

    pub fn with_store(store: Store, api: ApiConfig, public_url: Url) -> Self {
        Self {
            store: Arc::new(store),
            urls: Arc::new(Urls::new(api.media_url.clone())),
            api: Arc::new(api),
            public_url,
        }
    }

    /// Build the request context for a call made against `version`.
    ///
    /// Versions outside the allowed list are rejected as not found.
    pub fn request_context(&self, version: &str, headers: &HeaderMap) -> Result<RequestContext> {
        if !self.api.is_allowed_version(version) {
            return Err(Error::UnsupportedVersion(version.to_string()));
        }
        Ok(RequestContext::from_headers(
            &self.public_url,
            headers,
            version,
        ))
    }

    pub fn serializer_context<'a>(&'a self, request: &'a RequestContext) -> SerializerContext<'a> {
        SerializerContext::new(&self.store, &self.urls, request)
    }
}
