//! Read projections of stored records into API representations.
//!
//! Each representation type declares its field set in `FIELDS` and is built
//! from a record plus a [`SerializerContext`]. Related records are fetched
//! from the store through the context; hyperlinks are reversed through the
//! route table and made absolute against the request. Values that live on an
//! `extra` side-record are read through explicit accessors and become `null`
//! when the side-record is absent.

mod area;
mod election;
mod image;
mod json;
mod leaf;
mod membership;
mod organization;
mod person;
mod post;

pub use area::*;
pub use election::*;
pub use image::*;
pub use json::parse_stored_json;
pub use leaf::*;
pub use membership::*;
pub use organization::*;
pub use person::*;
pub use post::*;

use serde::Serialize;

use crate::store::Store;
use crate::urls::{
    RequestContext, Urls, AREA_DETAIL, ELECTION_DETAIL, ORGANIZATION_DETAIL, PERSON_DETAIL,
    POST_DETAIL,
};
use crate::{Error, Result};

/// Everything a projection may consult besides the record itself.
#[derive(Clone, Copy)]
pub struct SerializerContext<'a> {
    pub store: &'a Store,
    pub urls: &'a Urls,
    pub request: &'a RequestContext,
}

impl<'a> SerializerContext<'a> {
    pub fn new(store: &'a Store, urls: &'a Urls, request: &'a RequestContext) -> Self {
        Self {
            store,
            urls,
            request,
        }
    }

    /// Absolute URL of a named route at the request's API version.
    pub fn hyperlink(&self, route: &str, kwargs: &[(&str, &str)]) -> Result<String> {
        self.hyperlink_at_version(route, self.request.version(), kwargs)
    }

    /// Absolute URL of a named route at an explicit API version.
    pub fn hyperlink_at_version(
        &self,
        route: &str,
        version: &str,
        kwargs: &[(&str, &str)],
    ) -> Result<String> {
        let mut params = Vec::with_capacity(kwargs.len() + 1);
        params.push(("version", version));
        params.extend_from_slice(kwargs);

        let path = self.urls.reverse(route, &params)?;
        self.request.build_absolute_uri(&path)
    }

    /// Hyperlink to an organization by id. Organizations are routed by the
    /// slug on their extra record, so one without it cannot be linked.
    pub fn organization_link(&self, organization_id: i64) -> Result<String> {
        let organization = self.store.organization(organization_id).ok_or_else(|| {
            Error::MissingRelated(format!("organization {}", organization_id))
        })?;
        let slug = organization.slug().ok_or_else(|| {
            Error::MissingRelated(format!("extra record of organization {}", organization_id))
        })?;
        self.hyperlink(ORGANIZATION_DETAIL, &[("slug", slug)])
    }

    pub fn person_link(&self, person_id: i64) -> Result<String> {
        if self.store.person(person_id).is_none() {
            return Err(Error::MissingRelated(format!("person {}", person_id)));
        }
        self.hyperlink(PERSON_DETAIL, &[("pk", &person_id.to_string())])
    }

    pub fn post_link(&self, post_id: i64) -> Result<String> {
        if self.store.post(post_id).is_none() {
            return Err(Error::MissingRelated(format!("post {}", post_id)));
        }
        self.hyperlink(POST_DETAIL, &[("pk", &post_id.to_string())])
    }

    pub fn area_link(&self, area_id: i64) -> Result<String> {
        if self.store.area(area_id).is_none() {
            return Err(Error::MissingRelated(format!("area {}", area_id)));
        }
        self.hyperlink(AREA_DETAIL, &[("pk", &area_id.to_string())])
    }

    /// Hyperlink to an election at an explicit API version.
    pub fn election_link(&self, slug: &str, version: &str) -> Result<String> {
        if self.store.election(slug).is_none() {
            return Err(Error::MissingRelated(format!("election {}", slug)));
        }
        self.hyperlink_at_version(ELECTION_DETAIL, version, &[("slug", slug)])
    }
}

/// A JSON representation of one record type.
pub trait Represent: Serialize + Sized {
    type Model;

    /// Output keys, in output order.
    const FIELDS: &'static [&'static str];

    fn represent(model: &Self::Model, ctx: &SerializerContext<'_>) -> Result<Self>;

    /// Represent a sequence, preserving its order.
    fn represent_many<'m, I>(models: I, ctx: &SerializerContext<'_>) -> Result<Vec<Self>>
    where
        I: IntoIterator<Item = &'m Self::Model>,
        Self::Model: 'm,
    {
        models
            .into_iter()
            .map(|model| Self::represent(model, ctx))
            .collect()
    }
}
