//! Posts with their organization, area, elections and memberships.

use serde::Serialize;

use super::{
    FlatMembershipRepresentation, MinimalOrganizationRepresentation, Represent, SerializerContext,
};
use crate::config::DEFAULT_API_VERSION;
use crate::models::Post;
use crate::urls::POST_DETAIL;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostRepresentation {
    pub id: i64,
    pub url: String,
    pub slug: Option<String>,
    pub label: String,
    pub role: String,
    pub organization: Option<MinimalOrganizationRepresentation>,
    /// Hyperlink to the post's area.
    pub area: Option<String>,
    /// Absolute election URLs.
    pub elections: Vec<String>,
    pub memberships: Vec<FlatMembershipRepresentation>,
}

impl Represent for PostRepresentation {
    type Model = Post;
    const FIELDS: &'static [&'static str] = &[
        "id",
        "url",
        "slug",
        "label",
        "role",
        "organization",
        "area",
        "elections",
        "memberships",
    ];

    fn represent(post: &Post, ctx: &SerializerContext<'_>) -> Result<Self> {
        Ok(Self {
            id: post.id,
            url: ctx.hyperlink(POST_DETAIL, &[("pk", &post.id.to_string())])?,
            slug: post.extra.as_ref().map(|extra| extra.slug.clone()),
            label: post.label.clone(),
            role: post.role.clone(),
            organization: MinimalOrganizationRepresentation::nested(post.organization_id, ctx)?,
            area: post.area_id.map(|id| ctx.area_link(id)).transpose()?,
            elections: election_urls(post, ctx)?,
            memberships: FlatMembershipRepresentation::represent_many(
                ctx.store.memberships_for_post(post.id),
                ctx,
            )?,
        })
    }
}

/// Election URLs for a post, always at the default API version regardless
/// of the version the request came in on.
fn election_urls(post: &Post, ctx: &SerializerContext<'_>) -> Result<Vec<String>> {
    let extra = post
        .extra
        .as_ref()
        .ok_or_else(|| Error::MissingRelated(format!("extra record of post {}", post.id)))?;

    extra
        .election_slugs
        .iter()
        .map(|slug| ctx.election_link(slug, DEFAULT_API_VERSION))
        .collect()
}
