//! Organizations in two tiers.
//!
//! [`MinimalOrganizationRepresentation`] is what every nested reference to an
//! organization uses, including an organization's own `parent`. Only the
//! top-level resource gets [`OrganizationRepresentation`], so a parent chain
//! never expands past one level.

use serde::Serialize;

use super::{
    ContactDetailRepresentation, IdentifierRepresentation, ImageRepresentation,
    LinkRepresentation, OtherNameRepresentation, Represent, SerializerContext,
    SourceRepresentation,
};
use crate::models::{Organization, OrganizationExtra};
use crate::urls::ORGANIZATION_DETAIL;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinimalOrganizationRepresentation {
    /// The organization slug.
    pub id: String,
    pub url: String,
    pub name: String,
}

impl Represent for MinimalOrganizationRepresentation {
    type Model = Organization;
    const FIELDS: &'static [&'static str] = &["id", "url", "name"];

    fn represent(organization: &Organization, ctx: &SerializerContext<'_>) -> Result<Self> {
        let extra = require_extra(organization)?;

        Ok(Self {
            id: extra.slug.clone(),
            url: ctx.hyperlink(ORGANIZATION_DETAIL, &[("slug", &extra.slug)])?,
            name: organization.name.clone(),
        })
    }
}

impl MinimalOrganizationRepresentation {
    /// Nested reference to an organization by id.
    ///
    /// `None` when the organization has no extra record; a dangling id is
    /// an error.
    pub fn nested(organization_id: i64, ctx: &SerializerContext<'_>) -> Result<Option<Self>> {
        let organization = ctx.store.organization(organization_id).ok_or_else(|| {
            Error::MissingRelated(format!("organization {}", organization_id))
        })?;

        if organization.extra.is_none() {
            return Ok(None);
        }
        Self::represent(organization, ctx).map(Some)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationRepresentation {
    pub id: String,
    pub url: String,
    pub name: String,
    pub other_names: Vec<OtherNameRepresentation>,
    pub identifiers: Vec<IdentifierRepresentation>,
    pub classification: String,
    pub parent: Option<MinimalOrganizationRepresentation>,
    pub founding_date: String,
    pub dissolution_date: String,
    pub contact_details: Vec<ContactDetailRepresentation>,
    pub images: Vec<ImageRepresentation>,
    pub links: Vec<LinkRepresentation>,
    pub sources: Vec<SourceRepresentation>,
    pub register: String,
}

impl Represent for OrganizationRepresentation {
    type Model = Organization;
    const FIELDS: &'static [&'static str] = &[
        "id",
        "url",
        "name",
        "other_names",
        "identifiers",
        "classification",
        "parent",
        "founding_date",
        "dissolution_date",
        "contact_details",
        "images",
        "links",
        "sources",
        "register",
    ];

    fn represent(organization: &Organization, ctx: &SerializerContext<'_>) -> Result<Self> {
        let extra = require_extra(organization)?;
        let minimal = MinimalOrganizationRepresentation::represent(organization, ctx)?;

        let parent = match organization.parent_id {
            Some(parent_id) => MinimalOrganizationRepresentation::nested(parent_id, ctx)?,
            None => None,
        };

        Ok(Self {
            id: minimal.id,
            url: minimal.url,
            name: minimal.name,
            other_names: OtherNameRepresentation::represent_many(&organization.other_names, ctx)?,
            identifiers: IdentifierRepresentation::represent_many(&organization.identifiers, ctx)?,
            classification: organization.classification.clone(),
            parent,
            founding_date: organization.founding_date.clone(),
            dissolution_date: organization.dissolution_date.clone(),
            contact_details: ContactDetailRepresentation::represent_many(
                &organization.contact_details,
                ctx,
            )?,
            images: ImageRepresentation::represent_many(&extra.images, ctx)?,
            links: LinkRepresentation::represent_many(&organization.links, ctx)?,
            sources: SourceRepresentation::represent_many(&organization.sources, ctx)?,
            register: extra.register.clone(),
        })
    }
}

fn require_extra(organization: &Organization) -> Result<&OrganizationExtra> {
    organization.extra.as_ref().ok_or_else(|| {
        Error::MissingRelated(format!("extra record of organization {}", organization.id))
    })
}
