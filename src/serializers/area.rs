//! Areas and area types.

use serde::Serialize;

use super::{IdentifierRepresentation, Represent, SerializerContext};
use crate::models::{Area, AreaType};
use crate::urls::AREA_DETAIL;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaTypeRepresentation {
    pub name: String,
    pub source: String,
}

impl Represent for AreaTypeRepresentation {
    type Model = AreaType;
    const FIELDS: &'static [&'static str] = &["name", "source"];

    fn represent(model: &AreaType, _ctx: &SerializerContext<'_>) -> Result<Self> {
        Ok(Self {
            name: model.name.clone(),
            source: model.source.clone(),
        })
    }
}

impl AreaTypeRepresentation {
    /// Look up an area type by id and represent it.
    pub fn for_id(area_type_id: i64, ctx: &SerializerContext<'_>) -> Result<Self> {
        let area_type = ctx
            .store
            .area_type(area_type_id)
            .ok_or_else(|| Error::MissingRelated(format!("area type {}", area_type_id)))?;
        Self::represent(area_type, ctx)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaRepresentation {
    pub id: i64,
    pub url: String,
    pub name: String,
    pub identifier: String,
    pub classification: String,
    pub other_identifiers: Vec<IdentifierRepresentation>,
    /// Hyperlink to the parent area.
    pub parent: Option<String>,
    #[serde(rename = "type")]
    pub area_type: Option<AreaTypeRepresentation>,
}

impl Represent for AreaRepresentation {
    type Model = Area;
    const FIELDS: &'static [&'static str] = &[
        "id",
        "url",
        "name",
        "identifier",
        "classification",
        "other_identifiers",
        "parent",
        "type",
    ];

    fn represent(area: &Area, ctx: &SerializerContext<'_>) -> Result<Self> {
        let parent = area
            .parent_id
            .map(|parent_id| ctx.area_link(parent_id))
            .transpose()?;

        Ok(Self {
            id: area.id,
            url: ctx.hyperlink(AREA_DETAIL, &[("pk", &area.id.to_string())])?,
            name: area.name.clone(),
            identifier: area.identifier.clone(),
            classification: area.classification.clone(),
            other_identifiers: IdentifierRepresentation::represent_many(
                &area.other_identifiers,
                ctx,
            )?,
            parent,
            area_type: area_type_of(area)
                .map(|area_type_id| AreaTypeRepresentation::for_id(area_type_id, ctx))
                .transpose()?,
        })
    }
}

fn area_type_of(area: &Area) -> Option<i64> {
    area.extra.as_ref().and_then(|extra| extra.area_type_id)
}
