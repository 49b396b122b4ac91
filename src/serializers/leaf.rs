//! Flat projections of simple attached records.

use serde::Serialize;

use super::{Represent, SerializerContext};
use crate::models::{ContactDetail, Identifier, Link, OtherName, Source};
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtherNameRepresentation {
    pub name: String,
    pub note: String,
}

impl Represent for OtherNameRepresentation {
    type Model = OtherName;
    const FIELDS: &'static [&'static str] = &["name", "note"];

    fn represent(model: &OtherName, _ctx: &SerializerContext<'_>) -> Result<Self> {
        Ok(Self {
            name: model.name.clone(),
            note: model.note.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentifierRepresentation {
    pub identifier: String,
    pub scheme: String,
}

impl Represent for IdentifierRepresentation {
    type Model = Identifier;
    const FIELDS: &'static [&'static str] = &["identifier", "scheme"];

    fn represent(model: &Identifier, _ctx: &SerializerContext<'_>) -> Result<Self> {
        Ok(Self {
            identifier: model.identifier.clone(),
            scheme: model.scheme.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactDetailRepresentation {
    pub contact_type: String,
    pub label: String,
    pub note: String,
    pub value: String,
}

impl Represent for ContactDetailRepresentation {
    type Model = ContactDetail;
    const FIELDS: &'static [&'static str] = &["contact_type", "label", "note", "value"];

    fn represent(model: &ContactDetail, _ctx: &SerializerContext<'_>) -> Result<Self> {
        Ok(Self {
            contact_type: model.contact_type.clone(),
            label: model.label.clone(),
            note: model.note.clone(),
            value: model.value.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRepresentation {
    pub note: String,
    pub url: String,
}

impl Represent for LinkRepresentation {
    type Model = Link;
    const FIELDS: &'static [&'static str] = &["note", "url"];

    fn represent(model: &Link, _ctx: &SerializerContext<'_>) -> Result<Self> {
        Ok(Self {
            note: model.note.clone(),
            url: model.url.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceRepresentation {
    pub note: String,
    pub url: String,
}

impl Represent for SourceRepresentation {
    type Model = Source;
    const FIELDS: &'static [&'static str] = &["note", "url"];

    fn represent(model: &Source, _ctx: &SerializerContext<'_>) -> Result<Self> {
        Ok(Self {
            note: model.note.clone(),
            url: model.url.clone(),
        })
    }
}
