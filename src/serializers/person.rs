//! People, the central resource.

use serde::Serialize;
use serde_json::Value;

use super::{
    parse_stored_json, ContactDetailRepresentation, FlatMembershipRepresentation,
    IdentifierRepresentation, ImageRepresentation, LinkRepresentation, OtherNameRepresentation,
    Represent, SerializerContext,
};
use crate::models::Person;
use crate::urls::PERSON_DETAIL;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonRepresentation {
    pub id: i64,
    pub url: String,
    pub name: String,
    pub other_names: Vec<OtherNameRepresentation>,
    pub identifiers: Vec<IdentifierRepresentation>,
    pub honorific_prefix: String,
    pub honorific_suffix: String,
    pub sort_name: String,
    pub email: String,
    pub gender: String,
    pub birth_date: String,
    pub death_date: String,
    /// Parsed edit history; `null` without an extra record.
    pub versions: Option<Value>,
    pub contact_details: Vec<ContactDetailRepresentation>,
    pub links: Vec<LinkRepresentation>,
    pub memberships: Vec<FlatMembershipRepresentation>,
    pub images: Option<Vec<ImageRepresentation>>,
}

impl Represent for PersonRepresentation {
    type Model = Person;
    const FIELDS: &'static [&'static str] = &[
        "id",
        "url",
        "name",
        "other_names",
        "identifiers",
        "honorific_prefix",
        "honorific_suffix",
        "sort_name",
        "email",
        "gender",
        "birth_date",
        "death_date",
        "versions",
        "contact_details",
        "links",
        "memberships",
        "images",
    ];

    fn represent(person: &Person, ctx: &SerializerContext<'_>) -> Result<Self> {
        let extra = person.extra.as_ref();

        Ok(Self {
            id: person.id,
            url: ctx.hyperlink(PERSON_DETAIL, &[("pk", &person.id.to_string())])?,
            name: person.name.clone(),
            other_names: OtherNameRepresentation::represent_many(&person.other_names, ctx)?,
            identifiers: IdentifierRepresentation::represent_many(&person.identifiers, ctx)?,
            honorific_prefix: person.honorific_prefix.clone(),
            honorific_suffix: person.honorific_suffix.clone(),
            sort_name: person.sort_name.clone(),
            email: person.email.clone(),
            gender: person.gender.clone(),
            birth_date: person.birth_date.clone(),
            death_date: person.death_date.clone(),
            versions: extra
                .map(|extra| parse_stored_json(&extra.versions))
                .transpose()?,
            contact_details: ContactDetailRepresentation::represent_many(
                &person.contact_details,
                ctx,
            )?,
            links: LinkRepresentation::represent_many(&person.links, ctx)?,
            memberships: FlatMembershipRepresentation::represent_many(
                ctx.store.memberships_for_person(person.id),
                ctx,
            )?,
            images: extra
                .map(|extra| ImageRepresentation::represent_many(&extra.images, ctx))
                .transpose()?,
        })
    }
}
