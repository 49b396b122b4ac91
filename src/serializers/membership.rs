//! Memberships flattened to hyperlinks plus an embedded election.

use serde::Serialize;

use super::{ElectionRepresentation, Represent, SerializerContext};
use crate::models::Membership;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatMembershipRepresentation {
    pub label: String,
    pub role: String,
    pub person: String,
    pub organization: Option<String>,
    pub on_behalf_of: Option<String>,
    pub post: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub election: Option<ElectionRepresentation>,
}

impl Represent for FlatMembershipRepresentation {
    type Model = Membership;
    const FIELDS: &'static [&'static str] = &[
        "label",
        "role",
        "person",
        "organization",
        "on_behalf_of",
        "post",
        "start_date",
        "end_date",
        "election",
    ];

    fn represent(membership: &Membership, ctx: &SerializerContext<'_>) -> Result<Self> {
        let election = election_slug(membership)
            .map(|slug| ElectionRepresentation::for_slug(slug, ctx))
            .transpose()?;

        Ok(Self {
            label: membership.label.clone(),
            role: membership.role.clone(),
            person: ctx.person_link(membership.person_id)?,
            organization: membership
                .organization_id
                .map(|id| ctx.organization_link(id))
                .transpose()?,
            on_behalf_of: membership
                .on_behalf_of_id
                .map(|id| ctx.organization_link(id))
                .transpose()?,
            post: membership
                .post_id
                .map(|id| ctx.post_link(id))
                .transpose()?,
            start_date: membership.start_date.clone(),
            end_date: membership.end_date.clone(),
            election,
        })
    }
}

fn election_slug(membership: &Membership) -> Option<&str> {
    membership
        .extra
        .as_ref()
        .and_then(|extra| extra.election_slug.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializers::test_support::{field_set, keys_of};
    use crate::testing::{request, sample_store};
    use crate::urls::Urls;
    use crate::Error;

    #[test]
    fn test_candidacy_membership() {
        let store = sample_store();
        let urls = Urls::default();
        let request = request();
        let ctx = SerializerContext::new(&store, &urls, &request);

        let membership = store.memberships_for_person(2009)[0];
        let repr = FlatMembershipRepresentation::represent(membership, &ctx).unwrap();

        assert_eq!(keys_of(&repr), field_set(FlatMembershipRepresentation::FIELDS));
        assert_eq!(repr.person, "http://testserver/api/v0.9/persons/2009/");
        assert_eq!(
            repr.on_behalf_of.as_deref(),
            Some("http://testserver/api/v0.9/organizations/party%3A53/")
        );
        assert_eq!(repr.post.as_deref(), Some("http://testserver/api/v0.9/posts/1/"));
        assert_eq!(repr.election.map(|e| e.id).as_deref(), Some("2017"));
    }

    #[test]
    fn test_membership_without_extra_has_null_election() {
        let store = sample_store();
        let urls = Urls::default();
        let request = request();
        let ctx = SerializerContext::new(&store, &urls, &request);

        let membership = store.memberships_for_person(2009)[1];
        let value =
            serde_json::to_value(FlatMembershipRepresentation::represent(membership, &ctx).unwrap())
                .unwrap();

        assert!(value["election"].is_null());
        assert!(value["post"].is_null());
        assert!(value["on_behalf_of"].is_null());
    }

    #[test]
    fn test_dangling_organization_fails() {
        let store = sample_store();
        let urls = Urls::default();
        let request = request();
        let ctx = SerializerContext::new(&store, &urls, &request);

        let membership = Membership {
            id: 100,
            label: String::new(),
            role: "Candidate".into(),
            person_id: 2009,
            organization_id: Some(404),
            on_behalf_of_id: None,
            post_id: None,
            start_date: String::new(),
            end_date: String::new(),
            extra: None,
        };

        assert!(matches!(
            FlatMembershipRepresentation::represent(&membership, &ctx),
            Err(Error::MissingRelated(_))
        ));
    }

    #[test]
    fn test_dangling_person_or_post_fails() {
        let store = sample_store();
        let urls = Urls::default();
        let request = request();
        let ctx = SerializerContext::new(&store, &urls, &request);

        let unknown_person = Membership {
            id: 101,
            label: String::new(),
            role: "Candidate".into(),
            person_id: 999,
            organization_id: None,
            on_behalf_of_id: None,
            post_id: None,
            start_date: String::new(),
            end_date: String::new(),
            extra: None,
        };
        let unknown_post = Membership {
            id: 102,
            person_id: 2009,
            post_id: Some(404),
            ..unknown_person.clone()
        };

        for membership in [&unknown_person, &unknown_post] {
            assert!(matches!(
                FlatMembershipRepresentation::represent(membership, &ctx),
                Err(Error::MissingRelated(_))
            ));
        }
    }
}
