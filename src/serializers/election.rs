//! Elections, hyperlinked and identified by slug.

use chrono::NaiveDate;
use serde::Serialize;

use super::{AreaTypeRepresentation, Represent, SerializerContext};
use crate::models::Election;
use crate::urls::ELECTION_DETAIL;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElectionRepresentation {
    /// The election slug; internal ids are never exposed.
    pub id: String,
    pub url: String,
    pub name: String,
    pub winner_membership_role: Option<String>,
    pub candidate_membership_role: String,
    pub election_date: NaiveDate,
    pub current: bool,
    pub use_for_candidate_suggestions: bool,
    pub area_types: Vec<AreaTypeRepresentation>,
    pub area_generation: Option<i32>,
    /// Hyperlink to the organization the election fills posts in.
    pub organization: Option<String>,
    pub party_lists_in_use: bool,
    pub ocd_division: String,
    pub description: String,
}

impl Represent for ElectionRepresentation {
    type Model = Election;
    const FIELDS: &'static [&'static str] = &[
        "id",
        "url",
        "name",
        "winner_membership_role",
        "candidate_membership_role",
        "election_date",
        "current",
        "use_for_candidate_suggestions",
        "area_types",
        "area_generation",
        "organization",
        "party_lists_in_use",
        "ocd_division",
        "description",
    ];

    fn represent(election: &Election, ctx: &SerializerContext<'_>) -> Result<Self> {
        let area_types = election
            .area_type_ids
            .iter()
            .map(|&id| AreaTypeRepresentation::for_id(id, ctx))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            id: election.slug.clone(),
            url: ctx.hyperlink(ELECTION_DETAIL, &[("slug", &election.slug)])?,
            name: election.name.clone(),
            winner_membership_role: election.winner_membership_role.clone(),
            candidate_membership_role: election.candidate_membership_role.clone(),
            election_date: election.election_date,
            current: election.current,
            use_for_candidate_suggestions: election.use_for_candidate_suggestions,
            area_types,
            area_generation: election.area_generation,
            organization: election
                .organization_id
                .map(|id| ctx.organization_link(id))
                .transpose()?,
            party_lists_in_use: election.party_lists_in_use,
            ocd_division: election.ocd_division.clone(),
            description: election.description.clone(),
        })
    }
}

impl ElectionRepresentation {
    /// Look up an election by slug and represent it.
    pub fn for_slug(slug: &str, ctx: &SerializerContext<'_>) -> Result<Self> {
        let election = ctx
            .store
            .election(slug)
            .ok_or_else(|| Error::MissingRelated(format!("election {}", slug)))?;
        Self::represent(election, ctx)
    }
}
