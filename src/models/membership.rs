//! Memberships join a person to an organization and post.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub id: i64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub role: String,
    pub person_id: i64,
    #[serde(default)]
    pub organization_id: Option<i64>,
    /// Party the person stands for, when different from `organization_id`.
    #[serde(default)]
    pub on_behalf_of_id: Option<i64>,
    #[serde(default)]
    pub post_id: Option<i64>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub extra: Option<MembershipExtra>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MembershipExtra {
    pub election_slug: Option<String>,
}
