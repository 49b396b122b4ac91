//! Elections, identified externally by their slug.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Election {
    pub id: i64,
    /// Unique natural key used in URLs.
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub winner_membership_role: Option<String>,
    #[serde(default = "default_candidate_role")]
    pub candidate_membership_role: String,
    pub election_date: NaiveDate,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub use_for_candidate_suggestions: bool,
    /// Area types this election covers.
    #[serde(default)]
    pub area_type_ids: Vec<i64>,
    #[serde(default)]
    pub area_generation: Option<i32>,
    #[serde(default)]
    pub organization_id: Option<i64>,
    #[serde(default)]
    pub party_lists_in_use: bool,
    #[serde(default)]
    pub ocd_division: String,
    #[serde(default)]
    pub description: String,
}

fn default_candidate_role() -> String {
    "Candidate".to_string()
}
