//! Organizations: parties, legislatures, councils.

use serde::{Deserialize, Serialize};

use super::{ContactDetail, Identifier, Image, Link, OtherName, Source};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub classification: String,
    /// Self-referential; `None` for top-level organizations.
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub founding_date: String,
    #[serde(default)]
    pub dissolution_date: String,
    #[serde(default)]
    pub other_names: Vec<OtherName>,
    #[serde(default)]
    pub identifiers: Vec<Identifier>,
    #[serde(default)]
    pub contact_details: Vec<ContactDetail>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub extra: Option<OrganizationExtra>,
}

/// Side-record that makes an organization addressable by slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationExtra {
    pub slug: String,
    #[serde(default)]
    pub register: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Organization {
    pub fn slug(&self) -> Option<&str> {
        self.extra.as_ref().map(|extra| extra.slug.as_str())
    }
}
