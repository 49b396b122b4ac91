//! People: candidates and elected representatives.

use serde::{Deserialize, Serialize};

use super::{ContactDetail, Identifier, Image, Link, OtherName};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub honorific_prefix: String,
    #[serde(default)]
    pub honorific_suffix: String,
    #[serde(default)]
    pub sort_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub gender: String,
    /// Approximate date, e.g. `1970` or `1970-05-01`.
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub death_date: String,
    #[serde(default)]
    pub other_names: Vec<OtherName>,
    #[serde(default)]
    pub identifiers: Vec<Identifier>,
    #[serde(default)]
    pub contact_details: Vec<ContactDetail>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub extra: Option<PersonExtra>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonExtra {
    /// Edit history, stored as serialized JSON text.
    #[serde(default = "empty_versions")]
    pub versions: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

fn empty_versions() -> String {
    "[]".to_string()
}
