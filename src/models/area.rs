//! Geographic and administrative areas.

use serde::{Deserialize, Serialize};

use super::Identifier;

/// A kind of area, e.g. a Westminster constituency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub classification: String,
    #[serde(default)]
    pub other_identifiers: Vec<Identifier>,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub extra: Option<AreaExtra>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaExtra {
    pub area_type_id: Option<i64>,
}
