//! Posts: electoral positions contested in elections.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub label: String,
    #[serde(default)]
    pub role: String,
    pub organization_id: i64,
    #[serde(default)]
    pub area_id: Option<i64>,
    #[serde(default)]
    pub extra: Option<PostExtra>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostExtra {
    pub slug: String,
    /// Elections contesting this post, in storage order.
    #[serde(default)]
    pub election_slugs: Vec<String>,
}
