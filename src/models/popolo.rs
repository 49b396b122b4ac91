//! Simple records attached to people and organizations.

use serde::{Deserialize, Serialize};

/// An alternate name, e.g. a maiden name or a transliteration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherName {
    pub name: String,
    pub note: String,
}

/// An external identifier together with the scheme that issued it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identifier {
    pub identifier: String,
    pub scheme: String,
}

/// A means of contacting an entity (email, phone, twitter handle, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDetail {
    pub contact_type: String,
    pub label: String,
    pub note: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub note: String,
    pub url: String,
}

/// Where a piece of information came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Source {
    pub note: String,
    pub url: String,
}
