//! Images attached to people and organizations.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: i64,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub is_primary: bool,
    /// Stored file name relative to the media root.
    pub image: String,
    #[serde(default)]
    pub extra: Option<ImageExtra>,
}

/// Upload metadata kept alongside an image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageExtra {
    pub md5sum: String,
    pub copyright: String,
    pub uploading_user: Option<User>,
    pub user_notes: String,
    pub user_copyright: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}
