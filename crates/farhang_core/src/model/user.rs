//! Reader and author identities.

use serde::{Deserialize, Serialize};

/// Public author profile shown on article detail and in the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub avatar_url: String,
    pub bio: String,
}

/// Signed-in identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub is_author: bool,
    /// Links to an `Author` profile when `is_author` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
}

impl User {
    /// Returns the linked author id only for users with author status.
    pub fn author_profile_id(&self) -> Option<i64> {
        if self.is_author {
            self.author_id
        } else {
            None
        }
    }
}
