// common/src/models/session.rs
use serde::{Deserialize, Serialize};

use super::role::Role;

/// Identity record persisted alongside the bearer token. Written and
/// cleared together with the token, never independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Backend user id
    pub user_id: i64,
    /// Roles exactly as the backend sent them
    pub roles: Vec<Role>,
}

impl UserIdentity {
    pub fn new(user_id: i64, roles: Vec<Role>) -> Self {
        Self { user_id, roles }
    }

    /// Active-role convention: the first entry wins. Call sites go through
    /// this accessor rather than indexing the vector.
    pub fn primary_role(&self) -> Option<Role> {
        self.roles.first().copied()
    }

    /// Parse the persisted identity blob; corrupt data surfaces as an error
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Serialize for the persistent store
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
