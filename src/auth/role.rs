//! Privilege tiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Privilege tier of an authenticated identity.
///
/// Permissions are set-membership per page, not a threshold; no total
/// order is assumed between the tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular portal user
    User,
    /// Administrator
    Admin,
    /// Superuser
    Superuser,
}

impl Role {
    /// Every defined role.
    pub const ALL: [Role; 3] = [Role::User, Role::Admin, Role::Superuser];

    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Superuser => "superuser",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
