// common/src/models/role.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of account roles understood by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Citizen,
    Contractor,
    Worker,
    Admin,
    Superadmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Citizen => "citizen",
            Role::Contractor => "contractor",
            Role::Worker => "worker",
            Role::Admin => "admin",
            Role::Superadmin => "superadmin",
        }
    }

    /// Canonical dashboard path for the role
    pub fn dashboard_path(&self) -> String {
        format!("/dashboard/{}", self.as_str())
    }

    /// Role-specific login screen
    pub fn login_path(&self) -> String {
        format!("/login/{}", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "citizen" => Ok(Role::Citizen),
            "contractor" => Ok(Role::Contractor),
            "worker" => Ok(Role::Worker),
            "admin" => Ok(Role::Admin),
            "superadmin" => Ok(Role::Superadmin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for role in [Role::Citizen, Role::Contractor, Role::Worker, Role::Admin, Role::Superadmin] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Superadmin).unwrap(), "\"superadmin\"");
        let parsed: Role = serde_json::from_str("\"contractor\"").unwrap();
        assert_eq!(parsed, Role::Contractor);
    }

    #[test]
    fn test_canonical_paths() {
        assert_eq!(Role::Citizen.dashboard_path(), "/dashboard/citizen");
        assert_eq!(Role::Admin.login_path(), "/login/admin");
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!("mayor".parse::<Role>().is_err());
    }
}
