use serde::{Deserialize, Serialize};
use std::fmt;

/// Claims carried by the identity provider's session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub exp: Option<u64>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub iat: Option<u64>,
}

/// An authenticated identity as reported by the external provider.
/// Read-only to this core; the role claim is advisory until resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: Option<String>,
    pub role_claim: Option<String>,
}

/// The five portal roles. Closed set: role dispatch is always an
/// exhaustive match, never a string comparison with a default arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Patient,
    Doctor,
    Therapist,
    Admin,
    Management,
}

impl Role {
    /// Map an explicit claim value to a role. Unknown values are `None`;
    /// the resolver decides what that means (it falls back to Patient).
    pub fn from_claim(claim: &str) -> Option<Role> {
        match claim {
            "patient" => Some(Role::Patient),
            "doctor" => Some(Role::Doctor),
            "therapist" => Some(Role::Therapist),
            "admin" => Some(Role::Admin),
            "management" => Some(Role::Management),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Patient => write!(f, "patient"),
            Role::Doctor => write!(f, "doctor"),
            Role::Therapist => write!(f, "therapist"),
            Role::Admin => write!(f, "admin"),
            Role::Management => write!(f, "management"),
        }
    }
}

/// Locally persisted administrator record (`user_info` slot). This is the
/// separate admin session tier; it does not come from the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub permissions: Vec<String>,
    pub is_active: bool,
}

impl AdminInfo {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}
