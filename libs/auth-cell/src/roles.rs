use shared_models::auth::{Identity, Role};

/// Maps an authenticated identity to a portal role. Pure; never grants
/// access by itself. Guards only use the result to pick a redirect
/// target.
pub struct RoleResolver;

impl RoleResolver {
    /// Explicit role claims win and are returned verbatim. An unknown
    /// claim value deliberately maps to Patient rather than falling
    /// through a catch-all arm. Without a claim, a deterministic
    /// heuristic over the contact address picks the redirect target.
    pub fn resolve(identity: &Identity) -> Role {
        if let Some(claim) = &identity.role_claim {
            return match Role::from_claim(claim) {
                Some(role) => role,
                // Unknown claim value: default to the patient surface.
                None => Role::Patient,
            };
        }

        match &identity.email {
            Some(email) => Self::role_from_email(email),
            None => Role::Patient,
        }
    }

    fn role_from_email(email: &str) -> Role {
        let email = email.to_lowercase();
        if email.contains("doctor") || email.contains("dr.") {
            return Role::Doctor;
        }
        if email.contains("admin") || email.contains("management") {
            return Role::Management;
        }
        Role::Patient
    }

    pub fn dashboard_path(role: Role) -> &'static str {
        match role {
            Role::Patient => "/portal/patient-dashboard",
            Role::Doctor => "/portal/vaidya-dashboard",
            Role::Therapist => "/portal/therapist-dashboard",
            Role::Admin => "/portal/admin-dashboard",
            Role::Management => "/portal/management-dashboard",
        }
    }
}
