use axum::response::{IntoResponse, Redirect, Response};

use shared_models::auth::{AdminInfo, Identity, Role};

use crate::roles::RoleResolver;

pub const LOGIN_PATH: &str = "/login";
pub const VAIDYA_LOGIN_PATH: &str = "/vaidya-login";
pub const THERAPIST_LOGIN_PATH: &str = "/therapist-login";
pub const LANDING_PATH: &str = "/";

/// What the identity provider reports for the current request. `ready`
/// is false only while session state is still being established; a guard
/// never decides anything in that window.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub ready: bool,
    pub identity: Option<Identity>,
}

impl SessionSnapshot {
    pub fn ready(identity: Option<Identity>) -> Self {
        Self {
            ready: true,
            identity,
        }
    }

    pub fn pending() -> Self {
        Self {
            ready: false,
            identity: None,
        }
    }
}

/// The administrator session tier: a locally persisted token/role pair,
/// unrelated to the identity provider.
#[derive(Debug, Clone, Default)]
pub struct AdminSession {
    pub token: Option<String>,
    pub info: Option<AdminInfo>,
}

/// Guard outcome. `Loading` is the only suspending state and resolves
/// exactly once per evaluation; once resolved, exactly one of render or
/// redirect happens, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    Loading,
    Unauthenticated { login_path: &'static str },
    Authorized,
    UnauthorizedRedirecting { to: String },
}

impl GuardState {
    pub fn renders(&self) -> bool {
        matches!(self, GuardState::Authorized)
    }

    /// Redirect target, if the resolved state is a redirect.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            GuardState::Unauthenticated { login_path } => Some(login_path),
            GuardState::UnauthorizedRedirecting { to } => Some(to),
            GuardState::Loading | GuardState::Authorized => None,
        }
    }

    /// HTTP rendering of a *resolved* decision. Lack of authorization is
    /// always a redirect, never an error body. `Loading` maps to a plain
    /// 503 only as a safety net; middleware never forwards it.
    pub fn into_redirect_response(self) -> Response {
        match self.redirect_target() {
            Some(to) => Redirect::to(to).into_response(),
            None => axum::http::StatusCode::SERVICE_UNAVAILABLE.into_response(),
        }
    }
}

/// Variant 1: any authenticated session may pass, but only on a dashboard
/// path; anywhere else resolves to a redirect to the role's own dashboard.
/// Used for the patient and management landing flows.
pub fn evaluate_authenticated(session: &SessionSnapshot, current_path: &str) -> GuardState {
    if !session.ready {
        return GuardState::Loading;
    }

    let Some(identity) = &session.identity else {
        return GuardState::Unauthenticated {
            login_path: LOGIN_PATH,
        };
    };

    if current_path.contains("dashboard") {
        return GuardState::Authorized;
    }

    let role = RoleResolver::resolve(identity);
    GuardState::UnauthorizedRedirecting {
        to: RoleResolver::dashboard_path(role).to_string(),
    }
}

/// Variant 2: doctor by session identity, no route parameter.
pub fn evaluate_vaidya_session(session: &SessionSnapshot) -> GuardState {
    evaluate_role_session(session, Role::Doctor, VAIDYA_LOGIN_PATH)
}

/// Variant 3: doctor whose own identifier must match the route parameter.
/// A signed-in doctor pointed at another practitioner's queue is sent back
/// to their own dashboard.
pub fn evaluate_vaidya_route(session: &SessionSnapshot, route_vaidya_id: &str) -> GuardState {
    if !session.ready {
        return GuardState::Loading;
    }

    let Some(identity) = &session.identity else {
        return GuardState::Unauthenticated {
            login_path: VAIDYA_LOGIN_PATH,
        };
    };

    if RoleResolver::resolve(identity) != Role::Doctor {
        return GuardState::UnauthorizedRedirecting {
            to: VAIDYA_LOGIN_PATH.to_string(),
        };
    }

    if identity.id == route_vaidya_id {
        GuardState::Authorized
    } else {
        GuardState::UnauthorizedRedirecting {
            to: RoleResolver::dashboard_path(Role::Doctor).to_string(),
        }
    }
}

/// Variant 4: therapist analogue of variant 2.
pub fn evaluate_therapist_session(session: &SessionSnapshot) -> GuardState {
    evaluate_role_session(session, Role::Therapist, THERAPIST_LOGIN_PATH)
}

/// Variant 5: administrator. Session source is the locally persisted
/// token/role pair, and failure lands on the generic landing path, not a
/// role dashboard.
pub fn evaluate_admin(session: &AdminSession) -> GuardState {
    match (&session.token, &session.info) {
        (Some(token), Some(info)) if !token.is_empty() && info.is_admin() => {
            GuardState::Authorized
        }
        (None, None) => GuardState::Unauthenticated {
            login_path: LANDING_PATH,
        },
        _ => GuardState::UnauthorizedRedirecting {
            to: LANDING_PATH.to_string(),
        },
    }
}

fn evaluate_role_session(
    session: &SessionSnapshot,
    required: Role,
    login_path: &'static str,
) -> GuardState {
    if !session.ready {
        return GuardState::Loading;
    }

    let Some(identity) = &session.identity else {
        return GuardState::Unauthenticated { login_path };
    };

    if RoleResolver::resolve(identity) == required {
        GuardState::Authorized
    } else {
        GuardState::UnauthorizedRedirecting {
            to: login_path.to_string(),
        }
    }
}
