use std::sync::Arc;

use axum::{extract::State, Json};
use axum_extra::TypedHeader;
use headers::{authorization::Bearer, Authorization};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use shared_models::auth::AdminInfo;
use shared_models::error::AppError;
use shared_store::{keys, RepositoryExt};
use shared_utils::token::validate_session_token;

use crate::middleware::GuardContext;
use crate::roles::RoleResolver;

/// Resolve the caller's session into a role and dashboard target. This is
/// the sign-in landing call: the client follows `dashboard` afterwards.
#[axum::debug_handler]
pub async fn session_info(
    State(ctx): State<Arc<GuardContext>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<Value>, AppError> {
    let identity = validate_session_token(auth.token(), &ctx.config.portal_jwt_secret)
        .map_err(AppError::Auth)?;

    let role = RoleResolver::resolve(&identity);

    Ok(Json(json!({
        "id": identity.id,
        "email": identity.email,
        "role": role,
        "dashboard": RoleResolver::dashboard_path(role)
    })))
}

#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

/// Administrator login against the configured account, issuing an opaque
/// token persisted alongside the admin record. This tier is deliberately
/// separate from the identity provider.
#[axum::debug_handler]
pub async fn admin_login(
    State(ctx): State<Arc<GuardContext>>,
    Json(request): Json<AdminLoginRequest>,
) -> Result<Json<Value>, AppError> {
    if !ctx.config.is_admin_login_configured() {
        return Err(AppError::Internal(
            "Admin login is not configured".to_string(),
        ));
    }

    if request.username != ctx.config.admin_username
        || request.password != ctx.config.admin_password
    {
        return Err(AppError::Auth("Invalid username or password".to_string()));
    }

    let token = Uuid::new_v4().to_string();
    let info = AdminInfo {
        id: "1".to_string(),
        name: "Admin User".to_string(),
        email: format!("{}@portal.local", request.username),
        role: "admin".to_string(),
        permissions: vec![
            "user_management".to_string(),
            "appointment_management".to_string(),
            "system_analytics".to_string(),
        ],
        is_active: true,
    };

    ctx.repo
        .set(keys::AUTH_TOKEN, &token)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    ctx.repo
        .set(keys::USER_INFO, &info)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    info!("Admin '{}' logged in", request.username);

    Ok(Json(json!({
        "token": token,
        "admin": info
    })))
}

/// Clears the persisted admin session pair.
#[axum::debug_handler]
pub async fn logout(State(ctx): State<Arc<GuardContext>>) -> Result<Json<Value>, AppError> {
    ctx.repo
        .delete(keys::AUTH_TOKEN)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    ctx.repo
        .delete(keys::USER_INFO)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(json!({ "logged_out": true })))
}
