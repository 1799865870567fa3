use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use shared_config::AppConfig;
use shared_models::auth::Identity;
use shared_models::error::AppError;

use crate::token::validate_session_token;

/// Middleware for API routes that hard-require a session. Dashboard routes
/// do NOT use this; their guards redirect instead of erroring.
pub async fn auth_middleware(
    State(config): State<Arc<AppConfig>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let identity = identity_from_request(&request, &config)
        .ok_or_else(|| AppError::Auth("Missing or invalid session token".to_string()))?;

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

/// Pull an Identity out of the Authorization header, if one is present and
/// valid. Absence and invalidity collapse to `None`: callers that care
/// treat both as "no session".
pub fn identity_from_request<B>(request: &Request<B>, config: &AppConfig) -> Option<Identity> {
    let auth_value = request.headers().get("Authorization")?.to_str().ok()?;
    let token = auth_value.strip_prefix("Bearer ")?;
    validate_session_token(token, &config.portal_jwt_secret).ok()
}

