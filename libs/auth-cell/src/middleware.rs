use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use shared_config::AppConfig;
use shared_models::auth::AdminInfo;
use shared_store::{keys, Repository, RepositoryExt};
use shared_utils::extractor::identity_from_request;

use crate::guard::{
    evaluate_admin, evaluate_authenticated, evaluate_therapist_session, evaluate_vaidya_route,
    evaluate_vaidya_session, AdminSession, GuardState, SessionSnapshot,
};

/// Everything a guard needs to resolve: token validation config plus the
/// local store that backs the admin tier. Injected explicitly so tests
/// run against fixture state instead of ambient globals.
pub struct GuardContext {
    pub config: Arc<AppConfig>,
    pub repo: Arc<dyn Repository>,
}

impl GuardContext {
    fn session_snapshot(&self, request: &Request<Body>) -> SessionSnapshot {
        // Server-side the provider is consulted synchronously, so a
        // snapshot is ready the moment it is taken; Loading never
        // reaches a response.
        SessionSnapshot::ready(identity_from_request(request, &self.config))
    }

    fn admin_session(&self) -> AdminSession {
        AdminSession {
            token: self.repo.get::<String>(keys::AUTH_TOKEN).ok().flatten(),
            info: self.repo.get::<AdminInfo>(keys::USER_INFO).ok().flatten(),
        }
    }
}

fn apply(state: GuardState, request: Request<Body>, next: Next) -> GuardFuture {
    Box::pin(async move {
        if state.renders() {
            next.run(request).await
        } else {
            debug!("Guard redirecting: {:?}", state);
            state.into_redirect_response()
        }
    })
}

type GuardFuture = std::pin::Pin<Box<dyn std::future::Future<Output = Response> + Send>>;

/// Variant 1: generic authenticated guard with role redirect.
pub async fn authenticated_guard(
    State(ctx): State<Arc<GuardContext>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let session = ctx.session_snapshot(&request);
    let state = evaluate_authenticated(&session, request.uri().path());
    apply(state, request, next).await
}

/// Variant 2: doctor dashboard, session identity only.
pub async fn vaidya_session_guard(
    State(ctx): State<Arc<GuardContext>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let session = ctx.session_snapshot(&request);
    let state = evaluate_vaidya_session(&session);
    apply(state, request, next).await
}

/// Variant 3: doctor dashboard addressed by practitioner id; the route
/// parameter must match the session's own identifier.
pub async fn vaidya_route_guard(
    State(ctx): State<Arc<GuardContext>>,
    Path(vaidya_id): Path<String>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let session = ctx.session_snapshot(&request);
    let state = evaluate_vaidya_route(&session, &vaidya_id);
    apply(state, request, next).await
}

/// Variant 4: therapist dashboard.
pub async fn therapist_session_guard(
    State(ctx): State<Arc<GuardContext>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let session = ctx.session_snapshot(&request);
    let state = evaluate_therapist_session(&session);
    apply(state, request, next).await
}

/// Variant 5: administrator, backed by the persisted token/role pair.
pub async fn admin_guard(
    State(ctx): State<Arc<GuardContext>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let state = evaluate_admin(&ctx.admin_session());
    apply(state, request, next).await
}
