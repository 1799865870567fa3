use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::handlers;
use crate::middleware::{
    admin_guard, authenticated_guard, therapist_session_guard, vaidya_route_guard,
    vaidya_session_guard, GuardContext,
};

pub fn auth_routes(ctx: Arc<GuardContext>) -> Router {
    Router::new()
        .route("/session", get(handlers::session_info))
        .route("/admin/login", post(handlers::admin_login))
        .route("/logout", post(handlers::logout))
        .with_state(ctx)
}

/// Guarded dashboard routes, one per guard variant. The handlers are the
/// "render" side of the state machine; an unresolved or failed guard never
/// reaches them.
pub fn portal_routes(ctx: Arc<GuardContext>) -> Router {
    let patient_landing = Router::new()
        .route(
            "/patient-dashboard",
            get(|| async { Json(json!({ "dashboard": "patient" })) }),
        )
        .route(
            "/management-dashboard",
            get(|| async { Json(json!({ "dashboard": "management" })) }),
        )
        .layer(middleware::from_fn_with_state(
            ctx.clone(),
            authenticated_guard,
        ));

    let vaidya = Router::new()
        .route(
            "/vaidya-dashboard",
            get(|| async { Json(json!({ "dashboard": "vaidya" })) }),
        )
        .layer(middleware::from_fn_with_state(
            ctx.clone(),
            vaidya_session_guard,
        ));

    let vaidya_by_id = Router::new()
        .route(
            "/vaidya-dashboard/{vaidya_id}",
            get(|| async { Json(json!({ "dashboard": "vaidya" })) }),
        )
        .layer(middleware::from_fn_with_state(
            ctx.clone(),
            vaidya_route_guard,
        ));

    let therapist = Router::new()
        .route(
            "/therapist-dashboard",
            get(|| async { Json(json!({ "dashboard": "therapist" })) }),
        )
        .layer(middleware::from_fn_with_state(
            ctx.clone(),
            therapist_session_guard,
        ));

    let admin = Router::new()
        .route(
            "/admin-dashboard",
            get(|| async { Json(json!({ "dashboard": "admin" })) }),
        )
        .layer(middleware::from_fn_with_state(ctx.clone(), admin_guard));

    Router::new()
        .merge(patient_landing)
        .merge(vaidya)
        .merge(vaidya_by_id)
        .merge(therapist)
        .merge(admin)
}
