use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use admin_gateway_cell::router::admin_routes;
use appointment_cell::handlers::AppointmentState;
use appointment_cell::router::appointment_routes;
use auth_cell::middleware::GuardContext;
use auth_cell::router::{auth_routes, portal_routes};
use profile_cell::router::profile_routes;
use shared_config::AppConfig;
use shared_store::Repository;
use shared_utils::extractor::auth_middleware;
use vaidya_cell::directory::VaidyaDirectory;
use vaidya_cell::router::vaidya_routes;

pub fn create_router(config: Arc<AppConfig>, repo: Arc<dyn Repository>) -> Router {
    let directory = Arc::new(VaidyaDirectory::seeded());

    let guard_ctx = Arc::new(GuardContext {
        config: config.clone(),
        repo: repo.clone(),
    });

    let appointment_state = Arc::new(AppointmentState {
        repo: repo.clone(),
        directory: directory.clone(),
    });

    // Profile and appointment APIs hard-require a session; dashboard
    // routes under /portal redirect instead through their guards.
    let session_required = middleware::from_fn_with_state(config.clone(), auth_middleware);

    Router::new()
        .route("/", get(|| async { "AyurMitra portal API is running!" }))
        .nest("/auth", auth_routes(guard_ctx.clone()))
        .nest("/portal", portal_routes(guard_ctx))
        .nest("/vaidyas", vaidya_routes(directory))
        .nest(
            "/profile",
            profile_routes(repo).layer(session_required.clone()),
        )
        .nest(
            "/appointments",
            appointment_routes(appointment_state).layer(session_required),
        )
        .nest("/admin", admin_routes(config))
}
