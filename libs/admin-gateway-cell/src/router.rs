use std::sync::Arc;

use axum::{
    routing::{get, patch, put},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;

/// Administrative proxy surface. Every route forwards to the remote admin
/// backend under the same path shape.
pub fn admin_routes(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/users", get(handlers::list_users).post(handlers::create_user))
        .route("/users/stats", get(handlers::user_stats))
        .route(
            "/users/{user_id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .route(
            "/users/{user_id}/toggle-status",
            patch(handlers::toggle_user_status),
        )
        .route("/appointments", get(handlers::list_appointments))
        .route(
            "/appointments/{appointment_id}/reschedule",
            put(handlers::reschedule_appointment),
        )
        .route(
            "/appointments/{appointment_id}/cancel",
            patch(handlers::cancel_appointment),
        )
        .route("/dashboard/stats", get(handlers::dashboard_stats))
        .route("/system/metrics", get(handlers::system_metrics))
        .route("/feedback", get(handlers::list_feedback))
        .route(
            "/feedback/{feedback_id}",
            get(handlers::get_feedback).delete(handlers::delete_feedback),
        )
        .route(
            "/feedback/{feedback_id}/status",
            patch(handlers::update_feedback_status),
        )
        .with_state(config)
}
