use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::handlers::{self, AppointmentState};

pub fn appointment_routes(state: Arc<AppointmentState>) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::list_appointments).post(handlers::book_appointment),
        )
        .route("/vaidya/{vaidya_id}", get(handlers::list_vaidya_appointments))
        .route(
            "/{appointment_id}/status",
            patch(handlers::update_appointment_status),
        )
        .with_state(state)
}
