use std::sync::Arc;

use axum::{routing::get, Router};

use shared_store::Repository;

use crate::handlers;

pub fn profile_routes(repo: Arc<dyn Repository>) -> Router {
    Router::new()
        .route("/", get(handlers::get_profile).post(handlers::save_profile))
        .with_state(repo)
}
