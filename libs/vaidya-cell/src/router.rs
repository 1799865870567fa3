use std::sync::Arc;

use axum::{routing::get, Router};

use crate::directory::VaidyaDirectory;
use crate::handlers;

/// Public routes: the directory is reference data, browsable pre-login.
pub fn vaidya_routes(directory: Arc<VaidyaDirectory>) -> Router {
    Router::new()
        .route("/search", get(handlers::search_vaidyas))
        .route("/{vaidya_id}", get(handlers::get_vaidya))
        .with_state(directory)
}
