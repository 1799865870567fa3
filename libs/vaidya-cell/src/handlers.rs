use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::directory::VaidyaDirectory;

#[derive(Debug, Deserialize)]
pub struct VaidyaSearchQuery {
    pub symptoms: Option<String>,
}

#[axum::debug_handler]
pub async fn search_vaidyas(
    State(directory): State<Arc<VaidyaDirectory>>,
    Query(query): Query<VaidyaSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let matches = directory.search(query.symptoms.as_deref().unwrap_or(""));
    let total = matches.len();

    Ok(Json(json!({
        "vaidyas": matches,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn get_vaidya(
    State(directory): State<Arc<VaidyaDirectory>>,
    Path(vaidya_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let vaidya = directory
        .get(&vaidya_id)
        .ok_or_else(|| AppError::NotFound("Vaidya not found".to_string()))?;

    Ok(Json(json!(vaidya)))
}
