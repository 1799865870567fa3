use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use shared_models::error::AppError;
use shared_store::Repository;

use crate::models::{PatientProfile, ProfileError};
use crate::service::ProfileService;

impl From<ProfileError> for AppError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::MissingField(_) => AppError::ValidationError(err.to_string()),
            ProfileError::Store(msg) => AppError::Internal(msg),
        }
    }
}

#[axum::debug_handler]
pub async fn save_profile(
    State(repo): State<Arc<dyn Repository>>,
    Json(profile): Json<PatientProfile>,
) -> Result<Json<Value>, AppError> {
    let service = ProfileService::new(repo);
    service.save(&profile)?;

    Ok(Json(json!({
        "saved": true,
        "profile": profile
    })))
}

#[axum::debug_handler]
pub async fn get_profile(
    State(repo): State<Arc<dyn Repository>>,
) -> Result<Json<Value>, AppError> {
    let service = ProfileService::new(repo);
    let profile = service
        .load()?
        .ok_or_else(|| AppError::NotFound("No patient profile saved".to_string()))?;

    Ok(Json(json!(profile)))
}
