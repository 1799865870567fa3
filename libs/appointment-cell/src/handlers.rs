use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use profile_cell::ProfileService;
use shared_models::error::AppError;
use shared_store::Repository;
use vaidya_cell::VaidyaDirectory;

use crate::models::{AppointmentError, BookAppointmentRequest, UpdateStatusRequest};
use crate::services::booking::AppointmentService;

/// Shared state for appointment routes: the store plus the roster used to
/// verify that bookings reference a real practitioner.
pub struct AppointmentState {
    pub repo: Arc<dyn Repository>,
    pub directory: Arc<VaidyaDirectory>,
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound => AppError::NotFound(err.to_string()),
            AppointmentError::VaidyaNotFound(_) => AppError::NotFound(err.to_string()),
            AppointmentError::MissingProfile => AppError::ValidationError(err.to_string()),
            AppointmentError::InvalidTransition { .. } => AppError::BadRequest(err.to_string()),
            AppointmentError::ValidationError(msg) => AppError::ValidationError(msg),
            AppointmentError::Store(msg) => AppError::Internal(msg),
        }
    }
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<AppointmentState>>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    // Booking requires a saved intake profile; the appointment carries a
    // snapshot of it.
    let profile = ProfileService::new(state.repo.clone())
        .load()
        .map_err(|e| AppError::Internal(e.to_string()))?
        .ok_or_else(|| AppError::from(AppointmentError::MissingProfile))?;

    let service = AppointmentService::new(state.repo.clone(), state.directory.clone());
    let symptoms = request
        .symptoms
        .unwrap_or_else(|| profile.symptoms.clone());
    let patient_name = profile.name.clone();

    let appointment = service.create(&request.vaidya_id, &patient_name, &symptoms, profile)?;

    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<AppointmentState>>,
) -> Result<Json<Value>, AppError> {
    let service = AppointmentService::new(state.repo.clone(), state.directory.clone());
    let appointments = service.list_all()?;
    let total = appointments.len();

    Ok(Json(json!({
        "appointments": appointments,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn list_vaidya_appointments(
    State(state): State<Arc<AppointmentState>>,
    Path(vaidya_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = AppointmentService::new(state.repo.clone(), state.directory.clone());
    let appointments = service.list_by_vaidya(&vaidya_id)?;
    let total = appointments.len();

    Ok(Json(json!({
        "vaidya_id": vaidya_id,
        "appointments": appointments,
        "total": total
    })))
}

#[axum::debug_handler]
pub async fn update_appointment_status(
    State(state): State<Arc<AppointmentState>>,
    Path(appointment_id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Value>, AppError> {
    let service = AppointmentService::new(state.repo.clone(), state.directory.clone());
    let appointment = service.update_status(appointment_id, request.status, request.reason)?;

    Ok(Json(json!(appointment)))
}
