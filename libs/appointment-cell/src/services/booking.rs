use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use profile_cell::PatientProfile;
use shared_store::{keys, Repository, RepositoryExt};
use vaidya_cell::VaidyaDirectory;

use crate::models::{Appointment, AppointmentError, AppointmentStatus};
use crate::services::lifecycle::AppointmentLifecycleService;

/// Appointment queue over the shared repository. One JSON slot holds the
/// whole queue; reads and writes are whole-slot, last-write-wins.
pub struct AppointmentService {
    repo: Arc<dyn Repository>,
    directory: Arc<VaidyaDirectory>,
    lifecycle: AppointmentLifecycleService,
}

impl AppointmentService {
    pub fn new(repo: Arc<dyn Repository>, directory: Arc<VaidyaDirectory>) -> Self {
        Self {
            repo,
            directory,
            lifecycle: AppointmentLifecycleService::new(),
        }
    }

    /// Book an appointment. The vaidya must exist and a profile snapshot
    /// must be supplied; both are checked before anything is persisted.
    pub fn create(
        &self,
        vaidya_id: &str,
        patient_name: &str,
        symptoms: &str,
        profile: PatientProfile,
    ) -> Result<Appointment, AppointmentError> {
        if self.directory.get(vaidya_id).is_none() {
            return Err(AppointmentError::VaidyaNotFound(vaidya_id.to_string()));
        }
        if patient_name.trim().is_empty() {
            return Err(AppointmentError::ValidationError(
                "Patient name is required".to_string(),
            ));
        }

        let appointment = Appointment {
            id: Uuid::new_v4(),
            vaidya_id: vaidya_id.to_string(),
            patient_name: patient_name.to_string(),
            symptoms: symptoms.to_string(),
            profile,
            requested_at: Utc::now(),
            status: AppointmentStatus::Pending,
            status_reason: None,
            updated_at: None,
        };

        let mut queue = self.load_queue()?;
        queue.push(appointment.clone());
        self.store_queue(&queue)?;

        info!(
            "Booked appointment {} with vaidya {}",
            appointment.id, appointment.vaidya_id
        );
        Ok(appointment)
    }

    pub fn list_all(&self) -> Result<Vec<Appointment>, AppointmentError> {
        self.load_queue()
    }

    /// A practitioner's own queue. Client-side scoping, not a security
    /// boundary; the underlying slot is shared.
    pub fn list_by_vaidya(&self, vaidya_id: &str) -> Result<Vec<Appointment>, AppointmentError> {
        let queue = self.load_queue()?;
        Ok(queue
            .into_iter()
            .filter(|a| a.vaidya_id == vaidya_id)
            .collect())
    }

    pub fn get(&self, id: Uuid) -> Result<Appointment, AppointmentError> {
        self.load_queue()?
            .into_iter()
            .find(|a| a.id == id)
            .ok_or(AppointmentError::NotFound)
    }

    pub fn update_status(
        &self,
        id: Uuid,
        new_status: AppointmentStatus,
        reason: Option<String>,
    ) -> Result<Appointment, AppointmentError> {
        let mut queue = self.load_queue()?;

        let appointment = queue
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AppointmentError::NotFound)?;

        self.lifecycle
            .validate_status_transition(appointment.status, new_status)?;

        appointment.status = new_status;
        appointment.status_reason = reason;
        appointment.updated_at = Some(Utc::now());
        let updated = appointment.clone();

        self.store_queue(&queue)?;

        debug!("Appointment {} moved to {}", updated.id, updated.status);
        Ok(updated)
    }

    fn load_queue(&self) -> Result<Vec<Appointment>, AppointmentError> {
        Ok(self
            .repo
            .get::<Vec<Appointment>>(keys::APPOINTMENTS)
            .map_err(|e| AppointmentError::Store(e.to_string()))?
            .unwrap_or_default())
    }

    fn store_queue(&self, queue: &[Appointment]) -> Result<(), AppointmentError> {
        self.repo
            .set(keys::APPOINTMENTS, &queue)
            .map_err(|e| AppointmentError::Store(e.to_string()))
    }
}
