use std::sync::Arc;

use assert_matches::assert_matches;

use appointment_cell::models::AppointmentError;
use appointment_cell::{AppointmentService, AppointmentStatus};
use profile_cell::PatientProfile;
use shared_store::MemoryRepository;
use vaidya_cell::VaidyaDirectory;

fn service() -> AppointmentService {
    AppointmentService::new(
        Arc::new(MemoryRepository::new()),
        Arc::new(VaidyaDirectory::seeded()),
    )
}

fn intake_profile() -> PatientProfile {
    PatientProfile {
        name: "Asha Rao".to_string(),
        age: "34".to_string(),
        phone: "9876543210".to_string(),
        address: "Pune, Maharashtra".to_string(),
        symptoms: "joint pain, stiffness".to_string(),
    }
}

#[test]
fn created_appointment_is_pending_and_in_vaidya_queue() {
    let service = service();

    let created = service
        .create("meera_kulkarni", "Asha Rao", "joint pain", intake_profile())
        .unwrap();

    assert_eq!(created.status, AppointmentStatus::Pending);

    let queue = service.list_by_vaidya("meera_kulkarni").unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].id, created.id);
    assert_eq!(queue[0].status, AppointmentStatus::Pending);
}

#[test]
fn queue_is_scoped_per_vaidya() {
    let service = service();

    service
        .create("meera_kulkarni", "Asha Rao", "joint pain", intake_profile())
        .unwrap();
    service
        .create("suresh_nair", "Asha Rao", "migraine", intake_profile())
        .unwrap();

    assert_eq!(service.list_all().unwrap().len(), 2);
    assert_eq!(service.list_by_vaidya("meera_kulkarni").unwrap().len(), 1);
    assert_eq!(service.list_by_vaidya("suresh_nair").unwrap().len(), 1);
    assert!(service.list_by_vaidya("kavita_joshi").unwrap().is_empty());
}

#[test]
fn booking_unknown_vaidya_is_rejected() {
    let service = service();

    let result = service.create("nobody", "Asha Rao", "joint pain", intake_profile());
    assert_matches!(result, Err(AppointmentError::VaidyaNotFound(id)) if id == "nobody");
    assert!(service.list_all().unwrap().is_empty());
}

#[test]
fn blank_patient_name_is_rejected() {
    let service = service();

    let result = service.create("meera_kulkarni", "  ", "joint pain", intake_profile());
    assert_matches!(result, Err(AppointmentError::ValidationError(_)));
}

#[test]
fn confirm_then_further_updates_follow_the_table() {
    let service = service();
    let created = service
        .create("meera_kulkarni", "Asha Rao", "joint pain", intake_profile())
        .unwrap();

    let confirmed = service
        .update_status(created.id, AppointmentStatus::Confirmed, None)
        .unwrap();
    assert_eq!(confirmed.status, AppointmentStatus::Confirmed);

    // Confirmed cannot return to pending.
    let back = service.update_status(created.id, AppointmentStatus::Pending, None);
    assert_matches!(back, Err(AppointmentError::InvalidTransition { .. }));

    let rescheduled = service
        .update_status(
            created.id,
            AppointmentStatus::Rescheduled,
            Some("patient asked to move".to_string()),
        )
        .unwrap();
    assert_eq!(rescheduled.status, AppointmentStatus::Rescheduled);
    assert_eq!(
        rescheduled.status_reason.as_deref(),
        Some("patient asked to move")
    );
}

#[test]
fn cancelled_is_terminal() {
    let service = service();
    let created = service
        .create("meera_kulkarni", "Asha Rao", "joint pain", intake_profile())
        .unwrap();

    service
        .update_status(created.id, AppointmentStatus::Cancelled, None)
        .unwrap();

    let result = service.update_status(created.id, AppointmentStatus::Confirmed, None);
    assert_matches!(result, Err(AppointmentError::InvalidTransition { from, to })
        if from == AppointmentStatus::Cancelled && to == AppointmentStatus::Confirmed);

    // Stored record is untouched by the rejected transition.
    let stored = service.get(created.id).unwrap();
    assert_eq!(stored.status, AppointmentStatus::Cancelled);
}

#[test]
fn rejected_transition_leaves_queue_unchanged() {
    let service = service();
    let created = service
        .create("meera_kulkarni", "Asha Rao", "joint pain", intake_profile())
        .unwrap();

    let result = service.update_status(created.id, AppointmentStatus::Pending, None);
    assert_matches!(result, Err(AppointmentError::InvalidTransition { .. }));

    let stored = service.get(created.id).unwrap();
    assert_eq!(stored.status, AppointmentStatus::Pending);
    assert!(stored.updated_at.is_none());
}

#[test]
fn unknown_appointment_id_is_not_found() {
    let service = service();
    let result = service.update_status(uuid::Uuid::new_v4(), AppointmentStatus::Confirmed, None);
    assert_matches!(result, Err(AppointmentError::NotFound));
}
