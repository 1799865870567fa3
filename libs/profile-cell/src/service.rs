use std::sync::Arc;

use tracing::debug;

use shared_store::{keys, Repository, RepositoryExt};

use crate::models::{PatientProfile, ProfileError};

/// Single-slot persistence for the patient intake profile.
/// Last write wins; an invalid profile never reaches the store.
pub struct ProfileService {
    repo: Arc<dyn Repository>,
}

impl ProfileService {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self { repo }
    }

    pub fn save(&self, profile: &PatientProfile) -> Result<(), ProfileError> {
        profile.validate()?;

        self.repo
            .set(keys::PATIENT_PROFILE, profile)
            .map_err(|e| ProfileError::Store(e.to_string()))?;

        debug!("Saved patient profile for {}", profile.name);
        Ok(())
    }

    pub fn load(&self) -> Result<Option<PatientProfile>, ProfileError> {
        self.repo
            .get(keys::PATIENT_PROFILE)
            .map_err(|e| ProfileError::Store(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use shared_store::MemoryRepository;

    fn well_formed_profile() -> PatientProfile {
        PatientProfile {
            name: "Asha Rao".to_string(),
            age: "34".to_string(),
            phone: "9876543210".to_string(),
            address: "Pune, Maharashtra".to_string(),
            symptoms: "joint pain, stiffness".to_string(),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let service = ProfileService::new(Arc::new(MemoryRepository::new()));
        let profile = well_formed_profile();

        service.save(&profile).unwrap();
        assert_eq!(service.load().unwrap(), Some(profile));
    }

    #[test]
    fn load_without_save_is_none() {
        let service = ProfileService::new(Arc::new(MemoryRepository::new()));
        assert_eq!(service.load().unwrap(), None);
    }

    #[test]
    fn incomplete_profile_is_rejected_and_previous_kept() {
        let service = ProfileService::new(Arc::new(MemoryRepository::new()));
        let original = well_formed_profile();
        service.save(&original).unwrap();

        let mut incomplete = well_formed_profile();
        incomplete.phone = "  ".to_string();

        let result = service.save(&incomplete);
        assert_matches!(result, Err(ProfileError::MissingField(field)) if field == "phone");
        assert_eq!(service.load().unwrap(), Some(original));
    }

    #[test]
    fn resubmission_overwrites() {
        let service = ProfileService::new(Arc::new(MemoryRepository::new()));
        service.save(&well_formed_profile()).unwrap();

        let mut updated = well_formed_profile();
        updated.symptoms = "headache".to_string();
        service.save(&updated).unwrap();

        assert_eq!(service.load().unwrap(), Some(updated));
    }
}
