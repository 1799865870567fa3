use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The patient intake form. One active profile per client; resubmission
/// overwrites the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub name: String,
    pub age: String,
    pub phone: String,
    pub address: String,
    pub symptoms: String,
}

impl PatientProfile {
    /// All fields must be present, non-empty strings before a save is
    /// accepted. No further validation; the form owns formatting.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let fields = [
            ("name", &self.name),
            ("age", &self.age),
            ("phone", &self.phone),
            ("address", &self.address),
            ("symptoms", &self.symptoms),
        ];

        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ProfileError::MissingField(field.to_string()));
            }
        }

        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Profile field '{0}' is required")]
    MissingField(String),

    #[error("Store error: {0}")]
    Store(String),
}
