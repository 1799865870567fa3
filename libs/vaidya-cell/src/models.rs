use serde::{Deserialize, Serialize};
use std::fmt;

/// The five canonical Panchakarma treatment specialties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanchakarmaType {
    Vamana,
    Virechana,
    Basti,
    Nasya,
    Raktamokshana,
}

impl fmt::Display for PanchakarmaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanchakarmaType::Vamana => write!(f, "vamana"),
            PanchakarmaType::Virechana => write!(f, "virechana"),
            PanchakarmaType::Basti => write!(f, "basti"),
            PanchakarmaType::Nasya => write!(f, "nasya"),
            PanchakarmaType::Raktamokshana => write!(f, "raktamokshana"),
        }
    }
}

/// A practitioner in the directory. Immutable reference data seeded at
/// startup; the roster's insertion order is the tiebreak order for search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vaidya {
    pub id: String,
    pub name: String,
    pub specialty: PanchakarmaType,
    pub keywords: Vec<String>,
    pub bio: String,
}

/// A search hit with its keyword-intersection score, highest first.
#[derive(Debug, Clone, Serialize)]
pub struct VaidyaMatch {
    pub vaidya: Vaidya,
    pub score: usize,
}
