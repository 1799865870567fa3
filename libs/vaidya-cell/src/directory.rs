use tracing::debug;

use crate::models::{PanchakarmaType, Vaidya, VaidyaMatch};

/// Static practitioner roster with a deterministic symptom matcher.
/// Same query against the same roster always yields the same order.
pub struct VaidyaDirectory {
    roster: Vec<Vaidya>,
}

impl VaidyaDirectory {
    pub fn new(roster: Vec<Vaidya>) -> Self {
        Self { roster }
    }

    /// Build-time roster, one or more practitioners per treatment type.
    pub fn seeded() -> Self {
        fn vaidya(
            id: &str,
            name: &str,
            specialty: PanchakarmaType,
            keywords: &[&str],
            bio: &str,
        ) -> Vaidya {
            Vaidya {
                id: id.to_string(),
                name: name.to_string(),
                specialty,
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
                bio: bio.to_string(),
            }
        }

        Self::new(vec![
            vaidya(
                "anjali_sharma",
                "Dr. Anjali Sharma",
                PanchakarmaType::Vamana,
                &["cough", "cold", "congestion", "asthma", "breathing"],
                "Vamana specialist focused on respiratory and kapha disorders.",
            ),
            vaidya(
                "ravi_deshpande",
                "Dr. Ravi Deshpande",
                PanchakarmaType::Virechana,
                &["digestion", "acidity", "constipation", "bloating", "liver"],
                "Virechana practitioner treating digestive and pitta imbalances.",
            ),
            vaidya(
                "meera_kulkarni",
                "Dr. Meera Kulkarni",
                PanchakarmaType::Basti,
                &["joint", "pain", "stiffness", "arthritis", "back"],
                "Basti therapist for joint, spine and vata complaints.",
            ),
            vaidya(
                "suresh_nair",
                "Dr. Suresh Nair",
                PanchakarmaType::Nasya,
                &["headache", "migraine", "sinus", "stress", "insomnia"],
                "Nasya specialist for head, sinus and stress conditions.",
            ),
            vaidya(
                "kavita_joshi",
                "Dr. Kavita Joshi",
                PanchakarmaType::Raktamokshana,
                &["skin", "acne", "eczema", "rash", "allergy"],
                "Raktamokshana practitioner for skin and blood disorders.",
            ),
            vaidya(
                "arun_patil",
                "Dr. Arun Patil",
                PanchakarmaType::Basti,
                &["sciatica", "back", "knee", "mobility"],
                "Basti therapist focused on mobility and lower-back care.",
            ),
        ])
    }

    pub fn get(&self, id: &str) -> Option<&Vaidya> {
        self.roster.iter().find(|v| v.id == id)
    }

    pub fn roster(&self) -> &[Vaidya] {
        &self.roster
    }

    /// Rank practitioners by how many of their keywords appear in the
    /// symptom text. Ties keep roster order. When nothing matches (or the
    /// query is empty) the full roster comes back instead of a dead end.
    pub fn search(&self, symptom_text: &str) -> Vec<VaidyaMatch> {
        let tokens = tokenize(symptom_text);

        let mut matches: Vec<VaidyaMatch> = self
            .roster
            .iter()
            .map(|vaidya| VaidyaMatch {
                score: keyword_score(&vaidya.keywords, &tokens),
                vaidya: vaidya.clone(),
            })
            .collect();

        if matches.iter().all(|m| m.score == 0) {
            debug!("No keyword overlap for query, falling back to full roster");
            return matches;
        }

        // Stable sort keeps roster insertion order within equal scores.
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| t.len() >= 3)
        .map(|t| t.to_string())
        .collect()
}

/// One point per keyword present in the token set. Exact token equality
/// always counts; tokens of four or more characters also count on
/// substring containment either way.
fn keyword_score(keywords: &[String], tokens: &[String]) -> usize {
    keywords
        .iter()
        .filter(|keyword| {
            tokens.iter().any(|token| {
                token == *keyword
                    || (token.len() >= 4 && keyword.contains(token.as_str()))
                    || (keyword.len() >= 4 && token.contains(keyword.as_str()))
            })
        })
        .count()
}
