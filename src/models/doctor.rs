// file: src/models/doctor.rs
// description: doctor profile record as listed by the search page
// reference: internal data structures

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    /// Years of practice.
    pub experience: u32,
    pub qualifications: Vec<String>,
    pub location: String,
    /// Consultation fee in rupees.
    pub consultation_fee: u32,
    pub rating: f32,
    pub available_today: bool,
    pub next_available: String,
    pub image_url: String,
}

/// A doctor profile that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDoctor {
    pub name: String,
    pub specialty: String,
    pub experience: u32,
    #[serde(default)]
    pub qualifications: Vec<String>,
    pub location: String,
    pub consultation_fee: u32,
    pub rating: f32,
    pub available_today: bool,
    pub next_available: String,
    pub image_url: String,
}

impl NewDoctor {
    pub fn with_id(self, id: String) -> Doctor {
        Doctor {
            id,
            name: self.name,
            specialty: self.specialty,
            experience: self.experience,
            qualifications: self.qualifications,
            location: self.location,
            consultation_fee: self.consultation_fee,
            rating: self.rating,
            available_today: self.available_today,
            next_available: self.next_available,
            image_url: self.image_url,
        }
    }
}

impl Doctor {
    pub fn qualifications_line(&self) -> String {
        self.qualifications.join(", ")
    }

    /// Case-insensitive substring match against name, specialty or location.
    /// `needle` must already be lowercased.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.specialty.to_lowercase().contains(needle)
            || self.location.to_lowercase().contains(needle)
    }
}
