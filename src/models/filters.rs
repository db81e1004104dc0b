// file: src/models/filters.rs
// description: optional search criteria applied to the doctor catalog
// reference: internal data structures

use super::doctor::Doctor;
use serde::{Deserialize, Serialize};

pub const EXPERIENCE_SLIDER_MAX: i64 = 25;
pub const FEE_SLIDER_MAX: i64 = 2000;

/// Search criteria. Every field is optional and an unset field places no
/// constraint on its dimension. Thresholds are signed and never validated:
/// an inconsistent value simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_today: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
}

impl DoctorFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_experience_min(mut self, years: i64) -> Self {
        self.experience_min = Some(years);
        self
    }

    pub fn with_available_today(mut self, available: bool) -> Self {
        self.available_today = Some(available);
        self
    }

    pub fn with_min_rating(mut self, rating: f32) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn with_max_fee(mut self, fee: i64) -> Self {
        self.max_fee = Some(fee);
        self
    }

    pub fn with_search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        text_constraint(&self.specialty).is_none()
            && text_constraint(&self.location).is_none()
            && self.experience_min.is_none()
            && self.available_today.is_none()
            && self.min_rating.is_none()
            && self.max_fee.is_none()
            && text_constraint(&self.search_query).is_none()
    }

    /// True when `doctor` satisfies every constraint that is set.
    pub fn matches(&self, doctor: &Doctor) -> bool {
        if let Some(specialty) = text_constraint(&self.specialty)
            && !doctor.specialty.to_lowercase().eq(&specialty.to_lowercase())
        {
            return false;
        }

        if let Some(location) = text_constraint(&self.location)
            && !doctor.location.to_lowercase().eq(&location.to_lowercase())
        {
            return false;
        }

        if let Some(min) = self.experience_min
            && i64::from(doctor.experience) < min
        {
            return false;
        }

        if let Some(available) = self.available_today
            && doctor.available_today != available
        {
            return false;
        }

        if let Some(min) = self.min_rating
            && doctor.rating < min
        {
            return false;
        }

        if let Some(max) = self.max_fee
            && i64::from(doctor.consultation_fee) > max
        {
            return false;
        }

        if let Some(query) = text_constraint(&self.search_query)
            && !doctor.matches_text(&query.to_lowercase())
        {
            return false;
        }

        true
    }

    /// Removable badges shown above the listing for the active filters.
    pub fn active_tags(&self) -> Vec<String> {
        let mut tags = Vec::new();

        if let Some(location) = text_constraint(&self.location) {
            tags.push(format!("Location: {}", location));
        }

        if let Some(years) = self.experience_min
            && years > 0
        {
            tags.push(format!("{}+ years experience", years));
        }

        if self.available_today == Some(true) {
            tags.push("Available Today".to_string());
        }

        if let Some(fee) = self.max_fee
            && fee != 0
            && fee < FEE_SLIDER_MAX
        {
            tags.push(format!("Up to ₹{}", fee));
        }

        tags
    }
}

// Empty strings behave like an unset field.
fn text_constraint(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
