// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{FinderError, Result};
use crate::models::{Doctor, NewDoctor};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            FinderError::Validation(format!(
                "Cannot canonicalize path {}: {}",
                path.display(),
                e
            ))
        })?;

        if !canonical.is_file() {
            return Err(FinderError::Validation(format!(
                "Path is not a file: {}",
                canonical.display()
            )));
        }

        Ok(())
    }

    pub fn validate_limit(limit: u32) -> Result<()> {
        if limit == 0 {
            return Err(FinderError::Validation(
                "Page size must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_not_blank(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(FinderError::Validation(format!("{} is empty", field)));
        }
        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(FinderError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_rating(rating: f32) -> Result<()> {
        if !(0.0..=5.0).contains(&rating) {
            return Err(FinderError::Validation(format!(
                "Rating must be between 0 and 5, got {}",
                rating
            )));
        }
        Ok(())
    }

    pub fn validate_new_doctor(doctor: &NewDoctor) -> Result<()> {
        Self::validate_not_blank("name", &doctor.name)?;
        Self::validate_not_blank("specialty", &doctor.specialty)?;
        Self::validate_not_blank("location", &doctor.location)?;
        Self::validate_rating(doctor.rating)?;
        Self::validate_url(&doctor.image_url)
    }

    pub fn validate_unique_ids(records: &[Doctor]) -> Result<()> {
        let mut seen = HashSet::with_capacity(records.len());
        for doctor in records {
            if !seen.insert(doctor.id.as_str()) {
                return Err(FinderError::Validation(format!(
                    "Duplicate doctor id: {}",
                    doctor.id
                )));
            }
        }
        Ok(())
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let head: String = text.chars().take(max_chars).collect();
            format!("{}...", head)
        }
    }
}
