// file: src/catalog/dataset.rs
// description: loading doctor records from the bundled or a user supplied json file
// reference: https://docs.rs/serde_json

use crate::error::{FinderError, Result};
use crate::models::Doctor;
use crate::utils::Validator;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const BUNDLED_DATASET: &str = include_str!("../../data/doctors.json");

pub fn load_bundled() -> Result<Vec<Doctor>> {
    let records: Vec<Doctor> = serde_json::from_str(BUNDLED_DATASET)?;
    debug!("Loaded {} bundled doctor records", records.len());
    Ok(records)
}

pub fn load_file(path: &Path) -> Result<Vec<Doctor>> {
    Validator::validate_file_path(path)?;

    let raw = fs::read_to_string(path).map_err(|source| FinderError::Dataset {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<Doctor> = serde_json::from_str(&raw)?;
    info!("Loaded {} doctor records from {}", records.len(), path.display());
    Ok(records)
}
