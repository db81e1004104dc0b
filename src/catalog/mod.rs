// file: src/catalog/mod.rs
// description: immutable doctor catalog and its search entry point
// reference: internal module structure

pub mod dataset;
pub mod search;

pub use search::filter_and_paginate;

use crate::config::DatasetConfig;
use crate::error::Result;
use crate::models::{Doctor, DoctorFilters, PaginatedResponse};
use crate::utils::Validator;
use std::path::Path;
use std::sync::Arc;

/// Records are fixed for the lifetime of the catalog; clones share them.
#[derive(Debug, Clone)]
pub struct DoctorCatalog {
    records: Arc<[Doctor]>,
}

impl DoctorCatalog {
    pub fn new(records: Vec<Doctor>) -> Result<Self> {
        Validator::validate_unique_ids(&records)?;
        Ok(Self {
            records: records.into(),
        })
    }

    pub fn bundled() -> Result<Self> {
        Self::new(dataset::load_bundled()?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Self::new(dataset::load_file(path)?)
    }

    pub fn from_config(config: &DatasetConfig) -> Result<Self> {
        match &config.path {
            Some(path) => Self::from_file(path),
            None => Self::bundled(),
        }
    }

    pub fn filter_and_paginate(
        &self,
        filters: &DoctorFilters,
        page: u32,
        limit: u32,
    ) -> Result<PaginatedResponse<Doctor>> {
        filter_and_paginate(&self.records, filters, page, limit)
    }

    /// Distinct locations in order of first appearance.
    pub fn locations(&self) -> Vec<String> {
        let mut locations: Vec<String> = Vec::new();
        for doctor in self.records.iter() {
            if !locations.contains(&doctor.location) {
                locations.push(doctor.location.clone());
            }
        }
        locations
    }

    pub fn get(&self, id: &str) -> Option<&Doctor> {
        self.records.iter().find(|d| d.id == id)
    }

    pub fn records(&self) -> &[Doctor] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::FinderError;

    #[test]
    fn test_bundled_catalog() {
        let catalog = DoctorCatalog::bundled().unwrap();
        assert_eq!(catalog.len(), 12);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get("3").map(|d| d.name.as_str()), Some("Dr. Rajesh Kumar"));
        assert!(catalog.get("99").is_none());
    }

    #[test]
    fn test_locations_are_distinct_and_ordered() {
        let catalog = DoctorCatalog::bundled().unwrap();
        assert_eq!(
            catalog.locations(),
            vec![
                "Mumbai",
                "Delhi",
                "Bangalore",
                "Chennai",
                "Hyderabad",
                "Pune",
                "Kolkata",
                "Ahmedabad"
            ]
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut records = dataset::load_bundled().unwrap();
        records[1].id = records[0].id.clone();
        assert!(matches!(
            DoctorCatalog::new(records),
            Err(FinderError::Validation(_))
        ));
    }

    #[test]
    fn test_from_default_config_uses_bundled_data() {
        let config = Config::default_config();
        let catalog = DoctorCatalog::from_config(&config.dataset).unwrap();
        assert_eq!(catalog.len(), 12);
    }

    #[test]
    fn test_clones_share_records() {
        let catalog = DoctorCatalog::bundled().unwrap();
        let clone = catalog.clone();
        assert!(std::ptr::eq(catalog.records(), clone.records()));
    }
}
