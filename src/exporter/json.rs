// file: src/exporter/json.rs
// description: json export of fetched result pages

use crate::error::Result;
use crate::models::{Doctor, DoctorFilters, PaginatedResponse};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExportedPage<'a> {
    pub filters: &'a DoctorFilters,
    #[serde(flatten)]
    pub response: &'a PaginatedResponse<Doctor>,
}

#[derive(Debug, Serialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub total_documents: usize,
    pub files: Vec<String>,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn export_page(
        &self,
        filters: &DoctorFilters,
        response: &PaginatedResponse<Doctor>,
        pretty: bool,
    ) -> Result<ExportManifest> {
        let file_name = format!("doctors_page_{}.json", response.page);
        let page = ExportedPage { filters, response };
        self.write_json(&file_name, &page, pretty)?;

        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            total_documents: response.data.len(),
            files: vec![file_name],
        };
        self.write_json("manifest.json", &manifest, pretty)?;

        info!(
            "Export complete: {} doctors written to {}",
            manifest.total_documents,
            self.output_dir.display()
        );
        Ok(manifest)
    }

    fn write_json<T: Serialize>(&self, file_name: &str, value: &T, pretty: bool) -> Result<()> {
        let body = if pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        fs::write(self.output_dir.join(file_name), body)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DoctorCatalog;
    use tempfile::tempdir;

    #[test]
    fn test_exporter_creation() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path().join("nested/exports"));
        assert!(exporter.is_ok());
        assert!(dir.path().join("nested/exports").is_dir());
    }

    #[test]
    fn test_export_page_writes_page_and_manifest() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path()).unwrap();
        let catalog = DoctorCatalog::bundled().unwrap();
        let filters = DoctorFilters::new().with_available_today(true);
        let response = catalog.filter_and_paginate(&filters, 2, 4).unwrap();

        let manifest = exporter.export_page(&filters, &response, true).unwrap();
        assert_eq!(manifest.total_documents, 3);
        assert_eq!(manifest.files, vec!["doctors_page_2.json"]);

        let raw = fs::read_to_string(dir.path().join("doctors_page_2.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["total"], 7);
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["filters"]["availableToday"], true);
        assert_eq!(json["data"].as_array().unwrap().len(), 3);

        assert!(dir.path().join("manifest.json").is_file());
    }
}
