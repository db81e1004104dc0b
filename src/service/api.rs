// file: src/service/api.rs
// description: mock doctor api with simulated network latency
// reference: async service facade over an in-memory store

use super::latency::{Latency, Operation, SimulatedLatency};
use crate::catalog::DoctorCatalog;
use crate::config::Config;
use crate::error::Result;
use crate::models::{Doctor, DoctorFilters, NewDoctor, PaginatedResponse};
use crate::utils::{OperationTimer, Validator};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};
use uuid::Uuid;

pub const SPECIALTIES: [&str; 5] = [
    "General Physician",
    "Cardiologist",
    "Dermatologist",
    "Pediatrician",
    "Gynecologist",
];

const SLOW_FETCH_THRESHOLD: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub specialties: Vec<String>,
    pub locations: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DoctorService<L = SimulatedLatency> {
    catalog: DoctorCatalog,
    latency: L,
}

impl DoctorService<SimulatedLatency> {
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = DoctorCatalog::from_config(&config.dataset)?;
        Ok(Self::new(
            catalog,
            SimulatedLatency::from_config(&config.service),
        ))
    }
}

impl<L: Latency> DoctorService<L> {
    pub fn new(catalog: DoctorCatalog, latency: L) -> Self {
        Self { catalog, latency }
    }

    pub fn catalog(&self) -> &DoctorCatalog {
        &self.catalog
    }

    pub async fn fetch_doctors(
        &self,
        filters: &DoctorFilters,
        page: u32,
        limit: u32,
    ) -> Result<PaginatedResponse<Doctor>> {
        let timer = OperationTimer::new("fetch_doctors");

        let result = match self.latency.wait(Operation::FetchDoctors).await {
            Ok(()) => self.catalog.filter_and_paginate(filters, page, limit),
            Err(e) => Err(e),
        };

        timer.warn_if_slow(SLOW_FETCH_THRESHOLD, "doctor listing");

        match &result {
            Ok(response) => {
                timer.finish_with_count(response.data.len());
            }
            Err(e) => {
                error!("Error fetching doctors: {}", e);
            }
        }

        result
    }

    /// Echoes the profile back with a fresh id. The catalog is not modified.
    pub async fn add_doctor(&self, doctor: NewDoctor) -> Result<Doctor> {
        let result = self.try_add_doctor(doctor).await;
        if let Err(e) = &result {
            error!("Error adding doctor: {}", e);
        }
        result
    }

    async fn try_add_doctor(&self, doctor: NewDoctor) -> Result<Doctor> {
        self.latency.wait(Operation::AddDoctor).await?;
        Validator::validate_new_doctor(&doctor)?;

        let doctor = doctor.with_id(Uuid::new_v4().to_string());
        info!("Added new doctor: {} ({})", doctor.name, doctor.id);
        Ok(doctor)
    }

    pub async fn get_specialties(&self) -> Result<Vec<String>> {
        self.latency.wait(Operation::FilterOptions).await?;
        Ok(SPECIALTIES.iter().map(|s| s.to_string()).collect())
    }

    pub async fn get_locations(&self) -> Result<Vec<String>> {
        self.latency.wait(Operation::FilterOptions).await?;
        Ok(self.catalog.locations())
    }

    /// Loads both option lists for the filter panel concurrently.
    pub async fn fetch_filter_options(&self) -> Result<FilterOptions> {
        let (locations, specialties) =
            tokio::try_join!(self.get_locations(), self.get_specialties())?;
        Ok(FilterOptions {
            specialties,
            locations,
        })
    }
}
