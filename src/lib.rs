// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns

//! Doctor search listing: an immutable doctor catalog, criteria filtering
//! with page slicing, an abbreviated page index for the pagination control,
//! and a mock data service behind an injectable network delay.

pub mod catalog;
pub mod config;
pub mod error;
pub mod exporter;
pub mod listing;
pub mod models;
pub mod pagination;
pub mod render;
pub mod service;
pub mod utils;

pub use catalog::{DoctorCatalog, filter_and_paginate};
pub use config::{Config, DatasetConfig, PaginationConfig, ServiceConfig};
pub use error::{FinderError, Result};
pub use exporter::{ExportManifest, JsonExporter};
pub use listing::ListingState;
pub use models::{Doctor, DoctorFilters, NewDoctor, PaginatedResponse};
pub use pagination::{PageEntry, PaginationControl, build_page_index};
pub use service::{DoctorService, FilterOptions, Latency, NoLatency, Operation, SimulatedLatency};
pub use utils::{OperationTimer, Validator};
