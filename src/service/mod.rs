// file: src/service/mod.rs
// description: data service module exports
// reference: internal module structure

pub mod api;
pub mod latency;

pub use api::{DoctorService, FilterOptions, SPECIALTIES};
pub use latency::{Latency, NoLatency, Operation, SimulatedLatency};
