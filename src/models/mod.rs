// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod doctor;
pub mod filters;
pub mod paginated;

pub use doctor::{Doctor, NewDoctor};
pub use filters::{DoctorFilters, EXPERIENCE_SLIDER_MAX, FEE_SLIDER_MAX};
pub use paginated::PaginatedResponse;
