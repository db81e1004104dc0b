// file: src/render/listing.rs
// description: result page output with summary and pagination control

use super::card::render_card;
use crate::models::{Doctor, DoctorFilters, PaginatedResponse};
use crate::pagination::PaginationControl;

pub const NO_RESULTS_TITLE: &str = "No doctors found";
pub const NO_RESULTS_HINT: &str = "Try adjusting your filters to see more results.";
pub const LOAD_FAILED: &str = "Failed to load doctors. Please try again later.";

pub fn render_listing(
    filters: &DoctorFilters,
    response: &PaginatedResponse<Doctor>,
    control: &PaginationControl,
) -> String {
    let mut out = String::new();

    let tags = filters.active_tags();
    if !tags.is_empty() {
        out.push_str(&format!("Filters: {}\n\n", tags.join(" | ")));
    }

    if response.is_empty() {
        out.push_str(NO_RESULTS_TITLE);
        out.push('\n');
        out.push_str(NO_RESULTS_HINT);
        out.push('\n');
        return out;
    }

    out.push_str(&response.summary());
    out.push_str("\n\n");

    for doctor in &response.data {
        out.push_str(&render_card(doctor));
        out.push_str("\n\n");
    }

    if control.is_visible() {
        out.push_str(&control.to_string());
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DoctorCatalog;

    #[test]
    fn test_listing_with_pagination() {
        let catalog = DoctorCatalog::bundled().unwrap();
        let filters = DoctorFilters::new();
        let response = catalog.filter_and_paginate(&filters, 2, 4).unwrap();
        let control = PaginationControl::new(2, response.total_pages);

        let out = render_listing(&filters, &response, &control);
        assert!(out.starts_with("Showing 4 of 12 doctors\n"));
        assert!(out.contains("Dr. Vikram Singh"));
        assert!(out.trim_end().ends_with("‹ 1 [2] 3 ›"));
    }

    #[test]
    fn test_listing_without_matches() {
        let catalog = DoctorCatalog::bundled().unwrap();
        let filters = DoctorFilters::new().with_location("Goa");
        let response = catalog.filter_and_paginate(&filters, 1, 4).unwrap();
        let control = PaginationControl::new(1, response.total_pages);

        let out = render_listing(&filters, &response, &control);
        assert!(out.starts_with("Filters: Location: Goa\n"));
        assert!(out.contains(NO_RESULTS_TITLE));
        assert!(out.contains(NO_RESULTS_HINT));
    }

    #[test]
    fn test_single_page_omits_control() {
        let catalog = DoctorCatalog::bundled().unwrap();
        let filters = DoctorFilters::new().with_location("Chennai");
        let response = catalog.filter_and_paginate(&filters, 1, 4).unwrap();
        let control = PaginationControl::new(1, response.total_pages);

        let out = render_listing(&filters, &response, &control);
        assert!(out.starts_with("Filters: Location: Chennai\n\nShowing 2 of 2 doctors"));
        assert!(!out.contains('›'));
    }
}
