// file: src/listing/state.rs
// description: current filters and page of the doctor listing

use crate::error::Result;
use crate::models::{Doctor, DoctorFilters, PaginatedResponse};
use crate::pagination::PaginationControl;
use crate::service::{DoctorService, Latency};
use tracing::debug;

/// The listing URL query is the source of truth for the filters: whatever
/// is applied is serialized to a query and read back, so the specialty is
/// always the default one and fields the query cannot carry are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    default_specialty: String,
    filters: DoctorFilters,
    page: u32,
    limit: u32,
}

impl ListingState {
    pub fn new(default_specialty: impl Into<String>, limit: u32) -> Self {
        Self::from_query("", default_specialty, limit)
    }

    pub fn from_query(query: &str, default_specialty: impl Into<String>, limit: u32) -> Self {
        let default_specialty = default_specialty.into();
        Self {
            filters: DoctorFilters::from_query(query, &default_specialty),
            default_specialty,
            page: 1,
            limit,
        }
    }

    pub fn filters(&self) -> &DoctorFilters {
        &self.filters
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Writes `filters` to the query string, rebuilds the filters from it
    /// and returns to the first page. Returns the query string.
    pub fn apply_filters(&mut self, filters: DoctorFilters) -> String {
        let query = filters.to_query();
        self.filters = DoctorFilters::from_query(&query, &self.default_specialty);
        self.page = 1;
        debug!("Filters changed, query now '{}'", query);
        query
    }

    pub fn clear_filters(&mut self) -> String {
        self.apply_filters(DoctorFilters::cleared())
    }

    /// Page numbers are taken as given; an out-of-range page fetches empty.
    pub fn go_to_page(&mut self, page: u32) {
        self.page = page;
    }

    pub fn control(&self, response: &PaginatedResponse<Doctor>) -> PaginationControl {
        PaginationControl::new(self.page, response.total_pages)
    }

    pub async fn fetch<L: Latency>(
        &self,
        service: &DoctorService<L>,
    ) -> Result<PaginatedResponse<Doctor>> {
        service.fetch_doctors(&self.filters, self.page, self.limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DoctorCatalog;
    use crate::service::NoLatency;

    const GP: &str = "General Physician";

    fn service() -> DoctorService<NoLatency> {
        DoctorService::new(DoctorCatalog::bundled().unwrap(), NoLatency)
    }

    #[test]
    fn test_apply_filters_resets_page() {
        let mut state = ListingState::new(GP, 4);
        state.go_to_page(3);
        let query = state.apply_filters(DoctorFilters::new().with_location("Pune"));
        assert_eq!(state.page(), 1);
        assert_eq!(query, "location=Pune");
        assert_eq!(
            state.filters(),
            &DoctorFilters::new().with_specialty(GP).with_location("Pune")
        );
    }

    #[test]
    fn test_new_state_uses_default_specialty() {
        let state = ListingState::new(GP, 4);
        assert_eq!(state.filters(), &DoctorFilters::new().with_specialty(GP));
    }

    #[test]
    fn test_clear_filters_keeps_default_specialty() {
        let mut state = ListingState::from_query("location=Pune", GP, 4);
        assert_eq!(state.clear_filters(), "");
        assert_eq!(state.filters().specialty.as_deref(), Some(GP));
        assert!(state.filters().location.is_none());
    }

    #[test]
    fn test_apply_filters_drops_what_the_query_cannot_carry() {
        let mut state = ListingState::new(GP, 4);
        let query = state.apply_filters(
            DoctorFilters::new()
                .with_specialty("Cardiologist")
                .with_min_rating(4.5)
                .with_max_fee(1000),
        );
        assert_eq!(query, "specialty=Cardiologist&maxFee=1000");
        assert_eq!(state.filters().specialty.as_deref(), Some(GP));
        assert_eq!(state.filters().min_rating, None);
        assert_eq!(state.filters().max_fee, Some(1000));
    }

    #[tokio::test]
    async fn test_paging_through_results() {
        let mut state = ListingState::new(GP, 4);
        let first = state.fetch(&service()).await.unwrap();
        let control = state.control(&first);
        assert!(control.is_visible());
        assert_eq!(control.next(), Some(2));

        state.go_to_page(3);
        let last = state.fetch(&service()).await.unwrap();
        assert_eq!(last.data.len(), 4);
        assert!(!state.control(&last).has_next());

        state.go_to_page(4);
        let past_end = state.fetch(&service()).await.unwrap();
        assert!(past_end.data.is_empty());
        assert_eq!(past_end.page, 4);
    }

    #[tokio::test]
    async fn test_single_page_hides_control() {
        let state = ListingState::from_query("location=Mumbai", GP, 4);
        let response = state.fetch(&service()).await.unwrap();
        assert_eq!(response.total, 2);
        assert!(!state.control(&response).is_visible());
    }
}
