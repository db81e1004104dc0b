// file: src/models/paginated.rs
// description: one page of matching records plus counts
// reference: paginated api response wrappers

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    /// Number of records matching the criteria across all pages.
    pub total: usize,
    /// Requested page, echoed back even when it is out of range.
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    /// `limit` must be non-zero; callers validate it first. A page count
    /// beyond `u32::MAX` saturates.
    pub fn new(data: Vec<T>, total: usize, page: u32, limit: u32) -> Self {
        let total_pages = u32::try_from(total.div_ceil(limit as usize)).unwrap_or(u32::MAX);
        Self {
            data,
            total,
            page,
            limit,
            total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn summary(&self) -> String {
        format!("Showing {} of {} doctors", self.data.len(), self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(PaginatedResponse::<u8>::new(vec![], 12, 1, 4).total_pages, 3);
        assert_eq!(PaginatedResponse::<u8>::new(vec![], 13, 1, 4).total_pages, 4);
        assert_eq!(PaginatedResponse::<u8>::new(vec![], 1, 1, 4).total_pages, 1);
    }

    #[test]
    fn test_no_matches_means_no_pages() {
        let page = PaginatedResponse::<u8>::new(vec![], 0, 1, 4);
        assert_eq!(page.total_pages, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn test_total_pages_saturates() {
        let page = PaginatedResponse::<u8>::new(vec![], usize::MAX, 1, 1);
        assert_eq!(page.total_pages, u32::MAX);
    }

    #[test]
    fn test_summary() {
        let page = PaginatedResponse::new(vec![1, 2, 3, 4], 12, 1, 4);
        assert_eq!(page.summary(), "Showing 4 of 12 doctors");
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let page = PaginatedResponse::new(vec![1u8], 1, 1, 4);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["limit"], 4);
    }
}
