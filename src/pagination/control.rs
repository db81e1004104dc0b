// file: src/pagination/control.rs
// description: navigation state for the pagination control under the listing
// reference: previous/next pagination widgets

use super::page_index::{PageEntry, build_page_index};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControl {
    current_page: u32,
    total_pages: u32,
}

impl PaginationControl {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    /// A single page of results needs no control.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn previous(&self) -> Option<u32> {
        self.has_previous().then(|| self.current_page - 1)
    }

    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.current_page + 1)
    }

    pub fn entries(&self) -> Vec<PageEntry> {
        build_page_index(self.current_page, self.total_pages)
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }
}

/// Renders `‹ 1 … 4 [5] 6 … 10 ›` with the current page bracketed. A
/// disabled arrow is left out instead of drawn greyed, so the first and
/// last pages render without the `‹` or `›` slot.
impl fmt::Display for PaginationControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.has_previous() {
            parts.push("‹".to_string());
        }

        for entry in self.entries() {
            match entry {
                PageEntry::Page(n) if n == self.current_page => parts.push(format!("[{}]", n)),
                other => parts.push(other.to_string()),
            }
        }

        if self.has_next() {
            parts.push("›".to_string());
        }

        write!(f, "{}", parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_threshold() {
        assert!(!PaginationControl::new(1, 0).is_visible());
        assert!(!PaginationControl::new(1, 1).is_visible());
        assert!(PaginationControl::new(1, 2).is_visible());
    }

    #[test]
    fn test_navigation_bounds() {
        let first = PaginationControl::new(1, 3);
        assert!(!first.has_previous());
        assert_eq!(first.previous(), None);
        assert_eq!(first.next(), Some(2));

        let last = PaginationControl::new(3, 3);
        assert!(!last.has_next());
        assert_eq!(last.next(), None);
        assert_eq!(last.previous(), Some(2));
    }

    #[test]
    fn test_render_middle_page() {
        let control = PaginationControl::new(5, 10);
        assert_eq!(control.to_string(), "‹ 1 … 4 [5] 6 … 10 ›");
    }

    #[test]
    fn test_render_edges_omit_disabled_arrows() {
        assert_eq!(PaginationControl::new(1, 3).to_string(), "[1] 2 3 ›");
        assert_eq!(PaginationControl::new(3, 3).to_string(), "‹ 1 2 [3]");
        assert_eq!(PaginationControl::new(1, 1).to_string(), "[1]");
    }
}
