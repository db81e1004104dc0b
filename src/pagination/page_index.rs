// file: src/pagination/page_index.rs
// description: abbreviated page number list with gap markers
// reference: windowed pagination controls

use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_PAGES_SHOWN: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageEntry {
    Page(u32),
    /// An elided run of page numbers.
    Gap,
}

impl fmt::Display for PageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageEntry::Page(n) => write!(f, "{}", n),
            PageEntry::Gap => write!(f, "…"),
        }
    }
}

/// Page labels for a control showing at most five numbers. The first and
/// last page are always present once the total exceeds the window.
pub fn build_page_index(current_page: u32, total_pages: u32) -> Vec<PageEntry> {
    if total_pages <= MAX_PAGES_SHOWN {
        return (1..=total_pages).map(PageEntry::Page).collect();
    }

    let mut entries = Vec::with_capacity(7);

    if current_page <= 3 {
        entries.extend((1..=4).map(PageEntry::Page));
        entries.push(PageEntry::Gap);
        entries.push(PageEntry::Page(total_pages));
    } else if current_page >= total_pages - 2 {
        entries.push(PageEntry::Page(1));
        entries.push(PageEntry::Gap);
        entries.extend((total_pages - 3..=total_pages).map(PageEntry::Page));
    } else {
        entries.push(PageEntry::Page(1));
        entries.push(PageEntry::Gap);
        entries.extend((current_page - 1..=current_page + 1).map(PageEntry::Page));
        entries.push(PageEntry::Gap);
        entries.push(PageEntry::Page(total_pages));
    }

    entries
}
