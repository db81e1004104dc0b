// file: src/pagination/mod.rs
// description: pagination module exports
// reference: internal module structure

mod control;
mod page_index;

pub use control::PaginationControl;
pub use page_index::{MAX_PAGES_SHOWN, PageEntry, build_page_index};
