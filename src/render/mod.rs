// file: src/render/mod.rs
// description: terminal rendering of doctor cards and result pages
// reference: internal module structure

mod card;
mod listing;

pub use card::render_card;
pub use listing::{LOAD_FAILED, NO_RESULTS_HINT, NO_RESULTS_TITLE, render_listing};
