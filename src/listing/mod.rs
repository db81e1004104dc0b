// file: src/listing/mod.rs
// description: listing page state and its url query sync
// reference: internal module structure

mod query;
mod state;

pub use state::ListingState;
