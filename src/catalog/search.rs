// file: src/catalog/search.rs
// description: criteria filtering followed by page slicing
// reference: in-memory filter and paginate

use crate::error::Result;
use crate::models::{Doctor, DoctorFilters, PaginatedResponse};
use crate::utils::Validator;
use tracing::debug;

/// Filters `records` by every set criterion, then returns the requested
/// 1-based page. Pages past the end (and page 0) come back empty with the
/// requested page number left untouched.
pub fn filter_and_paginate(
    records: &[Doctor],
    filters: &DoctorFilters,
    page: u32,
    limit: u32,
) -> Result<PaginatedResponse<Doctor>> {
    Validator::validate_limit(limit)?;

    let matches: Vec<&Doctor> = records.iter().filter(|d| filters.matches(d)).collect();
    let total = matches.len();

    let data = match page_bounds(page, limit, total) {
        Some((start, end)) => matches[start..end].iter().map(|d| (*d).clone()).collect(),
        None => Vec::new(),
    };

    debug!(
        "Filtered {} of {} records, page {} holds {}",
        total,
        records.len(),
        page,
        data.len()
    );

    Ok(PaginatedResponse::new(data, total, page, limit))
}

fn page_bounds(page: u32, limit: u32, total: usize) -> Option<(usize, usize)> {
    let index = page.checked_sub(1)? as usize;
    let start = index.checked_mul(limit as usize)?;
    if start >= total {
        return None;
    }
    let end = start.saturating_add(limit as usize).min(total);
    Some((start, end))
}
