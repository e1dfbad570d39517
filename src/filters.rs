//! Client-side filtering and pagination

use crate::constants::DEFAULT_ROWS_PER_PAGE;
use crate::types::{Catalog, Character};

/// Search and dropdown filters. An empty string means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_text: String,
    pub species_filter: String,
    pub status_filter: String,
}

impl FilterState {
    /// True when `character` passes every non-empty filter
    pub fn matches(&self, character: &Character) -> bool {
        // Name: case-insensitive substring, query is not trimmed
        if !self.search_text.is_empty()
            && !character
                .name
                .to_lowercase()
                .contains(&self.search_text.to_lowercase())
        {
            return false;
        }

        if !self.species_filter.is_empty() && character.species != self.species_filter {
            return false;
        }

        if !self.status_filter.is_empty() && character.status.as_str() != self.status_filter {
            return false;
        }

        true
    }

    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty() && self.species_filter.is_empty() && self.status_filter.is_empty()
    }
}

/// Client-side page position. `current_page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub rows_per_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self { current_page: 1, rows_per_page: DEFAULT_ROWS_PER_PAGE }
    }
}

impl PageState {
    /// Index range of the current page before clipping to the filtered length
    pub fn bounds(&self) -> (usize, usize) {
        // Page 0 is before the first page: empty range
        let Some(index) = self.current_page.checked_sub(1) else {
            return (0, 0);
        };
        let start = index.saturating_mul(self.rows_per_page);
        (start, start.saturating_add(self.rows_per_page))
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, filtered_count: usize) -> bool {
        self.current_page.saturating_mul(self.rows_per_page) < filtered_count
    }

    /// Step back one page, never below page 1
    pub fn prev_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    /// Step forward one page if more filtered rows remain
    pub fn next_page(&mut self, filtered_count: usize) {
        if self.has_next(filtered_count) {
            self.current_page += 1;
        }
    }

    /// Change the page size. The current page is deliberately left as-is,
    /// so it may now point past the end of the filtered rows.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page;
    }
}

/// The filtered-and-sliced rows currently visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewResult<'a> {
    pub visible: Vec<&'a Character>,
    pub filtered_count: usize,
}

impl ViewResult<'_> {
    /// Whether the "no results" indicator should be shown. `visible` can
    /// still be empty when this is false, if the page is past the end.
    pub fn no_results(&self) -> bool {
        self.filtered_count == 0
    }
}

/// Number of catalog rows passing `filters`
pub fn filtered_count(catalog: &Catalog, filters: &FilterState) -> usize {
    catalog.characters().iter().filter(|c| filters.matches(c)).count()
}

/// Filter the catalog and cut out the current page.
///
/// Catalog order is preserved. A page that starts past the filtered rows
/// yields an empty slice.
pub fn compute_visible<'a>(
    catalog: &'a Catalog,
    filters: &FilterState,
    page: &PageState,
) -> ViewResult<'a> {
    let filtered: Vec<&Character> = catalog
        .characters()
        .iter()
        .filter(|c| filters.matches(c))
        .collect();

    let filtered_count = filtered.len();
    let (start, end) = page.bounds();
    let start = start.min(filtered_count);
    let end = end.min(filtered_count);

    ViewResult { visible: filtered[start..end].to_vec(), filtered_count }
}
