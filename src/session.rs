//! Catalog session: the state a display layer drives

use crate::constants::LOAD_FAILURE_MESSAGE;
use crate::error::Result;
use crate::filters::{compute_visible, filtered_count, FilterState, PageState, ViewResult};
use crate::settings::Settings;
use crate::types::Catalog;
use tracing::{debug, info, warn};

/// Progress of the one-time catalog load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    NotLoaded,
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    /// The failed state carrying the generic user-facing message
    pub fn failure() -> Self {
        LoadState::Failed(LOAD_FAILURE_MESSAGE.to_string())
    }
}

/// Loaded catalog plus the user's current filter and page.
///
/// Nothing is recomputed implicitly: call [`CatalogSession::view`] after any
/// change to get the rows to show.
pub struct CatalogSession {
    catalog: Catalog,
    filters: FilterState,
    page: PageState,
    load_state: LoadState,
}

impl Default for CatalogSession {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl CatalogSession {
    pub fn new(settings: &Settings) -> Self {
        Self {
            catalog: Catalog::default(),
            filters: FilterState::default(),
            page: PageState { current_page: 1, rows_per_page: settings.rows_per_page },
            load_state: LoadState::NotLoaded,
        }
    }

    /// Mark a load as outstanding. Returns false, and changes nothing, if a
    /// catalog is already loaded.
    ///
    /// The caller runs [`crate::loader::load_full_catalog`] itself and hands the outcome to
    /// [`CatalogSession::finish_load`]; the session stays readable meanwhile.
    pub fn begin_load(&mut self) -> bool {
        if self.load_state == LoadState::Ready {
            warn!("Catalog already loaded, ignoring reload");
            return false;
        }
        self.load_state = LoadState::Loading;
        true
    }

    /// Store the outcome of a load.
    ///
    /// A failure leaves the catalog empty and records the generic load
    /// failure message. Once a catalog is loaded it is never replaced.
    pub fn finish_load(&mut self, result: Result<Catalog>) {
        if self.load_state == LoadState::Ready {
            warn!("Catalog already loaded, discarding load result");
            return;
        }
        match result {
            Ok(catalog) => {
                info!(count = catalog.len(), "Session catalog ready");
                self.catalog = catalog;
                self.load_state = LoadState::Ready;
            }
            Err(e) => {
                warn!(error = %e, "Session catalog unavailable");
                self.load_state = LoadState::failure();
            }
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// User-visible error, if the load failed
    pub fn error_message(&self) -> Option<&str> {
        match &self.load_state {
            LoadState::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    // Filter setters leave the current page untouched

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filters.search_text = text.into();
        debug!(search = %self.filters.search_text, "Search changed");
    }

    pub fn set_species_filter(&mut self, species: impl Into<String>) {
        self.filters.species_filter = species.into();
        debug!(species = %self.filters.species_filter, "Species filter changed");
    }

    pub fn set_status_filter(&mut self, status: impl Into<String>) {
        self.filters.status_filter = status.into();
        debug!(status = %self.filters.status_filter, "Status filter changed");
    }

    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.page.set_rows_per_page(rows_per_page);
        debug!(rows_per_page, current_page = self.page.current_page, "Rows per page changed");
    }

    pub fn next_page(&mut self) {
        let count = self.filtered_count();
        self.page.next_page(count);
    }

    pub fn prev_page(&mut self) {
        self.page.prev_page();
    }

    pub fn has_next_page(&self) -> bool {
        self.page.has_next(self.filtered_count())
    }

    /// Rows passing the current filters, ignoring the page
    pub fn filtered_count(&self) -> usize {
        filtered_count(&self.catalog, &self.filters)
    }

    pub fn has_prev_page(&self) -> bool {
        self.page.has_prev()
    }

    /// Rows to display for the current filters and page
    pub fn view(&self) -> ViewResult<'_> {
        compute_visible(&self.catalog, &self.filters, &self.page)
    }

    /// Whether the "no results" indicator should be shown
    pub fn show_no_results(&self) -> bool {
        self.filtered_count() == 0
    }
}
