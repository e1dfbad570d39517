//! Runtime settings. Defaults come from `constants`, environment variables override them.

use crate::constants::{API_BASE_URL, DEFAULT_ROWS_PER_PAGE, ENV_API_URL, ENV_ROWS_PER_PAGE};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Paginated character listing endpoint
    pub api_url: String,
    /// Initial page size of the view
    pub rows_per_page: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: API_BASE_URL.to_string(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup. Invalid values are
    /// logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            let url = url.trim();
            if url.is_empty() {
                warn!(var = ENV_API_URL, "Empty API URL override, using default");
            } else {
                debug!(url, "API URL overridden");
                settings.api_url = url.to_string();
            }
        }

        if let Some(raw) = lookup(ENV_ROWS_PER_PAGE) {
            match raw.trim().parse::<usize>() {
                Ok(rows) if rows > 0 => {
                    debug!(rows, "Rows per page overridden");
                    settings.rows_per_page = rows;
                }
                Ok(_) => warn!(var = ENV_ROWS_PER_PAGE, "Rows per page must be positive, using default"),
                Err(e) => warn!(var = ENV_ROWS_PER_PAGE, error = %e, "Failed to parse rows per page, using default"),
            }
        }

        settings
    }
}
