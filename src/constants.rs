//! Application constants and defaults

pub const API_BASE_URL: &str = "https://rickandmortyapi.com/api/character";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "Character Catalog";

/// Shown to the user when any page of the catalog fails to load
pub const LOAD_FAILURE_MESSAGE: &str = "Could not load the character catalog!";
/// Shown when the current filters match nothing
pub const NO_RESULTS_MESSAGE: &str = "No results found!";

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

// Environment overrides read by `Settings::from_env`
pub const ENV_API_URL: &str = "CATALOG_API_URL";
pub const ENV_ROWS_PER_PAGE: &str = "CATALOG_ROWS_PER_PAGE";
