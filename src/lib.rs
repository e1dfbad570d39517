//! Character Catalog - loads a paginated character listing and filters it client-side

pub mod constants;
pub mod error;
pub mod filters;
pub mod loader;
pub mod logging;
pub mod selection;
pub mod session;
pub mod settings;
pub mod source;
pub mod types;

#[cfg(test)]
mod testing;

pub use error::LoadError;
pub use filters::{compute_visible, filtered_count, FilterState, PageState, ViewResult};
pub use loader::{catalog_pages, load_full_catalog};
pub use selection::DetailSelection;
pub use session::{CatalogSession, LoadState};
pub use settings::Settings;
pub use source::{HttpPageSource, PageSource};
pub use types::{Catalog, Character, Location, PageResponse, Status};
