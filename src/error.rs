//! Catalog load errors

/// Failure of a catalog load. Any failed page aborts the whole load.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Transport failure or an undecodable response body
    #[error("request for page {page} failed: {source}")]
    Request {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("page {page} returned HTTP {status}")]
    Status { page: u32, status: u16 },
}

impl LoadError {
    /// Page whose request failed
    pub fn page(&self) -> u32 {
        match self {
            LoadError::Request { page, .. } | LoadError::Status { page, .. } => *page,
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
