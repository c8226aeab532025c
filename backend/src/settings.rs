//! Catalogue configuration loaded via OrthoConfig.
//!
//! Values come from `CATALOGUE_*` environment variables and configuration
//! files. The binary keeps its command line for query arguments, so only the
//! program name reaches the loader.

use ortho_config::OrthoConfig;
use pagination::{DEFAULT_PAGE_SIZE, PageRequest, PageRequestError};
use serde::Deserialize;

/// Listing configuration.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CATALOGUE")]
pub struct CatalogueSettings {
    /// Number of entries per listing page.
    #[ortho_config(default = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
}

impl CatalogueSettings {
    /// Validated page size.
    ///
    /// # Errors
    /// Rejects sizes outside `1..=MAX_PAGE_SIZE`.
    pub fn page_size(&self) -> Result<usize, PageRequestError> {
        PageRequest::first(self.page_size).map(|request| request.size())
    }
}
