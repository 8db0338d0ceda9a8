//! Catalog configuration injected into the service at construction

use serde::Deserialize;

use crate::errors::{ExError, ExErrorKind, ExResult};
use crate::pagination::DEFAULT_PAGE_SIZE;

/// Category id that means "no category restriction" in quiz requests
pub const ALL_CATEGORIES_ID: i64 = 0;

/// Tunables for the catalog service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Questions per page on listing and search endpoints
    pub page_size: usize,

    /// Quiz category id treated as "all categories"
    pub all_categories_id: i64,

    /// Reject new questions whose category is not a known category id
    pub validate_category_on_create: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            all_categories_id: ALL_CATEGORIES_ID,
            validate_category_on_create: false,
        }
    }
}

impl CatalogConfig {
    /// Check invariants that deserialization cannot express
    ///
    /// # Errors
    /// `Config` when `page_size` is zero.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> ExResult<()> {
        if self.page_size == 0 {
            return Err(ExError::new(ExErrorKind::Config)
                .with_op("validate_catalog_config")
                .with_message("catalog.page_size must be at least 1"));
        }
        Ok(())
    }
}
