//! Trivia Server - HTTP surface of the question catalog
//!
//! Provides:
//! - The axum router with CORS headers on every response
//! - JSON request parsing and `{success: false, ...}` error bodies
//! - Layered settings (embedded defaults, file, environment)

#![allow(clippy::result_large_err)]

pub mod api;
pub mod settings;

pub use api::routes::create_router;
pub use settings::Settings;

use std::sync::Arc;

use trivia_core::errors::ExResult;
use trivia_engine::CatalogService;
use trivia_store::SqliteStore;

/// Open the configured database and build the catalog service on top of it
pub fn open_service(settings: &Settings) -> ExResult<CatalogService> {
    let store = SqliteStore::open(&settings.database.path)?;
    Ok(CatalogService::new(
        Arc::new(store),
        settings.catalog.clone(),
    ))
}
