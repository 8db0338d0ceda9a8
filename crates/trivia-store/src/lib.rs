//! Trivia Store - SQLite persistence for the question catalog
//!
//! Provides:
//! - Connection management and embedded, checksummed migrations
//! - `SqliteStore`, the rusqlite-backed `CatalogStore`
//! - YAML seed import for categories and questions

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use repo::{SqliteRepo, SqliteStore};
