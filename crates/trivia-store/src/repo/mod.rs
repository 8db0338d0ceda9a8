//! Repository layer mapping catalog models to SQLite rows

pub mod sqlite_repo;
pub mod sqlite_store;

pub use sqlite_repo::SqliteRepo;
pub use sqlite_store::SqliteStore;
