//! `CatalogStore` backed by a single SQLite connection

#![allow(clippy::result_large_err)]

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;
use trivia_core::errors::{ExError, ExErrorKind, ExResult};
use trivia_core::model::{Category, NewQuestion, Question};
use trivia_core::ops::CatalogStore;
use trivia_core::query::QuestionFilter;

use crate::db;
use crate::errors::Result;
use crate::migrations::apply_migrations;
use crate::repo::SqliteRepo;

/// SQLite-backed storage gateway
///
/// The connection sits behind a mutex, so writes are serialized and each
/// one is individually atomic.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Wrap an already configured and migrated connection
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Open (or create) a database file and bring its schema up to date
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut conn = db::open(path)?;
        db::configure(&conn)?;
        apply_migrations(&mut conn)?;
        Ok(Self::new(conn))
    }

    /// Fresh migrated in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let mut conn = db::open_in_memory()?;
        db::configure(&conn)?;
        apply_migrations(&mut conn)?;
        Ok(Self::new(conn))
    }

    /// Run a closure against the underlying connection (seed import, admin)
    pub fn with_connection<T>(&self, f: impl FnOnce(&mut Connection) -> Result<T>) -> Result<T> {
        let mut conn = self.lock()?;
        f(&mut *conn)
    }

    fn lock(&self) -> ExResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| {
            ExError::new(ExErrorKind::Internal)
                .with_op("sqlite_store")
                .with_message("connection lock poisoned")
        })
    }
}

impl CatalogStore for SqliteStore {
    fn list_categories(&self) -> ExResult<Vec<Category>> {
        SqliteRepo::list_categories(&*self.lock()?)
    }

    fn list_questions(&self, filter: &QuestionFilter) -> ExResult<Vec<Question>> {
        SqliteRepo::list_questions(&*self.lock()?, filter)
    }

    fn count_questions(&self) -> ExResult<u64> {
        SqliteRepo::count_questions(&*self.lock()?)
    }

    fn get_question(&self, id: i64) -> ExResult<Option<Question>> {
        SqliteRepo::get_question(&*self.lock()?, id)
    }

    fn insert_question(&self, new: &NewQuestion) -> ExResult<Question> {
        SqliteRepo::insert_question(&*self.lock()?, new)
    }

    fn delete_question(&self, id: i64) -> ExResult<bool> {
        SqliteRepo::delete_question(&*self.lock()?, id)
    }

    fn category_exists(&self, id: i64) -> ExResult<bool> {
        SqliteRepo::category_exists(&*self.lock()?, id)
    }
}
