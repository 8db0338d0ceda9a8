//! SQLite repository implementation
//!
//! Row-level reads and writes for categories and questions. Every function
//! takes a plain `&Connection`, so callers can pass a `Transaction` too.
//! Search needs a connection prepared by `db::configure`.

#![allow(clippy::result_large_err)]

use crate::db::UNICODE_LOWER;
use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension, Row};
use trivia_core::model::{Category, NewQuestion, Question};
use trivia_core::query::QuestionFilter;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// SQLite repository for categories and questions
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert or update a category (seed import)
    pub fn upsert_category(conn: &Connection, category: &Category) -> Result<()> {
        conn.execute(
            "INSERT INTO categories (id, type) VALUES (?1, ?2)
             ON CONFLICT(id) DO UPDATE SET type = excluded.type",
            rusqlite::params![category.id, category.kind],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// All categories, ascending by id
    pub fn list_categories(conn: &Connection) -> Result<Vec<Category>> {
        let mut stmt = conn
            .prepare("SELECT id, type FROM categories ORDER BY id")
            .map_err(from_rusqlite)?;
        let categories = stmt
            .query_map([], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    kind: row.get(1)?,
                })
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(categories)
    }

    /// Whether a category row exists
    pub fn category_exists(conn: &Connection, id: i64) -> Result<bool> {
        let found = conn
            .query_row("SELECT 1 FROM categories WHERE id = ?1", [id], |_| Ok(()))
            .optional()
            .map_err(from_rusqlite)?;
        Ok(found.is_some())
    }

    /// Insert a question and return it with the id SQLite assigned
    pub fn insert_question(conn: &Connection, new: &NewQuestion) -> Result<Question> {
        conn.execute(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![new.question, new.answer, new.category, new.difficulty],
        )
        .map_err(from_rusqlite)?;

        Ok(new.clone().into_question(conn.last_insert_rowid()))
    }

    /// Whether a question with identical text already exists in a category
    pub fn question_exists(conn: &Connection, question: &str, category: &str) -> Result<bool> {
        let found = conn
            .query_row(
                "SELECT 1 FROM questions WHERE question = ?1 AND category = ?2",
                [question, category],
                |_| Ok(()),
            )
            .optional()
            .map_err(from_rusqlite)?;
        Ok(found.is_some())
    }

    /// Get a question by id
    pub fn get_question(conn: &Connection, id: i64) -> Result<Option<Question>> {
        conn.query_row(
            &format!("SELECT {} FROM questions WHERE id = ?1", QUESTION_COLUMNS),
            [id],
            question_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Questions matching a filter, ascending by id
    pub fn list_questions(conn: &Connection, filter: &QuestionFilter) -> Result<Vec<Question>> {
        let (sql, param) = match filter {
            QuestionFilter::All => (
                format!("SELECT {} FROM questions ORDER BY id", QUESTION_COLUMNS),
                None,
            ),
            QuestionFilter::Category(id) => (
                format!(
                    "SELECT {} FROM questions WHERE category = ?1 ORDER BY id",
                    QUESTION_COLUMNS
                ),
                Some(id.to_string()),
            ),
            QuestionFilter::TextContains(term) => (
                format!(
                    "SELECT {} FROM questions WHERE {}(question) LIKE ?1 ESCAPE '\\' ORDER BY id",
                    QUESTION_COLUMNS, UNICODE_LOWER
                ),
                Some(format!("%{}%", escape_like(&term.to_lowercase()))),
            ),
        };

        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
        let rows = match param {
            Some(value) => stmt.query_map([value], question_from_row),
            None => stmt.query_map([], question_from_row),
        }
        .map_err(from_rusqlite)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)
    }

    /// Total question count
    pub fn count_questions(conn: &Connection) -> Result<u64> {
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))
            .map_err(from_rusqlite)?;
        Ok(count.max(0) as u64)
    }

    /// Delete a question; `false` when no row matched
    pub fn delete_question(conn: &Connection, id: i64) -> Result<bool> {
        let affected = conn
            .execute("DELETE FROM questions WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        Ok(affected > 0)
    }
}

fn question_from_row(row: &Row<'_>) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: row.get(3)?,
        difficulty: row.get(4)?,
    })
}

/// Escape LIKE wildcards so the term matches literally
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
