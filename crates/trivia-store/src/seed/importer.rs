//! Seed importer orchestration
//!
//! Imports seeds into SQLite within a single transaction

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, io_error, seed_validation, Result};
use crate::repo::SqliteRepo;
use crate::seed::{compute_seed_digest, parse_seed_str_with_db};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use trivia_core::model::{Category, NewQuestion};

/// What one seed import changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    /// Stable digest of the imported seed
    pub digest: String,
    /// Categories inserted or relabelled
    pub categories: usize,
    /// Questions newly inserted
    pub questions_inserted: usize,
    /// Questions already present (same text in the same category)
    pub questions_skipped: usize,
}

/// Import a seed file into the database
pub fn import_seed(path: &Path, conn: &mut Connection) -> Result<SeedReport> {
    let content = std::fs::read_to_string(path).map_err(|e| io_error("seed_read", e))?;
    import_seed_str(&content, conn)
}

/// Import seed YAML held in memory
///
/// 1. Parses and validates the YAML (categories may come from earlier seeds)
/// 2. Upserts categories
/// 3. Inserts questions not already present
///
/// Everything happens in one transaction; a failure leaves the database
/// untouched.
pub fn import_seed_str(content: &str, conn: &mut Connection) -> Result<SeedReport> {
    let seed = parse_seed_str_with_db(content, Some(&*conn))?;
    let digest = compute_seed_digest(&seed);

    let tx = conn.transaction().map_err(from_rusqlite)?;

    for seed_category in &seed.categories {
        SqliteRepo::upsert_category(
            &tx,
            &Category::new(seed_category.id, seed_category.kind.clone()),
        )?;
    }

    let mut inserted = 0;
    let mut skipped = 0;
    for seed_question in &seed.questions {
        if SqliteRepo::question_exists(&tx, &seed_question.question, &seed_question.category)? {
            skipped += 1;
            continue;
        }
        let new = NewQuestion {
            question: seed_question.question.clone(),
            answer: seed_question.answer.clone(),
            category: seed_question.category.clone(),
            difficulty: seed_question.difficulty,
        };
        SqliteRepo::insert_question(&tx, &new)?;
        inserted += 1;
    }

    tx.commit().map_err(from_rusqlite)?;

    let report = SeedReport {
        digest,
        categories: seed.categories.len(),
        questions_inserted: inserted,
        questions_skipped: skipped,
    };
    tracing::info!(
        digest = %report.digest,
        categories = report.categories,
        questions_inserted = report.questions_inserted,
        questions_skipped = report.questions_skipped,
        "seed imported"
    );

    Ok(report)
}

/// Import a seed file, or every `*.yaml`/`*.yml` file of a directory in
/// lexicographic order
pub fn import_seed_path(path: &Path, conn: &mut Connection) -> Result<Vec<SeedReport>> {
    if !path.is_dir() {
        return Ok(vec![import_seed(path, conn)?]);
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(path)
        .map_err(|e| io_error("seed_read_dir", e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(seed_validation(&format!(
            "No seed files found in {}",
            path.display()
        )));
    }

    files.iter().map(|file| import_seed(file, conn)).collect()
}
