//! Seed parser with validation
//!
//! Parses YAML and validates schema version, category uniqueness, field
//! content and category references

#![allow(clippy::result_large_err)]

use crate::errors::{io_error, seed_validation, yaml_error, Result};
use crate::repo::SqliteRepo;
use crate::seed::format::SeedV0;
use rusqlite::Connection;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a seed file from a path
pub fn parse_seed_file(path: &Path) -> Result<SeedV0> {
    let content = fs::read_to_string(path).map_err(|e| io_error("seed_read", e))?;
    parse_seed_str(&content)
}

/// Parse a seed from a string
pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    parse_seed_str_with_db(content, None)
}

/// Parse a seed from a string with optional database context
///
/// With a connection, questions may reference categories that an earlier
/// seed already imported.
pub fn parse_seed_str_with_db(content: &str, conn: Option<&Connection>) -> Result<SeedV0> {
    let seed: SeedV0 = serde_yaml::from_str(content).map_err(yaml_error)?;

    validate_seed(&seed, conn)?;

    Ok(seed)
}

/// Validate a parsed seed
fn validate_seed(seed: &SeedV0, conn: Option<&Connection>) -> Result<()> {
    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    let mut category_ids = HashSet::new();
    for category in &seed.categories {
        if !category_ids.insert(category.id) {
            return Err(seed_validation(&format!(
                "Duplicate category id {}",
                category.id
            )));
        }
        if category.kind.trim().is_empty() {
            return Err(seed_validation(&format!(
                "Category {} has an empty type",
                category.id
            )));
        }
    }

    for (index, question) in seed.questions.iter().enumerate() {
        if question.question.trim().is_empty() {
            return Err(seed_validation(&format!(
                "Question #{} has empty question text",
                index
            )));
        }
        if question.answer.trim().is_empty() {
            return Err(seed_validation(&format!(
                "Question #{} has an empty answer",
                index
            )));
        }
        if question.difficulty < 1 {
            return Err(seed_validation(&format!(
                "Question #{} has difficulty {}; must be at least 1",
                index, question.difficulty
            )));
        }

        let category_id: i64 = question.category.trim().parse().map_err(|_| {
            seed_validation(&format!(
                "Question #{} has non-numeric category '{}'",
                index, question.category
            ))
        })?;

        if category_ids.contains(&category_id) {
            continue;
        }
        let known = match conn {
            Some(conn) => SqliteRepo::category_exists(conn, category_id)?,
            None => false,
        };
        if !known {
            return Err(seed_validation(&format!(
                "Question #{} references non-existent category {}",
                index, category_id
            )));
        }
    }

    Ok(())
}
