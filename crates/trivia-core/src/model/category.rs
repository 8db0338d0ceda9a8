use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category - seed data grouping questions by subject
///
/// Categories are read-only from the service's point of view; they arrive
/// through seed import and are never created or removed over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: i64,

    /// Display label ("Science", "Art", ...)
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Category id -> display label, ascending by id
///
/// Serializes as a JSON object keyed by the stringified id.
pub type CategoryMap = BTreeMap<i64, String>;

/// Build the id -> label mapping returned by the listing endpoints
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}
