//! Seed digest canonicalization
//!
//! Computes stable SHA256 digests of seeds so re-imports can be reported

use crate::seed::format::SeedV0;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Canonical representation of a seed for digest calculation
#[derive(Debug, Clone, Serialize)]
struct CanonicalSeed {
    schema_version: u32,
    categories: Vec<(i64, String)>,
    questions: Vec<CanonicalQuestion>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
struct CanonicalQuestion {
    category: String,
    question: String,
    answer: String,
    difficulty: i64,
}

/// Compute a stable digest for a seed
///
/// Entry order in the YAML does not affect the digest.
pub fn compute_seed_digest(seed: &SeedV0) -> String {
    let canonical = canonicalize_seed(seed);

    let mut hasher = Sha256::new();
    // Tuples, strings and integers always serialize
    if let Ok(json) = serde_json::to_string(&canonical) {
        hasher.update(json.as_bytes());
    }
    hex::encode(hasher.finalize())
}

fn canonicalize_seed(seed: &SeedV0) -> CanonicalSeed {
    let mut categories: Vec<(i64, String)> = seed
        .categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect();
    categories.sort();

    let mut questions: Vec<CanonicalQuestion> = seed
        .questions
        .iter()
        .map(|q| CanonicalQuestion {
            category: q.category.clone(),
            question: q.question.clone(),
            answer: q.answer.clone(),
            difficulty: q.difficulty,
        })
        .collect();
    questions.sort();

    CanonicalSeed {
        schema_version: seed.schema_version,
        categories,
        questions,
    }
}
