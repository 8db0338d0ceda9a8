#![allow(clippy::result_large_err)]

use std::sync::Arc;

use trivia_core::errors::{ExError, ExErrorKind, ExResult};
use trivia_core::model::{Category, NewQuestion, Question};
use trivia_core::ops::{CatalogStore, MemoryStore};
use trivia_core::query::QuestionFilter;
use trivia_core::random::RandomSource;
use trivia_core::CatalogConfig;
use trivia_engine::CatalogService;

pub fn question(id: i64, category: &str) -> Question {
    Question {
        id,
        question: format!("Question number {}?", id),
        answer: format!("Answer {}", id),
        category: category.to_string(),
        difficulty: (id % 5) + 1,
    }
}

/// Categories 1..=6 with the classic labels and `per_category` questions each
#[allow(dead_code)]
pub fn classic_store(per_category: i64) -> Arc<MemoryStore> {
    let store = MemoryStore::with_categories([
        Category::new(1, "Science"),
        Category::new(2, "Art"),
        Category::new(3, "Geography"),
        Category::new(4, "History"),
        Category::new(5, "Entertainment"),
        Category::new(6, "Sports"),
    ]);
    let mut id = 0;
    for category in 1..=6 {
        for _ in 0..per_category {
            id += 1;
            store.put_question(question(id, &category.to_string())).unwrap();
        }
    }
    Arc::new(store)
}

/// Service over a store with default configuration
#[allow(dead_code)]
pub fn service(store: Arc<dyn CatalogStore>) -> CatalogService {
    CatalogService::new(store, CatalogConfig::default())
}

/// Always picks the last unseen candidate
#[allow(dead_code)]
pub struct LastPick;

impl RandomSource for LastPick {
    fn pick_index(&self, len: usize) -> usize {
        len - 1
    }
}

/// Gateway whose every call fails as a storage error
#[allow(dead_code)]
pub struct FailingStore;

fn broken() -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message("database is locked")
}

impl CatalogStore for FailingStore {
    fn list_categories(&self) -> ExResult<Vec<Category>> {
        Err(broken())
    }

    fn list_questions(&self, _filter: &QuestionFilter) -> ExResult<Vec<Question>> {
        Err(broken())
    }

    fn count_questions(&self) -> ExResult<u64> {
        Err(broken())
    }

    fn get_question(&self, _id: i64) -> ExResult<Option<Question>> {
        Err(broken())
    }

    fn insert_question(&self, _new: &NewQuestion) -> ExResult<Question> {
        Err(broken())
    }

    fn delete_question(&self, _id: i64) -> ExResult<bool> {
        Err(broken())
    }

    fn category_exists(&self, _id: i64) -> ExResult<bool> {
        Err(broken())
    }
}
