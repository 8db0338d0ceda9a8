use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::errors::{ExError, ExErrorKind, ExResult};
use crate::model::{Category, NewQuestion, Question};
use crate::query::QuestionFilter;

/// Storage Gateway consumed by the catalog service
///
/// Every read returns rows ordered by ascending id. Implementations are
/// expected to serialize concurrent writes themselves; the service adds no
/// locking, retries or optimistic concurrency on top.
#[allow(clippy::result_large_err)]
pub trait CatalogStore: Send + Sync {
    /// All categories, ascending by id
    fn list_categories(&self) -> ExResult<Vec<Category>>;

    /// Questions matching `filter`, ascending by id
    fn list_questions(&self, filter: &QuestionFilter) -> ExResult<Vec<Question>>;

    /// Total number of stored questions, unfiltered
    fn count_questions(&self) -> ExResult<u64>;

    /// Look up one question
    fn get_question(&self, id: i64) -> ExResult<Option<Question>>;

    /// Persist a new question and return it with its assigned id
    fn insert_question(&self, new: &NewQuestion) -> ExResult<Question>;

    /// Remove a question; `false` when no row had that id
    fn delete_question(&self, id: i64) -> ExResult<bool>;

    /// Whether a category with this id exists
    fn category_exists(&self, id: i64) -> ExResult<bool>;
}

#[derive(Debug, Default)]
struct MemoryState {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    /// Highest id ever handed out; ids are never reused after deletion
    last_id: i64,
}

/// In-memory gateway
///
/// BTreeMap-backed so iteration order is the id order the gateway contract
/// demands. Used by tests and as the reference behaviour for `SqliteStore`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with categories
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let store = Self::new();
        if let Ok(mut state) = store.state.write() {
            for category in categories {
                state.categories.insert(category.id, category);
            }
        }
        store
    }

    /// Insert a question with a caller-chosen id (test fixtures, seeds)
    ///
    /// # Errors
    /// Returns `Internal` if the lock is poisoned.
    #[allow(clippy::result_large_err)]
    pub fn put_question(&self, question: Question) -> ExResult<()> {
        let mut state = self.write()?;
        state.last_id = state.last_id.max(question.id);
        state.questions.insert(question.id, question);
        Ok(())
    }

    #[allow(clippy::result_large_err)]
    fn read(&self) -> ExResult<RwLockReadGuard<'_, MemoryState>> {
        self.state.read().map_err(|_| poisoned())
    }

    #[allow(clippy::result_large_err)]
    fn write(&self) -> ExResult<RwLockWriteGuard<'_, MemoryState>> {
        self.state.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op("memory_store")
        .with_message("store lock poisoned")
}

impl CatalogStore for MemoryStore {
    fn list_categories(&self) -> ExResult<Vec<Category>> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    fn list_questions(&self, filter: &QuestionFilter) -> ExResult<Vec<Question>> {
        Ok(self
            .read()?
            .questions
            .values()
            .filter(|q| filter.matches(q))
            .cloned()
            .collect())
    }

    fn count_questions(&self) -> ExResult<u64> {
        Ok(self.read()?.questions.len() as u64)
    }

    fn get_question(&self, id: i64) -> ExResult<Option<Question>> {
        Ok(self.read()?.questions.get(&id).cloned())
    }

    fn insert_question(&self, new: &NewQuestion) -> ExResult<Question> {
        let mut state = self.write()?;
        state.last_id += 1;
        let question = new.clone().into_question(state.last_id);
        state.questions.insert(question.id, question.clone());
        Ok(question)
    }

    fn delete_question(&self, id: i64) -> ExResult<bool> {
        Ok(self.write()?.questions.remove(&id).is_some())
    }

    fn category_exists(&self, id: i64) -> ExResult<bool> {
        Ok(self.read()?.categories.contains_key(&id))
    }
}
