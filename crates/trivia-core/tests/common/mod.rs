use trivia_core::{Category, MemoryStore, Question};

/// Build a question fixture with predictable text
#[allow(dead_code)]
pub fn question(id: i64, category: &str) -> Question {
    Question {
        id,
        question: format!("Question number {}?", id),
        answer: format!("Answer {}", id),
        category: category.to_string(),
        difficulty: (id % 5) + 1,
    }
}

/// Store with categories {1: Science, 2: Art} and questions 5 and 6 in category 1
#[allow(dead_code)]
pub fn science_and_art_store() -> MemoryStore {
    let store = MemoryStore::with_categories([Category::new(1, "Science"), Category::new(2, "Art")]);
    store.put_question(question(5, "1")).unwrap();
    store.put_question(question(6, "1")).unwrap();
    store
}
