// Catalog service over an on-disk SQLite store

mod common;

use std::sync::Arc;

use tempfile::TempDir;
use trivia_core::errors::ExErrorKind;
use trivia_core::pagination::PageRequest;
use trivia_core::random::SeededRandom;
use trivia_core::CatalogConfig;
use trivia_core_types::RequestContext;
use trivia_engine::{CatalogService, QuestionDraft, QuizRequest};
use trivia_store::seed::import_seed_str;
use trivia_store::SqliteStore;

const SEED: &str = r#"
schema_version: 0
categories:
  - { id: 1, type: Science }
  - { id: 2, type: Art }
questions:
  - { question: "What is the heaviest organ in the human body?", answer: The Liver, category: 1, difficulty: 4 }
  - { question: "Who discovered penicillin?", answer: Alexander Fleming, category: 1, difficulty: 3 }
  - { question: "La Giaconda is better known as what?", answer: Mona Lisa, category: 2, difficulty: 3 }
"#;

fn setup() -> (TempDir, CatalogService) {
    let temp_dir = TempDir::new().unwrap();
    let store = SqliteStore::open(temp_dir.path().join("trivia.db")).unwrap();
    store.with_connection(|conn| import_seed_str(SEED, conn)).unwrap();
    let svc = CatalogService::with_random(
        Arc::new(store),
        CatalogConfig::default(),
        Arc::new(SeededRandom::new(3)),
    );
    (temp_dir, svc)
}

#[test]
fn test_full_flow_against_sqlite() {
    let (_tmp, svc) = setup();
    let ctx = RequestContext::new();

    let categories = svc.list_categories(&ctx).unwrap();
    assert_eq!(categories.categories[&2], "Art");

    let created = svc
        .create_question(
            &ctx,
            QuestionDraft {
                question: Some("Which planet is closest to the sun?".to_string()),
                answer: Some("Mercury".to_string()),
                category: Some("1".to_string()),
                difficulty: Some(1),
            },
        )
        .unwrap();

    let science = svc
        .questions_by_category(&ctx, 1, PageRequest::first())
        .unwrap();
    assert_eq!(science.questions.len(), 3);
    assert_eq!(science.total_questions, 4);

    let hits = svc
        .search_questions(&ctx, Some("PLANET"), PageRequest::first())
        .unwrap();
    assert_eq!(hits.questions.len(), 1);
    assert_eq!(hits.questions[0].id, created.id);

    svc.delete_question(&ctx, created.id).unwrap();
    let err = svc.delete_question(&ctx, created.id).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_quiz_against_sqlite_completes() {
    let (_tmp, svc) = setup();
    let ctx = RequestContext::new();
    let mut previous = Vec::new();

    while let Some(q) = svc
        .next_quiz_question(
            &ctx,
            QuizRequest {
                previous_questions: previous.clone(),
                category_id: Some(0),
            },
        )
        .unwrap()
        .question
    {
        previous.push(q.id);
    }

    assert_eq!(previous.len(), 3);
}
