// Create and delete operations

mod common;

use std::sync::Arc;

use common::{classic_store, service, FailingStore};
use trivia_core::errors::ExErrorKind;
use trivia_core::ops::CatalogStore;
use trivia_core::query::QuestionFilter;
use trivia_core::CatalogConfig;
use trivia_core_types::RequestContext;
use trivia_engine::{CatalogService, QuestionDraft};

fn full_draft() -> QuestionDraft {
    QuestionDraft {
        question: Some("What is the capital of Peru?".to_string()),
        answer: Some("Lima".to_string()),
        category: Some("3".to_string()),
        difficulty: Some(2),
    }
}

#[test]
fn test_create_question_echoes_fields_and_persists() {
    // Given: A catalog with 6 questions
    let store = classic_store(1);
    let svc = service(store.clone());

    // When: A complete question is created
    let created = svc
        .create_question(&RequestContext::new(), full_draft())
        .unwrap();

    // Then: The stored values are echoed
    assert!(created.success);
    assert_eq!(created.question, "What is the capital of Peru?");
    assert_eq!(created.answer, "Lima");
    assert_eq!(created.category, "3");
    assert_eq!(created.difficulty, 2);

    // And: It appears in the listing under a fresh id
    assert_eq!(created.id, 7);
    let all = store.list_questions(&QuestionFilter::All).unwrap();
    assert_eq!(all.last().map(|q| q.id), Some(created.id));
}

#[test]
fn test_create_with_any_field_missing_is_unprocessable() {
    let svc = service(classic_store(1));
    let drafts = [
        QuestionDraft {
            question: None,
            ..full_draft()
        },
        QuestionDraft {
            answer: None,
            ..full_draft()
        },
        QuestionDraft {
            category: None,
            ..full_draft()
        },
        QuestionDraft {
            difficulty: None,
            ..full_draft()
        },
    ];

    for draft in drafts {
        let err = svc
            .create_question(&RequestContext::new(), draft.clone())
            .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Unprocessable, "draft: {:?}", draft);
        assert_eq!(err.root_cause().kind(), ExErrorKind::MissingField);
    }
}

#[test]
fn test_create_accepts_unknown_category_by_default() {
    let svc = service(classic_store(1));

    let created = svc
        .create_question(
            &RequestContext::new(),
            QuestionDraft {
                category: Some("99".to_string()),
                ..full_draft()
            },
        )
        .unwrap();

    assert_eq!(created.category, "99");
}

#[test]
fn test_create_rejects_unknown_category_when_validation_enabled() {
    let config = CatalogConfig {
        validate_category_on_create: true,
        ..CatalogConfig::default()
    };
    let svc = CatalogService::new(classic_store(1), config);

    for category in ["99", "science"] {
        let err = svc
            .create_question(
                &RequestContext::new(),
                QuestionDraft {
                    category: Some(category.to_string()),
                    ..full_draft()
                },
            )
            .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Unprocessable);
        assert_eq!(err.root_cause().kind(), ExErrorKind::InvalidInput);
    }

    assert!(svc
        .create_question(&RequestContext::new(), full_draft())
        .is_ok());
}

#[test]
fn test_create_storage_failure_is_unprocessable() {
    let svc = service(Arc::new(FailingStore));

    let err = svc
        .create_question(&RequestContext::new(), full_draft())
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Unprocessable);
    assert_eq!(err.root_cause().kind(), ExErrorKind::Persistence);
}

#[test]
fn test_delete_twice() {
    // Given: An existing question
    let store = classic_store(1);
    let svc = service(store.clone());
    let ctx = RequestContext::new();

    // When: It is deleted
    let deleted = svc.delete_question(&ctx, 4).unwrap();

    // Then: Its id is reported and it is gone
    assert!(deleted.success);
    assert_eq!(deleted.deleted, 4);
    assert_eq!(store.get_question(4).unwrap(), None);

    // And: Deleting again is NotFound
    let err = svc.delete_question(&ctx, 4).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity_id(), Some("4"));
}

#[test]
fn test_delete_storage_failure_is_unprocessable() {
    let svc = service(Arc::new(FailingStore));

    let err = svc.delete_question(&RequestContext::new(), 1).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Unprocessable);
}

#[test]
fn test_deleted_id_is_not_reused() {
    let store = classic_store(1);
    let svc = service(store);
    let ctx = RequestContext::new();

    svc.delete_question(&ctx, 6).unwrap();
    let created = svc.create_question(&ctx, full_draft()).unwrap();

    assert_eq!(created.id, 7);
}
