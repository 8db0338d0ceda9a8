// Catalog listing operations: categories, all questions, by category, search

mod common;

use std::sync::Arc;

use common::{classic_store, service, FailingStore};
use trivia_core::errors::ExErrorKind;
use trivia_core::ops::MemoryStore;
use trivia_core::pagination::PageRequest;
use trivia_core::CatalogConfig;
use trivia_core_types::RequestContext;
use trivia_engine::CatalogService;

#[test]
fn test_list_categories_returns_id_to_label_map() {
    let svc = service(classic_store(1));

    let response = svc.list_categories(&RequestContext::new()).unwrap();

    assert!(response.success);
    assert_eq!(response.categories.len(), 6);
    assert_eq!(response.categories[&1], "Science");
    assert_eq!(response.categories[&6], "Sports");
}

#[test]
fn test_list_categories_empty_is_not_found() {
    let svc = service(Arc::new(MemoryStore::new()));

    let err = svc.list_categories(&RequestContext::new()).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_list_categories_storage_failure_is_internal_class() {
    let svc = service(Arc::new(FailingStore));

    let err = svc.list_categories(&RequestContext::new()).unwrap_err();

    // Propagated unchanged; the HTTP layer reports it as 500
    assert_eq!(err.kind(), ExErrorKind::Persistence);
}

#[test]
fn test_list_questions_first_page() {
    // Given: 18 questions across six categories
    let svc = service(classic_store(3));

    // When: The first page is requested
    let page = svc
        .list_questions(&RequestContext::new(), PageRequest::first())
        .unwrap();

    // Then: Ten questions in id order, with the unfiltered total
    assert_eq!(page.questions.len(), 10);
    let ids: Vec<i64> = page.questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    assert_eq!(page.total_questions, 18);
    assert_eq!(page.categories.as_ref().map(|c| c.len()), Some(6));
    assert_eq!(page.current_category, None);
}

#[test]
fn test_list_questions_last_partial_page() {
    let svc = service(classic_store(3));

    let page = svc
        .list_questions(&RequestContext::new(), PageRequest::new(2))
        .unwrap();

    assert_eq!(page.questions.len(), 8);
    assert_eq!(page.questions[0].id, 11);
}

#[test]
fn test_list_questions_beyond_data_is_not_found() {
    let svc = service(classic_store(3));
    let ctx = RequestContext::new();

    let err = svc.list_questions(&ctx, PageRequest::new(1000)).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.request_id(), Some(&ctx.request_id));
}

#[test]
fn test_list_questions_page_zero_is_not_found() {
    let svc = service(classic_store(3));

    let err = svc
        .list_questions(&RequestContext::new(), PageRequest::new(0))
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_list_questions_respects_configured_page_size() {
    let config = CatalogConfig {
        page_size: 4,
        ..CatalogConfig::default()
    };
    let svc = CatalogService::new(classic_store(3), config);

    let page = svc
        .list_questions(&RequestContext::new(), PageRequest::new(5))
        .unwrap();

    let ids: Vec<i64> = page.questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![17, 18]);
}

#[test]
fn test_questions_by_category_reports_unfiltered_total() {
    let svc = service(classic_store(3));

    let page = svc
        .questions_by_category(&RequestContext::new(), 2, PageRequest::first())
        .unwrap();

    let ids: Vec<i64> = page.questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![4, 5, 6]);
    assert_eq!(page.total_questions, 18);
    assert_eq!(page.current_category, Some(2));
    assert!(page.categories.is_none());
}

#[test]
fn test_questions_by_unknown_category_is_not_found() {
    let svc = service(classic_store(3));

    let err = svc
        .questions_by_category(&RequestContext::new(), 1000, PageRequest::first())
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_questions_by_category_storage_failure_is_not_found() {
    let svc = service(Arc::new(FailingStore));

    let err = svc
        .questions_by_category(&RequestContext::new(), 1, PageRequest::first())
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.root_cause().kind(), ExErrorKind::Persistence);
}

#[test]
fn test_search_matches_question_text_case_insensitively() {
    let svc = service(classic_store(2));

    let page = svc
        .search_questions(&RequestContext::new(), Some("NUMBER 1"), PageRequest::first())
        .unwrap();

    // "Question number 1?", "... 10?", "... 11?", "... 12?"
    let ids: Vec<i64> = page.questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![1, 10, 11, 12]);
    assert_eq!(page.total_questions, 12);
    assert_eq!(page.current_category, None);
}

#[test]
fn test_search_ignores_answer_text() {
    let svc = service(classic_store(2));

    let page = svc
        .search_questions(&RequestContext::new(), Some("Answer"), PageRequest::first())
        .unwrap();

    assert!(page.questions.is_empty());
}

#[test]
fn test_search_without_matches_is_success() {
    let svc = service(classic_store(2));

    let page = svc
        .search_questions(&RequestContext::new(), Some("zzzz"), PageRequest::first())
        .unwrap();

    assert!(page.success);
    assert!(page.questions.is_empty());
    assert_eq!(page.total_questions, 12);
}

#[test]
fn test_search_beyond_data_is_empty_success() {
    let svc = service(classic_store(2));

    let page = svc
        .search_questions(&RequestContext::new(), Some(""), PageRequest::new(1000))
        .unwrap();

    assert!(page.questions.is_empty());
}

#[test]
fn test_empty_and_absent_terms_match_everything() {
    let svc = service(classic_store(3));
    let ctx = RequestContext::new();

    let empty = svc
        .search_questions(&ctx, Some(""), PageRequest::first())
        .unwrap();
    let absent = svc.search_questions(&ctx, None, PageRequest::first()).unwrap();

    assert_eq!(empty.questions.len(), 10);
    assert_eq!(empty, absent);
}

#[test]
fn test_search_storage_failure_is_unprocessable() {
    let svc = service(Arc::new(FailingStore));

    let err = svc
        .search_questions(&RequestContext::new(), Some("x"), PageRequest::first())
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Unprocessable);
}
