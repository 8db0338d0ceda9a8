//! API route table

use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;
use trivia_engine::CatalogService;

use crate::api::handlers::{
    create_question, delete_question, list_categories, list_questions, method_not_allowed,
    next_quiz_question, not_found, questions_by_category, search_questions,
};
use crate::api::middleware::{cors_headers, cors_layer, request_context};
use crate::api::AppState;

/// Create the catalog API router
pub fn create_router(service: CatalogService) -> Router {
    let state = AppState { service };

    Router::new()
        .route(
            "/categories",
            get(list_categories).fallback(method_not_allowed),
        )
        .route(
            "/categories/:category_id/questions",
            get(questions_by_category).fallback(method_not_allowed),
        )
        .route(
            "/questions",
            get(list_questions)
                .post(create_question)
                .fallback(method_not_allowed),
        )
        .route(
            "/questions/search",
            post(search_questions).fallback(method_not_allowed),
        )
        .route(
            "/questions/:question_id",
            delete(delete_question).fallback(method_not_allowed),
        )
        .route(
            "/quizzes",
            post(next_quiz_question).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(middleware::from_fn(request_context))
        // CORS support
        .layer(cors_layer())
        .layer(middleware::map_response(cors_headers))
        .with_state(state)
}
