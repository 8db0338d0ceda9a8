//! Endpoint handlers
//!
//! Each handler decodes its inputs, runs the matching catalog operation on
//! the blocking pool (the store is synchronous), and serializes the result.
//! Input decoding failures are reported in the class the endpoint reports
//! its other failures in.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use trivia_core::errors::ExResult;
use trivia_core_types::RequestContext;
use trivia_engine::{
    CatalogService, CategoriesResponse, CreatedQuestion, DeletedQuestion, QuestionPage,
    QuizRequest, QuizResponse,
};

use crate::api::dto::{CreateQuestionBody, PageParams, QuizBody, SearchBody};
use crate::api::error::ApiError;
use crate::api::AppState;

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Run a catalog operation off the async executor
async fn run<T, F>(state: &AppState, op: F) -> ApiResult<T>
where
    F: FnOnce(&CatalogService) -> ExResult<T> + Send + 'static,
    T: Send + 'static,
{
    let service = state.service.clone();
    let outcome = tokio::task::spawn_blocking(move || op(&service))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "catalog task failed");
            ApiError::internal()
        })?;

    outcome.map(Json).map_err(ApiError::from)
}

fn page_params(query: Result<Query<PageParams>, QueryRejection>) -> PageParams {
    query.map(|Query(params)| params).unwrap_or_default()
}

/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> ApiResult<CategoriesResponse> {
    run(&state, move |svc| svc.list_categories(&ctx)).await
}

/// GET /questions?page=N
pub async fn list_questions(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> ApiResult<QuestionPage> {
    let page = page_params(query).page_request();
    run(&state, move |svc| svc.list_questions(&ctx, page)).await
}

/// GET /categories/{id}/questions?page=N
pub async fn questions_by_category(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> ApiResult<QuestionPage> {
    // A non-integer id matches no route
    let Path(category_id) = path.map_err(|_| ApiError::not_found())?;
    let page = page_params(query).page_request();
    run(&state, move |svc| {
        svc.questions_by_category(&ctx, category_id, page)
    })
    .await
}

/// POST /questions/search?page=N
pub async fn search_questions(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    query: Result<Query<PageParams>, QueryRejection>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> ApiResult<QuestionPage> {
    let Json(body) = body.map_err(|_| ApiError::unprocessable())?;
    let page = page_params(query).page_request();
    run(&state, move |svc| {
        svc.search_questions(&ctx, body.search_term.as_deref(), page)
    })
    .await
}

/// POST /questions
pub async fn create_question(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    body: Result<Json<CreateQuestionBody>, JsonRejection>,
) -> ApiResult<CreatedQuestion> {
    let Json(body) = body.map_err(|_| ApiError::unprocessable())?;
    let draft = body.into_draft().map_err(|_| ApiError::unprocessable())?;
    run(&state, move |svc| svc.create_question(&ctx, draft)).await
}

/// DELETE /questions/{id}
pub async fn delete_question(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<DeletedQuestion> {
    let Path(question_id) = path.map_err(|_| ApiError::not_found())?;
    run(&state, move |svc| svc.delete_question(&ctx, question_id)).await
}

/// POST /quizzes
pub async fn next_quiz_question(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    body: Result<Json<QuizBody>, JsonRejection>,
) -> ApiResult<QuizResponse> {
    let Json(body) = body.map_err(|_| ApiError::not_found())?;
    let request = QuizRequest::from(body);
    run(&state, move |svc| svc.next_quiz_question(&ctx, request)).await
}

/// Unknown path
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}

/// Known path, unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}
