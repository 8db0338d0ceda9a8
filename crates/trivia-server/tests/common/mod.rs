use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use trivia_core::model::{Category, Question};
use trivia_core::ops::MemoryStore;
use trivia_core::random::SeededRandom;
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

/// Six categories; categories 1..=4 hold five questions each (ids 1..=20)
pub fn catalog_store() -> Arc<MemoryStore> {
    let store = MemoryStore::with_categories([
        Category::new(1, "Science"),
        Category::new(2, "Art"),
        Category::new(3, "Geography"),
        Category::new(4, "History"),
        Category::new(5, "Entertainment"),
        Category::new(6, "Sports"),
    ]);
    for id in 1..=20 {
        let category = ((id - 1) / 5 + 1).to_string();
        store.put_question(question(id, &category)).unwrap();
    }
    Arc::new(store)
}

pub fn app_with(store: Arc<MemoryStore>) -> Router {
    let service = CatalogService::with_random(
        store,
        CatalogConfig::default(),
        Arc::new(SeededRandom::new(11)),
    );
    trivia_server::create_router(service)
}

pub fn app() -> Router {
    app_with(catalog_store())
}

/// Send a request and return the status, headers and parsed JSON body
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (Response<()>, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (Response::from_parts(parts, ()), json)
}
