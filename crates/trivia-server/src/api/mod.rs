//! HTTP API: routes, handlers, request bodies, error bodies, middleware

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;

use trivia_engine::CatalogService;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub service: CatalogService,
}
