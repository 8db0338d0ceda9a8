//! Trivia Engine - Catalog Service orchestration
//!
//! One operation per endpoint. Each composes the Query Resolver, the Storage
//! Gateway and Pagination or the Quiz Selector, assembles the response DTO,
//! and owns lifecycle logging plus the error classification its endpoint
//! reports.

pub mod commands;
pub mod service;

pub use commands::requests::{QuestionDraft, QuizRequest};
pub use commands::responses::{
    CategoriesResponse, CreatedQuestion, DeletedQuestion, QuestionPage, QuizResponse,
};
pub use service::CatalogService;
