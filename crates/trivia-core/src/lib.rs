//! Trivia Core - domain kernel of the question catalog
//!
//! This crate provides:
//! - Question and Category models
//! - The Storage Gateway trait (`CatalogStore`) and an in-memory gateway
//! - Pagination, the Query Resolver (`QuestionFilter`) and the Quiz Selector
//! - The structured error and logging facilities shared by every layer
//!
//! Nothing here performs I/O beyond what a `CatalogStore` implementation does.

pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod pagination;
pub mod query;
pub mod quiz;
pub mod random;

#[doc(hidden)]
pub use trivia_core_types;

// Re-export commonly used types
pub use config::CatalogConfig;
pub use errors::{ExError, ExErrorKind, ExResult, Result, TriviaError};
pub use model::{Category, CategoryMap, NewQuestion, Question};
pub use ops::{CatalogStore, MemoryStore};
pub use pagination::{paginate, PageRequest};
pub use query::QuestionFilter;
pub use quiz::QuizOutcome;
pub use random::{RandomSource, SeededRandom, ThreadRandom};
