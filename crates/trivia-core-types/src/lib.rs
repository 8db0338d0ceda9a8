//! Core types shared across the trivia crates
//!
//! This crate provides foundational types used by error handling,
//! logging and the HTTP layer:
//!
//! - **Correlation types**: RequestId, TraceId, RequestContext
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId, TraceId};
