//! Catalog Service construction and shared lifecycle plumbing

#![allow(clippy::result_large_err)]

use std::sync::Arc;
use std::time::Instant;

use trivia_core::config::CatalogConfig;
use trivia_core::errors::{ExError, ExErrorKind, ExResult};
use trivia_core::ops::CatalogStore;
use trivia_core::random::{RandomSource, ThreadRandom};
use trivia_core::{log_op_end, log_op_error};
use trivia_core_types::{RequestContext, TraceId};

/// The Question Catalog Service
///
/// Stateless between calls: everything durable lives behind the
/// `CatalogStore`, and quiz progress is carried by the caller.
#[derive(Clone)]
pub struct CatalogService {
    pub(crate) store: Arc<dyn CatalogStore>,
    pub(crate) config: CatalogConfig,
    pub(crate) rng: Arc<dyn RandomSource>,
}

impl CatalogService {
    /// Service drawing quiz questions from the thread RNG
    pub fn new(store: Arc<dyn CatalogStore>, config: CatalogConfig) -> Self {
        Self::with_random(store, config, Arc::new(ThreadRandom))
    }

    /// Service with an injected random source (deterministic tests)
    pub fn with_random(
        store: Arc<dyn CatalogStore>,
        config: CatalogConfig,
        rng: Arc<dyn RandomSource>,
    ) -> Self {
        Self { store, config, rng }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Emit the end (or end_error) lifecycle event and tag errors with the
    /// request's correlation ids
    pub(crate) fn finish<T>(
        op: &'static str,
        ctx: &RequestContext,
        start: Instant,
        result: ExResult<T>,
    ) -> ExResult<T> {
        let duration_ms = start.elapsed().as_millis() as u64;
        let trace_id = ctx.trace_id.as_ref().map(TraceId::as_str);
        match result {
            Ok(value) => {
                log_op_end!(
                    op,
                    duration_ms = duration_ms,
                    request_id = ctx.request_id.as_str(),
                    trace_id = trace_id
                );
                Ok(value)
            }
            Err(err) => {
                log_op_error!(
                    op,
                    err,
                    duration_ms = duration_ms,
                    request_id = ctx.request_id.as_str(),
                    trace_id = trace_id
                );
                let err = err.with_request_id(ctx.request_id.clone());
                Err(match &ctx.trace_id {
                    Some(trace_id) => err.with_trace_id(trace_id.clone()),
                    None => err,
                })
            }
        }
    }
}

/// Report `err` as `kind`, keeping the original as the source
///
/// Errors already of that kind pass through with the operation attached.
pub(crate) fn reclassify(err: ExError, kind: ExErrorKind, op: &'static str) -> ExError {
    if err.kind() == kind {
        return match err.op() {
            Some(_) => err,
            None => err.with_op(op),
        };
    }
    ExError::new(kind)
        .with_op(op)
        .with_message(err.message().to_string())
        .with_source(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reclassify_wraps_other_kinds() {
        let inner = ExError::new(ExErrorKind::Persistence).with_message("disk I/O error");
        let outer = reclassify(inner, ExErrorKind::Unprocessable, "create_question");

        assert_eq!(outer.kind(), ExErrorKind::Unprocessable);
        assert_eq!(outer.op(), Some("create_question"));
        assert_eq!(outer.root_cause().kind(), ExErrorKind::Persistence);
    }

    #[test]
    fn test_reclassify_keeps_matching_kind() {
        let err = ExError::new(ExErrorKind::NotFound).with_entity_id("7");
        let same = reclassify(err, ExErrorKind::NotFound, "delete_question");

        assert_eq!(same.kind(), ExErrorKind::NotFound);
        assert_eq!(same.entity_id(), Some("7"));
        assert!(same.source_error().is_none());
    }
}
