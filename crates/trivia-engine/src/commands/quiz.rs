//! Quiz rounds

#![allow(clippy::result_large_err)]

use std::time::Instant;

use trivia_core::errors::{ExErrorKind, ExResult, TriviaError};
use trivia_core::log_op_start;
use trivia_core::query::QuestionFilter;
use trivia_core::quiz;
use trivia_core_types::RequestContext;

use crate::commands::requests::QuizRequest;
use crate::commands::responses::QuizResponse;
use crate::service::{reclassify, CatalogService};

impl CatalogService {
    /// Next random unseen question in the requested scope
    ///
    /// Category id `all_categories_id` (0 by default) spans every category.
    /// A `null` question in the response means the quiz is complete.
    ///
    /// # Errors
    /// * `NotFound` - no usable category id, an empty or unknown category,
    ///   or any storage failure
    pub fn next_quiz_question(
        &self,
        ctx: &RequestContext,
        request: QuizRequest,
    ) -> ExResult<QuizResponse> {
        const OP: &str = "next_quiz_question";
        log_op_start!(
            OP,
            request_id = ctx.request_id.as_str(),
            category_id = ?request.category_id,
            previous_len = request.previous_questions.len()
        );
        let start = Instant::now();

        let result = self
            .draw(request)
            .map_err(|e| reclassify(e, ExErrorKind::NotFound, OP));

        Self::finish(OP, ctx, start, result)
    }

    fn draw(&self, request: QuizRequest) -> ExResult<QuizResponse> {
        let category_id = request.category_id.ok_or(TriviaError::MissingField {
            field: "quiz_category",
        })?;

        let scope = QuestionFilter::quiz_scope(category_id, self.config.all_categories_id);
        let pool = self.store.list_questions(&scope)?;
        tracing::debug!(pool_len = pool.len(), "quiz candidate pool resolved");

        let outcome = quiz::next_question(
            pool,
            &request.previous_questions,
            category_id,
            self.rng.as_ref(),
        )?;

        Ok(QuizResponse {
            success: true,
            question: outcome.into_question(),
        })
    }
}
