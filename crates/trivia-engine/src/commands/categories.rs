//! Category listing

#![allow(clippy::result_large_err)]

use std::time::Instant;

use trivia_core::errors::{ExResult, TriviaError};
use trivia_core::log_op_start;
use trivia_core::model::category_map;
use trivia_core_types::RequestContext;

use crate::commands::responses::CategoriesResponse;
use crate::service::CatalogService;

impl CatalogService {
    /// Map of every category id to its label
    ///
    /// # Errors
    /// * `NotFound` - no categories exist
    /// * storage failures propagate unchanged (reported as 500)
    pub fn list_categories(&self, ctx: &RequestContext) -> ExResult<CategoriesResponse> {
        const OP: &str = "list_categories";
        log_op_start!(OP, request_id = ctx.request_id.as_str());
        let start = Instant::now();

        let result = self.store.list_categories().and_then(|categories| {
            if categories.is_empty() {
                return Err(TriviaError::NoCategories.into());
            }
            Ok(CategoriesResponse {
                success: true,
                categories: category_map(&categories),
            })
        });

        Self::finish(OP, ctx, start, result)
    }
}
