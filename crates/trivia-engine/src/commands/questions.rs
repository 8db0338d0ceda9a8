//! Question listing, search, create and delete

#![allow(clippy::result_large_err)]

use std::time::Instant;

use trivia_core::errors::{ExErrorKind, ExResult, TriviaError};
use trivia_core::log_op_start;
use trivia_core::model::{category_map, NewQuestion, Question};
use trivia_core::pagination::{paginate, PageRequest};
use trivia_core::query::QuestionFilter;
use trivia_core_types::RequestContext;

use crate::commands::requests::QuestionDraft;
use crate::commands::responses::{CreatedQuestion, DeletedQuestion, QuestionPage};
use crate::service::{reclassify, CatalogService};

impl CatalogService {
    /// One page of every question, with the category map
    ///
    /// # Errors
    /// * `NotFound` - the page is beyond the data (or below 1)
    /// * storage failures propagate unchanged (reported as 500)
    pub fn list_questions(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> ExResult<QuestionPage> {
        const OP: &str = "list_questions";
        log_op_start!(OP, request_id = ctx.request_id.as_str(), page = page.number());
        let start = Instant::now();

        let result = self.list_questions_page(page);

        Self::finish(OP, ctx, start, result)
    }

    fn list_questions_page(&self, page: PageRequest) -> ExResult<QuestionPage> {
        let all = self.store.list_questions(&QuestionFilter::All)?;
        let questions = self.required_page(&all, page)?;
        let categories = self.store.list_categories()?;

        Ok(QuestionPage {
            success: true,
            questions,
            total_questions: self.store.count_questions()?,
            categories: Some(category_map(&categories)),
            current_category: None,
        })
    }

    /// One page of the questions filed under `category_id`
    ///
    /// `totalQuestions` is the unfiltered count.
    ///
    /// # Errors
    /// * `NotFound` - no question on that page, or any storage failure
    pub fn questions_by_category(
        &self,
        ctx: &RequestContext,
        category_id: i64,
        page: PageRequest,
    ) -> ExResult<QuestionPage> {
        const OP: &str = "questions_by_category";
        log_op_start!(
            OP,
            request_id = ctx.request_id.as_str(),
            category_id = category_id,
            page = page.number()
        );
        let start = Instant::now();

        let result = self
            .category_page(category_id, page)
            .map_err(|e| reclassify(e, ExErrorKind::NotFound, OP));

        Self::finish(OP, ctx, start, result)
    }

    fn category_page(&self, category_id: i64, page: PageRequest) -> ExResult<QuestionPage> {
        let selection = self
            .store
            .list_questions(&QuestionFilter::Category(category_id))?;
        let questions = self.required_page(&selection, page)?;

        Ok(QuestionPage {
            success: true,
            questions,
            total_questions: self.store.count_questions()?,
            categories: None,
            current_category: Some(category_id),
        })
    }

    /// One page of questions whose text contains `term`, case-insensitively
    ///
    /// No match is a successful empty page. An absent term matches all.
    ///
    /// # Errors
    /// * `Unprocessable` - any storage failure
    pub fn search_questions(
        &self,
        ctx: &RequestContext,
        term: Option<&str>,
        page: PageRequest,
    ) -> ExResult<QuestionPage> {
        const OP: &str = "search_questions";
        log_op_start!(
            OP,
            request_id = ctx.request_id.as_str(),
            term_len = term.map_or(0, str::len),
            page = page.number()
        );
        let start = Instant::now();

        let result = self
            .search_page(term, page)
            .map_err(|e| reclassify(e, ExErrorKind::Unprocessable, OP));

        Self::finish(OP, ctx, start, result)
    }

    fn search_page(&self, term: Option<&str>, page: PageRequest) -> ExResult<QuestionPage> {
        let hits = self.store.list_questions(&QuestionFilter::search(term))?;

        Ok(QuestionPage {
            success: true,
            questions: paginate(&hits, page, self.config.page_size).to_vec(),
            total_questions: self.store.count_questions()?,
            categories: None,
            current_category: None,
        })
    }

    /// Store a new question
    ///
    /// # Errors
    /// * `Unprocessable` - a field is missing, the category is unknown (only
    ///   when `validate_category_on_create` is set), or the insert failed
    pub fn create_question(
        &self,
        ctx: &RequestContext,
        draft: QuestionDraft,
    ) -> ExResult<CreatedQuestion> {
        const OP: &str = "create_question";
        log_op_start!(OP, request_id = ctx.request_id.as_str());
        let start = Instant::now();

        let result = self
            .insert_draft(draft)
            .map(CreatedQuestion::from)
            .map_err(|e| reclassify(e, ExErrorKind::Unprocessable, OP));

        Self::finish(OP, ctx, start, result)
    }

    fn insert_draft(&self, draft: QuestionDraft) -> ExResult<Question> {
        let new = NewQuestion::from_parts(
            draft.question,
            draft.answer,
            draft.category,
            draft.difficulty,
        )?;

        if self.config.validate_category_on_create {
            let known = match new.category_id() {
                Some(id) => self.store.category_exists(id)?,
                None => false,
            };
            if !known {
                return Err(TriviaError::InvalidCategory {
                    category: new.category.clone(),
                }
                .into());
            }
        }

        let created = self.store.insert_question(&new)?;
        tracing::debug!(question_id = created.id, "question stored");
        Ok(created)
    }

    /// Remove a question and report its id
    ///
    /// # Errors
    /// * `NotFound` - no question has that id
    /// * `Unprocessable` - lookup or removal failed
    pub fn delete_question(
        &self,
        ctx: &RequestContext,
        question_id: i64,
    ) -> ExResult<DeletedQuestion> {
        const OP: &str = "delete_question";
        log_op_start!(
            OP,
            request_id = ctx.request_id.as_str(),
            question_id = question_id
        );
        let start = Instant::now();

        let result = self.remove(question_id).map_err(|e| match e.kind() {
            ExErrorKind::NotFound => e.with_op(OP),
            _ => reclassify(e, ExErrorKind::Unprocessable, OP),
        });

        Self::finish(OP, ctx, start, result)
    }

    fn remove(&self, question_id: i64) -> ExResult<DeletedQuestion> {
        if self.store.get_question(question_id)?.is_none() {
            return Err(TriviaError::QuestionNotFound { question_id }.into());
        }
        // A concurrent delete may win between lookup and removal
        if !self.store.delete_question(question_id)? {
            return Err(TriviaError::QuestionNotFound { question_id }.into());
        }

        Ok(DeletedQuestion {
            success: true,
            deleted: question_id,
        })
    }

    /// Slice a listing page; an empty page is `NotFound`
    fn required_page(&self, items: &[Question], page: PageRequest) -> ExResult<Vec<Question>> {
        let slice = paginate(items, page, self.config.page_size);
        if slice.is_empty() {
            return Err(TriviaError::PageOutOfRange {
                page: page.number(),
            }
            .into());
        }
        Ok(slice.to_vec())
    }
}
