//! Response bodies
//!
//! Field names follow the public JSON contract (`totalQuestions`,
//! `currentCategory`); every body carries `success: true`.

use serde::Serialize;
use trivia_core::model::{CategoryMap, Question};

/// `GET /categories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// One page of questions (all, by category, or search)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPage {
    pub success: bool,
    pub questions: Vec<Question>,

    /// Unfiltered total, whatever the listing's filter
    pub total_questions: u64,

    /// Only the all-questions listing includes the category map
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,

    /// `null` for listings spanning several categories
    pub current_category: Option<i64>,
}

/// `POST /questions`
///
/// Echoes the stored field values. The assigned id is kept for callers but
/// is not part of the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedQuestion {
    pub success: bool,
    #[serde(skip)]
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: String,
}

impl From<Question> for CreatedQuestion {
    fn from(q: Question) -> Self {
        Self {
            success: true,
            id: q.id,
            question: q.question,
            answer: q.answer,
            difficulty: q.difficulty,
            category: q.category,
        }
    }
}

/// `DELETE /questions/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletedQuestion {
    pub success: bool,
    pub deleted: i64,
}

/// `POST /quizzes`; `question` is `null` once the quiz is complete
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}
