//! Query Resolver: the three question predicates

use crate::model::Question;

/// Filter applied to the question collection
///
/// Every mode resolves to a collection ordered by ascending id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionFilter {
    /// Full scan
    All,
    /// Category reference equals the id's text form
    Category(i64),
    /// Case-insensitive substring of the question text (answers are not searched)
    TextContains(String),
}

impl QuestionFilter {
    /// Search filter for an optional term; absent means "match everything"
    pub fn search(term: Option<&str>) -> Self {
        QuestionFilter::TextContains(term.unwrap_or_default().to_string())
    }

    /// Quiz scope: the sentinel id widens to every question
    pub fn quiz_scope(category_id: i64, all_categories_id: i64) -> Self {
        if category_id == all_categories_id {
            QuestionFilter::All
        } else {
            QuestionFilter::Category(category_id)
        }
    }

    /// Category value in its stored (text) representation
    pub fn category_text(&self) -> Option<String> {
        match self {
            QuestionFilter::Category(id) => Some(id.to_string()),
            _ => None,
        }
    }

    /// Evaluate the predicate against one question
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            QuestionFilter::All => true,
            QuestionFilter::Category(id) => question.in_category(*id),
            QuestionFilter::TextContains(term) => question
                .question
                .to_lowercase()
                .contains(&term.to_lowercase()),
        }
    }
}
