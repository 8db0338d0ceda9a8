//! Request bodies and query parameters
//!
//! Parsing is lenient where clients are known to vary: category and
//! difficulty may arrive as numbers or numeric strings, and `null` is
//! treated like an absent field.

use serde::Deserialize;
use trivia_core::pagination::PageRequest;
use trivia_engine::{QuestionDraft, QuizRequest};

/// A JSON value sent either as an integer or as a string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntOrText {
    Int(i64),
    Text(String),
}

impl IntOrText {
    /// Text form, as categories are stored
    pub fn into_text(self) -> String {
        match self {
            IntOrText::Int(n) => n.to_string(),
            IntOrText::Text(s) => s,
        }
    }

    /// Integer form; `None` for non-numeric text
    pub fn as_int(&self) -> Option<i64> {
        match self {
            IntOrText::Int(n) => Some(*n),
            IntOrText::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// `?page=N`; anything unparsable means page 1
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_query(self.page.as_deref())
    }
}

/// `POST /questions`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuestionBody {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub category: Option<IntOrText>,
    #[serde(default)]
    pub difficulty: Option<IntOrText>,
}

impl CreateQuestionBody {
    /// Convert to the engine's draft
    ///
    /// # Errors
    /// Returns the field name when `difficulty` is text that is not an integer.
    pub fn into_draft(self) -> Result<QuestionDraft, &'static str> {
        let difficulty = match self.difficulty {
            Some(value) => Some(value.as_int().ok_or("difficulty")?),
            None => None,
        };

        Ok(QuestionDraft {
            question: self.question,
            answer: self.answer,
            category: self.category.map(IntOrText::into_text),
            difficulty,
        })
    }
}

/// `POST /questions/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchBody {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// `POST /quizzes`
///
/// The front end sends `quiz_category: {type, id}`; only `id` matters and
/// `0` selects every category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizBody {
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizCategoryBody {
    #[serde(default)]
    pub id: Option<IntOrText>,
}

impl From<QuizBody> for QuizRequest {
    fn from(body: QuizBody) -> Self {
        QuizRequest {
            previous_questions: body.previous_questions.unwrap_or_default(),
            category_id: body
                .quiz_category
                .and_then(|c| c.id)
                .and_then(|id| id.as_int()),
        }
    }
}
