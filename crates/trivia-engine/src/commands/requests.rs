//! Decoded request inputs
//!
//! The HTTP layer owns wire-format leniency (numbers sent as strings,
//! nulls); these types carry what it could make of the body.

/// Body of a create-question request; any field may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<i64>,
}

/// One quiz round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizRequest {
    /// Question ids already shown in this quiz
    pub previous_questions: Vec<i64>,

    /// Scope of the quiz; `None` when the body carried no usable category id
    pub category_id: Option<i64>,
}
