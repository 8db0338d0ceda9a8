use serde::{Deserialize, Serialize};

use crate::errors::{Result, TriviaError};

/// Question - one entry in the trivia bank
///
/// Immutable once stored; the only lifecycle transition after creation is
/// deletion. The serialized form is the "formatted" question returned by
/// every endpoint that emits questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier assigned by the store; never reused
    pub id: i64,

    /// Question text (the only field searched)
    pub question: String,

    /// Answer text
    pub answer: String,

    /// Category reference, stored and compared as text
    pub category: String,

    /// Difficulty score
    pub difficulty: i64,
}

impl Question {
    /// Whether this question belongs to the given category id
    pub fn in_category(&self, category_id: i64) -> bool {
        self.category == category_id.to_string()
    }
}

/// Validated input for inserting a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i64,
}

impl NewQuestion {
    /// Assemble a new question from optional request fields
    ///
    /// All four fields are required. Empty strings are accepted; only absent
    /// (or null) values are rejected.
    ///
    /// # Errors
    /// * `MissingField` - naming the first absent field, checked in the order
    ///   question, answer, category, difficulty
    pub fn from_parts(
        question: Option<String>,
        answer: Option<String>,
        category: Option<String>,
        difficulty: Option<i64>,
    ) -> Result<Self> {
        let question = question.ok_or(TriviaError::MissingField { field: "question" })?;
        let answer = answer.ok_or(TriviaError::MissingField { field: "answer" })?;
        let category = category.ok_or(TriviaError::MissingField { field: "category" })?;
        let difficulty = difficulty.ok_or(TriviaError::MissingField {
            field: "difficulty",
        })?;

        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }

    /// Category reference parsed as a numeric id, if it is one
    pub fn category_id(&self) -> Option<i64> {
        self.category.trim().parse().ok()
    }

    /// Attach the store-assigned id
    pub fn into_question(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts() -> (Option<String>, Option<String>, Option<String>, Option<i64>) {
        (
            Some("What is the capital of Egypt?".to_string()),
            Some("Cairo".to_string()),
            Some("3".to_string()),
            Some(2),
        )
    }

    #[test]
    fn test_from_parts_all_present() {
        let (q, a, c, d) = parts();
        let new = NewQuestion::from_parts(q, a, c, d).unwrap();
        assert_eq!(new.answer, "Cairo");
        assert_eq!(new.category_id(), Some(3));
    }

    #[test]
    fn test_from_parts_reports_each_missing_field() {
        let (q, a, c, d) = parts();
        let cases = [
            (NewQuestion::from_parts(None, a.clone(), c.clone(), d), "question"),
            (NewQuestion::from_parts(q.clone(), None, c.clone(), d), "answer"),
            (NewQuestion::from_parts(q.clone(), a.clone(), None, d), "category"),
            (NewQuestion::from_parts(q, a, c, None), "difficulty"),
        ];
        for (result, field) in cases {
            assert_eq!(result, Err(TriviaError::MissingField { field }));
        }
    }

    #[test]
    fn test_in_category_compares_text_form() {
        let (q, a, c, d) = parts();
        let question = NewQuestion::from_parts(q, a, c, d).unwrap().into_question(5);
        assert!(question.in_category(3));
        assert!(!question.in_category(30));
    }

    #[test]
    fn test_formatted_shape() {
        let question = Question {
            id: 6,
            question: "Q".to_string(),
            answer: "A".to_string(),
            category: "1".to_string(),
            difficulty: 4,
        };
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 6, "question": "Q", "answer": "A", "category": "1", "difficulty": 4})
        );
    }
}
