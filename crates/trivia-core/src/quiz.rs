//! Quiz Selector
//!
//! Given the candidate pool for a category scope and the ids the player has
//! already seen, draw one unseen question at random or report that the quiz
//! is complete. The service keeps no session; callers carry
//! `previous_questions` between rounds.

use std::collections::HashSet;

use crate::errors::{Result, TriviaError};
use crate::model::Question;
use crate::random::RandomSource;

/// Terminal state of one quiz round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    /// An unseen question drawn uniformly from the pool
    Question(Question),
    /// Every candidate has been seen
    Complete,
}

impl QuizOutcome {
    pub fn into_question(self) -> Option<Question> {
        match self {
            QuizOutcome::Question(q) => Some(q),
            QuizOutcome::Complete => None,
        }
    }
}

/// Draw the next quiz question from `pool`
///
/// # Errors
/// * `EmptyCandidatePool` - the scope holds no questions at all (unknown
///   and empty categories are not distinguished)
pub fn next_question(
    pool: Vec<Question>,
    previous_questions: &[i64],
    category_id: i64,
    rng: &dyn RandomSource,
) -> Result<QuizOutcome> {
    if pool.is_empty() {
        return Err(TriviaError::EmptyCandidatePool { category_id });
    }

    let seen: HashSet<i64> = previous_questions.iter().copied().collect();
    let mut unseen: Vec<Question> = pool.into_iter().filter(|q| !seen.contains(&q.id)).collect();

    tracing::debug!(unseen_len = unseen.len(), "quiz pool filtered");

    if unseen.is_empty() {
        return Ok(QuizOutcome::Complete);
    }

    let index = rng.pick_index(unseen.len());
    Ok(QuizOutcome::Question(unseen.swap_remove(index)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRandom;

    fn q(id: i64, category: &str) -> Question {
        Question {
            id,
            question: format!("Question {}", id),
            answer: "answer".to_string(),
            category: category.to_string(),
            difficulty: 1,
        }
    }

    #[test]
    fn test_returns_only_unseen_question() {
        let pool = vec![q(5, "1"), q(6, "1")];
        let outcome = next_question(pool, &[5], 1, &SeededRandom::new(1)).unwrap();
        assert_eq!(outcome.into_question().map(|q| q.id), Some(6));
    }

    #[test]
    fn test_complete_when_everything_seen() {
        let pool = vec![q(5, "1"), q(6, "1")];
        let outcome = next_question(pool, &[5, 6], 1, &SeededRandom::new(1)).unwrap();
        assert_eq!(outcome, QuizOutcome::Complete);
    }

    #[test]
    fn test_empty_pool_is_an_error() {
        let result = next_question(Vec::new(), &[], 9, &SeededRandom::new(1));
        assert_eq!(result, Err(TriviaError::EmptyCandidatePool { category_id: 9 }));
    }

    #[test]
    fn test_previous_ids_outside_pool_are_ignored() {
        let pool = vec![q(1, "2")];
        let outcome = next_question(pool, &[99, 100], 2, &SeededRandom::new(3)).unwrap();
        assert_eq!(outcome.into_question().map(|q| q.id), Some(1));
    }
}
