//! Quiz engine error types.
//!
//! These represent the conditions the engine surfaces to its caller instead of
//! recovering locally. Invalid user input and malformed deck fragments are
//! recovered inside the engine and the parser and never show up here.

use thiserror::Error;

/// Errors that can occur while building or administering a quiz.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// Every record in the pool has already been used this session.
    #[error("record pool exhausted: all {pool_len} records have been used")]
    ExhaustedPool { pool_len: usize },

    /// Not enough distinct definition texts to fill the wrong-answer slots.
    #[error(
        "insufficient distinct distractors for record {index}: \
         need {needed}, only {available} available"
    )]
    InsufficientDistractors {
        index: usize,
        needed: usize,
        available: usize,
    },

    /// A record index outside the pool was requested.
    #[error("record index {index} out of range for pool of {pool_len}")]
    IndexOutOfRange { index: usize, pool_len: usize },

    /// The response source closed before the session finished.
    #[error("input closed after {asked} of {target} questions")]
    InputClosed { asked: usize, target: usize },
}

impl QuizError {
    /// Returns `true` if retrying with the same pool can never succeed.
    pub fn is_pool_defect(&self) -> bool {
        matches!(
            self,
            QuizError::InsufficientDistractors { .. } | QuizError::IndexOutOfRange { .. }
        )
    }
}
