//! Session scoring.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::report::AnswerRecord;

/// Percentage of correct answers, rounded to two decimals.
///
/// Returns `0.0` when nothing was asked.
pub fn percentage(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = 100.0 * correct as f64 / total as f64;
    (raw * 100.0).round() / 100.0
}

/// Final score of a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Questions answered correctly.
    pub correct: usize,
    /// Questions asked.
    pub total: usize,
    /// `100 × correct / total`, two decimals.
    pub percentage: f64,
}

impl ScoreSummary {
    pub fn new(correct: usize, total: usize) -> Self {
        debug_assert!(correct <= total);
        Self {
            correct,
            total,
            percentage: percentage(correct, total),
        }
    }

    /// Tally an answer log.
    pub fn from_answers(answers: &[AnswerRecord]) -> Self {
        let correct = answers.iter().filter(|a| a.is_correct).count();
        Self::new(correct, answers.len())
    }
}

impl fmt::Display for ScoreSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You got {} out of {} correct ({:.2}%)",
            self.correct, self.total, self.percentage
        )
    }
}
