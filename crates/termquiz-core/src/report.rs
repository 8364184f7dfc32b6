//! End-of-session summary.
//!
//! The summary lives only as long as the process; it is printed as text or
//! JSON and then dropped.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::statistics::ScoreSummary;

/// How one question was answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// 1-based position of the question in the session.
    pub ordinal: usize,
    /// Index of the source record in the pool.
    pub index: usize,
    pub question: String,
    /// Text of the option the user picked.
    pub chosen: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// A finished session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique session identifier.
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Questions the user asked for.
    pub requested: usize,
    /// Records available in the deck.
    pub pool_size: usize,
    pub score: ScoreSummary,
    /// Every answered question in the order asked.
    pub answers: Vec<AnswerRecord>,
}

impl SessionReport {
    /// Answers that were wrong, in the order asked.
    pub fn missed(&self) -> impl Iterator<Item = &AnswerRecord> {
        self.answers.iter().filter(|a| !a.is_correct)
    }

    /// Pretty-printed JSON form of the report.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize session report")
    }
}
