//! Core data model types for termquiz.
//!
//! A deck parses into a [`Pool`] of [`Record`]s; the engine turns one record at
//! a time into a [`QuestionInstance`] with labeled answer options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of answer options offered per question.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Number of wrong answers offered per question.
pub const DISTRACTORS_PER_QUESTION: usize = OPTIONS_PER_QUESTION - 1;

/// A single term/definition pair from a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The prompt shown to the user.
    pub term: String,
    /// The expected answer.
    pub definition: String,
}

impl Record {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// The ordered collection of records available to a session.
///
/// A record's position is its identity; two records may carry the same text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    records: Vec<Record>,
}

impl Pool {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

/// How answer options are labeled for display and input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// `1`, `2`, `3`, `4`
    #[default]
    Numeric,
    /// `A`, `B`, `C`, `D`
    Alpha,
}

impl LabelStyle {
    /// Display label for the option at `position` (0-based).
    pub fn label_for(self, position: usize) -> String {
        match self {
            LabelStyle::Numeric => (position + 1).to_string(),
            LabelStyle::Alpha => {
                let offset = u8::try_from(position % 26).unwrap_or(0);
                char::from(b'A' + offset).to_string()
            }
        }
    }
}

impl fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelStyle::Numeric => write!(f, "numeric"),
            LabelStyle::Alpha => write!(f, "alpha"),
        }
    }
}

impl FromStr for LabelStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "numeric" | "number" | "numbers" => Ok(LabelStyle::Numeric),
            "alpha" | "alphabetic" | "letters" => Ok(LabelStyle::Alpha),
            other => Err(format!("unknown label style: {other}")),
        }
    }
}

/// Which records may supply wrong answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistractorSource {
    /// Any record except the question itself.
    #[default]
    WholePool,
    /// Only records that have not been asked yet this session.
    UnaskedOnly,
}

/// One labeled answer option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: String,
    pub text: String,
}

/// A question ready to present: one record plus its shuffled options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionInstance {
    /// Index of the source record in the pool.
    pub index: usize,
    pub question: String,
    pub correct_answer: String,
    pub options: Vec<AnswerOption>,
}

impl QuestionInstance {
    /// Resolve user input to an offered option. Labels match case-insensitively
    /// and ignore surrounding whitespace.
    pub fn option_for(&self, input: &str) -> Option<&AnswerOption> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        self.options
            .iter()
            .find(|o| o.label.eq_ignore_ascii_case(input))
    }

    /// Whether the given option text is the correct answer.
    pub fn is_correct(&self, text: &str) -> bool {
        self.correct_answer == text
    }
}
