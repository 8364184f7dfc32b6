//! Delimited deck parser.
//!
//! Decks are flat text: records are separated by a record delimiter and the
//! term/definition inside a record by a field delimiter. Fragments that do not
//! form a complete pair are discarded and reported, never raised.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{Pool, Record, OPTIONS_PER_QUESTION};

pub const DEFAULT_RECORD_DELIMITER: &str = "{-line_break-}";
pub const DEFAULT_FIELD_DELIMITER: &str = "{-tab-}";

/// The two tokens that structure a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiters {
    #[serde(default = "default_record_delimiter")]
    pub record: String,
    #[serde(default = "default_field_delimiter")]
    pub field: String,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            record: default_record_delimiter(),
            field: default_field_delimiter(),
        }
    }
}

fn default_record_delimiter() -> String {
    DEFAULT_RECORD_DELIMITER.to_string()
}

fn default_field_delimiter() -> String {
    DEFAULT_FIELD_DELIMITER.to_string()
}

/// Why a fragment was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingFieldDelimiter,
    EmptyTerm,
    EmptyDefinition,
}

/// A fragment of the source text that did not become a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFragment {
    /// 0-based position of the fragment among all record-delimited fragments.
    pub position: usize,
    pub text: String,
    pub reason: SkipReason,
}

/// Result of parsing a deck: the usable records plus what was dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDeck {
    pub pool: Pool,
    pub skipped: Vec<SkippedFragment>,
}

/// Parse deck text into records.
///
/// Each fragment is split once on the field delimiter, so a definition may
/// itself contain the field delimiter. Term and definition are trimmed.
/// Whitespace-only fragments are ignored without being reported.
pub fn parse_deck_str(content: &str, delimiters: &Delimiters) -> ParsedDeck {
    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for (position, fragment) in content.split(delimiters.record.as_str()).enumerate() {
        if fragment.trim().is_empty() {
            continue;
        }

        let reason = match fragment.split_once(delimiters.field.as_str()) {
            Some((term, definition)) => {
                let (term, definition) = (term.trim(), definition.trim());
                if term.is_empty() {
                    SkipReason::EmptyTerm
                } else if definition.is_empty() {
                    SkipReason::EmptyDefinition
                } else {
                    records.push(Record::new(term, definition));
                    continue;
                }
            }
            None => SkipReason::MissingFieldDelimiter,
        };

        tracing::debug!(position, ?reason, "skipping deck fragment");
        skipped.push(SkippedFragment {
            position,
            text: fragment.trim().to_string(),
            reason,
        });
    }

    ParsedDeck {
        pool: Pool::new(records),
        skipped,
    }
}

/// Read and parse a deck file.
pub fn load_deck(path: &Path, delimiters: &Delimiters) -> Result<ParsedDeck> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read deck file: {}", path.display()))?;

    Ok(parse_deck_str(&content, delimiters))
}

/// A warning from pool validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The record index (if applicable).
    pub index: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a pool for issues that would degrade or break a session.
pub fn validate_pool(pool: &Pool) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if pool.is_empty() {
        warnings.push(ValidationWarning {
            index: None,
            message: "deck contains no records".into(),
        });
        return warnings;
    }

    // Duplicate terms produce indistinguishable questions
    let mut seen_terms = HashSet::new();
    for (index, record) in pool.iter().enumerate() {
        if !seen_terms.insert(record.term.as_str()) {
            warnings.push(ValidationWarning {
                index: Some(index),
                message: format!("duplicate term: {}", record.term),
            });
        }
    }

    let distinct_definitions: HashSet<&str> =
        pool.iter().map(|r| r.definition.as_str()).collect();
    if distinct_definitions.len() < OPTIONS_PER_QUESTION {
        warnings.push(ValidationWarning {
            index: None,
            message: format!(
                "only {} distinct definitions; at least {} are needed to build a question",
                distinct_definitions.len(),
                OPTIONS_PER_QUESTION
            ),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOUR_PAIRS: &str = "Q1{-tab-}A1{-line_break-}Q2{-tab-}A2{-line_break-}Q3{-tab-}A3{-line_break-}Q4{-tab-}A4{-line_break-}";

    #[test]
    fn parse_four_pairs() {
        let deck = parse_deck_str(FOUR_PAIRS, &Delimiters::default());
        assert_eq!(deck.pool.len(), 4);
        assert!(deck.skipped.is_empty());
        assert_eq!(deck.pool.get(0), Some(&Record::new("Q1", "A1")));
        assert_eq!(deck.pool.get(3), Some(&Record::new("Q4", "A4")));
    }

    #[test]
    fn parsing_is_repeatable() {
        let first = parse_deck_str(FOUR_PAIRS, &Delimiters::default());
        let second = parse_deck_str(FOUR_PAIRS, &Delimiters::default());
        assert_eq!(first, second);
    }

    #[test]
    fn orphan_fragment_is_dropped() {
        let raw = format!("{FOUR_PAIRS}orphan text");
        let deck = parse_deck_str(&raw, &Delimiters::default());
        assert_eq!(deck.pool.len(), 4);
        assert_eq!(deck.skipped.len(), 1);
        assert_eq!(deck.skipped[0].text, "orphan text");
        assert_eq!(deck.skipped[0].reason, SkipReason::MissingFieldDelimiter);
        assert_eq!(deck.skipped[0].position, 4);
    }

    #[test]
    fn empty_halves_are_dropped() {
        let raw = "{-tab-}lonely answer{-line_break-}lonely term{-tab-}  {-line_break-}T{-tab-}D";
        let deck = parse_deck_str(raw, &Delimiters::default());
        assert_eq!(deck.pool.len(), 1);
        let reasons: Vec<_> = deck.skipped.iter().map(|s| s.reason).collect();
        assert_eq!(reasons, [SkipReason::EmptyTerm, SkipReason::EmptyDefinition]);
    }

    #[test]
    fn definition_keeps_extra_field_delimiters() {
        let deck = parse_deck_str("T{-tab-}a{-tab-}b", &Delimiters::default());
        assert_eq!(deck.pool.get(0).unwrap().definition, "a{-tab-}b");
    }

    #[test]
    fn custom_delimiters_and_trimming() {
        let delimiters = Delimiters {
            record: "\n".into(),
            field: "\t".into(),
        };
        let deck = parse_deck_str("  alpha\tfirst letter \nbeta\tsecond\n\n", &delimiters);
        assert_eq!(deck.pool.len(), 2);
        assert_eq!(deck.pool.get(0), Some(&Record::new("alpha", "first letter")));
    }

    #[test]
    fn load_deck_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.txt");
        std::fs::write(&path, FOUR_PAIRS).unwrap();

        let deck = load_deck(&path, &Delimiters::default()).unwrap();
        assert_eq!(deck.pool.len(), 4);
    }

    #[test]
    fn load_missing_deck_fails_with_path() {
        let err = load_deck(Path::new("no/such/deck.txt"), &Delimiters::default()).unwrap_err();
        assert!(format!("{err:#}").contains("no/such/deck.txt"));
    }

    #[test]
    fn validate_flags_small_and_duplicate_decks() {
        let pool = Pool::new(vec![
            Record::new("T", "same"),
            Record::new("T", "same"),
            Record::new("U", "other"),
        ]);
        let warnings = validate_pool(&pool);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate term")));
        assert!(warnings.iter().any(|w| w.message.contains("only 2 distinct")));

        let empty = validate_pool(&Pool::default());
        assert_eq!(empty.len(), 1);
        assert!(empty[0].message.contains("no records"));
    }

    #[test]
    fn validate_accepts_four_distinct() {
        let deck = parse_deck_str(FOUR_PAIRS, &Delimiters::default());
        assert!(validate_pool(&deck.pool).is_empty());
    }
}
