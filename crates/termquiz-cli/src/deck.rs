//! Deck resolution: an explicit file, or the deck built into the binary.

use anyhow::Result;

use termquiz_core::config::QuizConfig;
use termquiz_core::parser::{self, ParsedDeck};

/// Deck used when neither `--deck` nor the config names one.
pub const BUILTIN_DECK: &str = include_str!("../../../decks/problem-solving.txt");

/// A parsed deck plus where it came from.
pub struct LoadedDeck {
    /// Display name of the source.
    pub source: String,
    pub parsed: ParsedDeck,
}

/// Load the deck named by `config`, falling back to the built-in deck.
pub fn load(config: &QuizConfig) -> Result<LoadedDeck> {
    let delimiters = config.delimiters();
    let deck = match &config.deck {
        Some(path) => LoadedDeck {
            source: path.display().to_string(),
            parsed: parser::load_deck(path, &delimiters)?,
        },
        None => LoadedDeck {
            source: "built-in deck".to_string(),
            parsed: parser::parse_deck_str(BUILTIN_DECK, &delimiters),
        },
    };

    tracing::debug!(
        source = %deck.source,
        records = deck.parsed.pool.len(),
        skipped = deck.parsed.skipped.len(),
        "loaded deck"
    );
    Ok(deck)
}
