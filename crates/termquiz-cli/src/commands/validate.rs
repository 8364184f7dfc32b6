//! The `termquiz validate` command.

use std::path::PathBuf;

use anyhow::Result;

use termquiz_core::config::load_config_from;
use termquiz_core::parser::{validate_pool, SkipReason};

use crate::deck;

pub fn execute(deck_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;
    if deck_path.is_some() {
        config.deck = deck_path;
    }

    let deck = deck::load(&config)?;
    let pool = &deck.parsed.pool;
    println!("Deck: {} ({} records)", deck.source, pool.len());

    for fragment in &deck.parsed.skipped {
        let reason = match fragment.reason {
            SkipReason::MissingFieldDelimiter => "no field delimiter",
            SkipReason::EmptyTerm => "empty term",
            SkipReason::EmptyDefinition => "empty definition",
        };
        println!(
            "  [fragment {}] SKIPPED ({reason}): {}",
            fragment.position, fragment.text
        );
    }

    let warnings = validate_pool(pool);
    for w in &warnings {
        let prefix = w
            .index
            .map(|i| format!("  [record {i}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    let total = warnings.len() + deck.parsed.skipped.len();
    if total == 0 {
        println!("Deck valid.");
    } else {
        println!("\n{total} warning(s) found.");
    }

    Ok(())
}
