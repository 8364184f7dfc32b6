//! termquiz configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{DistractorSource, LabelStyle};
use crate::parser::Delimiters;

/// Default number of questions per session.
pub const DEFAULT_QUESTION_COUNT: usize = 10;

/// Connectivity probe settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Whether to run the probe before the quiz.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Host to probe.
    #[serde(default = "default_probe_url")]
    pub url: String,
    /// Give up after this many milliseconds.
    #[serde(default = "default_probe_timeout")]
    pub timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: default_probe_url(),
            timeout_ms: default_probe_timeout(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_probe_url() -> String {
    "https://www.google.com".to_string()
}
fn default_probe_timeout() -> u64 {
    3000
}

/// Top-level termquiz configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Questions to ask per session (clamped to the deck size).
    #[serde(default = "default_question_count")]
    pub question_count: usize,
    /// Deck to load instead of the built-in one.
    #[serde(default)]
    pub deck: Option<PathBuf>,
    /// Token separating records in a deck.
    #[serde(default = "default_record_delimiter")]
    pub record_delimiter: String,
    /// Token separating term from definition inside a record.
    #[serde(default = "default_field_delimiter")]
    pub field_delimiter: String,
    /// How answer options are labeled.
    #[serde(default)]
    pub label_style: LabelStyle,
    /// Which records may supply wrong answers.
    #[serde(default)]
    pub distractor_source: DistractorSource,
    /// Connectivity probe settings.
    #[serde(default)]
    pub probe: ProbeConfig,
}

fn default_record_delimiter() -> String {
    Delimiters::default().record
}
fn default_field_delimiter() -> String {
    Delimiters::default().field
}

impl QuizConfig {
    /// The deck delimiters as a parser argument.
    pub fn delimiters(&self) -> Delimiters {
        Delimiters {
            record: self.record_delimiter.clone(),
            field: self.field_delimiter.clone(),
        }
    }
}

fn default_question_count() -> usize {
    DEFAULT_QUESTION_COUNT
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_count: default_question_count(),
            deck: None,
            record_delimiter: default_record_delimiter(),
            field_delimiter: default_field_delimiter(),
            label_style: LabelStyle::default(),
            distractor_source: DistractorSource::default(),
            probe: ProbeConfig::default(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when `path` is `None`:
/// 1. `termquiz.toml` in the current directory
/// 2. `~/.config/termquiz/config.toml`
///
/// Environment variable overrides: `TERMQUIZ_PROBE_URL`, `TERMQUIZ_NO_PROBE`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("termquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizConfig::default(),
    };

    if let Ok(url) = std::env::var("TERMQUIZ_PROBE_URL") {
        config.probe.url = url;
    }
    if std::env::var_os("TERMQUIZ_NO_PROBE").is_some() {
        config.probe.enabled = false;
    }

    Ok(config)
}

/// Parse a TOML string into a `QuizConfig`, resolving `${VAR}` references.
pub fn parse_config_str(content: &str) -> Result<QuizConfig> {
    let mut config: QuizConfig = toml::from_str(content)?;

    config.probe.url = resolve_env_vars(&config.probe.url);
    config.deck = config
        .deck
        .map(|p| PathBuf::from(resolve_env_vars(&p.to_string_lossy())));

    if config.question_count == 0 {
        tracing::warn!(
            "question_count = 0 in config, using default of {}",
            DEFAULT_QUESTION_COUNT
        );
        config.question_count = DEFAULT_QUESTION_COUNT;
    }
    anyhow::ensure!(
        !config.record_delimiter.is_empty() && !config.field_delimiter.is_empty(),
        "delimiters must not be empty"
    );

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("termquiz"))
}
