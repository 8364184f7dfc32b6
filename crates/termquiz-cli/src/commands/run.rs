//! The `termquiz run` command (also the default when no command is given).

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use termquiz_core::config::{load_config_from, QuizConfig};
use termquiz_core::engine::{EngineConfig, QuizEngine};
use termquiz_core::model::LabelStyle;
use termquiz_core::report::SessionReport;
use termquiz_core::QuizError;
use termquiz_probe::{connectivity_warning, HttpProbe};

use crate::console::ConsoleIo;
use crate::deck;

/// How the final summary is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Score line and review table on stdout
    #[default]
    Text,
    /// JSON summary on stdout; the quiz itself is shown on stderr
    Json,
}

#[derive(Debug, Default, Args)]
pub struct RunArgs {
    /// Deck file of term/definition pairs (default: built-in deck)
    #[arg(long)]
    pub deck: Option<PathBuf>,

    /// Number of questions (clamped to the deck size)
    #[arg(long)]
    pub count: Option<usize>,

    /// Seed for a reproducible question order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Answer labels: numeric or alpha
    #[arg(long)]
    pub labels: Option<LabelStyle>,

    /// Summary format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Skip the connectivity check
    #[arg(long)]
    pub no_probe: bool,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Merge command-line overrides into the loaded config.
fn apply_overrides(config: &mut QuizConfig, args: &RunArgs) -> Result<()> {
    if let Some(count) = args.count {
        anyhow::ensure!(count >= 1, "count must be at least 1");
        config.question_count = count;
    }
    if let Some(labels) = args.labels {
        config.label_style = labels;
    }
    if let Some(deck) = &args.deck {
        config.deck = Some(deck.clone());
    }
    if args.no_probe {
        config.probe.enabled = false;
    }
    Ok(())
}

pub async fn execute(args: RunArgs) -> Result<()> {
    let mut config = load_config_from(args.config.as_deref())?;
    apply_overrides(&mut config, &args)?;

    let deck = deck::load(&config)?;
    anyhow::ensure!(
        !deck.parsed.pool.is_empty(),
        "{} contains no records",
        deck.source
    );

    if config.probe.enabled {
        match HttpProbe::from_config(&config.probe) {
            Ok(probe) => {
                if let Some(warning) = connectivity_warning(&probe).await {
                    eprintln!("{warning}");
                }
            }
            Err(e) => tracing::warn!("skipping connectivity check: {e:#}"),
        }
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let engine = QuizEngine::new(deck.parsed.pool, EngineConfig::from(&config));
    let stdin = io::stdin();

    let result = match args.format {
        OutputFormat::Text => {
            let mut console = ConsoleIo::new(stdin.lock(), io::stdout(), config.label_style);
            engine.run(&mut console, &mut rng)
        }
        OutputFormat::Json => {
            let mut console = ConsoleIo::new(stdin.lock(), io::stderr(), config.label_style);
            engine.run(&mut console, &mut rng)
        }
    };

    let report = result.map_err(|e| {
        let hint = e
            .downcast_ref::<QuizError>()
            .is_some_and(QuizError::is_pool_defect);
        if hint {
            e.context(format!(
                "{} cannot supply a full set of answers; run `termquiz validate` for details",
                deck.source
            ))
        } else {
            e
        }
    })?;

    match args.format {
        OutputFormat::Text => print_summary(&report)?,
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}

fn print_summary(report: &SessionReport) -> Result<()> {
    use comfy_table::{Cell, Table};

    let mut out = io::stdout().lock();
    writeln!(out)?;

    if report.missed().next().is_some() {
        let mut table = Table::new();
        table.set_header(vec!["#", "Question", "Your answer", "Correct answer"]);
        for answer in report.missed() {
            table.add_row(vec![
                Cell::new(answer.ordinal),
                Cell::new(&answer.question),
                Cell::new(&answer.chosen),
                Cell::new(&answer.correct_answer),
            ]);
        }
        writeln!(out, "Review:\n{table}\n")?;
    }

    writeln!(out, "{}", report.score)?;
    Ok(())
}
