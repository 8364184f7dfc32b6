//! termquiz CLI — multiple-choice quizzes from term/definition decks.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod console;
mod deck;

use commands::run::RunArgs;

#[derive(Parser)]
#[command(
    name = "termquiz",
    version,
    about = "Multiple-choice quizzes from term/definition decks"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Take a quiz (the default when no command is given)
    Run(RunArgs),

    /// Parse a deck and report dropped fragments and problems
    Validate {
        /// Deck file (default: built-in deck)
        #[arg(long)]
        deck: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example deck
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("termquiz=warn".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::run::execute(RunArgs::default()).await,
        Some(Commands::Run(args)) => commands::run::execute(args).await,
        Some(Commands::Validate { deck, config }) => commands::validate::execute(deck, config),
        Some(Commands::Init) => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
