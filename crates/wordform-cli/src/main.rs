//! wordform CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use wordform_core::SelectionPolicy;

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "wordform", version, about = "English word-form vocabulary trainer")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Form selection policy: priority or rotating (overrides config)
    #[arg(long, global = true)]
    selection: Option<SelectionPolicy>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the quiz interactively
    Quiz {
        /// Page to start on
        #[arg(long, default_value = "1")]
        page: usize,

        /// Catalog TOML file (overrides config)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Show how the catalog is split into pages
    Pages {
        /// Catalog TOML file (overrides config)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Print the questions of a page without grading
    Show {
        /// Page to show
        #[arg(long)]
        page: usize,

        /// Attempt number (changes forms with the rotating policy)
        #[arg(long, default_value = "0")]
        round: u32,

        /// Catalog TOML file (overrides config)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Grade answers for a page non-interactively
    Check {
        /// Page to grade
        #[arg(long)]
        page: usize,

        /// Answers in question order (repeat once per question)
        #[arg(long = "answer")]
        answers: Vec<String>,

        /// Attempt number (changes forms with the rotating policy)
        #[arg(long, default_value = "0")]
        round: u32,

        /// Output format: text, table, json, markdown
        #[arg(long, default_value = "text")]
        format: String,

        /// Exit code 1 unless every answer is correct
        #[arg(long)]
        fail_on_wrong: bool,

        /// Catalog TOML file (overrides config)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Validate a catalog TOML file
    Validate {
        /// Path to catalog file
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Create starter config and example catalog
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordform=warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config;
    let selection = cli.selection;

    let result = match cli.command {
        Commands::Quiz { page, catalog } => {
            commands::quiz::execute(config, page, catalog, selection)
        }
        Commands::Pages { catalog } => commands::pages::execute(config, catalog),
        Commands::Show {
            page,
            round,
            catalog,
        } => commands::show::execute(config, page, round, catalog, selection),
        Commands::Check {
            page,
            answers,
            round,
            format,
            fail_on_wrong,
            catalog,
        } => commands::check::execute(
            config,
            page,
            answers,
            round,
            format,
            fail_on_wrong,
            catalog,
            selection,
        ),
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
