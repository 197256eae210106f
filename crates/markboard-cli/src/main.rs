//! markboard CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "markboard",
    version,
    about = "Grade entry and descriptive statistics toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Score input and threshold flags shared by the analysis commands.
#[derive(Args, Clone)]
struct ScoreArgs {
    /// Plus-separated score expression, e.g. "85+90.5+77"
    #[arg(long)]
    scores: Option<String>,

    /// File with one score expression per line
    #[arg(long)]
    file: Option<PathBuf>,

    /// Passing cutoff (overrides config)
    #[arg(long)]
    passing: Option<f64>,

    /// Excellence cutoff (overrides config)
    #[arg(long)]
    excellent: Option<f64>,

    /// Maximum accepted score (overrides config)
    #[arg(long)]
    max_score: Option<f64>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print statistics for a set of scores
    Analyze {
        #[command(flatten)]
        input: ScoreArgs,

        /// Write the analysis as a JSON report
        #[arg(long)]
        json: Option<PathBuf>,

        /// Write the analysis as a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Also request an AI teaching analysis
        #[arg(long)]
        ai: bool,

        /// Model to use for the AI analysis
        #[arg(long)]
        model: Option<String>,
    },

    /// Export statistics as a CSV file
    Export {
        #[command(flatten)]
        input: ScoreArgs,

        /// Output path (default: dated file in the configured output dir)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Request an AI teaching analysis
    Advise {
        #[command(flatten)]
        input: ScoreArgs,

        /// Print the prompt instead of calling the advisor
        #[arg(long)]
        prompt_only: bool,

        /// Model to use
        #[arg(long)]
        model: Option<String>,
    },

    /// Check a score file and report what would be kept or dropped
    Validate {
        #[command(flatten)]
        input: ScoreArgs,
    },

    /// Create a starter markboard.toml
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("markboard=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            input,
            json,
            csv,
            ai,
            model,
        } => commands::analyze::execute(input, json, csv, ai, model).await,
        Commands::Export { input, output } => commands::export::execute(input, output),
        Commands::Advise {
            input,
            prompt_only,
            model,
        } => commands::advise::execute(input, prompt_only, model).await,
        Commands::Validate { input } => commands::validate::execute(input),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
