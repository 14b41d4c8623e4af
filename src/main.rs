//! sense-eval CLI
//!
//! Computes per-experiment accuracy scores from a `.tsv` file of embedding
//! comparison results.
//!
//! ```bash
//! sense-eval --file results_bert.tsv --type transformers --output scores.txt
//! sense-eval -f results_ft.tsv -t fasttext -o scores.json --format json
//! ```
//!
//! Logging goes to stderr; set `RUST_LOG` to override the level.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sense_eval::{EvalConfig, Mode, OutputFormat};

/// Output format for CLI
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum FormatArg {
    /// Plain text tables
    #[default]
    Text,
    /// JSON array of strategy reports
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

#[derive(Parser)]
#[command(name = "sense-eval")]
#[command(
    about = "Computes accuracy scores given a .tsv file storing embeddings comparison results"
)]
#[command(version)]
struct Cli {
    /// Name of the .tsv file storing the results of the embeddings comparison
    #[arg(short, long)]
    file: PathBuf,

    /// Type of comparison results being evaluated: transformers or fasttext
    #[arg(short = 't', long = "type", value_parser = Mode::from_str)]
    mode: Mode,

    /// Path to the file where the output evaluation should be stored
    #[arg(short, long)]
    output: PathBuf,

    /// Strategy column to score instead of the mode's defaults (repeatable)
    #[arg(short, long = "column")]
    columns: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: FormatArg,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = EvalConfig::builder(cli.file, cli.mode, cli.output)
        .columns(cli.columns)
        .format(cli.format.into())
        .build();

    sense_eval::run(&config)
        .with_context(|| format!("Evaluation of {} failed", config.input().display()))?;

    Ok(())
}
