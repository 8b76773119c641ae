use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

use pirates_cli::batch::{BatchReport, BatchRunner};
use pirates_cli::config::{CliConfig, OutputFormat};
use pirates_cli::logging::init_logging;
use pirates_core::model::round::Round;
use pirates_core::rules;

/// Decide who takes a round of pirate cards.
#[derive(Debug, Parser)]
#[command(
    name = "pirates",
    author,
    version,
    about = "Pirate card round evaluator"
)]
struct Cli {
    /// Path to an optional YAML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the output format.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Override the tracing level (trace, debug, info, warn, error). Only takes
    /// effect when `logging.enable_structured` is set in the config file.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate one round, e.g. `pirates play 1M 4M` or `pirates play "SR BB KK"`.
    Play {
        #[arg(required = true, num_args = 1.., value_name = "CARD")]
        cards: Vec<String>,
    },
    /// Evaluate one round per line of FILE (`<round>[, <expected announcement>]`).
    Batch {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Write result rows as JSONL instead of printing them.
        #[arg(long, value_name = "OUT")]
        jsonl: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match cli.config.as_ref() {
        Some(path) => CliConfig::from_path(path).map_err(|err| {
            let source = err.path().display().to_string();
            anyhow::Error::new(err).context(format!("loading configuration from {source}"))
        })?,
        None => CliConfig::default(),
    };

    if let Some(format) = cli.format {
        config.output.format = format;
    }

    if let Some(level) = cli.log_level {
        config.logging.tracing_level = level;
    }

    // Flag overrides bypass the validation done by `from_path`.
    config.validate()?;

    let _logging_guard = init_logging(&config.logging)?;
    let format = config.output.format;

    match cli.command {
        Command::Play { cards } => {
            let raw = cards.join(" ");
            let round: Round = raw
                .parse()
                .with_context(|| format!("reading round '{raw}'"))?;
            let outcome =
                rules::evaluate(&round).with_context(|| format!("evaluating round '{raw}'"))?;
            match format {
                OutputFormat::Text => println!("{outcome}"),
                OutputFormat::Json => println!("{}", outcome.to_json()?),
            }
        }
        Command::Batch { input, jsonl } => {
            let report = BatchRunner::new(&input, jsonl)
                .run()
                .with_context(|| format!("running batch {}", input.display()))?;
            print_report(&report, format)?;
        }
    }

    Ok(())
}

fn print_report(report: &BatchReport, format: OutputFormat) -> anyhow::Result<()> {
    let summary = &report.summary;

    if summary.jsonl_path.is_none() {
        for row in &report.rows {
            match format {
                OutputFormat::Text => {
                    let verdict = match row.matched {
                        Some(true) => " [ok]",
                        Some(false) => " [MISMATCH]",
                        None => "",
                    };
                    println!("{} -> {}{verdict}", row.round, row.announcement);
                }
                OutputFormat::Json => println!("{}", serde_json::to_string(row)?),
            }
        }
    }

    println!(
        "Evaluated {} round{} ({} verified, {} mismatched)",
        summary.rounds,
        if summary.rounds == 1 { "" } else { "s" },
        summary.verified,
        summary.mismatches.len()
    );
    if let Some(path) = summary.jsonl_path.as_ref() {
        println!("Result rows: {}", path.display());
    }

    if !summary.mismatches.is_empty() {
        let lines: Vec<String> = summary.mismatches.iter().map(usize::to_string).collect();
        bail!("expectation mismatch on line(s) {}", lines.join(", "));
    }
    Ok(())
}
